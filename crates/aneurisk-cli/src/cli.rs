//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "aneurisk",
    version,
    about = "Path and metadata lookups into the Aneurisk case repository",
    long_about = "Resolve case identifiers, compose on-disk artifact paths, and\n\
                  query the per-case metadata tables of an Aneurisk dataset."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Dataset root directory (overrides the ANEURISK_DATA_DIR variable).
    #[arg(long = "root", value_name = "DIR", global = true)]
    pub root: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Resolve a case identifier into its canonical label.
    Resolve(ResolveArgs),

    /// Print the on-disk path of a case artifact.
    Path(PathArgs),

    /// List cases with joined demographics and reference points.
    Cases(CasesArgs),

    /// Print a reference point of a case.
    Point(PointArgs),
}

#[derive(Parser)]
pub struct ResolveArgs {
    /// Case identifier: numeric id (1-99) or label such as C0042 or C0028a.
    #[arg(value_name = "CASE")]
    pub case: String,
}

#[derive(Parser)]
pub struct PathArgs {
    /// Case identifier: numeric id (1-99) or label such as C0042 or C0028a.
    #[arg(value_name = "CASE")]
    pub case: String,

    /// Artifact kind to locate.
    #[arg(long = "artifact", value_enum)]
    pub artifact: ArtifactArg,

    /// Anatomical variant for aneurysm, hull, and ostium surfaces.
    #[arg(long = "mode", value_name = "MODE")]
    pub mode: Option<String>,

    /// Mesh format of the CFD model file.
    #[arg(long = "mesh-format", value_enum, default_value = "stl")]
    pub mesh_format: MeshFormatArg,
}

#[derive(Parser)]
pub struct CasesArgs {
    /// Comma-separated numeric case ids (takes precedence over --between).
    #[arg(long = "ids", value_name = "IDS", value_delimiter = ',')]
    pub ids: Option<Vec<u32>>,

    /// Inclusive numeric id range.
    #[arg(long = "between", value_names = ["LO", "HI"], num_args = 2)]
    pub between: Option<Vec<u32>>,
}

#[derive(Parser)]
pub struct PointArgs {
    /// Case identifier: numeric id (1-99) or label such as C0042 or C0028a.
    #[arg(value_name = "CASE")]
    pub case: String,

    /// Which reference point to print.
    #[arg(long = "kind", value_enum, default_value = "bifurcation")]
    pub kind: PointKindArg,

    /// Print the point as a JSON array instead of space-separated values.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ArtifactArg {
    /// Vascular surface model.
    Model,
    /// Vessel centerlines.
    Centerline,
    /// Clipped surface model.
    Clipped,
    /// CFD-ready surface model.
    Cfd,
    /// Reconstructed healthy vessel.
    Healthy,
    /// Aneurysm sac surface (needs --mode).
    Aneurysm,
    /// Convex hull of the sac (needs --mode).
    Hull,
    /// Ostium surface (needs --mode).
    Ostium,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum MeshFormatArg {
    Stl,
    Vtp,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PointKindArg {
    /// Internal carotid artery bifurcation point.
    Bifurcation,
    /// Aneurysm dome point.
    Dome,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cases_flags_parse() {
        let cli = Cli::try_parse_from(["aneurisk", "cases", "--ids", "1,2,28"]).unwrap();
        match cli.command {
            Command::Cases(args) => assert_eq!(args.ids, Some(vec![1, 2, 28])),
            _ => panic!("expected cases subcommand"),
        }

        let cli = Cli::try_parse_from(["aneurisk", "cases", "--between", "1", "5"]).unwrap();
        match cli.command {
            Command::Cases(args) => assert_eq!(args.between, Some(vec![1, 5])),
            _ => panic!("expected cases subcommand"),
        }
    }

    #[test]
    fn path_flags_parse() {
        let cli = Cli::try_parse_from([
            "aneurisk", "path", "C0028a", "--artifact", "hull", "--mode", "plain",
        ])
        .unwrap();
        match cli.command {
            Command::Path(args) => {
                assert_eq!(args.case, "C0028a");
                assert_eq!(args.mode.as_deref(), Some("plain"));
            }
            _ => panic!("expected path subcommand"),
        }
    }
}
