//! Subcommand implementations.

use std::collections::BTreeSet;

use anyhow::{Context, Result, bail};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};

use aneurisk_ingest::{CaseFilter, any_to_string, dome_point, load_cases, ref_bif_point};
use aneurisk_model::{CaseId, CaseLabel};
use aneurisk_paths::{Artifact, DatasetRoot, MeshFormat};

use crate::cli::{ArtifactArg, CasesArgs, MeshFormatArg, PathArgs, PointArgs, PointKindArg,
    ResolveArgs};

/// Columns shown by the `cases` listing, in order.
const LISTING_COLUMNS: [&str; 6] = ["id", "aneurysmType", "patient_id", "sex", "age", "numericalId"];

/// Interpret a CLI case argument: plain integers are numeric ids, anything
/// else is treated as a label.
fn parse_case(raw: &str) -> CaseId {
    match raw.trim().parse::<i64>() {
        Ok(id) => CaseId::Numeric(id),
        Err(_) => CaseId::Label(raw.trim().to_string()),
    }
}

pub fn run_resolve(args: &ResolveArgs) -> Result<()> {
    let label = CaseLabel::resolve(parse_case(&args.case))?;
    println!("{label}");
    Ok(())
}

pub fn run_path(root: &DatasetRoot, args: &PathArgs) -> Result<()> {
    let artifact = artifact_from_args(args)?;
    let path = root.artifact_path(parse_case(&args.case), &artifact)?;
    println!("{}", path.display());
    Ok(())
}

fn artifact_from_args(args: &PathArgs) -> Result<Artifact> {
    let mode = || -> Result<String> {
        args.mode
            .clone()
            .ok_or_else(|| anyhow::anyhow!("--mode is required for this artifact kind"))
    };
    let artifact = match args.artifact {
        ArtifactArg::Model => Artifact::SurfaceModel,
        ArtifactArg::Centerline => Artifact::Centerline,
        ArtifactArg::Clipped => Artifact::ClippedModel,
        ArtifactArg::Cfd => Artifact::CfdModel(match args.mesh_format {
            MeshFormatArg::Stl => MeshFormat::Stl,
            MeshFormatArg::Vtp => MeshFormat::Vtp,
        }),
        ArtifactArg::Healthy => Artifact::HealthyVessel,
        ArtifactArg::Aneurysm => Artifact::AneurysmSurface { mode: mode()? },
        ArtifactArg::Hull => Artifact::ConvexHull { mode: mode()? },
        ArtifactArg::Ostium => Artifact::Ostium { mode: mode()? },
    };
    if args.mode.is_some()
        && matches!(
            args.artifact,
            ArtifactArg::Model
                | ArtifactArg::Centerline
                | ArtifactArg::Clipped
                | ArtifactArg::Cfd
                | ArtifactArg::Healthy
        )
    {
        bail!("--mode only applies to aneurysm, hull, and ostium artifacts");
    }
    Ok(artifact)
}

pub fn run_cases(root: &DatasetRoot, args: &CasesArgs) -> Result<()> {
    let ids: Option<BTreeSet<u32>> = args.ids.as_ref().map(|ids| ids.iter().copied().collect());
    let between = args
        .between
        .as_ref()
        .map(|bounds| (bounds[0], bounds[1]));
    let filter = CaseFilter::new(ids, between);
    let df = load_cases(root, &filter).context("load cases table")?;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(LISTING_COLUMNS.to_vec());
    for row in 0..df.height() {
        let mut cells = Vec::with_capacity(LISTING_COLUMNS.len());
        for column in LISTING_COLUMNS {
            let value = df
                .column(column)
                .context("listing column missing from cases table")?
                .get(row)
                .map_err(|e| anyhow::anyhow!("read cases table cell: {e}"))?;
            cells.push(any_to_string(value));
        }
        table.add_row(cells);
    }
    println!("{table}");
    println!("{} case(s)", df.height());
    Ok(())
}

pub fn run_point(root: &DatasetRoot, args: &PointArgs) -> Result<()> {
    let case = parse_case(&args.case);
    let point = match args.kind {
        PointKindArg::Bifurcation => ref_bif_point(root, case)?,
        PointKindArg::Dome => dome_point(root, case)?,
    };
    if args.json {
        println!("{}", serde_json::to_string(&point)?);
    } else {
        println!("{} {} {}", point[0], point[1], point[2]);
    }
    Ok(())
}
