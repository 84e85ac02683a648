#![deny(unsafe_code)]

use std::fmt;

/// On-disk mesh format of a surface model file.
///
/// The repository stores the CFD-ready model in both formats; callers pick
/// one explicitly rather than relying on a default extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshFormat {
    Stl,
    Vtp,
}

impl MeshFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Stl => "stl",
            Self::Vtp => "vtp",
        }
    }
}

impl fmt::Display for MeshFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// A per-case file kind in the repository.
///
/// Every variant maps to one file under `models/<label>/`; the aneurysm,
/// hull, and ostium surfaces additionally carry a `mode` string naming the
/// anatomical variant baked into the filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Artifact {
    /// Vascular surface model, `surface/model.vtp`.
    SurfaceModel,
    /// Vessel centerlines, `morphology/centerlines.vtp`.
    Centerline,
    /// Clipped surface model, `surface/model_clipped.vtp`.
    ClippedModel,
    /// CFD-ready surface model, `surface/model_cfd.<ext>`.
    CfdModel(MeshFormat),
    /// Reconstructed healthy vessel, `surface/model_healthy_vessel.vtp`.
    HealthyVessel,
    /// Aneurysm sac surface, `surface/aneurysm_<mode>.vtp`.
    AneurysmSurface { mode: String },
    /// Convex hull of the sac, `surface/hull_<mode>.vtp`.
    ConvexHull { mode: String },
    /// Ostium surface, `surface/ostium_<mode>.vtp`.
    Ostium { mode: String },
}

impl Artifact {
    /// Subdirectory of the case directory holding this artifact.
    pub fn subdirectory(&self) -> &'static str {
        match self {
            Self::Centerline => "morphology",
            _ => "surface",
        }
    }

    /// File name of this artifact inside its subdirectory.
    pub fn file_name(&self) -> String {
        match self {
            Self::SurfaceModel => "model.vtp".to_string(),
            Self::Centerline => "centerlines.vtp".to_string(),
            Self::ClippedModel => "model_clipped.vtp".to_string(),
            Self::CfdModel(format) => format!("model_cfd.{format}"),
            Self::HealthyVessel => "model_healthy_vessel.vtp".to_string(),
            Self::AneurysmSurface { mode } => format!("aneurysm_{mode}.vtp"),
            Self::ConvexHull { mode } => format!("hull_{mode}.vtp"),
            Self::Ostium { mode } => format!("ostium_{mode}.vtp"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centerlines_live_under_morphology() {
        assert_eq!(Artifact::Centerline.subdirectory(), "morphology");
        assert_eq!(Artifact::SurfaceModel.subdirectory(), "surface");
    }

    #[test]
    fn cfd_model_names_both_formats() {
        assert_eq!(
            Artifact::CfdModel(MeshFormat::Stl).file_name(),
            "model_cfd.stl"
        );
        assert_eq!(
            Artifact::CfdModel(MeshFormat::Vtp).file_name(),
            "model_cfd.vtp"
        );
    }

    #[test]
    fn mode_only_changes_the_filename() {
        let plain = Artifact::ConvexHull {
            mode: "plain".to_string(),
        };
        let clipped = Artifact::ConvexHull {
            mode: "clipped".to_string(),
        };
        assert_eq!(plain.subdirectory(), clipped.subdirectory());
        assert_eq!(plain.file_name(), "hull_plain.vtp");
        assert_eq!(clipped.file_name(), "hull_clipped.vtp");
    }
}
