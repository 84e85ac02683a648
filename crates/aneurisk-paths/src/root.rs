#![deny(unsafe_code)]

use std::path::{Path, PathBuf};

use aneurisk_model::{CaseId, CaseLabel, Result};

use crate::Artifact;

/// Environment variable for overriding the dataset root directory.
pub const ANEURISK_ENV_VAR: &str = "ANEURISK_DATA_DIR";

const DATA_DIR: &str = "data";
const MODELS_DIR: &str = "models";
const CASES_FILE: &str = "cases.csv";
const PATIENTS_FILE: &str = "patients.csv";
const REF_POINTS_FILE: &str = "referencepoints.csv";

/// Get the default dataset root directory.
///
/// Resolution order:
/// 1. `ANEURISK_DATA_DIR` environment variable
/// 2. `aneurisk/` directory relative to workspace root
pub fn default_dataset_root() -> PathBuf {
    if let Ok(root) = std::env::var(ANEURISK_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../aneurisk")
}

/// The directory under which all Aneurisk model and tabular data reside.
///
/// Every path the library hands out is composed from an explicit root, so
/// callers with a dataset in a non-standard location pass their own instead
/// of relying on the process environment or working directory. Composition
/// is pure string work; nothing here checks that the target exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetRoot(PathBuf);

impl DatasetRoot {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self(root.into())
    }

    /// Root from `ANEURISK_DATA_DIR`, or the workspace-relative default.
    pub fn from_env() -> Self {
        Self(default_dataset_root())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// `data/cases.csv`, the per-case metadata table.
    pub fn cases_csv(&self) -> PathBuf {
        self.0.join(DATA_DIR).join(CASES_FILE)
    }

    /// `data/patients.csv`, the per-patient demographics table.
    pub fn patients_csv(&self) -> PathBuf {
        self.0.join(DATA_DIR).join(PATIENTS_FILE)
    }

    /// `data/referencepoints.csv`, the anatomical landmark coordinates.
    pub fn reference_points_csv(&self) -> PathBuf {
        self.0.join(DATA_DIR).join(REF_POINTS_FILE)
    }

    /// Directory of one case, `models/<label>`.
    pub fn case_dir(&self, label: &CaseLabel) -> PathBuf {
        self.0.join(MODELS_DIR).join(label.as_str())
    }

    /// Path of one artifact of one case.
    ///
    /// The identifier is resolved first, so an ambiguous or malformed case
    /// reference fails before any path is composed.
    ///
    /// # Errors
    ///
    /// Propagates [`aneurisk_model::LabelError`] from resolution.
    pub fn artifact_path(&self, case: impl Into<CaseId>, artifact: &Artifact) -> Result<PathBuf> {
        let label = CaseLabel::resolve(case)?;
        Ok(self
            .case_dir(&label)
            .join(artifact.subdirectory())
            .join(artifact.file_name()))
    }
}
