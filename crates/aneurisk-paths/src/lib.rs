//! Dataset root resolution and artifact path composition.
//!
//! The Aneurisk repository keeps one directory per case under `models/` and
//! its tabular metadata under `data/`. This crate turns a [`DatasetRoot`]
//! plus a case identifier plus an [`Artifact`] kind into the on-disk path of
//! the corresponding file, without touching the filesystem.

pub mod artifact;
pub mod root;

pub use artifact::{Artifact, MeshFormat};
pub use root::{ANEURISK_ENV_VAR, DatasetRoot, default_dataset_root};
