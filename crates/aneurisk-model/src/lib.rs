//! Case identifiers and canonical labels for the Aneurisk repository.
//!
//! The repository stores one directory per case, named by a canonical label
//! (`C0042`, or `C0028a`/`C0028b` for the cases with two registered
//! aneurysms). This crate owns the label grammar, the fixed multi-aneurysm
//! registry, and the resolution of caller-supplied identifiers into labels.

pub mod error;
pub mod label;

pub use error::{LabelError, Result};
pub use label::{
    CaseId, CaseLabel, MAX_CASE_ID, MIN_CASE_ID, MULTI_ANEURYSM_CASE_IDS,
    multi_aneurysm_sub_labels, numeric_case_id,
};
