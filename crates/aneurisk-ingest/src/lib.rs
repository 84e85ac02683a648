//! CSV loading for the Aneurisk tabular metadata.
//!
//! Three files live under the dataset's `data/` directory: `cases.csv`
//! (row per case), `patients.csv` (row per patient), and
//! `referencepoints.csv` (anatomical landmark coordinates per case).
//! [`load_cases`] joins them into one DataFrame keyed by canonical label;
//! the point accessors pull single landmark coordinates out of that table.
//!
//! Loads are stateless: every call re-reads the files, and nothing is
//! cached between calls.

pub mod cases;
pub mod csv_utils;
pub mod error;
pub mod points;
pub mod polars_utils;

pub use cases::{CaseFilter, REF_POINT_COLUMNS, load_cases};
pub use error::{IngestError, Result};
pub use points::{
    BIF_POINT_COLUMNS, DOME_POINT_COLUMNS, dome_point, load_dome_points, ref_bif_point,
};
pub use polars_utils::{any_to_f64, any_to_i64, any_to_string, parse_f64};
