//! Reference-point accessors and the dome-points alternate loader.

use std::path::Path;

use polars::prelude::DataFrame;

use aneurisk_model::{CaseId, CaseLabel};
use aneurisk_paths::DatasetRoot;

use crate::cases::{CaseFilter, load_cases, read_csv_df};
use crate::error::{IngestError, Result};
use crate::polars_utils::any_to_f64;

/// Coordinate columns of the internal carotid artery bifurcation point.
pub const BIF_POINT_COLUMNS: [&str; 3] = ["ICABifPoint0", "ICABifPoint1", "ICABifPoint2"];
/// Coordinate columns of the aneurysm dome point.
pub const DOME_POINT_COLUMNS: [&str; 3] = ["DomePoint0", "DomePoint1", "DomePoint2"];

/// The ICA bifurcation point of a case, as `[x, y, z]`.
///
/// # Errors
///
/// Label resolution errors, [`IngestError::CaseNotFound`] when the case has
/// no row in the table, [`IngestError::MissingPoint`] when a coordinate is
/// not recorded.
pub fn ref_bif_point(root: &DatasetRoot, case: impl Into<CaseId>) -> Result<[f64; 3]> {
    named_point(root, case, &BIF_POINT_COLUMNS)
}

/// The dome point of a case, as `[x, y, z]`.
///
/// # Errors
///
/// Same conditions as [`ref_bif_point`].
pub fn dome_point(root: &DatasetRoot, case: impl Into<CaseId>) -> Result<[f64; 3]> {
    named_point(root, case, &DOME_POINT_COLUMNS)
}

fn named_point(
    root: &DatasetRoot,
    case: impl Into<CaseId>,
    columns: &[&str; 3],
) -> Result<[f64; 3]> {
    let label = CaseLabel::resolve(case)?;
    let table = load_cases(root, &CaseFilter::all())?;
    let ids = table.column("id")?.str()?;
    let row = ids
        .into_iter()
        .position(|value| value == Some(label.as_str()))
        .ok_or_else(|| IngestError::CaseNotFound {
            label: label.to_string(),
        })?;

    let mut point = [0.0f64; 3];
    for (slot, column) in point.iter_mut().zip(columns) {
        let values = table
            .column(column)
            .map_err(|_| IngestError::MissingColumn {
                column: (*column).to_string(),
                path: root.reference_points_csv(),
            })?;
        *slot = any_to_f64(values.get(row)?).ok_or_else(|| IngestError::MissingPoint {
            column: (*column).to_string(),
            label: label.to_string(),
        })?;
    }
    Ok(point)
}

/// Load `data/domePoints.csv` under an explicit base directory.
///
/// The historical loader resolved this file against the process working
/// directory; here the base is passed in like every other root.
pub fn load_dome_points(base: &Path) -> Result<DataFrame> {
    let df = read_csv_df(&base.join("data").join("domePoints.csv"))?;
    tracing::debug!(rows = df.height(), "loaded dome points table");
    Ok(df)
}
