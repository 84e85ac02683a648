//! The joined per-case table.
//!
//! `cases.csv` is the backbone; patient demographics and reference-point
//! coordinates are joined onto it by key, and a `numericalId` column is
//! derived so both sub-labels of a multi-aneurysm case answer to the same
//! numeric id during filtering. Every call re-reads the CSV files.

use std::collections::BTreeSet;
use std::path::Path;

use polars::prelude::{BooleanChunked, Column, CsvReadOptions, DataFrame, SerReader};

use aneurisk_model::{MAX_CASE_ID, MIN_CASE_ID, numeric_case_id};
use aneurisk_paths::DatasetRoot;

use crate::csv_utils::{get_optional, read_rows_indexed};
use crate::error::{IngestError, Result};
use crate::polars_utils::{any_to_string, parse_f64};

/// Coordinate columns joined from `referencepoints.csv`, in output order.
pub const REF_POINT_COLUMNS: [&str; 6] = [
    "ICABifPoint0",
    "ICABifPoint1",
    "ICABifPoint2",
    "DomePoint0",
    "DomePoint1",
    "DomePoint2",
];

/// Row selection for [`load_cases`].
///
/// An explicit id set takes precedence over a range; the narrower selector
/// always wins. Both selectors are checked against the repository's [1, 99]
/// id range before any file is read.
#[derive(Debug, Clone, Default)]
pub struct CaseFilter {
    ids: Option<BTreeSet<u32>>,
    between: Option<(u32, u32)>,
}

impl CaseFilter {
    /// Select every case.
    pub fn all() -> Self {
        Self::default()
    }

    /// Select by explicit numeric ids.
    pub fn ids(ids: impl IntoIterator<Item = u32>) -> Self {
        Self {
            ids: Some(ids.into_iter().collect()),
            ..Self::default()
        }
    }

    /// Select the inclusive numeric id range `[lo, hi]`. The bounds may be
    /// given in either order.
    pub fn between(lo: u32, hi: u32) -> Self {
        Self {
            between: Some((lo.min(hi), lo.max(hi))),
            ..Self::default()
        }
    }

    /// Combine optional selectors, e.g. straight from CLI flags.
    pub fn new(ids: Option<BTreeSet<u32>>, between: Option<(u32, u32)>) -> Self {
        let between = between.map(|(lo, hi)| (lo.min(hi), lo.max(hi)));
        Self { ids, between }
    }

    fn is_all(&self) -> bool {
        self.ids.is_none() && self.between.is_none()
    }

    fn validate(&self) -> Result<()> {
        let in_range = |value: u32| (MIN_CASE_ID..=MAX_CASE_ID).contains(&i64::from(value));
        if let Some(ids) = &self.ids
            && let Some(&value) = ids.iter().find(|&&v| !in_range(v))
        {
            return Err(IngestError::SelectionOutOfRange { value });
        }
        if let Some(&(lo, hi)) = self.between.as_ref() {
            for value in [lo, hi] {
                if !in_range(value) {
                    return Err(IngestError::SelectionOutOfRange { value });
                }
            }
        }
        Ok(())
    }

    fn selects(&self, id: u32) -> bool {
        if let Some(ids) = &self.ids {
            return ids.contains(&id);
        }
        if let Some((lo, hi)) = self.between {
            return (lo..=hi).contains(&id);
        }
        true
    }
}

/// Load the joined cases table.
///
/// Reads `cases.csv`, `patients.csv`, and `referencepoints.csv` under the
/// given root, normalizes the aneurysm type codes (`LAT` to `lateral`,
/// `TER` to `bifurcation`), joins patient `sex`/`age` by `patient_id`,
/// appends the six reference-point coordinate columns, derives
/// `numericalId`, and keeps the rows the filter selects. Cases without a
/// matching patient or reference-point row get nulls, not errors.
///
/// # Errors
///
/// [`IngestError::SelectionOutOfRange`] for a selector outside [1, 99],
/// [`IngestError::CsvParse`] / [`IngestError::MissingColumn`] for unreadable
/// or incomplete input files.
pub fn load_cases(root: &DatasetRoot, filter: &CaseFilter) -> Result<DataFrame> {
    filter.validate()?;

    let cases_path = root.cases_csv();
    let mut cases = read_csv_df(&cases_path)?;
    let patients = read_rows_indexed(&root.patients_csv(), "id")?;
    let points = read_rows_indexed(&root.reference_points_csv(), "id")?;

    let height = cases.height();
    let mut labels = Vec::with_capacity(height);
    let mut types = Vec::with_capacity(height);
    let mut patient_ids = Vec::with_capacity(height);
    {
        let id_col = cases.column("id").map_err(|_| IngestError::MissingColumn {
            column: "id".to_string(),
            path: cases_path.clone(),
        })?;
        let type_col = cases
            .column("aneurysmType")
            .map_err(|_| IngestError::MissingColumn {
                column: "aneurysmType".to_string(),
                path: cases_path.clone(),
            })?;
        let patient_col = cases
            .column("patient_id")
            .map_err(|_| IngestError::MissingColumn {
                column: "patient_id".to_string(),
                path: cases_path.clone(),
            })?;
        for row in 0..height {
            labels.push(any_to_string(id_col.get(row)?));
            types.push(normalize_aneurysm_type(&any_to_string(type_col.get(row)?)));
            patient_ids.push(any_to_string(patient_col.get(row)?));
        }
    }

    let mut sexes: Vec<Option<String>> = Vec::with_capacity(height);
    let mut ages: Vec<Option<i64>> = Vec::with_capacity(height);
    for pid in &patient_ids {
        let patient = patients.get(pid);
        sexes.push(patient.and_then(|row| get_optional(row, "sex")));
        ages.push(
            patient
                .and_then(|row| get_optional(row, "age"))
                .and_then(|age| age.parse().ok()),
        );
    }

    let mut coords: Vec<Vec<Option<f64>>> = vec![Vec::with_capacity(height); 6];
    for label in &labels {
        let point_row = points.get(label);
        for (column, values) in REF_POINT_COLUMNS.iter().zip(coords.iter_mut()) {
            values.push(
                point_row
                    .and_then(|row| get_optional(row, column))
                    .and_then(|v| parse_f64(&v)),
            );
        }
    }

    let mut numeric_ids: Vec<Option<i64>> = Vec::with_capacity(height);
    let mut selected: Vec<bool> = Vec::with_capacity(height);
    for label in &labels {
        match numeric_case_id(label) {
            Some(id) => {
                numeric_ids.push(Some(i64::from(id)));
                selected.push(filter.selects(id));
            }
            None => {
                tracing::warn!(label = %label, "case label has no numeric id");
                numeric_ids.push(None);
                selected.push(filter.is_all());
            }
        }
    }

    cases.with_column(Column::new("aneurysmType".into(), types))?;
    cases.with_column(Column::new("sex".into(), sexes))?;
    cases.with_column(Column::new("age".into(), ages))?;
    for (column, values) in REF_POINT_COLUMNS.iter().zip(coords) {
        cases.with_column(Column::new((*column).into(), values))?;
    }
    cases.with_column(Column::new("numericalId".into(), numeric_ids))?;

    let mask: BooleanChunked = selected.into_iter().collect();
    let out = cases.filter(&mask)?;
    tracing::debug!(rows = out.height(), total = height, "loaded cases table");
    Ok(out)
}

fn normalize_aneurysm_type(code: &str) -> String {
    match code {
        "LAT" => "lateral".to_string(),
        "TER" => "bifurcation".to_string(),
        other => other.to_string(),
    }
}

/// Read a whole CSV file into an eager DataFrame.
pub(crate) fn read_csv_df(path: &Path) -> Result<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_precedence_and_range() {
        let filter = CaseFilter::new(Some(BTreeSet::from([3, 7])), Some((1, 99)));
        assert!(filter.selects(3));
        assert!(!filter.selects(2)); // in range, but ids win
        assert!(CaseFilter::between(5, 2).selects(3)); // bounds reorder
        assert!(CaseFilter::all().selects(42));
    }

    #[test]
    fn out_of_range_selectors_fail_validation() {
        assert!(matches!(
            CaseFilter::ids([0]).validate(),
            Err(IngestError::SelectionOutOfRange { value: 0 })
        ));
        assert!(matches!(
            CaseFilter::between(1, 150).validate(),
            Err(IngestError::SelectionOutOfRange { value: 150 })
        ));
        assert!(CaseFilter::ids([1, 99]).validate().is_ok());
    }

    #[test]
    fn type_codes_normalize() {
        assert_eq!(normalize_aneurysm_type("LAT"), "lateral");
        assert_eq!(normalize_aneurysm_type("TER"), "bifurcation");
        assert_eq!(normalize_aneurysm_type("FUS"), "FUS");
    }
}
