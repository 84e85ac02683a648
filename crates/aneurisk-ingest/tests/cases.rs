//! Loading and filtering the joined cases table against a fixture dataset.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use aneurisk_ingest::{CaseFilter, IngestError, dome_point, load_cases, ref_bif_point};
use aneurisk_paths::DatasetRoot;

/// A small dataset with one multi-aneurysm pair, one case without a
/// reference-point row (C0005), and one without a patient row (patient 12).
fn write_fixture(root: &Path) {
    let data = root.join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(
        data.join("cases.csv"),
        "id,aneurysmType,patient_id\n\
         C0001,LAT,10\n\
         C0002,TER,11\n\
         C0005,TER,12\n\
         C0028a,LAT,13\n\
         C0028b,TER,13\n",
    )
    .unwrap();
    fs::write(
        data.join("patients.csv"),
        "id,sex,age\n10,female,54\n11,male,61\n13,female,47\n",
    )
    .unwrap();
    fs::write(
        data.join("referencepoints.csv"),
        "id,ICABifPoint0,ICABifPoint1,ICABifPoint2,DomePoint0,DomePoint1,DomePoint2\n\
         C0001,1.0,2.0,3.0,4.0,5.0,6.0\n\
         C0002,1.5,2.5,3.5,4.5,5.5,6.5\n\
         C0028a,10.0,11.0,12.0,13.0,14.0,15.0\n\
         C0028b,20.0,21.0,22.0,23.0,24.0,25.0\n",
    )
    .unwrap();
}

fn fixture_root() -> (TempDir, DatasetRoot) {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path());
    let root = DatasetRoot::new(dir.path());
    (dir, root)
}

fn labels_of(df: &polars::prelude::DataFrame) -> Vec<String> {
    df.column("id")
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .map(|v| v.unwrap().to_string())
        .collect()
}

#[test]
fn full_table_joins_and_normalizes() {
    let (_dir, root) = fixture_root();
    let df = load_cases(&root, &CaseFilter::all()).unwrap();
    assert_eq!(df.height(), 5);

    let types: Vec<_> = df
        .column("aneurysmType")
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .map(|v| v.unwrap().to_string())
        .collect();
    assert_eq!(
        types,
        ["lateral", "bifurcation", "bifurcation", "lateral", "bifurcation"]
    );

    let numeric: Vec<_> = df
        .column("numericalId")
        .unwrap()
        .i64()
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(numeric, [Some(1), Some(2), Some(5), Some(28), Some(28)]);

    let sexes: Vec<_> = df
        .column("sex")
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .collect();
    // Patient 12 has no demographics row.
    assert_eq!(sexes[2], None);
    assert_eq!(sexes[0], Some("female"));

    let ages: Vec<_> = df
        .column("age")
        .unwrap()
        .i64()
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(ages, [Some(54), Some(61), None, Some(47), Some(47)]);
}

#[test]
fn multi_aneurysm_id_selects_both_sub_cases() {
    let (_dir, root) = fixture_root();
    let df = load_cases(&root, &CaseFilter::ids([28])).unwrap();
    assert_eq!(labels_of(&df), ["C0028a", "C0028b"]);
}

#[test]
fn range_filter_is_inclusive() {
    let (_dir, root) = fixture_root();
    let df = load_cases(&root, &CaseFilter::between(1, 5)).unwrap();
    assert_eq!(labels_of(&df), ["C0001", "C0002", "C0005"]);
}

#[test]
fn ids_take_precedence_over_range() {
    let (_dir, root) = fixture_root();
    let filter = CaseFilter::new(Some([2].into()), Some((1, 99)));
    let df = load_cases(&root, &filter).unwrap();
    assert_eq!(labels_of(&df), ["C0002"]);
}

#[test]
fn out_of_range_selectors_fail() {
    let (_dir, root) = fixture_root();
    assert!(matches!(
        load_cases(&root, &CaseFilter::ids([0])),
        Err(IngestError::SelectionOutOfRange { value: 0 })
    ));
    assert!(matches!(
        load_cases(&root, &CaseFilter::between(1, 150)),
        Err(IngestError::SelectionOutOfRange { value: 150 })
    ));
}

#[test]
fn reference_points_come_back_as_coordinates() {
    let (_dir, root) = fixture_root();
    assert_eq!(ref_bif_point(&root, "C0001").unwrap(), [1.0, 2.0, 3.0]);
    assert_eq!(dome_point(&root, "C0001").unwrap(), [4.0, 5.0, 6.0]);
    assert_eq!(dome_point(&root, "C0028b").unwrap(), [23.0, 24.0, 25.0]);
}

#[test]
fn numeric_identifiers_reach_the_same_row() {
    let (_dir, root) = fixture_root();
    assert_eq!(
        ref_bif_point(&root, 1).unwrap(),
        ref_bif_point(&root, "C0001").unwrap()
    );
}

#[test]
fn absent_case_is_not_found() {
    let (_dir, root) = fixture_root();
    assert!(matches!(
        dome_point(&root, "C0099"),
        Err(IngestError::CaseNotFound { .. })
    ));
}

#[test]
fn unrecorded_point_is_reported() {
    let (_dir, root) = fixture_root();
    let err = dome_point(&root, "C0005").unwrap_err();
    assert!(matches!(err, IngestError::MissingPoint { .. }));
    assert!(err.to_string().contains("C0005"));
}

#[test]
fn ambiguous_identifier_fails_before_loading() {
    let (_dir, root) = fixture_root();
    assert!(matches!(
        dome_point(&root, 28),
        Err(IngestError::Label(_))
    ));
}
