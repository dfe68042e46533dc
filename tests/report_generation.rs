use std::fs;
use std::path::Path;

use survey_charts::report::{chart_specs, generate_reports};

const SAMPLE_CSV: &str = "\
faculty,year,gpa_range,rating,is_using_cgpt_for_ideas_cheating,is_using_cgpt_to_write_cheating,will_cgpt_increase_cheating,will_cgpt_increase_or_hinder_learning,how_can_unis_handle_cgpt
Engineering,Year 1,3.0 - 3.5,7,Yes,Yes,Yes,Hinder learning,Ban it outright
Engineering,Year 2,2.5 - 3.0,8,No,Yes,Yes,Increase learning,Integrate it into teaching
Natural Sciences,Year 1,3.5 - 4.0,6,No,No,Not sure,Both,Update assessment methods
Business,Year 3,3.0 - 3.5,9,Maybe,Yes,No,Increase learning,Allow it with disclosure
Natural Sciences,Year 2,2.0 - 2.5,5,Yes,No,Yes,Hinder learning,Integrate it into teaching
";

fn setup(dir: &Path) -> (std::path::PathBuf, std::path::PathBuf) {
    let csv_path = dir.join("survey.csv");
    fs::write(&csv_path, SAMPLE_CSV).expect("write sample csv");
    (csv_path, dir.join("charts"))
}

fn artifact_bytes(out_dir: &Path) -> Vec<(String, Vec<u8>)> {
    let mut artifacts: Vec<(String, Vec<u8>)> = fs::read_dir(out_dir)
        .expect("read output directory")
        .map(|entry| {
            let entry = entry.expect("dir entry");
            let name = entry.file_name().into_string().expect("file name");
            let bytes = fs::read(entry.path()).expect("read artifact");
            (name, bytes)
        })
        .collect();
    artifacts.sort_by(|a, b| a.0.cmp(&b.0));
    artifacts
}

#[test]
fn fresh_run_generates_exactly_the_nine_expected_charts() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (csv_path, out_dir) = setup(dir.path());

    generate_reports(&csv_path, &out_dir).expect("generate reports");

    let produced: Vec<String> = artifact_bytes(&out_dir)
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    let mut expected: Vec<String> = chart_specs()
        .iter()
        .map(|spec| spec.file_name.to_string())
        .collect();
    expected.sort();

    assert_eq!(produced, expected);
}

#[test]
fn second_run_does_not_touch_existing_artifacts() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (csv_path, out_dir) = setup(dir.path());

    generate_reports(&csv_path, &out_dir).expect("first run");
    let before = artifact_bytes(&out_dir);

    generate_reports(&csv_path, &out_dir).expect("second run");
    let after = artifact_bytes(&out_dir);

    assert_eq!(before, after);
}

#[test]
fn removed_artifact_is_regenerated_without_touching_the_rest() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (csv_path, out_dir) = setup(dir.path());

    generate_reports(&csv_path, &out_dir).expect("first run");
    let before = artifact_bytes(&out_dir);

    let removed = out_dir.join("faculty_distribution.png");
    fs::remove_file(&removed).expect("remove one artifact");

    generate_reports(&csv_path, &out_dir).expect("second run");

    assert!(removed.exists(), "deleted chart was not regenerated");
    for (name, bytes) in artifact_bytes(&out_dir) {
        if name != "faculty_distribution.png" {
            let original = before
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, b)| b)
                .expect("artifact present in first run");
            assert_eq!(&bytes, original, "{name} changed on the second run");
        }
    }
}

#[test]
fn missing_required_column_fails_the_run() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("survey.csv");
    // Same dataset minus the `rating` column.
    fs::write(
        &csv_path,
        "faculty,year,gpa_range,is_using_cgpt_for_ideas_cheating,is_using_cgpt_to_write_cheating,will_cgpt_increase_cheating,will_cgpt_increase_or_hinder_learning,how_can_unis_handle_cgpt\n\
         Engineering,Year 1,3.0 - 3.5,Yes,Yes,Yes,Hinder learning,Ban it outright\n",
    )
    .expect("write csv");

    let err = generate_reports(&csv_path, &dir.path().join("charts"))
        .expect_err("run should fail on the missing column");
    assert!(err.to_string().contains("rating"), "unexpected error: {err}");
}
