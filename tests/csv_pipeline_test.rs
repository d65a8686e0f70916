//! Integration tests for the CSV processing pipeline

use altnames::adapters::csv::process_file;
use altnames::engine::{NameRegistry, RowTransformer};
use std::collections::BTreeSet;
use std::path::PathBuf;
use tempfile::TempDir;

fn targets(columns: &[&str]) -> BTreeSet<String> {
    columns.iter().map(|c| c.to_string()).collect()
}

fn write_input(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn transformer(seed: &str) -> RowTransformer {
    RowTransformer::new(NameRegistry::new(seed), true)
}

#[test]
fn test_process_file_renames_target_columns() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "campers.csv", "First Name,Age\nAna,10\nBen,12\n");
    let output = dir.path().join("renamed-campers.csv");

    let mut transformer = transformer("safenames");
    let summary = process_file(&input, &output, &mut transformer, &targets(&["First Name"])).unwrap();

    assert_eq!(summary.rows, 2);
    assert_eq!(summary.renamed_cells, 2);

    let written = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 3);
    // Header written once, every field quoted
    assert_eq!(lines[0], "\"First Name\",\"Age\"");

    // A same-seeded registry predicts the exact replacements
    let mut reference = NameRegistry::new("safenames");
    let ana = reference.resolve("Ana");
    let ben = reference.resolve("Ben");
    assert_eq!(lines[1], format!("\"{ana}\",\"10\""));
    assert_eq!(lines[2], format!("\"{ben}\",\"12\""));
}

#[test]
fn test_byte_order_mark_tolerated() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "bom.csv", "\u{feff}First Name,Age\nAna,10\n");
    let output = dir.path().join("renamed-bom.csv");

    let mut transformer = transformer("safenames");
    let summary = process_file(&input, &output, &mut transformer, &targets(&["First Name"])).unwrap();

    assert_eq!(summary.renamed_cells, 1);
    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("\"First Name\","));
}

#[test]
fn test_absent_target_column_leaves_file_unchanged() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "staff.csv", "Role,Age\nCounselor,30\n");
    let output = dir.path().join("renamed-staff.csv");

    let mut transformer = transformer("safenames");
    let summary = process_file(&input, &output, &mut transformer, &targets(&["Camper"])).unwrap();

    assert_eq!(summary.rows, 1);
    assert_eq!(summary.renamed_cells, 0);

    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(written, "\"Role\",\"Age\"\n\"Counselor\",\"30\"\n");
}

#[test]
fn test_empty_input_produces_empty_output() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "empty.csv", "");
    let output = dir.path().join("renamed-empty.csv");

    let mut transformer = transformer("safenames");
    let summary = process_file(&input, &output, &mut transformer, &targets(&["Camper"])).unwrap();

    assert_eq!(summary.rows, 0);
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "");
}

#[test]
fn test_renaming_is_consistent_across_files() {
    let dir = TempDir::new().unwrap();
    let first = write_input(&dir, "week1.csv", "Camper\nMaria\n");
    let second = write_input(&dir, "week2.csv", "Camper\nMaria\n");
    let out_first = dir.path().join("renamed-week1.csv");
    let out_second = dir.path().join("renamed-week2.csv");

    // One transformer shared across both files, as the run command does
    let mut transformer = transformer("safenames");
    process_file(&first, &out_first, &mut transformer, &targets(&["Camper"])).unwrap();
    process_file(&second, &out_second, &mut transformer, &targets(&["Camper"])).unwrap();

    assert_eq!(
        std::fs::read_to_string(&out_first).unwrap(),
        std::fs::read_to_string(&out_second).unwrap()
    );
    assert_eq!(transformer.registry().mapping_count(), 1);
}

#[test]
fn test_same_seed_reproduces_output_across_runs() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "campers.csv", "Camper\nSmith-Jones, Maria\nSmith\n");
    let out_a = dir.path().join("a.csv");
    let out_b = dir.path().join("b.csv");

    let mut run_a = transformer("safenames");
    process_file(&input, &out_a, &mut run_a, &targets(&["Camper"])).unwrap();

    let mut run_b = transformer("safenames");
    process_file(&input, &out_b, &mut run_b, &targets(&["Camper"])).unwrap();

    assert_eq!(
        std::fs::read_to_string(&out_a).unwrap(),
        std::fs::read_to_string(&out_b).unwrap()
    );
}

#[test]
fn test_cell_with_separators_keeps_shape() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "campers.csv", "Camper\n\"Smith-Jones, Maria\"\n");
    let output = dir.path().join("out.csv");

    let mut transformer = transformer("safenames");
    process_file(&input, &output, &mut transformer, &targets(&["Camper"])).unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    let value = written.lines().nth(1).unwrap().trim_matches('"');

    let mut reference = NameRegistry::new("safenames");
    let smith = reference.resolve("Smith");
    let jones = reference.resolve("Jones");
    let maria = reference.resolve("Maria");
    assert_eq!(value, format!("{smith}-{jones}, {maria}"));
}
