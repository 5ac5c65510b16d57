// tests/integration/end_to_end.rs
use std::fs;

use pascal_triangle::{
    Config, ConfigBuilder, DomainError, Mode, RowCount, Strategy, app::run_to, run,
};
use tempfile::TempDir;

const FIVE_ROWS: &str = "     1 \n    1 1 \n   1 2 1 \n  1 3 3 1 \n 1 4 6 4 1 \n";

fn render(config: &Config) -> String {
    let mut buf = Vec::new();
    run_to(&mut buf, config).expect("run succeeds");
    String::from_utf8(buf).expect("utf-8")
}

#[test]
fn five_rows_exact_layout() {
    let config = ConfigBuilder::default().rows(RowCount::new(5)).build().unwrap();
    assert_eq!(render(&config), FIVE_ROWS);
}

#[test]
fn every_line_has_expected_indent_and_trailing_space() {
    let rows = 9u64;
    let config = ConfigBuilder::default().rows(RowCount::new(rows)).build().unwrap();
    let text = render(&config);

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 9);
    for (n, line) in lines.iter().enumerate() {
        let indent = line.len() - line.trim_start().len();
        assert_eq!(indent as u64, rows - n as u64, "row {n}");
        assert!(line.ends_with(' '), "row {n} keeps its trailing space");
        assert_eq!(line.split_whitespace().count(), n + 1);
    }
}

#[test]
fn strategies_agree_end_to_end() {
    let base = ConfigBuilder::default().rows(RowCount::new(30)).build().unwrap();
    let additive = Config { strategy: Strategy::Additive, ..base.clone() };
    assert_eq!(render(&base), render(&additive));
}

#[test]
fn output_file_receives_the_triangle() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("triangle.txt");
    let config = ConfigBuilder::default().output(Some(path.clone())).build().unwrap();

    run(&config).expect("run succeeds");

    assert_eq!(fs::read_to_string(&path).unwrap(), FIVE_ROWS);
}

#[test]
fn unwritable_output_path_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("triangle.txt");
    let config = ConfigBuilder::default().output(Some(path)).build().unwrap();

    let err = run(&config).unwrap_err();
    assert!(err.to_string().contains("Failed to write file"));
}

#[test]
fn factorial_mode_propagates_domain_errors() {
    let config = ConfigBuilder::default()
        .mode(Mode::Factorial("-2".to_string()))
        .build()
        .unwrap();
    let mut buf = Vec::new();
    let err = run_to(&mut buf, &config).unwrap_err();
    assert_eq!(err.domain(), Some(&DomainError::NegativeInput { value: "-2".to_string() }));
    assert!(buf.is_empty());
}
