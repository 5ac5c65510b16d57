// tests/integration/output_formats.rs
use pascal_triangle::{ConfigBuilder, OutputFormat, RowCount, Strategy, app::run_to};
use serde_json::Value;

fn render(format: OutputFormat, rows: u64, strategy: Strategy) -> String {
    let config = ConfigBuilder::default()
        .rows(RowCount::new(rows))
        .format(format)
        .strategy(strategy)
        .build()
        .unwrap();
    let mut buf = Vec::new();
    run_to(&mut buf, &config).expect("run succeeds");
    String::from_utf8(buf).expect("utf-8")
}

#[test]
fn json_rows_match_text_rows() {
    let text = render(OutputFormat::Text, 7, Strategy::Factorial);
    let json: Value = serde_json::from_str(&render(OutputFormat::Json, 7, Strategy::Factorial)).unwrap();

    let from_json: Vec<Vec<String>> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|row| {
            row["values"]
                .as_array()
                .unwrap()
                .iter()
                .map(|v| v.as_str().unwrap().to_string())
                .collect()
        })
        .collect();
    let from_text: Vec<Vec<String>> = text
        .lines()
        .map(|line| line.split_whitespace().map(str::to_string).collect())
        .collect();

    assert_eq!(from_json, from_text);
}

#[test]
fn jsonl_row_indices_increase() {
    let text = render(OutputFormat::Jsonl, 6, Strategy::Additive);
    let indices: Vec<u64> = text
        .lines()
        .map(|line| serde_json::from_str::<Value>(line).unwrap()["row"].as_u64().unwrap())
        .collect();
    assert_eq!(indices, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn yaml_mentions_every_row() {
    let text = render(OutputFormat::Yaml, 4, Strategy::Factorial);
    for n in 0..4 {
        assert!(text.contains(&format!("row: {n}")), "row {n} missing in:\n{text}");
    }
}
