use scope_chart::ChartError;
use scope_chart::api::parse_chart_data;

const TWO_GROUPS: &str = r##"[
  {
    "columns": [
      ["x", 1542412800000, 1542499200000, 1542585600000, 1542672000000],
      ["y0", 37, 20, 32, 39],
      ["y1", 22, 12, 30, 40]
    ],
    "types": {"y0": "line", "y1": "line", "x": "x"},
    "names": {"y0": "Joined", "y1": "Left"},
    "colors": {"y0": "#3DC23F", "y1": "#F34C44"}
  },
  {
    "columns": [
      ["x", 1542412800000, 1542499200000, 1542585600000],
      ["z", 5, 6, 7],
      ["a", 1, 2, 3]
    ],
    "types": {"z": "line", "a": "line", "x": "x"},
    "names": {"z": "Bravo", "a": "Alpha"},
    "colors": {"z": "#111111", "a": "#222222"}
  }
]"##;

fn invalid_data_message(input: &str) -> String {
    match parse_chart_data(input) {
        Err(ChartError::InvalidData(message)) => message,
        other => panic!("expected invalid data, got {other:?}"),
    }
}

#[test]
fn parses_every_chart_group() {
    let groups = parse_chart_data(TWO_GROUPS).expect("valid document");
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].len(), 2);
    assert_eq!(groups[1].len(), 2);

    let joined = &groups[0][0];
    assert_eq!(joined.name(), "Joined");
    assert_eq!(joined.color_hex(), "#3DC23F");
    let values: Vec<i64> = joined.columns().iter().map(|column| column.value).collect();
    assert_eq!(values, vec![37, 20, 32, 39]);
}

#[test]
fn time_column_is_stored_in_seconds() {
    let groups = parse_chart_data(TWO_GROUPS).expect("valid document");
    let series = &groups[0][1];
    assert_eq!(series.first_time(), 1_542_412_800);
    assert_eq!(series.last_time(), 1_542_672_000);
    assert_eq!(series.span(), 3 * 86_400);
}

#[test]
fn series_of_a_group_are_sorted_by_name() {
    let groups = parse_chart_data(TWO_GROUPS).expect("valid document");
    let names: Vec<&str> = groups[1].iter().map(|series| series.name()).collect();
    assert_eq!(names, vec!["Alpha", "Bravo"]);
    assert_eq!(groups[1][0].color_hex(), "#222222");
}

#[test]
fn missing_types_fall_back_to_the_x_column_id() {
    let input = r##"[{
      "columns": [["x", 1000, 2000, 3000, 4000], ["y0", 1, 2, 3, 4]],
      "names": {"y0": "only"},
      "colors": {"y0": "#000000"}
    }]"##;
    let groups = parse_chart_data(input).expect("valid document");
    assert_eq!(groups[0][0].first_time(), 1);
    assert_eq!(groups[0][0].last_time(), 4);
}

#[test]
fn rejects_columns_of_different_lengths() {
    let message = invalid_data_message(
        r##"[{
          "columns": [["x", 1000, 2000, 3000, 4000], ["y0", 1, 2, 3]],
          "types": {"x": "x", "y0": "line"},
          "names": {"y0": "short"},
          "colors": {"y0": "#000000"}
        }]"##,
    );
    assert!(message.starts_with("chart group 0:"), "{message}");
    assert!(message.contains("lengths differ"), "{message}");
}

#[test]
fn rejects_non_integer_samples() {
    let message = invalid_data_message(
        r##"[{
          "columns": [["x", 1000, 2000, 3000, 4000], ["y0", 1, 2.5, 3, 4]],
          "types": {"x": "x", "y0": "line"},
          "names": {"y0": "fraction"},
          "colors": {"y0": "#000000"}
        }]"##,
    );
    assert!(message.contains("non-integer"), "{message}");
}

#[test]
fn rejects_groups_with_too_few_samples() {
    let message = invalid_data_message(
        r##"[{
          "columns": [["x", 1000, 2000], ["y0", 1, 2]],
          "types": {"x": "x", "y0": "line"},
          "names": {"y0": "tiny"},
          "colors": {"y0": "#000000"}
        }]"##,
    );
    assert!(message.contains("at least"), "{message}");
}

#[test]
fn rejects_groups_without_a_time_column() {
    let message = invalid_data_message(
        r##"[{
          "columns": [["t", 1000, 2000, 3000, 4000], ["y0", 1, 2, 3, 4]],
          "types": {"t": "line", "y0": "line"},
          "names": {"y0": "untimed"},
          "colors": {"y0": "#000000"}
        }]"##,
    );
    assert!(message.contains("missing `x` time column"), "{message}");
}

#[test]
fn malformed_group_fails_the_whole_document() {
    let input = r##"[
      {
        "columns": [["x", 1000, 2000, 3000, 4000], ["y0", 1, 2, 3, 4]],
        "types": {"x": "x", "y0": "line"},
        "names": {"y0": "fine"},
        "colors": {"y0": "#000000"}
      },
      {
        "columns": [["x", 1000, 2000, 3000, 4000], ["y0", 1, 2, 3, 4]],
        "types": {"x": "x", "y0": "line"},
        "names": {"y0": "colorless"},
        "colors": {}
      }
    ]"##;
    let message = invalid_data_message(input);
    assert!(message.starts_with("chart group 1:"), "{message}");
}

#[test]
fn rejects_malformed_json() {
    let message = invalid_data_message("{not json");
    assert!(message.contains("failed to parse chart data json"), "{message}");
}
