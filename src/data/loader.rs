use std::io::{BufWriter, Write};
use std::path::Path;

use serde_json::{Map, Value as JsonValue};

use super::error::{Result, SampleError};
use super::model::{Point3, SampleSeries, SampleSet};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a sample set from a JSON file.
///
/// Expected layout:
///
/// ```json
/// {
///   "BlinnPhongSampleDir 4":  [[0.12, -0.40, 0.91], ...],
///   "BlinnPhongSampleDir 16": [[0.05,  0.10, 0.99], ...]
/// }
/// ```
///
/// Only the outer shape (object of arrays) is checked here; each point is
/// checked when the figure is built.
pub fn load_file(path: &Path) -> Result<SampleSet> {
    let text = std::fs::read_to_string(path).map_err(|source| SampleError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    let set = parse_str(&text)?;
    log::info!(
        "Loaded {} labels ({} points) from {}",
        set.len(),
        set.total_points(),
        path.display()
    );
    Ok(set)
}

/// Parse a sample set from JSON text.
pub fn parse_str(text: &str) -> Result<SampleSet> {
    // `preserve_order` keeps the object in file order.
    let root: Map<String, JsonValue> = serde_json::from_str(text)?;
    let mut series = Vec::with_capacity(root.len());
    for (label, value) in root {
        let points: Vec<JsonValue> = serde_json::from_value(value)?;
        series.push(SampleSeries { label, points });
    }
    Ok(SampleSet::from_series(series))
}

// ---------------------------------------------------------------------------
// Writer (used by the sample generator)
// ---------------------------------------------------------------------------

/// Write labelled point collections in the format [`load_file`] reads,
/// pretty-printed with four-space indentation.
pub fn write_file(path: &Path, series: &[(String, Vec<Point3>)]) -> Result<()> {
    let write_err = |source: std::io::Error| SampleError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut root = Map::with_capacity(series.len());
    for (label, points) in series {
        let value = serde_json::to_value(points).map_err(|e| write_err(e.into()))?;
        root.insert(label.clone(), value);
    }

    let file = std::fs::File::create(path).map_err(write_err)?;
    let mut out = BufWriter::new(file);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
    serde::Serialize::serialize(&JsonValue::Object(root), &mut ser)
        .map_err(|e| write_err(e.into()))?;
    writeln!(out).map_err(write_err)?;
    out.flush().map_err(write_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels_in_file_order() {
        let set = parse_str(r#"{"b": [[1, 1, 1]], "a": [], "c": [[0, 0, 1], [0, 1, 0]]}"#)
            .unwrap();
        let labels: Vec<&str> = set.labels().collect();
        assert_eq!(labels, ["b", "a", "c"]);
        assert_eq!(set.get("c").unwrap().points.len(), 2);
        assert!(set.get("a").unwrap().points.is_empty());
    }

    #[test]
    fn malformed_points_survive_parsing() {
        // Shape errors are raised when plotting, not here.
        let set = parse_str(r#"{"a": [[1, 2]]}"#).unwrap();
        assert_eq!(set.total_points(), 1);
    }

    #[test]
    fn repeated_label_keeps_first_position_and_last_points() {
        let set = parse_str(r#"{"a": [[1, 1, 1]], "b": [], "a": [[2, 2, 2], [3, 3, 3]]}"#)
            .unwrap();
        let labels: Vec<&str> = set.labels().collect();
        assert_eq!(labels, ["a", "b"]);
        assert_eq!(set.get("a").unwrap().points.len(), 2);
    }

    #[test]
    fn unwritable_path_is_a_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("samples.json");
        let series = vec![("a".to_string(), vec![Point3::new(0.0, 0.0, 1.0)])];
        let err = write_file(&path, &series).unwrap_err();
        assert!(matches!(err, SampleError::Write { .. }), "{err}");
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let err = parse_str("{not json").unwrap_err();
        assert!(matches!(err, SampleError::Parse(_)));
    }

    #[test]
    fn top_level_array_is_a_parse_error() {
        let err = parse_str("[[0, 0, 1]]").unwrap_err();
        assert!(matches!(err, SampleError::Parse(_)));
    }

    #[test]
    fn non_array_value_is_a_parse_error() {
        let err = parse_str(r#"{"a": 3}"#).unwrap_err();
        assert!(matches!(err, SampleError::Parse(_)));
    }

    #[test]
    fn missing_file_is_a_file_access_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("nope.json")).unwrap_err();
        match err {
            SampleError::FileAccess { path, .. } => assert!(path.ends_with("nope.json")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn written_file_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("samples.json");
        let series = vec![
            ("second".to_string(), vec![Point3::new(0.0, 0.0, 1.0)]),
            ("first".to_string(), Vec::new()),
        ];
        write_file(&path, &series).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("{\n    \"second\""));

        let set = load_file(&path).unwrap();
        let labels: Vec<&str> = set.labels().collect();
        assert_eq!(labels, ["second", "first"]);
        assert_eq!(set.get("second").unwrap().points[0], serde_json::json!([0.0, 0.0, 1.0]));
    }
}
