use glam::DVec3;
use serde::Serialize;
use serde_json::Value as JsonValue;

// ---------------------------------------------------------------------------
// Point3 – one checked sample direction
// ---------------------------------------------------------------------------

/// A single sample point / direction as stored in a sample file.
///
/// Vector maths happens on [`DVec3`]; this type only carries the `[x, y, z]`
/// file representation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "[f64; 3]")]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl From<DVec3> for Point3 {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Point3> for DVec3 {
    fn from(p: Point3) -> Self {
        DVec3::new(p.x, p.y, p.z)
    }
}

impl From<Point3> for [f64; 3] {
    fn from(p: Point3) -> Self {
        [p.x, p.y, p.z]
    }
}

impl From<[f64; 3]> for Point3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

// ---------------------------------------------------------------------------
// SampleSeries – one labelled collection, points still unchecked
// ---------------------------------------------------------------------------

/// One named collection as it appeared in the file.
///
/// Points are kept as raw JSON values; their shape is only checked when the
/// figure is built.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSeries {
    pub label: String,
    pub points: Vec<JsonValue>,
}

// ---------------------------------------------------------------------------
// SampleSet – the complete loaded file
// ---------------------------------------------------------------------------

/// All labelled collections, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSet {
    series: Vec<SampleSeries>,
}

impl SampleSet {
    /// Build a set from series already in display order.
    ///
    /// Labels are expected to be unique; the loader gets that from the JSON
    /// object map, which keeps the last value of a repeated key.
    pub fn from_series(series: impl IntoIterator<Item = SampleSeries>) -> Self {
        SampleSet {
            series: series.into_iter().collect(),
        }
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SampleSeries> {
        self.series.iter()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|s| s.label.as_str())
    }

    pub fn get(&self, label: &str) -> Option<&SampleSeries> {
        self.series.iter().find(|s| s.label == label)
    }

    /// Total number of raw points over every label.
    pub fn total_points(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn series(label: &str, points: Vec<JsonValue>) -> SampleSeries {
        SampleSeries {
            label: label.to_string(),
            points,
        }
    }

    #[test]
    fn keeps_insertion_order() {
        let set = SampleSet::from_series([
            series("zeta", vec![]),
            series("alpha", vec![json!([0, 0, 1])]),
            series("mid", vec![]),
        ]);
        let labels: Vec<&str> = set.labels().collect();
        assert_eq!(labels, ["zeta", "alpha", "mid"]);
        assert_eq!(set.total_points(), 1);
    }

    #[test]
    fn converts_to_and_from_dvec3() {
        let v = DVec3::new(0.25, -1.0, 3.5);
        let p = Point3::from(v);
        assert_eq!(p, Point3::new(0.25, -1.0, 3.5));
        assert_eq!(DVec3::from(p), v);
    }

    #[test]
    fn point_serializes_as_triple() {
        let text = serde_json::to_string(&Point3::new(1.0, -0.5, 0.25)).unwrap();
        assert_eq!(text, "[1.0,-0.5,0.25]");
    }
}
