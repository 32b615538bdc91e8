use serde_json::Value as JsonValue;

use crate::data::error::{Result, SampleError};
use crate::data::model::{Point3, SampleSet};
use crate::layout::{GridCell, GridLayout};

/// Fixed z display range used when z clamping is on.
pub const CLAMPED_Z: (f64, f64) = (0.0, 1.0);

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Per-figure plotting options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlotOptions {
    /// Fix every subplot's z axis to [0, 1] instead of the data range.
    pub clamp_z: bool,
}

// ---------------------------------------------------------------------------
// Axis bounds
// ---------------------------------------------------------------------------

/// Displayed range of each axis, indexed x, y, z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

impl Default for AxisBounds {
    fn default() -> Self {
        AxisBounds {
            min: [-1.0; 3],
            max: [1.0; 3],
        }
    }
}

impl AxisBounds {
    /// Tight bounds around `points`; flat axes are widened so every span is
    /// non-zero.
    pub fn from_points(points: &[Point3]) -> Self {
        if points.is_empty() {
            return AxisBounds::default();
        }
        let mut min = [f64::INFINITY; 3];
        let mut max = [f64::NEG_INFINITY; 3];
        for p in points {
            for (axis, v) in [p.x, p.y, p.z].into_iter().enumerate() {
                min[axis] = min[axis].min(v);
                max[axis] = max[axis].max(v);
            }
        }
        for axis in 0..3 {
            if max[axis] - min[axis] < f64::EPSILON {
                min[axis] -= 0.5;
                max[axis] += 0.5;
            }
        }
        AxisBounds { min, max }
    }

    pub fn with_z(mut self, (lo, hi): (f64, f64)) -> Self {
        self.min[2] = lo;
        self.max[2] = hi;
        self
    }

    pub fn span(&self, axis: usize) -> f64 {
        self.max[axis] - self.min[axis]
    }

    pub fn center(&self, axis: usize) -> f64 {
        (self.min[axis] + self.max[axis]) / 2.0
    }
}

// ---------------------------------------------------------------------------
// Figure
// ---------------------------------------------------------------------------

/// One 3D scatter panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Subplot {
    /// The label, unchanged.
    pub title: String,
    pub cell: GridCell,
    pub markers: Vec<Point3>,
    pub bounds: AxisBounds,
}

/// Every subplot of one sample set, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub layout: GridLayout,
    pub subplots: Vec<Subplot>,
    pub options: PlotOptions,
}

impl Figure {
    /// Lay out one subplot per label, in file order.
    ///
    /// Fails on the first point that is not `[x, y, z]`; nothing is kept
    /// from a failed build.
    pub fn build(set: &SampleSet, options: &PlotOptions) -> Result<Figure> {
        let layout = GridLayout::for_count(set.len());
        log::debug!(
            "Laying out {} subplots in {} rows x {} columns",
            layout.count(),
            layout.rows(),
            layout.columns()
        );

        let mut subplots = Vec::with_capacity(set.len());
        for (i, series) in set.iter().enumerate() {
            let markers = series
                .points
                .iter()
                .enumerate()
                .map(|(index, raw)| {
                    point_from_json(raw).ok_or_else(|| SampleError::Shape {
                        label: series.label.clone(),
                        index,
                        found: raw.to_string(),
                    })
                })
                .collect::<Result<Vec<Point3>>>()?;

            let mut bounds = AxisBounds::from_points(&markers);
            if options.clamp_z {
                bounds = bounds.with_z(CLAMPED_Z);
            }

            subplots.push(Subplot {
                title: series.label.clone(),
                cell: layout.cell(i),
                markers,
                bounds,
            });
        }

        Ok(Figure {
            layout,
            subplots,
            options: *options,
        })
    }

    /// Number of markers over all subplots.
    pub fn marker_count(&self) -> usize {
        self.subplots.iter().map(|s| s.markers.len()).sum()
    }
}

/// `[x, y, z]` with three numeric components, or `None`.
fn point_from_json(value: &JsonValue) -> Option<Point3> {
    match value.as_array()?.as_slice() {
        [x, y, z] => Some(Point3::new(x.as_f64()?, y.as_f64()?, z.as_f64()?)),
        _ => None,
    }
}
