use crate::data::model::Point3;
use crate::figure::AxisBounds;

/// Default camera azimuth in degrees.
pub const DEFAULT_AZIMUTH: f64 = -60.0;
/// Default camera elevation in degrees.
pub const DEFAULT_ELEVATION: f64 = 30.0;

/// Degrees of rotation per screen point dragged.
const DRAG_DEGREES_PER_POINT: f64 = 0.5;

/// Largest distance of a projected box corner from the origin.
pub const PROJECTED_EXTENT: f64 = 1.732_050_807_568_877_2;

/// Orthographic camera orbiting the centre of a subplot's axis box.
///
/// The box is first normalised to the cube [-1, 1]³ so every axis gets the
/// same screen length, then viewed from `azimuth` (about +z, measured from
/// +x) and `elevation` (above the xy plane).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitView {
    pub azimuth: f64,
    pub elevation: f64,
}

impl Default for OrbitView {
    fn default() -> Self {
        OrbitView {
            azimuth: DEFAULT_AZIMUTH,
            elevation: DEFAULT_ELEVATION,
        }
    }
}

impl OrbitView {
    /// Orbit by a drag of `(dx, dy)` screen points.
    pub fn rotate_by(&mut self, dx: f64, dy: f64) {
        self.azimuth = (self.azimuth - dx * DRAG_DEGREES_PER_POINT) % 360.0;
        self.elevation = (self.elevation + dy * DRAG_DEGREES_PER_POINT).clamp(-90.0, 90.0);
    }

    /// Screen position of `point` inside `bounds`.
    pub fn project(&self, point: &Point3, bounds: &AxisBounds) -> [f64; 2] {
        let n = |axis: usize, v: f64| (v - bounds.center(axis)) / (bounds.span(axis) / 2.0);
        self.project_normalized([n(0, point.x), n(1, point.y), n(2, point.z)])
    }

    /// The twelve edges of the axis box, projected.
    pub fn box_edges(&self) -> Vec<[[f64; 2]; 2]> {
        let corner = |i: usize| -> [f64; 3] {
            [
                if i & 1 == 0 { -1.0 } else { 1.0 },
                if i & 2 == 0 { -1.0 } else { 1.0 },
                if i & 4 == 0 { -1.0 } else { 1.0 },
            ]
        };
        let mut edges = Vec::with_capacity(12);
        for i in 0..8usize {
            for bit in [1usize, 2, 4] {
                if i & bit == 0 {
                    edges.push([
                        self.project_normalized(corner(i)),
                        self.project_normalized(corner(i | bit)),
                    ]);
                }
            }
        }
        edges
    }

    /// Projected end of each positive axis from the box centre, x, y, z.
    pub fn axis_tips(&self) -> [[f64; 2]; 3] {
        [
            self.project_normalized([1.0, 0.0, 0.0]),
            self.project_normalized([0.0, 1.0, 0.0]),
            self.project_normalized([0.0, 0.0, 1.0]),
        ]
    }

    fn project_normalized(&self, [x, y, z]: [f64; 3]) -> [f64; 2] {
        let (sin_az, cos_az) = self.azimuth.to_radians().sin_cos();
        let (sin_el, cos_el) = self.elevation.to_radians().sin_cos();

        // Screen right is the horizontal direction perpendicular to the eye.
        let right = -sin_az * x + cos_az * y;
        let up = -sin_el * cos_az * x - sin_el * sin_az * y + cos_el * z;
        [right, up]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: [f64; 2], b: [f64; 2]) -> bool {
        (a[0] - b[0]).abs() < 1e-9 && (a[1] - b[1]).abs() < 1e-9
    }

    fn unit_box() -> AxisBounds {
        AxisBounds::default()
    }

    #[test]
    fn centre_projects_to_origin() {
        let bounds = AxisBounds {
            min: [2.0, -4.0, 0.0],
            max: [4.0, 0.0, 1.0],
        };
        let p = OrbitView::default().project(&Point3::new(3.0, -2.0, 0.5), &bounds);
        assert!(close(p, [0.0, 0.0]));
    }

    #[test]
    fn side_view_shows_y_right_and_z_up() {
        let view = OrbitView {
            azimuth: 0.0,
            elevation: 0.0,
        };
        let b = unit_box();
        assert!(close(view.project(&Point3::new(0.0, 1.0, 0.0), &b), [1.0, 0.0]));
        assert!(close(view.project(&Point3::new(0.0, 0.0, 1.0), &b), [0.0, 1.0]));
        // x points at the eye.
        assert!(close(view.project(&Point3::new(1.0, 0.0, 0.0), &b), [0.0, 0.0]));
    }

    #[test]
    fn top_view_hides_z() {
        let view = OrbitView {
            azimuth: 0.0,
            elevation: 90.0,
        };
        let p = view.project(&Point3::new(0.0, 0.0, 1.0), &unit_box());
        assert!(close(p, [0.0, 0.0]));
    }

    #[test]
    fn box_has_twelve_edges_within_extent() {
        let edges = OrbitView::default().box_edges();
        assert_eq!(edges.len(), 12);
        for [a, b] in edges {
            for p in [a, b] {
                assert!(p[0].hypot(p[1]) <= PROJECTED_EXTENT + 1e-9);
            }
        }
    }

    #[test]
    fn default_view_points_z_up() {
        let [_, _, z_tip] = OrbitView::default().axis_tips();
        assert!(z_tip[1] > 0.0);
        assert!(z_tip[0].abs() < 1e-9);
    }

    #[test]
    fn elevation_is_clamped() {
        let mut view = OrbitView::default();
        view.rotate_by(0.0, 10_000.0);
        assert_eq!(view.elevation, 90.0);
        view.rotate_by(20.0, 0.0);
        assert_eq!(view.azimuth, DEFAULT_AZIMUTH - 10.0);
    }
}
