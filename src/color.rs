use eframe::egui::{Color32, Visuals};

// ---------------------------------------------------------------------------
// Fixed plot colours
// ---------------------------------------------------------------------------

/// Scatter marker colour (`#1f77b4`).
pub const MARKER_COLOR: Color32 = Color32::from_rgb(0x1f, 0x77, 0xb4);

/// x, y, z axis colours.
pub const AXIS_COLORS: [Color32; 3] = [
    Color32::from_rgb(0xd6, 0x27, 0x28),
    Color32::from_rgb(0x2c, 0xa0, 0x2c),
    Color32::from_rgb(0x94, 0x67, 0xbd),
];

pub const AXIS_NAMES: [&str; 3] = ["x", "y", "z"];

/// Stroke for the axis box: a faint version of the text colour.
pub fn box_edge_color(visuals: &Visuals) -> Color32 {
    visuals.weak_text_color().gamma_multiply(0.6)
}
