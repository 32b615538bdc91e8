use eframe::egui::{PointerButton, Ui};
use egui_extras::{Size, StripBuilder};
use egui_plot::{Line, Plot, PlotPoint, PlotPoints, Points, Text};

use crate::color::{box_edge_color, AXIS_COLORS, AXIS_NAMES, MARKER_COLOR};
use crate::figure::Subplot;
use crate::layout::GRID_COLUMNS;
use crate::state::AppState;
use crate::view::{OrbitView, PROJECTED_EXTENT};

/// Scatter marker radius in points.
const MARKER_RADIUS: f32 = 1.5;

/// Room left around the projected box.
const MARGIN: f64 = 1.1;

// ---------------------------------------------------------------------------
// Subplot grid (central panel)
// ---------------------------------------------------------------------------

/// Render every subplot in a `rows × 3` grid of equal cells.
pub fn sample_grid(ui: &mut Ui, state: &mut AppState) {
    let AppState { figure, views, .. } = state;
    let layout = figure.layout;

    // `{}` is a valid file with zero rows: show a notice instead of failing.
    if layout.count() == 0 {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("The sample file has no labels");
        });
        return;
    }

    StripBuilder::new(ui)
        .sizes(Size::remainder(), layout.rows())
        .vertical(|mut rows| {
            for row in 0..layout.rows() {
                rows.strip(|builder| {
                    builder
                        .sizes(Size::remainder(), GRID_COLUMNS)
                        .horizontal(|mut cells| {
                            for column in 0..GRID_COLUMNS {
                                match layout.index_at(row, column) {
                                    Some(i) => cells.cell(|ui: &mut Ui| {
                                        subplot(ui, i, &figure.subplots[i], &mut views[i]);
                                    }),
                                    None => cells.empty(),
                                }
                            }
                        });
                });
            }
        });
}

/// One titled 3D scatter panel. Primary-drag orbits, double-click resets.
fn subplot(ui: &mut Ui, index: usize, subplot: &Subplot, view: &mut OrbitView) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(&subplot.title);
    });

    let edge_color = box_edge_color(ui.visuals());
    let camera = *view;
    let extent = PROJECTED_EXTENT * MARGIN;

    let response = Plot::new(("subplot", index))
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
        .include_x(-extent)
        .include_x(extent)
        .include_y(-extent)
        .include_y(extent)
        .show(ui, |plot_ui| {
            for [a, b] in camera.box_edges() {
                plot_ui.line(Line::new(vec![a, b]).color(edge_color).width(0.5));
            }

            let axes = camera.axis_tips().into_iter().zip(AXIS_COLORS).zip(AXIS_NAMES);
            for ((tip, color), name) in axes {
                plot_ui.line(Line::new(vec![[0.0, 0.0], tip]).color(color).width(1.0));
                plot_ui.text(
                    Text::new(PlotPoint::new(tip[0] * MARGIN, tip[1] * MARGIN), name).color(color),
                );
            }

            let points: PlotPoints = subplot
                .markers
                .iter()
                .map(|p| camera.project(p, &subplot.bounds))
                .collect();
            plot_ui.points(Points::new(points).color(MARKER_COLOR).radius(MARKER_RADIUS));
        })
        .response;

    if response.dragged_by(PointerButton::Primary) {
        let delta = response.drag_delta();
        view.rotate_by(delta.x as f64, delta.y as f64);
    }
    if response.double_clicked() {
        *view = OrbitView::default();
    }
}
