//! Grid viewer for labelled sets of importance-sampling directions.
//!
//! ```text
//!  samples.json ─► data::loader ─► SampleSet ─► figure::Figure ─► ui (eframe)
//!                                                 │
//!                                                 └─ layout (3 columns) + view (3D → 2D)
//! ```

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod figure;
pub mod layout;
pub mod sampling;
pub mod state;
pub mod ui;
pub mod view;
