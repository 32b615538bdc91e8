/// Data layer: core types, loading, and errors.
///
/// Architecture:
/// ```text
///  samples.json
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  parse file → SampleSet (label → raw points, file order)
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ SampleSet │  read-only for the rest of the run
///   └───────────┘
/// ```

pub mod error;
pub mod loader;
pub mod model;

pub use error::SampleError;
pub use model::{Point3, SampleSeries, SampleSet};
