use std::path::{Path, PathBuf};

use crate::data::error::Result;
use crate::data::model::SampleSet;
use crate::figure::{Figure, PlotOptions};
use crate::view::OrbitView;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// File the current samples came from.
    pub source: PathBuf,

    /// Loaded samples; read-only until another file is opened.
    pub samples: SampleSet,

    /// Subplots built from `samples` with `options`.
    pub figure: Figure,

    pub options: PlotOptions,

    /// One camera per subplot.
    pub views: Vec<OrbitView>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Build the initial state. Fails if any point is malformed.
    pub fn new(source: &Path, samples: SampleSet, options: PlotOptions) -> Result<Self> {
        let figure = Figure::build(&samples, &options)?;
        Ok(Self {
            source: source.to_path_buf(),
            views: vec![OrbitView::default(); figure.subplots.len()],
            samples,
            figure,
            options,
            status_message: None,
        })
    }

    /// Replace the samples with a newly loaded file.
    ///
    /// On error the current figure is kept and the error is returned.
    pub fn set_samples(&mut self, source: &Path, samples: SampleSet) -> Result<()> {
        let figure = Figure::build(&samples, &self.options)?;
        self.views = vec![OrbitView::default(); figure.subplots.len()];
        self.source = source.to_path_buf();
        self.samples = samples;
        self.figure = figure;
        self.status_message = None;
        Ok(())
    }

    /// Toggle the fixed [0, 1] z range and rebuild the figure.
    pub fn set_clamp_z(&mut self, clamp_z: bool) -> Result<()> {
        let options = PlotOptions { clamp_z };
        self.figure = Figure::build(&self.samples, &options)?;
        self.options = options;
        Ok(())
    }

    /// Put every camera back to its default angle.
    pub fn reset_views(&mut self) {
        self.views.fill(OrbitView::default());
    }

    /// One-line summary for the top bar.
    pub fn summary(&self) -> String {
        let name = self
            .source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.display().to_string());
        format!(
            "{name}: {} labels, {} points",
            self.figure.subplots.len(),
            self.figure.marker_count()
        )
    }
}
