//! Command-line configuration for the viewer and the sample generator.

use std::path::PathBuf;

use clap::Parser;
use glam::DVec3;

use crate::figure::PlotOptions;
use crate::sampling::HemisphereSampler;

/// File read when no path is given; also where the generator writes.
pub const DEFAULT_SAMPLE_PATH: &str = "samples.json";

/// Initial window size in points.
pub const WINDOW_SIZE: [f32; 2] = [1200.0, 400.0];
pub const MIN_WINDOW_SIZE: [f32; 2] = [600.0, 300.0];

#[derive(Debug, Clone, Parser)]
#[command(
    name = "sample-grid",
    version,
    about = "Show each labelled set of sample directions as a 3D scatter plot"
)]
pub struct ViewerConfig {
    /// JSON file mapping labels to arrays of [x, y, z] points
    #[arg(default_value = DEFAULT_SAMPLE_PATH)]
    pub path: PathBuf,

    /// Fix the z axis of every subplot to [0, 1]
    #[arg(
        long,
        env = "SAMPLE_GRID_CLAMP_Z",
        action = clap::ArgAction::SetTrue,
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub clamp_z: bool,
}

impl ViewerConfig {
    pub fn plot_options(&self) -> PlotOptions {
        PlotOptions {
            clamp_z: self.clamp_z,
        }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(
    name = "generate-samples",
    version,
    about = "Write hemisphere sampler output in the format sample-grid reads"
)]
pub struct GeneratorConfig {
    /// Directions drawn per sampler
    #[arg(short = 'n', long, default_value_t = 500)]
    pub count: usize,

    /// PRNG seed
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Output file
    #[arg(short, long, default_value = DEFAULT_SAMPLE_PATH)]
    pub output: PathBuf,

    /// Blinn-Phong exponents, one collection each
    #[arg(long, value_delimiter = ',', default_values_t = [4.0, 16.0, 64.0, 128.0])]
    pub exponents: Vec<f64>,

    /// Incoming light direction; specular lobes centre on its mirror
    #[arg(long, value_delimiter = ',', default_values_t = [1.0, 0.0, -1.0], allow_hyphen_values = true)]
    pub incoming: Vec<f64>,

    /// Leave out the uniform and cosine-weighted collections
    #[arg(long)]
    pub specular_only: bool,
}

impl GeneratorConfig {
    /// Samplers in output order.
    pub fn samplers(&self) -> Vec<HemisphereSampler> {
        let mut samplers = Vec::with_capacity(self.exponents.len() + 2);
        if !self.specular_only {
            samplers.push(HemisphereSampler::Uniform);
            samplers.push(HemisphereSampler::CosineWeighted);
        }
        samplers.extend(
            self.exponents
                .iter()
                .map(|&exponent| HemisphereSampler::BlinnPhong { exponent }),
        );
        samplers
    }

    /// The incoming direction, if exactly three components were given.
    pub fn incoming(&self) -> Option<DVec3> {
        match *self.incoming.as_slice() {
            [x, y, z] => Some(DVec3::new(x, y, z)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewer_defaults_to_samples_json() {
        let cfg = ViewerConfig::try_parse_from(["sample-grid"]).unwrap();
        assert_eq!(cfg.path, PathBuf::from(DEFAULT_SAMPLE_PATH));
        assert!(!cfg.plot_options().clamp_z);
    }

    #[test]
    fn viewer_takes_one_positional_path() {
        let cfg = ViewerConfig::try_parse_from(["sample-grid", "dump.json", "--clamp-z"]).unwrap();
        assert_eq!(cfg.path, PathBuf::from("dump.json"));
        assert!(cfg.plot_options().clamp_z);

        assert!(ViewerConfig::try_parse_from(["sample-grid", "a.json", "b.json"]).is_err());
    }

    #[test]
    fn generator_defaults() {
        let cfg = GeneratorConfig::try_parse_from(["generate-samples"]).unwrap();
        assert_eq!(cfg.count, 500);
        let labels: Vec<String> = cfg.samplers().iter().map(|s| s.label()).collect();
        assert_eq!(
            labels,
            [
                "UniformSampleDir",
                "CosineWeightedSampleDir",
                "BlinnPhongSampleDir 4",
                "BlinnPhongSampleDir 16",
                "BlinnPhongSampleDir 64",
                "BlinnPhongSampleDir 128",
            ]
        );
        assert_eq!(cfg.incoming(), Some(DVec3::new(1.0, 0.0, -1.0)));
    }

    #[test]
    fn generator_overrides() {
        let cfg = GeneratorConfig::try_parse_from([
            "generate-samples",
            "--exponents",
            "8,32",
            "--specular-only",
            "--incoming",
            "0,-1,-1",
            "-n",
            "10",
        ])
        .unwrap();
        assert_eq!(cfg.samplers().len(), 2);
        assert_eq!(cfg.incoming(), Some(DVec3::new(0.0, -1.0, -1.0)));
        assert_eq!(cfg.count, 10);

        let short = GeneratorConfig::try_parse_from(["generate-samples", "--incoming", "1,0"])
            .unwrap();
        assert_eq!(short.incoming(), None);
    }
}
