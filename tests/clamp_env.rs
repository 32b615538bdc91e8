//! `SAMPLE_GRID_CLAMP_Z` is read from the process environment, so this runs
//! in its own test binary.

use clap::Parser;
use sample_grid::config::ViewerConfig;

const VAR: &str = "SAMPLE_GRID_CLAMP_Z";

fn clamp_z_with(value: &str) -> bool {
    std::env::set_var(VAR, value);
    let cfg = ViewerConfig::try_parse_from(["sample-grid"]);
    std::env::remove_var(VAR);
    cfg.unwrap().plot_options().clamp_z
}

#[test]
fn clamp_env_accepts_common_boolean_spellings() {
    for on in ["1", "true", "yes", "on"] {
        assert!(clamp_z_with(on), "{on}");
    }
    for off in ["0", "false", "no", "off"] {
        assert!(!clamp_z_with(off), "{off}");
    }
}
