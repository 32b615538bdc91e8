use anyhow::{bail, Context, Result};
use clap::Parser;

use sample_grid::config::GeneratorConfig;
use sample_grid::data::loader::write_file;
use sample_grid::sampling::{generate, SimpleRng};

fn main() -> Result<()> {
    env_logger::init();
    let config = GeneratorConfig::parse();

    let Some(incoming) = config.incoming() else {
        bail!(
            "--incoming needs exactly 3 components, got {}",
            config.incoming.len()
        );
    };
    let samplers = config.samplers();
    if samplers.is_empty() {
        bail!("nothing to generate: no samplers selected");
    }

    let mut rng = SimpleRng::new(config.seed);
    let series = generate(&samplers, config.count, incoming, &mut rng);
    for (label, points) in &series {
        log::debug!("{label}: {} directions", points.len());
    }

    write_file(&config.output, &series)
        .with_context(|| format!("writing {}", config.output.display()))?;

    println!(
        "Wrote {} collections ({} directions each) to {}",
        series.len(),
        config.count,
        config.output.display()
    );
    Ok(())
}
