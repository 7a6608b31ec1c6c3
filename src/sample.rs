use anyhow::{Context, Result};
use tracing::info;

use spindrift_io::load_series;

use crate::cli::SampleArgs;
use crate::config::{self, SpindriftConfig};

/// Query interpolated values at the given timestamps.
pub fn run(args: SampleArgs, config: &SpindriftConfig) -> Result<()> {
    let format = config::resolve_format(args.format.as_deref(), config)?;
    let mut ts = load_series(&args.file, format)
        .with_context(|| format!("failed to read {}", args.file.display()))?;

    let scale = args.scale.unwrap_or(config.sample.scale_factor);
    ts.set_scale_factor(scale);

    info!(
        path = %args.file.display(),
        n_queries = args.at.len(),
        scale,
        "sampling time file"
    );

    let values = ts.values_at(&args.at)?;
    for (time, value) in args.at.iter().zip(&values) {
        println!("{time}  {:.4}  {:.4}", value.u, value.v);
    }

    Ok(())
}
