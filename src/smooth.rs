use anyhow::{Context, Result};
use tracing::info;

use spindrift_io::{load_series, write_time_file};

use crate::cli::SmoothArgs;
use crate::config::{self, SpindriftConfig};

/// Apply a trailing running average and write the result back out.
pub fn run(args: SmoothArgs, config: &SpindriftConfig) -> Result<()> {
    let format = config::resolve_format(args.format.as_deref(), config)?;
    let ts = load_series(&args.file, format)
        .with_context(|| format!("failed to read {}", args.file.display()))?;

    let window_hours = args.window_hours.unwrap_or(config.smooth.window_hours);
    let averaged = ts
        .running_average(window_hours)
        .with_context(|| format!("running average over {window_hours} h failed"))?;

    write_time_file(&args.output, &averaged, ts.station(), ts.units())
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    info!(
        input = %args.file.display(),
        output = %args.output.display(),
        window_hours,
        n_samples = averaged.len(),
        "wrote smoothed series"
    );

    Ok(())
}
