use anyhow::{Context, Result};
use tracing::info;

use spindrift_io::{parse_format, parse_units, write_time_file};
use spindrift_wind::Wind;

use crate::cli::ConvertArgs;
use crate::config::{self, SpindriftConfig};

/// Convert a time file to other units or another layout.
///
/// Goes through the wind wrapper, so the input file must declare concrete
/// velocity units.
pub fn run(args: ConvertArgs, config: &SpindriftConfig) -> Result<()> {
    let from_format = config::resolve_format(args.format.as_deref(), config)?;
    let to_units = parse_units(&args.to_units)?;
    let to_format = parse_format(&args.to_format)?;

    let wind = Wind::from_file(&args.file, from_format)
        .with_context(|| format!("failed to read {}", args.file.display()))?;

    let rows = wind.timeseries(Some(to_units), to_format);
    write_time_file(&args.output, &rows, wind.station(), to_units)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    info!(
        input = %args.file.display(),
        output = %args.output.display(),
        units = %to_units,
        format = %to_format,
        n_samples = rows.len(),
        "converted time file"
    );

    Ok(())
}
