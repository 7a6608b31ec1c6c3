use anyhow::{Context, Result};
use tracing::info;

use spindrift_io::load_series;
use spindrift_series::TimeValuePair;

use crate::cli::InspectArgs;
use crate::config::{self, SpindriftConfig};

/// Summarise a station time file.
pub fn run(args: InspectArgs, config: &SpindriftConfig) -> Result<()> {
    let format = config::resolve_format(args.format.as_deref(), config)?;
    let ts = load_series(&args.file, format)
        .with_context(|| format!("failed to read {}", args.file.display()))?;

    info!(path = %args.file.display(), n_samples = ts.len(), "inspecting time file");

    println!("file:     {}", args.file.display());
    println!("format:   {}", ts.format());
    println!("units:    {}", ts.units());
    match ts.station() {
        Some(s) => {
            print!("station:  {} ({:.4}, {:.4}", s.name, s.longitude, s.latitude);
            match s.elevation {
                Some(e) => println!(", {e:.1} m)"),
                None => println!(")"),
            }
        }
        None => println!("station:  none"),
    }
    println!("samples:  {}", ts.len());
    if let (Some(start), Some(end)) = (ts.start_time(), ts.end_time()) {
        println!("span:     {start} .. {end} ({:.1} h)", span_hours(start, end));
    }

    let (u_stats, v_stats) = component_stats(ts.samples());
    println!(
        "u/mag:    min {:.4}  mean {:.4}  max {:.4}",
        u_stats.0, u_stats.1, u_stats.2
    );
    println!(
        "v/dir:    min {:.4}  mean {:.4}  max {:.4}",
        v_stats.0, v_stats.1, v_stats.2
    );

    Ok(())
}

fn span_hours(start: i64, end: i64) -> f64 {
    (end - start) as f64 / 3600.0
}

/// Per-component (min, mean, max) over the sample values.
fn component_stats(samples: &[TimeValuePair]) -> ((f64, f64, f64), (f64, f64, f64)) {
    let mut u = (f64::INFINITY, 0.0, f64::NEG_INFINITY);
    let mut v = (f64::INFINITY, 0.0, f64::NEG_INFINITY);
    for s in samples {
        u.0 = u.0.min(s.value.u);
        u.1 += s.value.u;
        u.2 = u.2.max(s.value.u);
        v.0 = v.0.min(s.value.v);
        v.1 += s.value.v;
        v.2 = v.2.max(s.value.v);
    }
    let n = samples.len().max(1) as f64;
    u.1 /= n;
    v.1 /= n;
    (u, v)
}
