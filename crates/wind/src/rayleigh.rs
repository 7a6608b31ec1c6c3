//! Closed-form Rayleigh helpers for speed-uncertainty shifts.
//!
//! Each observed speed is treated as the mean of a Rayleigh distribution;
//! the shifted speed is the quantile at 0.5 plus or minus the uncertainty
//! fraction.

use std::f64::consts::PI;

/// Rayleigh mode (sigma) for a distribution whose mean is `mean`.
pub(crate) fn sigma_from_mean(mean: f64) -> f64 {
    mean * (2.0 / PI).sqrt()
}

/// Rayleigh quantile: the speed at or below which a fraction `p` of the
/// probability mass lies.
pub(crate) fn quantile(p: f64, sigma: f64) -> f64 {
    sigma * (-2.0 * (1.0 - p).ln()).sqrt()
}
