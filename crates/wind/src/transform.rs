//! Polar and component layout conversion.
//!
//! Wind direction follows the meteorological "blowing from" convention: a
//! northerly wind (direction 0) has a negative v component.

use spindrift_series::Vec2;

/// Convert a (magnitude, direction-degrees) pair to (u, v) components.
pub fn r_theta_to_uv(magnitude: f64, direction_deg: f64) -> Vec2 {
    let rad = direction_deg.to_radians();
    Vec2::new(-magnitude * rad.sin(), -magnitude * rad.cos())
}

/// Convert (u, v) components to a (magnitude, direction-degrees) pair with
/// the direction normalised into [0, 360).
pub fn uv_to_r_theta(u: f64, v: f64) -> (f64, f64) {
    let magnitude = u.hypot(v);
    let mut direction = (-u).atan2(-v).to_degrees();
    if direction < 0.0 {
        direction += 360.0;
    }
    (magnitude, direction)
}
