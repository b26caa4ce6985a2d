// Shared constants for the ECEF to geodetic conversion

use std::f64::consts::PI;

/// Equatorial radius of the reference ellipsoid (km)
pub const R_E_KM: f64 = 6378.1363;

/// First eccentricity of the reference ellipsoid
pub const E_E: f64 = 0.081819221456;

/// Eccentricity squared
pub const E_E_SQ: f64 = E_E * E_E;

/// Degrees to radians conversion factor
pub const DTOR: f64 = PI / 180.0;

/// Radians to degrees conversion factor
pub const RTOD: f64 = 180.0 / PI;

/// Upper bound on latitude refinement steps
pub const MAX_ITERATIONS: u32 = 5;

/// Latitude change (rad) below which the refinement is considered converged
pub const LATITUDE_TOLERANCE_RAD: f64 = 1e-6;

/// Usage line printed when the argument count is wrong
pub const USAGE: &str = "Usage: ecef-llh r_x_km r_y_km r_z_km";
