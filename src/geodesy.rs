// Geodesy module - ECEF to geodetic conversion
//
// Provides conversions between:
// - ECEF (Earth-Centered Earth-Fixed) in kilometers
// - LLH (Longitude/Latitude/Height) in degrees and kilometers
//
// Uses the R_E_KM / E_E reference ellipsoid from `constants`

use crate::constants::{DTOR, E_E_SQ, LATITUDE_TOLERANCE_RAD, MAX_ITERATIONS, R_E_KM, RTOD};
use tracing::debug;

/// Controls for the iterative latitude refinement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverParams {
    /// Hard cap on refinement steps. With 0 the loop never runs and HAE is NaN.
    pub max_iterations: u32,
    /// Stop once the latitude moves by no more than this many radians
    pub tolerance_rad: f64,
}

impl Default for SolverParams {
    fn default() -> Self {
        SolverParams {
            max_iterations: MAX_ITERATIONS,
            tolerance_rad: LATITUDE_TOLERANCE_RAD,
        }
    }
}

/// Result of an ECEF to geodetic conversion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geodetic {
    /// Longitude in degrees, atan2 quadrant convention
    pub lon_deg: f64,
    /// Latitude in degrees
    pub lat_deg: f64,
    /// Height above ellipsoid in kilometers
    pub hae_km: f64,
    /// Refinement steps actually taken
    pub iterations: u32,
    /// True when the tolerance test, not the cap, ended the refinement
    pub converged: bool,
}

/// Radius of curvature in the prime vertical (km) at a latitude in radians
#[inline]
fn prime_vertical_radius(lat_rad: f64) -> f64 {
    let slat = lat_rad.sin();
    R_E_KM / (1.0 - E_E_SQ * slat * slat).sqrt()
}

/// Converts ECEF coordinates to longitude/latitude/height with the default solver settings
///
/// # Arguments
/// * `x`, `y`, `z` - ECEF coordinates in kilometers
///
/// # Example
/// ```
/// let llh = ecef_llh::geodesy::ecef2llh(6378.1363, 0.0, 0.0);
/// assert_eq!(llh.lat_deg, 0.0);
/// ```
pub fn ecef2llh(x: f64, y: f64, z: f64) -> Geodetic {
    ecef2llh_with(x, y, z, &SolverParams::default())
}

/// Converts ECEF coordinates to longitude/latitude/height
///
/// Latitude is seeded with the geocentric latitude and refined by fixed-point
/// iteration on `tan(lat) = (z + N e^2 sin(lat)) / p`. Degenerate geometry is
/// not trapped: the origin gives NaN, points on the polar axis give an
/// implementation-defined longitude.
pub fn ecef2llh_with(x: f64, y: f64, z: f64, params: &SolverParams) -> Geodetic {
    let lon = y.atan2(x);

    let mut lat = (z / (x * x + y * y + z * z).sqrt()).asin();
    let p = (x * x + y * y).sqrt();

    let mut prev_lat = f64::NAN;
    let mut n = f64::NAN;
    let mut count = 0;

    // NaN previous forces at least one pass
    while (prev_lat.is_nan() || (lat - prev_lat).abs() > params.tolerance_rad)
        && count < params.max_iterations
    {
        n = prime_vertical_radius(lat);
        prev_lat = lat;
        lat = ((z + n * E_E_SQ * lat.sin()) / p).atan();
        count += 1;
        debug!(
            "iteration {}: lat={} rad, delta={:e} rad",
            count,
            lat,
            (lat - prev_lat).abs()
        );
    }

    let converged = (lat - prev_lat).abs() <= params.tolerance_rad;
    let hae = p / lat.cos() - n;

    Geodetic {
        lon_deg: lon * RTOD,
        lat_deg: lat * RTOD,
        hae_km: hae,
        iterations: count,
        converged,
    }
}

/// Converts longitude/latitude/height on the reference ellipsoid to ECEF coordinates
///
/// # Arguments
/// * `lat` - Latitude in degrees
/// * `lon` - Longitude in degrees
/// * `alt` - Height above the ellipsoid in kilometers
///
/// # Returns
/// ECEF coordinates (x, y, z) in kilometers
pub fn llh2ecef(lat: f64, lon: f64, alt: f64) -> (f64, f64, f64) {
    let lat_rad = lat * DTOR;
    let lon_rad = lon * DTOR;

    let slat = lat_rad.sin();
    let slon = lon_rad.sin();
    let clat = lat_rad.cos();
    let clon = lon_rad.cos();

    let rn = prime_vertical_radius(lat_rad);

    let x = (rn + alt) * clat * clon;
    let y = (rn + alt) * clat * slon;
    let z = (rn * (1.0 - E_E_SQ) + alt) * slat;

    (x, y, z)
}
