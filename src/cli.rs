// Command-line driver: argument-count gate, coordinate parsing and report output

use std::io::Write;

use tracing::{debug, warn};

use crate::config::Config;
use crate::constants::USAGE;
use crate::error::ConvertError;
use crate::geodesy::{self, Geodetic, SolverParams};
use crate::output;

/// Positional argument names, in order
const AXES: [&str; 3] = ["r_x_km", "r_y_km", "r_z_km"];

/// What a single invocation ended up doing
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Wrong argument count; only the usage line was written
    Usage,
    /// Conversion ran and the report was written
    Report(Geodetic),
}

/// Parse the three positional coordinates.
///
/// Returns `Ok(None)` when the count is not exactly three; the count is checked
/// before any value is parsed.
///
/// # Errors
/// Returns `ConvertError::InvalidCoordinate` naming the first axis that is not a float.
pub fn parse_coordinates(args: &[String]) -> Result<Option<(f64, f64, f64)>, ConvertError> {
    if args.len() != AXES.len() {
        return Ok(None);
    }

    let mut values = [0.0; 3];
    for ((slot, axis), raw) in values.iter_mut().zip(AXES).zip(args) {
        *slot = raw.trim().parse::<f64>().map_err(|source| ConvertError::InvalidCoordinate {
            axis,
            value: raw.clone(),
            source,
        })?;
    }

    Ok(Some((values[0], values[1], values[2])))
}

/// Run one conversion against `out`.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<Outcome, ConvertError> {
    run_with(&config.coords, &config.solver_params(), out)
}

pub fn run_with<W: Write>(
    args: &[String],
    params: &SolverParams,
    out: &mut W,
) -> Result<Outcome, ConvertError> {
    let Some((x, y, z)) = parse_coordinates(args)? else {
        debug!("Expected {} coordinates, got {}", AXES.len(), args.len());
        writeln!(out, "{}", USAGE)?;
        out.flush()?;
        return Ok(Outcome::Usage);
    };

    debug!("Converting ECEF ({}, {}, {}) km with {:?}", x, y, z, params);
    let llh = geodesy::ecef2llh_with(x, y, z, params);

    if !llh.converged {
        warn!(
            "Latitude not converged to {} rad after {} iterations",
            params.tolerance_rad, llh.iterations
        );
    }

    output::write_report(out, &llh)?;
    Ok(Outcome::Report(llh))
}
