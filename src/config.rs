use std::ffi::OsString;

use clap::{CommandFactory, Parser};

use crate::constants::{LATITUDE_TOLERANCE_RAD, MAX_ITERATIONS};
use crate::geodesy::SolverParams;

/// Convert an ECEF position (km) to geodetic longitude, latitude and height above ellipsoid.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// ECEF position as r_x_km r_y_km r_z_km. Any other count prints the usage line.
    #[arg(value_name = "KM")]
    pub coords: Vec<String>,

    /// Maximum number of latitude refinement steps
    #[arg(long, default_value_t = MAX_ITERATIONS, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_iterations: u32,

    /// Latitude convergence threshold in radians
    #[arg(long, value_name = "RAD", default_value_t = LATITUDE_TOLERANCE_RAD, value_parser = parse_tolerance)]
    pub tolerance: f64,

    /// Verbose logging (DEBUG level)
    #[arg(long, short, default_value_t = false)]
    pub verbose: bool,
}

fn parse_tolerance(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{}", e))?;
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(format!("expected a finite, non-negative number of radians, got {}", s))
    }
}

impl Config {
    /// Parse the process arguments, see [`Config::route_args`].
    pub fn from_env() -> Self {
        Self::parse_from(Self::route_args(std::env::args_os()))
    }

    pub fn try_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(Self::route_args(args))
    }

    /// Reorder an argv so flags come first and coordinates follow a `--`.
    ///
    /// clap only recognises a narrow pattern of negative numbers, so `-1e-3`,
    /// `-.5` or `-inf` would otherwise be read as short flags. Any token that
    /// parses as `f64` or does not start with `-` is a coordinate, unless it is
    /// the value of the preceding option. Coordinate order is preserved.
    pub fn route_args<I, T>(args: I) -> Vec<OsString>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let command = Self::command();
        let valued: Vec<String> = command
            .get_arguments()
            .filter(|arg| !arg.is_positional() && arg.get_action().takes_values())
            .flat_map(|arg| {
                arg.get_long()
                    .map(|long| format!("--{}", long))
                    .into_iter()
                    .chain(arg.get_short().map(|short| format!("-{}", short)))
            })
            .collect();

        let mut tokens = args.into_iter().map(Into::into);
        let mut routed: Vec<OsString> = tokens.next().into_iter().collect();
        let mut coords = Vec::new();
        let mut literal = false;
        let mut option_value = false;

        for token in tokens {
            if literal {
                coords.push(token);
                continue;
            }
            if option_value {
                routed.push(token);
                option_value = false;
                continue;
            }
            match token.to_str() {
                Some("--") => literal = true,
                Some(s) if s == "-" || !s.starts_with('-') || s.parse::<f64>().is_ok() => {
                    coords.push(token)
                }
                Some(s) => {
                    option_value = valued.iter().any(|v| v == s);
                    routed.push(token);
                }
                None => coords.push(token),
            }
        }

        routed.push(OsString::from("--"));
        routed.extend(coords);
        routed
    }

    pub fn solver_params(&self) -> SolverParams {
        SolverParams {
            max_iterations: self.max_iterations,
            tolerance_rad: self.tolerance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_is_valid() {
        Config::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let config = Config::try_from_args(["ecef-llh", "6378.1363", "0", "0"]).unwrap();

        assert_eq!(config.coords, vec!["6378.1363", "0", "0"]);
        assert_eq!(config.solver_params(), SolverParams::default());
        assert!(!config.verbose);
    }

    #[test]
    fn test_negative_coordinates() {
        let config = Config::try_from_args(["ecef-llh", "-6378.1363", "-1e3", "-0.5", "-v"]).unwrap();

        assert_eq!(config.coords, vec!["-6378.1363", "-1e3", "-0.5"]);
        assert!(config.verbose);

        for value in ["-1e-3", "-.5", "-inf", "-nan", "-1E-7"] {
            let config = Config::try_from_args(["ecef-llh", "1", "2", value])
                .unwrap_or_else(|e| panic!("{} rejected: {}", value, e));
            assert_eq!(config.coords, vec!["1", "2", value]);
        }
    }

    #[test]
    fn test_coordinate_order_kept_around_options() {
        let config = Config::try_from_args([
            "ecef-llh", "-.5", "--tolerance", "1e-9", "two", "-v", "-1e-3",
        ])
        .unwrap();

        assert_eq!(config.coords, vec!["-.5", "two", "-1e-3"]);
        assert_eq!(config.tolerance, 1e-9);
        assert!(config.verbose);
    }

    #[test]
    fn test_double_dash_passthrough() {
        let config = Config::try_from_args(["ecef-llh", "-v", "--", "1", "-2", "3"]).unwrap();
        assert_eq!(config.coords, vec!["1", "-2", "3"]);
    }

    #[test]
    fn test_unknown_flag_still_rejected() {
        assert!(Config::try_from_args(["ecef-llh", "-q", "1", "2", "3"]).is_err());
    }

    #[test]
    fn test_invalid_tolerance_rejected() {
        for value in ["--tolerance=nan", "--tolerance=-1e-6", "--tolerance=inf", "--tolerance=abc"] {
            assert!(
                Config::try_from_args(["ecef-llh", value, "1", "2", "3"]).is_err(),
                "{} accepted",
                value
            );
        }
        let config = Config::try_from_args(["ecef-llh", "--tolerance=0", "1", "2", "3"]).unwrap();
        assert_eq!(config.tolerance, 0.0);
    }

    #[test]
    fn test_no_coordinates_is_accepted() {
        let config = Config::try_from_args(["ecef-llh"]).unwrap();
        assert!(config.coords.is_empty());
    }

    #[test]
    fn test_solver_options() {
        let config = Config::try_from_args([
            "ecef-llh", "--max-iterations", "3", "--tolerance", "1e-9", "1", "2", "3",
        ])
        .unwrap();

        let params = config.solver_params();
        assert_eq!(params.max_iterations, 3);
        assert_eq!(params.tolerance_rad, 1e-9);
    }

    #[test]
    fn test_zero_iterations_rejected() {
        assert!(Config::try_from_args(["ecef-llh", "--max-iterations", "0", "1", "2", "3"]).is_err());
    }
}
