// Error taxonomy for the command-line conversion

use std::fmt;
use std::io;
use std::num::ParseFloatError;

#[derive(Debug)]
pub enum ConvertError {
    /// A positional coordinate could not be read as a float
    InvalidCoordinate {
        axis: &'static str,
        value: String,
        source: ParseFloatError,
    },
    /// Writing the report or usage line failed
    Io(io::Error),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::InvalidCoordinate { axis, value, source } => {
                write!(f, "could not convert {} '{}' to float: {}", axis, value, source)
            }
            ConvertError::Io(e) => write!(f, "failed to write output: {}", e),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::InvalidCoordinate { source, .. } => Some(source),
            ConvertError::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for ConvertError {
    fn from(e: io::Error) -> Self {
        ConvertError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_invalid_coordinate_display() {
        let source = "abc".parse::<f64>().unwrap_err();
        let err = ConvertError::InvalidCoordinate {
            axis: "r_y_km",
            value: "abc".to_string(),
            source,
        };

        let msg = err.to_string();
        assert!(msg.contains("r_y_km"), "{}", msg);
        assert!(msg.contains("'abc'"), "{}", msg);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_io_conversion() {
        let err: ConvertError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(err, ConvertError::Io(_)));
        assert!(err.to_string().contains("closed"));
    }
}
