//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

/// Errors surfaced by instance validation, the search and the instance reader.
///
/// None of these are retried internally: an infeasible instance stays
/// infeasible no matter how often construction is attempted.
#[derive(Debug, Error)]
pub enum CflpError {
    /// Every facility is open and the demand is still not covered.
    #[error("instance is infeasible: total capacity {total_capacity} is below demand {demand}")]
    InfeasibleInstance { total_capacity: f64, demand: f64 },

    /// Malformed instance data or caller-supplied solution.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Search parameters rejected by [`IlsConfig::validate`](crate::ils::IlsConfig::validate).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// OR-Library file could not be parsed.
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("failed to read instance file: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CflpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infeasible_message_names_both_sides() {
        let err = CflpError::InfeasibleInstance {
            total_capacity: 10.0,
            demand: 100.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("10"), "{msg}");
        assert!(msg.contains("100"), "{msg}");
    }

    #[test]
    fn test_io_error_converts() {
        fn read() -> Result<String> {
            Ok(std::fs::read_to_string("/definitely/not/a/real/path.txt")?)
        }
        assert!(matches!(read(), Err(CflpError::Io(_))));
    }
}
