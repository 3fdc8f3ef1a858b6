//! Error types for goodness-of-fit testing
//!
//! Provides a unified error type for all gof-stats crates. Every failure is a
//! local validation failure: the computation is deterministic, so nothing is
//! retried and no partial result is returned alongside an error.

use thiserror::Error;

/// Core error type for goodness-of-fit operations
#[derive(Error, Debug)]
pub enum Error {
    /// Unknown distribution family tag
    #[error("Unsupported distribution family: {0:?}")]
    UnsupportedFamily(String),

    /// Both halves of a mode split came out empty
    #[error("Degenerate mode split: both sides of the mode are empty")]
    DegenerateSplit,

    /// Too few merged bins for the number of estimated parameters
    #[error(
        "Insufficient degrees of freedom: {bins} bins with {estimated_params} \
         estimated parameters gives {dof}"
    )]
    InsufficientDegreesOfFreedom {
        bins: usize,
        estimated_params: usize,
        dof: i64,
    },

    /// The reference distribution assigns no probability mass to an observed bin
    #[error("Zero expected count in bin {bin_index} [{lower}, {upper})")]
    ZeroExpectedCount {
        bin_index: usize,
        lower: f64,
        upper: f64,
    },

    /// Fewer than two edges were supplied to bin pairing
    #[error("Invalid edges: at least 2 edge values are required, got {count}")]
    InvalidEdges { count: usize },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::Computation(format!("{context} contains NaN or infinite values"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnsupportedFamily("gamma".to_string());
        assert_eq!(err.to_string(), "Unsupported distribution family: \"gamma\"");

        let err = Error::DegenerateSplit;
        assert_eq!(
            err.to_string(),
            "Degenerate mode split: both sides of the mode are empty"
        );

        let err = Error::InsufficientDegreesOfFreedom {
            bins: 2,
            estimated_params: 2,
            dof: -1,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient degrees of freedom: 2 bins with 2 estimated parameters gives -1"
        );

        let err = Error::ZeroExpectedCount {
            bin_index: 3,
            lower: -2.5,
            upper: -1.0,
        };
        assert_eq!(err.to_string(), "Zero expected count in bin 3 [-2.5, -1)");

        let err = Error::InvalidEdges { count: 1 };
        assert_eq!(
            err.to_string(),
            "Invalid edges: at least 2 edge values are required, got 1"
        );

        let err = Error::InvalidParameter("threshold must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: threshold must be positive");
    }

    #[test]
    fn test_error_helper_functions() {
        let err = Error::size_mismatch(8, 7, "bin merge");
        assert_eq!(
            err.to_string(),
            "Invalid input: Size mismatch in bin merge: expected 8, got 7"
        );

        let err = Error::non_finite("sample");
        assert_eq!(
            err.to_string(),
            "Computation error: sample contains NaN or infinite values"
        );
    }

    #[test]
    fn test_error_chaining() {
        fn inner_function() -> Result<()> {
            Err(Error::DegenerateSplit)
        }

        fn outer_function() -> Result<()> {
            inner_function().map_err(|e| Error::Computation(format!("merge failed: {e}")))
        }

        let err = outer_function().unwrap_err();
        assert!(err.to_string().contains("merge failed"));
        assert!(err.to_string().contains("Degenerate mode split"));
    }
}
