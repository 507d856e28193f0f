//! Prediction error types

use thiserror::Error;

/// Errors raised while validating prediction input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PredictError {
    /// A slider value fell outside its bounds
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: u32,
        max: u32,
    },

    /// Outlier zone was neither "No" nor "Yes"
    #[error("Invalid outlier zone: {0} (expected \"No\" or \"Yes\")")]
    InvalidOutlierZone(String),
}

/// Result type alias for prediction operations
pub type PredictResult<T> = Result<T, PredictError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PredictError::OutOfRange {
            field: "children",
            value: 1001,
            min: 0,
            max: 1000,
        };
        assert_eq!(err.to_string(), "children must be between 0 and 1000, got 1001");

        let err = PredictError::InvalidOutlierZone("maybe".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid outlier zone: maybe (expected \"No\" or \"Yes\")"
        );
    }
}
