//! Enrollment Estimate
//!
//! The "prediction" is the sum of the two age-band sliders:
//!
//! ```text
//! total = children (5-17) + adults (17+)
//! ```
//!
//! There is no trained model behind it. The R² shown next to the result is
//! the published figure for the linear model, carried as text.
//!
//! # Example
//!
//! ```rust
//! use enrollment::predict::{predict, OutlierZone, PredictionInput};
//!
//! let input = PredictionInput::new(50, 100, OutlierZone::No);
//! let result = predict(&input).unwrap();
//! assert_eq!(result.total, 150);
//! ```

pub mod error;

pub use error::{PredictError, PredictResult};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::dataset::group_thousands;

/// Lower slider bound (inclusive)
pub const SLIDER_MIN: u32 = 0;
/// Upper slider bound (inclusive)
pub const SLIDER_MAX: u32 = 1000;
pub const DEFAULT_CHILDREN: u32 = 50;
pub const DEFAULT_ADULTS: u32 = 100;

/// Published R² of the linear model, shown beside each estimate
pub const REPORTED_R_SQUARED: &str = "1.0000";

/// Whether the estimate is for a zone flagged as an outlier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutlierZone {
    #[default]
    No,
    Yes,
}

impl OutlierZone {
    pub const OPTIONS: [OutlierZone; 2] = [OutlierZone::No, OutlierZone::Yes];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutlierZone::No => "No",
            OutlierZone::Yes => "Yes",
        }
    }
}

impl fmt::Display for OutlierZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutlierZone {
    type Err = PredictError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "no" => Ok(OutlierZone::No),
            "yes" => Ok(OutlierZone::Yes),
            other => Err(PredictError::InvalidOutlierZone(other.to_string())),
        }
    }
}

/// Slider values for one estimate
///
/// Counts are signed so that out-of-range requests (including negatives) can
/// be reported with the value the caller actually sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredictionInput {
    /// Children, ages 5-17
    pub children: i64,
    /// Adults, ages 17+
    pub adults: i64,
    pub outlier_zone: OutlierZone,
}

impl Default for PredictionInput {
    fn default() -> Self {
        Self {
            children: DEFAULT_CHILDREN as i64,
            adults: DEFAULT_ADULTS as i64,
            outlier_zone: OutlierZone::No,
        }
    }
}

impl PredictionInput {
    pub fn new(children: u32, adults: u32, outlier_zone: OutlierZone) -> Self {
        Self {
            children: children as i64,
            adults: adults as i64,
            outlier_zone,
        }
    }

    /// Check both counts against the slider bounds
    pub fn validate(&self) -> PredictResult<(u32, u32)> {
        let children = check_bounds("children", self.children)?;
        let adults = check_bounds("adults", self.adults)?;
        Ok((children, adults))
    }
}

fn check_bounds(field: &'static str, value: i64) -> PredictResult<u32> {
    if value < SLIDER_MIN as i64 || value > SLIDER_MAX as i64 {
        return Err(PredictError::OutOfRange {
            field,
            value,
            min: SLIDER_MIN,
            max: SLIDER_MAX,
        });
    }
    Ok(value as u32)
}

/// Sum of the two age bands
pub fn predicted_total(children: u32, adults: u32) -> u64 {
    children as u64 + adults as u64
}

/// Result of an estimate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prediction {
    pub children: u32,
    pub adults: u32,
    pub total: u64,
    /// Total with thousands separators
    pub formatted_total: String,
    /// Echoed from the input; does not change the total
    pub outlier_zone: OutlierZone,
    pub reported_r_squared: &'static str,
    pub message: String,
}

/// Validate the input and compute the estimate
pub fn predict(input: &PredictionInput) -> PredictResult<Prediction> {
    let (children, adults) = input.validate()?;
    let total = predicted_total(children, adults);
    let formatted_total = group_thousands(total);

    let message = format!(
        "Predicted: {} records (R² = {})",
        formatted_total, REPORTED_R_SQUARED
    );

    tracing::debug!(
        children,
        adults,
        total,
        outlier_zone = %input.outlier_zone,
        "Computed enrollment estimate"
    );

    Ok(Prediction {
        children,
        adults,
        total,
        formatted_total,
        outlier_zone: input.outlier_zone,
        reported_r_squared: REPORTED_R_SQUARED,
        message,
    })
}

/// Description of one slider control
#[derive(Debug, Clone, Serialize)]
pub struct SliderSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub min: u32,
    pub max: u32,
    pub default: u32,
}

/// Description of the outlier select control
#[derive(Debug, Clone, Serialize)]
pub struct SelectSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub options: Vec<&'static str>,
    pub default: &'static str,
}

/// All controls on the Predictions page
#[derive(Debug, Clone, Serialize)]
pub struct PredictionControls {
    pub sliders: Vec<SliderSpec>,
    pub select: SelectSpec,
}

pub fn controls() -> PredictionControls {
    PredictionControls {
        sliders: vec![
            SliderSpec {
                name: "children",
                label: "Children (5-17 years)",
                min: SLIDER_MIN,
                max: SLIDER_MAX,
                default: DEFAULT_CHILDREN,
            },
            SliderSpec {
                name: "adults",
                label: "Adults (17+ years)",
                min: SLIDER_MIN,
                max: SLIDER_MAX,
                default: DEFAULT_ADULTS,
            },
        ],
        select: SelectSpec {
            name: "outlier_zone",
            label: "Is Outlier Zone?",
            options: OutlierZone::OPTIONS.iter().map(|z| z.as_str()).collect(),
            default: OutlierZone::default().as_str(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_estimate() {
        let result = predict(&PredictionInput::default()).unwrap();
        assert_eq!(result.total, 150);
        assert_eq!(result.formatted_total, "150");
        assert_eq!(result.message, "Predicted: 150 records (R² = 1.0000)");
        assert_eq!(result.outlier_zone, OutlierZone::No);
    }

    #[test]
    fn test_total_is_sum_across_bounds() {
        for a in (SLIDER_MIN..=SLIDER_MAX).step_by(37) {
            for b in [SLIDER_MIN, 1, 499, SLIDER_MAX] {
                let result = predict(&PredictionInput::new(a, b, OutlierZone::No)).unwrap();
                assert_eq!(result.total, a as u64 + b as u64);
            }
        }
    }

    #[test]
    fn test_upper_bound_formats_with_separator() {
        let result = predict(&PredictionInput::new(1000, 1000, OutlierZone::Yes)).unwrap();
        assert_eq!(result.total, 2000);
        assert_eq!(result.formatted_total, "2,000");
        assert_eq!(result.outlier_zone, OutlierZone::Yes);
    }

    #[test]
    fn test_outlier_zone_does_not_change_total() {
        let no = predict(&PredictionInput::new(10, 20, OutlierZone::No)).unwrap();
        let yes = predict(&PredictionInput::new(10, 20, OutlierZone::Yes)).unwrap();
        assert_eq!(no.total, yes.total);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let input = PredictionInput {
            children: 1001,
            adults: 0,
            outlier_zone: OutlierZone::No,
        };
        assert!(matches!(
            predict(&input),
            Err(PredictError::OutOfRange { field: "children", value: 1001, .. })
        ));

        let input = PredictionInput {
            children: 0,
            adults: -1,
            outlier_zone: OutlierZone::No,
        };
        assert!(matches!(
            predict(&input),
            Err(PredictError::OutOfRange { field: "adults", value: -1, .. })
        ));
    }

    #[test]
    fn test_outlier_zone_parse() {
        assert_eq!("yes".parse::<OutlierZone>().unwrap(), OutlierZone::Yes);
        assert_eq!(" No ".parse::<OutlierZone>().unwrap(), OutlierZone::No);
        assert!("maybe".parse::<OutlierZone>().is_err());
    }

    #[test]
    fn test_controls() {
        let controls = controls();
        assert_eq!(controls.sliders.len(), 2);
        assert_eq!(controls.sliders[0].default, 50);
        assert_eq!(controls.sliders[1].default, 100);
        assert_eq!(controls.select.options, vec!["No", "Yes"]);
    }
}
