//! Dataset row and card types

use serde::Serialize;

/// One row of the state enrollment table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateEnrollment {
    /// State name
    pub state: &'static str,
    /// Total biometric records
    pub total_bio: u64,
    /// Biometric records for ages 5-17
    pub bio_age_5_17: u64,
    /// Biometric records for ages 17 and above
    pub bio_age_17_plus: u64,
}

impl StateEnrollment {
    pub const fn new(
        state: &'static str,
        total_bio: u64,
        bio_age_5_17: u64,
        bio_age_17_plus: u64,
    ) -> Self {
        Self {
            state,
            total_bio,
            bio_age_5_17,
            bio_age_17_plus,
        }
    }

    /// Records not attributed to either age band
    pub fn other_age_bio(&self) -> u64 {
        self.total_bio
            .saturating_sub(self.bio_age_5_17 + self.bio_age_17_plus)
    }
}

/// Enrollment count for one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyEnrollment {
    /// Month number, 1 = January
    pub month: u32,
    pub enrollments: u64,
}

impl MonthlyEnrollment {
    /// Three-letter month abbreviation
    pub fn label(&self) -> &'static str {
        match self.month {
            1 => "Jan",
            2 => "Feb",
            3 => "Mar",
            4 => "Apr",
            5 => "May",
            6 => "Jun",
            7 => "Jul",
            8 => "Aug",
            9 => "Sep",
            10 => "Oct",
            11 => "Nov",
            12 => "Dec",
            _ => "?",
        }
    }
}

/// KPI card with display-ready strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricCard {
    pub label: &'static str,
    pub value: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta: Option<&'static str>,
}

impl MetricCard {
    pub const fn new(label: &'static str, value: &'static str) -> Self {
        Self {
            label,
            value,
            delta: None,
        }
    }

    pub const fn with_delta(label: &'static str, value: &'static str, delta: &'static str) -> Self {
        Self {
            label,
            value,
            delta: Some(delta),
        }
    }
}

/// Published model score.
///
/// The R² here is a reported figure carried as text. Nothing in this crate
/// fits or evaluates a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelScore {
    pub model: &'static str,
    pub r_squared: &'static str,
}

/// Column sums over the state table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub total_bio: u64,
    pub bio_age_5_17: u64,
    pub bio_age_17_plus: u64,
}

/// Static content for the About page
#[derive(Debug, Clone, Serialize)]
pub struct AboutContent {
    pub heading: &'static str,
    pub overview: &'static str,
    pub features: Vec<&'static str>,
    pub model_scores: Vec<ModelScore>,
    pub built_for: &'static str,
    pub status: &'static str,
}

impl AboutContent {
    /// Render the About body as markdown
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("### {}\n\n", self.heading));
        out.push_str("**Project Overview:**\n");
        out.push_str(self.overview);
        out.push_str("\n\n**Key Features:**\n");
        for feature in &self.features {
            out.push_str(&format!("- ✅ {}\n", feature));
        }
        out.push_str("\n**Model Performance:**\n");
        for score in &self.model_scores {
            out.push_str(&format!("- {}: R² = {}\n", score.model, score.r_squared));
        }
        out.push_str(&format!("\n**Built for:** {}\n", self.built_for));
        out.push_str(&format!("**Status:** ✅ {}\n", self.status));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_age_bio() {
        let row = StateEnrollment::new("Bihar", 465_136, 60_000, 100_000);
        assert_eq!(row.other_age_bio(), 305_136);

        let row = StateEnrollment::new("Nowhere", 10, 20, 30);
        assert_eq!(row.other_age_bio(), 0);
    }

    #[test]
    fn test_month_label() {
        let m = MonthlyEnrollment { month: 7, enrollments: 0 };
        assert_eq!(m.label(), "Jul");
    }
}
