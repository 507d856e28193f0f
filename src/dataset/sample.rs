//! Built-in sample figures
//!
//! These are the figures the dashboard ships with. They are presentation
//! data only: nothing here is loaded, refreshed, or derived at runtime.

use super::types::{AboutContent, MetricCard, ModelScore, MonthlyEnrollment, StateEnrollment};

/// Top five states by total biometric enrollment
pub const STATES: [StateEnrollment; 5] = [
    StateEnrollment::new("Maharashtra", 1_190_686, 150_000, 250_000),
    StateEnrollment::new("Uttar Pradesh", 1_088_920, 120_000, 180_000),
    StateEnrollment::new("Tamil Nadu", 601_336, 80_000, 120_000),
    StateEnrollment::new("Karnataka", 474_700, 50_000, 80_000),
    StateEnrollment::new("Bihar", 465_136, 60_000, 100_000),
];

/// Bar colours, one per row of [`STATES`] in table order
pub const STATE_COLORS: [&str; 5] = ["#FF6B6B", "#4ECDC4", "#45B7D1", "#95E1D3", "#FFD93D"];

/// Monthly enrollment counts, January through December
pub const MONTHLY_ENROLLMENTS: [u64; 12] = [
    8_322_222, 8_641_679, 7_879_956, 7_899_289, 9_792_552, 6_654_928, 4_582_655, 7_285_506,
    3_078_026, 7_000_000, 7_500_000, 8_000_000,
];

pub const TREND_COLOR: &str = "#4ECDC4";

/// Caption shown over the monthly chart, as published
pub const TREND_CAPTION: &str = "Monthly Trend (Peak July)";

pub const KPI_CARDS: [MetricCard; 4] = [
    MetricCard::with_delta("Total Records", "1.5M", "+15K/day"),
    MetricCard::with_delta("States Covered", "37", "Complete"),
    MetricCard::with_delta("Districts", "917", "Analyzed"),
    MetricCard::with_delta("Data Quality", "93.9%", "+3%"),
];

pub const QUALITY_CARDS: [MetricCard; 4] = [
    MetricCard::new("Integrity", "100%"),
    MetricCard::new("Missing", "0"),
    MetricCard::new("Duplicates", "30K"),
    MetricCard::new("Outliers", "43K"),
];

pub const MODEL_SCORES: [ModelScore; 3] = [
    ModelScore { model: "Linear Regression", r_squared: "1.0000" },
    ModelScore { model: "Random Forest", r_squared: "0.9994" },
    ModelScore { model: "Gradient Boosting", r_squared: "0.9988" },
];

pub fn monthly_trend() -> Vec<MonthlyEnrollment> {
    MONTHLY_ENROLLMENTS
        .iter()
        .enumerate()
        .map(|(i, &enrollments)| MonthlyEnrollment {
            month: i as u32 + 1,
            enrollments,
        })
        .collect()
}

pub fn about() -> AboutContent {
    AboutContent {
        heading: "AADHAAR Hackathon - Enrollment Prediction System",
        overview: "ML-powered system for predicting AADHAAR biometric enrollments across India.",
        features: vec![
            "Real-time enrollment predictions",
            "Geographic analysis & coverage gaps",
            "Demographic segmentation",
            "Outlier detection & anomaly analysis",
            "Interactive visualizations",
        ],
        model_scores: MODEL_SCORES.to_vec(),
        built_for: "SIH 2025",
        status: "Production Ready",
    }
}
