//! Sample Enrollment Dataset
//!
//! The dashboard's only data: a five-row state table, a twelve-month trend
//! series, KPI cards, and the About content. A [`Dataset`] is built once at
//! startup and shared read-only behind an `Arc`.

pub mod format;
pub mod sample;
pub mod types;

pub use format::{compact, group_thousands};
pub use types::{
    AboutContent, MetricCard, ModelScore, MonthlyEnrollment, StateEnrollment, Totals,
};

/// A state row paired with its chart colour
#[derive(Debug, Clone, serde::Serialize)]
pub struct ColoredState {
    #[serde(flatten)]
    pub row: StateEnrollment,
    pub color: &'static str,
}

/// Immutable bundle of every figure the dashboard shows
#[derive(Debug, Clone)]
pub struct Dataset {
    states: Vec<StateEnrollment>,
    colors: Vec<&'static str>,
    trend: Vec<MonthlyEnrollment>,
    kpis: Vec<MetricCard>,
    quality: Vec<MetricCard>,
    about: AboutContent,
}

impl Dataset {
    /// Build the built-in sample dataset
    pub fn sample() -> Self {
        Self {
            states: sample::STATES.to_vec(),
            colors: sample::STATE_COLORS.to_vec(),
            trend: sample::monthly_trend(),
            kpis: sample::KPI_CARDS.to_vec(),
            quality: sample::QUALITY_CARDS.to_vec(),
            about: sample::about(),
        }
    }

    /// Rows in table order
    pub fn states(&self) -> &[StateEnrollment] {
        &self.states
    }

    /// Rows with their bar colours, in table order
    pub fn colored_states(&self) -> Vec<ColoredState> {
        self.states
            .iter()
            .enumerate()
            .map(|(i, row)| ColoredState {
                row: row.clone(),
                color: self.colors[i % self.colors.len()],
            })
            .collect()
    }

    /// Rows sorted by total enrollment, largest first. Ties sort by name.
    pub fn top_states(&self, limit: usize) -> Vec<&StateEnrollment> {
        let mut rows: Vec<&StateEnrollment> = self.states.iter().collect();
        rows.sort_by(|a, b| b.total_bio.cmp(&a.total_bio).then(a.state.cmp(b.state)));
        rows.truncate(limit);
        rows
    }

    /// Case-insensitive lookup by state name
    pub fn state(&self, name: &str) -> Option<&StateEnrollment> {
        let name = name.trim();
        self.states
            .iter()
            .find(|row| row.state.eq_ignore_ascii_case(name))
    }

    pub fn totals(&self) -> Totals {
        self.states.iter().fold(Totals::default(), |acc, row| Totals {
            total_bio: acc.total_bio + row.total_bio,
            bio_age_5_17: acc.bio_age_5_17 + row.bio_age_5_17,
            bio_age_17_plus: acc.bio_age_17_plus + row.bio_age_17_plus,
        })
    }

    pub fn monthly_trend(&self) -> &[MonthlyEnrollment] {
        &self.trend
    }

    /// Month with the highest enrollment count, computed from the series
    pub fn peak_month(&self) -> Option<MonthlyEnrollment> {
        // max_by_key keeps the last maximum; reverse so the earliest month wins a tie
        self.trend
            .iter()
            .rev()
            .max_by_key(|m| m.enrollments)
            .copied()
    }

    pub fn trend_caption(&self) -> &'static str {
        sample::TREND_CAPTION
    }

    pub fn trend_color(&self) -> &'static str {
        sample::TREND_COLOR
    }

    pub fn kpi_cards(&self) -> &[MetricCard] {
        &self.kpis
    }

    pub fn quality_cards(&self) -> &[MetricCard] {
        &self.quality
    }

    pub fn about(&self) -> &AboutContent {
        &self.about
    }

    pub fn row_count(&self) -> usize {
        self.states.len()
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_has_five_states() {
        let ds = Dataset::sample();
        assert_eq!(ds.row_count(), 5);
        assert_eq!(ds.states()[0].state, "Maharashtra");
        assert_eq!(ds.states()[4].state, "Bihar");
    }

    #[test]
    fn test_top_states_ordering() {
        let ds = Dataset::sample();
        let top = ds.top_states(3);
        let names: Vec<_> = top.iter().map(|r| r.state).collect();
        assert_eq!(names, vec!["Maharashtra", "Uttar Pradesh", "Tamil Nadu"]);

        assert_eq!(ds.top_states(100).len(), 5);
        assert!(ds.top_states(0).is_empty());
    }

    #[test]
    fn test_state_lookup_is_case_insensitive() {
        let ds = Dataset::sample();
        let row = ds.state("  tamil nadu ").unwrap();
        assert_eq!(row.total_bio, 601_336);
        assert!(ds.state("Kerala").is_none());
    }

    #[test]
    fn test_totals() {
        let totals = Dataset::sample().totals();
        assert_eq!(totals.total_bio, 3_820_778);
        assert_eq!(totals.bio_age_5_17, 460_000);
        assert_eq!(totals.bio_age_17_plus, 730_000);
    }

    #[test]
    fn test_peak_month_is_computed() {
        let ds = Dataset::sample();
        let peak = ds.peak_month().unwrap();
        assert_eq!(peak.month, 5);
        assert_eq!(peak.enrollments, 9_792_552);
        // The published caption is kept verbatim
        assert_eq!(ds.trend_caption(), "Monthly Trend (Peak July)");
    }

    #[test]
    fn test_colors_follow_table_order() {
        let colored = Dataset::sample().colored_states();
        assert_eq!(colored.len(), 5);
        assert_eq!(colored[0].color, "#FF6B6B");
        assert_eq!(colored[4].row.state, "Bihar");
        assert_eq!(colored[4].color, "#FFD93D");
    }

    #[test]
    fn test_about_markdown() {
        let md = Dataset::sample().about().to_markdown();
        assert!(md.contains("Random Forest: R² = 0.9994"));
        assert!(md.contains("**Built for:** SIH 2025"));
    }
}
