//! Page Catalogue
//!
//! The four pages of the dashboard and the app-level text around them
//! (title, sidebar note, footer).

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const PAGE_TITLE: &str = "AADHAAR Enrollment Predictor";
pub const PAGE_ICON: &str = "🏛️";
pub const MAIN_TITLE: &str = "🏛️ AADHAAR Biometric Enrollment Prediction";
pub const SIDEBAR_INFO: &str =
    "Real-time AADHAAR enrollment prediction using ML models trained on 1.5M+ records";
pub const FOOTER: &str = "AADHAAR Hackathon 2025 | Data-Driven Enrollment Prediction System";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    #[error("Unknown page: {0}")]
    Unknown(String),
}

/// A dashboard page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Dashboard,
    Predictions,
    Analytics,
    About,
}

impl Page {
    /// Pages in sidebar order
    pub const ALL: [Page; 4] = [Page::Dashboard, Page::Predictions, Page::Analytics, Page::About];

    pub fn slug(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Predictions => "predictions",
            Page::Analytics => "analytics",
            Page::About => "about",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Predictions => "Predictions",
            Page::Analytics => "Analytics",
            Page::About => "About",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Dashboard => "📊",
            Page::Predictions => "🎯",
            Page::Analytics => "📈",
            Page::About => "ℹ️",
        }
    }

    /// Page heading with its icon
    pub fn header(&self) -> String {
        let heading = match self {
            Page::Dashboard => "Enrollment Dashboard",
            Page::Predictions => "Enrollment Predictions",
            Page::Analytics => "Advanced Analytics",
            Page::About => "About This Project",
        };
        format!("{} {}", self.icon(), heading)
    }

    /// Frontend route for this page
    pub fn route(&self) -> &'static str {
        match self {
            Page::Dashboard => "/",
            Page::Predictions => "/predictions",
            Page::Analytics => "/analytics",
            Page::About => "/about",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Page {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Page::ALL
            .into_iter()
            .find(|p| p.slug().eq_ignore_ascii_case(wanted) || p.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PageError::Unknown(wanted.to_string()))
    }
}

/// Sidebar entry for one page
#[derive(Debug, Clone, Serialize)]
pub struct PageEntry {
    pub page: Page,
    pub label: &'static str,
    pub header: String,
    pub route: &'static str,
}

/// App-level metadata shown around every page
#[derive(Debug, Clone, Serialize)]
pub struct AppInfo {
    pub page_title: &'static str,
    pub page_icon: &'static str,
    pub title: &'static str,
    pub sidebar_info: &'static str,
    pub footer: &'static str,
    pub default_page: Page,
    pub pages: Vec<PageEntry>,
}

impl AppInfo {
    pub fn new() -> Self {
        Self {
            page_title: PAGE_TITLE,
            page_icon: PAGE_ICON,
            title: MAIN_TITLE,
            sidebar_info: SIDEBAR_INFO,
            footer: FOOTER,
            default_page: Page::default(),
            pages: Page::ALL
                .iter()
                .map(|p| PageEntry {
                    page: *p,
                    label: p.label(),
                    header: p.header(),
                    route: p.route(),
                })
                .collect(),
        }
    }
}

impl Default for AppInfo {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page() {
        assert_eq!("dashboard".parse::<Page>().unwrap(), Page::Dashboard);
        assert_eq!("Predictions".parse::<Page>().unwrap(), Page::Predictions);
        assert_eq!(" ANALYTICS ".parse::<Page>().unwrap(), Page::Analytics);
        assert_eq!(
            "settings".parse::<Page>(),
            Err(PageError::Unknown("settings".to_string()))
        );
    }

    #[test]
    fn test_headers() {
        assert_eq!(Page::Dashboard.header(), "📊 Enrollment Dashboard");
        assert_eq!(Page::About.header(), "ℹ️ About This Project");
    }

    #[test]
    fn test_app_info_lists_pages_in_order() {
        let info = AppInfo::new();
        let labels: Vec<_> = info.pages.iter().map(|p| p.label).collect();
        assert_eq!(labels, vec!["Dashboard", "Predictions", "Analytics", "About"]);
        assert_eq!(info.default_page, Page::Dashboard);
    }
}
