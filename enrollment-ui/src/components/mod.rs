//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod nav;
pub mod chart;
pub mod metric_card;
pub mod loading;
pub mod toast;

pub use nav::Sidebar;
pub use chart::{BarChart, LineChart};
pub use metric_card::{MetricCard, MetricRow};
pub use loading::{CardSkeleton, ChartSkeleton, Loading};
pub use toast::Toast;
