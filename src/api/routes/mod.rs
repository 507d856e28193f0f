//! API Routes
//!
//! Route handlers organized by functionality.

pub mod about;
pub mod analytics;
pub mod app;
pub mod charts;
pub mod dashboard;
pub mod export;
pub mod health;
pub mod pages;
pub mod predict;
