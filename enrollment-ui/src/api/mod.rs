//! API access
//!
//! HTTP client for the dashboard REST API.

pub mod client;

pub use client::*;
