//! Configuration module for CoinTracker
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - Application config persistence

pub mod paths;
pub mod settings;

pub use paths::CoinPaths;
pub use settings::AppConfig;
