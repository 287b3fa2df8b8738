//! CoinTracker - a personal coin tracker
//!
//! This library provides the core of the `coin` command: gain and spend
//! transactions recorded against a virtual coin balance, progress toward a
//! savings goal, and the analytics derived from them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `analytics`: Pure balance/analytics derivation and filtering
//! - `backup`: Timestamped profile backups
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: Tracing subscriber setup
//! - `models`: Core data models (transactions, settings, profiles)
//! - `storage`: JSON document storage, one document per profile
//! - `services`: Business logic layer
//! - `export`: JSON/YAML/CSV export and JSON import
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use coin_tracker::analytics::{compute_balance, compute_progress};
//! use coin_tracker::config::{AppConfig, CoinPaths};
//! use coin_tracker::storage::Storage;
//!
//! let paths = CoinPaths::new()?;
//! let config = AppConfig::load_or_create(&paths)?;
//! let storage = Storage::new(paths)?;
//! let profile = storage.profiles.load(&config.current_profile)?;
//! let balance = compute_balance(&profile.transactions);
//! let progress = compute_progress(balance, profile.settings.goal);
//! ```

pub mod analytics;
pub mod backup;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{CoinError, CoinResult};
