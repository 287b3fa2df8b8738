//! Core data models for CoinTracker
//!
//! This module contains the data structures that make up a profile:
//! transactions, settings, quick actions, and the profile document itself.

pub mod ids;
pub mod profile;
pub mod settings;
pub mod timestamp;
pub mod transaction;

pub use ids::TransactionId;
pub use profile::{validate_profile_name, Profile, DEFAULT_PROFILE};
pub use settings::{default_quick_actions, ProfileSettings, QuickAction, DEFAULT_GOAL};
pub use transaction::{validate_fields, Transaction, TransactionValidationError};
