//! Quick action service
//!
//! Quick actions are one-tap shortcuts stored in a profile's settings.
//! Applying one records a transaction whose source is the action's label.

use std::fmt;

use chrono::NaiveDateTime;
use tracing::info;

use super::transaction::{CreateTransactionInput, TransactionService};
use crate::error::{CoinError, CoinResult};
use crate::models::{default_quick_actions, QuickAction, Transaction};
use crate::storage::Storage;

/// How a caller refers to a quick action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuickActionRef {
    /// 1-based position in the list
    Index(usize),
    /// Label, matched case-insensitively
    Text(String),
}

impl QuickActionRef {
    /// Numbers are positions; anything else is a label
    pub fn parse(input: &str) -> Self {
        match input.trim().parse::<usize>() {
            Ok(n) => Self::Index(n),
            Err(_) => Self::Text(input.trim().to_string()),
        }
    }

    fn position(&self, actions: &[QuickAction]) -> Option<usize> {
        match self {
            Self::Index(n) if *n >= 1 && *n <= actions.len() => Some(n - 1),
            Self::Index(_) => None,
            Self::Text(text) => actions
                .iter()
                .position(|a| a.text.eq_ignore_ascii_case(text)),
        }
    }
}

impl fmt::Display for QuickActionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(n) => write!(f, "#{}", n),
            Self::Text(text) => write!(f, "{}", text),
        }
    }
}

/// Service for quick-action management
pub struct QuickActionService<'a> {
    storage: &'a Storage,
    profile: &'a str,
}

impl<'a> QuickActionService<'a> {
    pub fn new(storage: &'a Storage, profile: &'a str) -> Self {
        Self { storage, profile }
    }

    /// Quick actions in display order
    pub fn list(&self) -> CoinResult<Vec<QuickAction>> {
        Ok(self.storage.profiles.load(self.profile)?.settings.quick_actions)
    }

    /// Append a quick action
    ///
    /// `value` may be given signed; its magnitude is stored and `is_positive`
    /// decides the sign.
    pub fn add(&self, text: &str, value: i64, is_positive: bool) -> CoinResult<QuickAction> {
        let text = text.trim();
        if text.is_empty() {
            return Err(CoinError::Validation("Quick action text must not be empty".into()));
        }
        let magnitude = match value.checked_abs() {
            Some(0) => {
                return Err(CoinError::Validation("Quick action value must not be zero".into()))
            }
            Some(m) => m,
            None => {
                return Err(CoinError::Validation(format!(
                    "Quick action value out of range: {}",
                    value
                )))
            }
        };

        let mut profile = self.storage.profiles.load(self.profile)?;
        if profile.settings.quick_action(text).is_some() {
            return Err(CoinError::Duplicate {
                entity_type: "Quick action",
                identifier: text.to_string(),
            });
        }

        let action = QuickAction::new(text, magnitude, is_positive);
        profile.settings.quick_actions.push(action.clone());
        self.storage.profiles.save(&mut profile)?;

        info!(profile = self.profile, text = %action.text, value = action.signed_value(), "added quick action");
        Ok(action)
    }

    /// Remove a quick action, returning it
    pub fn remove(&self, target: &QuickActionRef) -> CoinResult<QuickAction> {
        let mut profile = self.storage.profiles.load(self.profile)?;
        let index = target
            .position(&profile.settings.quick_actions)
            .ok_or_else(|| CoinError::quick_action_not_found(target.to_string()))?;

        let action = profile.settings.quick_actions.remove(index);
        self.storage.profiles.save(&mut profile)?;

        info!(profile = self.profile, text = %action.text, "removed quick action");
        Ok(action)
    }

    /// Record the transaction a quick action stands for
    pub fn apply(&self, target: &QuickActionRef, date: Option<NaiveDateTime>) -> CoinResult<Transaction> {
        let actions = self.list()?;
        let index = target
            .position(&actions)
            .ok_or_else(|| CoinError::quick_action_not_found(target.to_string()))?;
        let action = &actions[index];

        TransactionService::new(self.storage, self.profile).create(CreateTransactionInput {
            amount: action.signed_value(),
            source: action.text.clone(),
            date,
        })
    }

    /// Restore the stock quick actions
    pub fn reset(&self) -> CoinResult<Vec<QuickAction>> {
        let mut profile = self.storage.profiles.load(self.profile)?;
        profile.settings.quick_actions = default_quick_actions();
        self.storage.profiles.save(&mut profile)?;

        info!(profile = self.profile, "reset quick actions");
        Ok(profile.settings.quick_actions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::CoinPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = CoinPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_ref_parse() {
        assert_eq!(QuickActionRef::parse("3"), QuickActionRef::Index(3));
        assert_eq!(
            QuickActionRef::parse(" Watch Ads "),
            QuickActionRef::Text("Watch Ads".into())
        );
    }

    #[test]
    fn test_add_and_list() {
        let (_temp_dir, storage) = create_test_storage();
        let service = QuickActionService::new(&storage, "Default");

        let action = service.add("Chores", -20, true).unwrap();
        assert_eq!(action.value, 20);

        let actions = service.list().unwrap();
        assert_eq!(actions.len(), 7);
        assert_eq!(actions.last().unwrap().text, "Chores");
    }

    #[test]
    fn test_add_rejects_bad_input() {
        let (_temp_dir, storage) = create_test_storage();
        let service = QuickActionService::new(&storage, "Default");

        assert!(service.add("  ", 5, true).unwrap_err().is_validation());
        assert!(service.add("Chores", 0, true).unwrap_err().is_validation());
        assert!(service.add("watch ads", 5, true).unwrap_err().is_duplicate());
        assert!(service.add("Chores", i64::MIN, true).unwrap_err().is_validation());
    }

    #[test]
    fn test_apply_refuses_to_overflow_balance() {
        let (_temp_dir, storage) = create_test_storage();
        let service = QuickActionService::new(&storage, "Default");
        service.add("Jackpot", i64::MAX, true).unwrap();

        service.apply(&QuickActionRef::parse("Jackpot"), None).unwrap();
        let err = service
            .apply(&QuickActionRef::parse("Jackpot"), None)
            .unwrap_err();
        assert!(err.is_validation());

        let profile = storage.profiles.load("Default").unwrap();
        assert_eq!(profile.transactions.len(), 1);
    }

    #[test]
    fn test_remove_by_text_and_index() {
        let (_temp_dir, storage) = create_test_storage();
        let service = QuickActionService::new(&storage, "Default");

        let removed = service.remove(&QuickActionRef::parse("box draw")).unwrap();
        assert_eq!(removed.text, "Box Draw");

        let removed = service.remove(&QuickActionRef::Index(1)).unwrap();
        assert_eq!(removed.text, "Event Rewards");
        assert_eq!(service.list().unwrap().len(), 4);

        assert!(service
            .remove(&QuickActionRef::Index(0))
            .unwrap_err()
            .is_not_found());
        assert!(service
            .remove(&QuickActionRef::Index(99))
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_apply_records_signed_transaction() {
        let (_temp_dir, storage) = create_test_storage();
        let service = QuickActionService::new(&storage, "Default");

        let gain = service.apply(&QuickActionRef::parse("Watch Ads"), None).unwrap();
        assert_eq!(gain.amount, 10);
        assert_eq!(gain.source, "Watch Ads");

        let spend = service.apply(&QuickActionRef::parse("Box Draw"), None).unwrap();
        assert_eq!(spend.amount, -100);

        let all = TransactionService::new(&storage, "Default").all().unwrap();
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_reset() {
        let (_temp_dir, storage) = create_test_storage();
        let service = QuickActionService::new(&storage, "Default");
        service.remove(&QuickActionRef::Index(1)).unwrap();

        let actions = service.reset().unwrap();
        assert_eq!(actions, default_quick_actions());
    }
}
