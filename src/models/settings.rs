//! Per-profile settings
//!
//! Each profile carries its own savings goal, theme preference and list of
//! quick actions.

use serde::{Deserialize, Serialize};

/// Goal assigned to new profiles
pub const DEFAULT_GOAL: i64 = 13_500;

/// A one-tap shortcut that records a fixed-amount transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickAction {
    /// Label, also used as the transaction source
    pub text: String,

    /// Positive magnitude
    pub value: i64,

    /// Whether the action is a gain (true) or a spend (false)
    pub is_positive: bool,
}

impl QuickAction {
    pub fn new(text: impl Into<String>, value: i64, is_positive: bool) -> Self {
        Self {
            text: text.into(),
            value,
            is_positive,
        }
    }

    /// The signed amount this action records
    pub fn signed_value(&self) -> i64 {
        if self.is_positive {
            self.value
        } else {
            self.value.saturating_neg()
        }
    }

    /// A quick action is usable when it has a label and a positive magnitude
    pub fn is_valid(&self) -> bool {
        !self.text.trim().is_empty() && self.value > 0
    }
}

/// The stock quick actions for a fresh profile
pub fn default_quick_actions() -> Vec<QuickAction> {
    vec![
        QuickAction::new("Event Rewards", 50, true),
        QuickAction::new("Watch Ads", 10, true),
        QuickAction::new("Daily Games", 100, true),
        QuickAction::new("Box Draw", 100, false),
        QuickAction::new("Login Bonus", 50, true),
        QuickAction::new("Achievement", 25, true),
    ]
}

/// Settings stored alongside a profile's transactions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSettings {
    /// Target balance
    #[serde(default = "default_goal")]
    pub goal: i64,

    /// Dark theme preference
    #[serde(default)]
    pub dark_mode: bool,

    /// Ordered quick actions
    #[serde(default = "default_quick_actions")]
    pub quick_actions: Vec<QuickAction>,
}

fn default_goal() -> i64 {
    DEFAULT_GOAL
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            goal: DEFAULT_GOAL,
            dark_mode: false,
            quick_actions: default_quick_actions(),
        }
    }
}

impl ProfileSettings {
    /// Find a quick action by its label (case-insensitive)
    pub fn quick_action(&self, text: &str) -> Option<&QuickAction> {
        let text = text.trim();
        self.quick_actions
            .iter()
            .find(|a| a.text.eq_ignore_ascii_case(text))
    }
}
