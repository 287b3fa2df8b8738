//! Lenient decoding of profile documents
//!
//! Profile documents may have been written by older clients or edited by
//! hand. Rather than rejecting a whole document over one bad entry, each
//! transaction and settings field is decoded on its own: salvageable values
//! are coerced, the rest are dropped or reset to defaults, and every such
//! change is counted in a [`RepairReport`].

use std::collections::HashSet;

use serde_json::{Map, Value};
use uuid::Uuid;

use crate::models::timestamp::parse_timestamp;
use crate::models::{
    default_quick_actions, validate_fields, Profile, ProfileSettings, QuickAction, Transaction,
    TransactionId,
};

/// Counts of changes made while decoding a document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepairReport {
    /// Transaction entries that could not be salvaged
    pub dropped_transactions: usize,
    /// Transaction entries kept after coercing a value or assigning an id
    pub fixed_transactions: usize,
    /// Settings fields reset or clamped
    pub fixed_settings: usize,
}

impl RepairReport {
    /// Total number of changes
    pub fn total(&self) -> usize {
        self.dropped_transactions + self.fixed_transactions + self.fixed_settings
    }

    /// Whether the document was decoded without changes
    pub fn is_clean(&self) -> bool {
        self.total() == 0
    }
}

/// Decode a whole profile document
///
/// `name` is authoritative; a `profile_name` inside the document is ignored.
/// Transactions come back sorted with fresh running balances; any entry that
/// would push the running balance out of range is dropped.
pub fn repair_profile(name: &str, doc: &Value) -> (Profile, RepairReport) {
    let mut report = RepairReport::default();
    let mut profile = Profile::new(name);

    if let Some(obj) = doc.as_object() {
        profile.transactions = repair_transactions(obj.get("transactions"), &mut report);
        profile.settings = repair_settings(obj.get("settings"), &mut report);
        profile.last_updated = obj
            .get("last_updated")
            .and_then(Value::as_str)
            .and_then(parse_timestamp);
    }

    report.dropped_transactions += profile.recalculate_balances_lossy();
    (profile, report)
}

/// Decode a transaction list, dropping entries that can't be salvaged
pub fn repair_transactions(value: Option<&Value>, report: &mut RepairReport) -> Vec<Transaction> {
    let Some(value) = value else {
        return Vec::new();
    };
    let Some(entries) = value.as_array() else {
        report.dropped_transactions += 1;
        return Vec::new();
    };

    let mut seen: HashSet<TransactionId> = HashSet::new();
    let mut transactions = Vec::with_capacity(entries.len());

    for entry in entries {
        match repair_transaction(entry) {
            Some((mut txn, mut fixed)) => {
                if !seen.insert(txn.id) {
                    txn.id = TransactionId::new();
                    seen.insert(txn.id);
                    fixed = true;
                }
                if fixed {
                    report.fixed_transactions += 1;
                }
                transactions.push(txn);
            }
            None => report.dropped_transactions += 1,
        }
    }

    transactions
}

/// Decode one entry; the flag is set when anything had to be fixed
fn repair_transaction(entry: &Value) -> Option<(Transaction, bool)> {
    let obj = entry.as_object()?;
    let mut fixed = false;

    let date = parse_timestamp(obj.get("date")?.as_str()?)?;

    let raw_amount = obj.get("amount")?;
    let amount = coerce_integer(raw_amount)?;
    if !raw_amount.is_i64() {
        fixed = true;
    }

    let source = obj.get("source")?.as_str()?;
    validate_fields(amount, source).ok()?;

    let id = match obj
        .get("id")
        .and_then(Value::as_str)
        .and_then(|s| Uuid::parse_str(s.trim()).ok())
    {
        Some(uuid) => TransactionId::from_uuid(uuid),
        None => {
            fixed = true;
            TransactionId::new()
        }
    };

    let txn = Transaction {
        id,
        date,
        amount,
        source: source.to_string(),
        previous_balance: None,
    };
    Some((txn, fixed))
}

/// Merge stored settings over the defaults field by field
pub fn repair_settings(value: Option<&Value>, report: &mut RepairReport) -> ProfileSettings {
    let mut settings = ProfileSettings::default();
    let Some(value) = value else {
        return settings;
    };
    let Some(obj) = value.as_object() else {
        report.fixed_settings += 1;
        return settings;
    };

    if let Some(goal) = obj.get("goal") {
        match coerce_integer(goal) {
            Some(g) if g >= 0 => {
                settings.goal = g;
                if !goal.is_i64() {
                    report.fixed_settings += 1;
                }
            }
            Some(_) => {
                settings.goal = 0;
                report.fixed_settings += 1;
            }
            None => report.fixed_settings += 1,
        }
    }

    if let Some(dark_mode) = obj.get("dark_mode") {
        match dark_mode.as_bool() {
            Some(b) => settings.dark_mode = b,
            None => report.fixed_settings += 1,
        }
    }

    if let Some(actions) = obj.get("quick_actions") {
        match repair_quick_actions(actions) {
            Some(actions) => settings.quick_actions = actions,
            None => {
                settings.quick_actions = default_quick_actions();
                report.fixed_settings += 1;
            }
        }
    }

    settings
}

/// Decode settings fields present in `value` on top of `base`
///
/// Used by import, where settings absent from the payload keep their
/// current values instead of reverting to defaults.
pub fn merge_settings(
    base: &ProfileSettings,
    value: &Map<String, Value>,
    report: &mut RepairReport,
) -> ProfileSettings {
    let decoded = repair_settings(Some(&Value::Object(value.clone())), report);
    ProfileSettings {
        goal: if value.contains_key("goal") {
            decoded.goal
        } else {
            base.goal
        },
        dark_mode: if value.contains_key("dark_mode") {
            decoded.dark_mode
        } else {
            base.dark_mode
        },
        quick_actions: if value.contains_key("quick_actions") {
            decoded.quick_actions
        } else {
            base.quick_actions.clone()
        },
    }
}

/// A quick-action list is kept only if every entry is valid
fn repair_quick_actions(value: &Value) -> Option<Vec<QuickAction>> {
    value
        .as_array()?
        .iter()
        .map(|entry| {
            let obj = entry.as_object()?;
            let text = obj.get("text")?.as_str()?.to_string();
            let value = coerce_integer(obj.get("value")?)?;
            let is_positive = obj.get("is_positive")?.as_bool()?;
            let action = QuickAction::new(text, value, is_positive);
            action.is_valid().then_some(action)
        })
        .collect()
}

/// Integers, whole floats and numeric strings all count as integers
fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(whole_float)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(whole_float))
        }
        _ => None,
    }
}

fn whole_float(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}
