//! Aggregate figures derived from a transaction list
//!
//! Every function here is pure: inputs are borrowed, nothing is cached, and
//! the evaluation instant is passed in by the caller. Sums saturate at the
//! `i64` bounds instead of wrapping.

use std::collections::{BTreeSet, HashMap};

use chrono::{Datelike, Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::Transaction;

/// Which side of the ledger a breakdown covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Transactions with `amount > 0`
    Earnings,
    /// Transactions with `amount < 0`
    Spending,
}

impl Flow {
    fn includes(self, txn: &Transaction) -> bool {
        match self {
            Flow::Earnings => txn.is_gain(),
            Flow::Spending => txn.is_spend(),
        }
    }
}

/// Total gains and total spends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub earnings: i64,
    /// Absolute value of all negative amounts
    pub spending: i64,
}

impl Totals {
    /// Earnings minus spending; always equal to the balance
    pub fn net(&self) -> i64 {
        self.earnings.saturating_sub(self.spending)
    }
}

/// Summed magnitude for one source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceTotal {
    pub source: String,
    pub amount: i64,
}

/// Gains in the current day, week and month
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub today: i64,
    pub week: i64,
    pub month: i64,
}

/// Cumulative balance after one transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelinePoint {
    #[serde(with = "crate::models::timestamp::serde_format")]
    pub date: NaiveDateTime,
    pub balance: i64,
}

/// Sum of all amounts
pub fn compute_balance(transactions: &[Transaction]) -> i64 {
    transactions
        .iter()
        .fold(0i64, |acc, t| acc.saturating_add(t.amount))
}

/// Percentage of the goal reached, in `0..=100`
///
/// A goal of zero or less has no denominator and yields 0. The ratio is
/// floored, capped at 100 once the goal is met, and a negative balance
/// reports 0 rather than a negative percentage.
pub fn compute_progress(balance: i64, goal: i64) -> u8 {
    if goal <= 0 {
        return 0;
    }
    let percent = (i128::from(balance) * 100).div_euclid(i128::from(goal));
    percent.clamp(0, 100) as u8
}

/// Total earnings and total spending
pub fn compute_earnings_and_spending(transactions: &[Transaction]) -> Totals {
    transactions.iter().fold(Totals::default(), |mut acc, t| {
        if t.is_gain() {
            acc.earnings = acc.earnings.saturating_add(t.amount);
        } else if t.is_spend() {
            acc.spending = acc.spending.saturating_add(t.magnitude());
        }
        acc
    })
}

/// Magnitudes grouped by source for one side of the ledger
///
/// Ordered by amount descending. Sources with equal totals keep the order in
/// which they first appear in `transactions`.
pub fn compute_source_breakdown(transactions: &[Transaction], flow: Flow) -> Vec<SourceTotal> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<SourceTotal> = Vec::new();

    for txn in transactions.iter().filter(|t| flow.includes(t)) {
        match index.get(txn.source.as_str()) {
            Some(&i) => totals[i].amount = totals[i].amount.saturating_add(txn.magnitude()),
            None => {
                index.insert(txn.source.as_str(), totals.len());
                totals.push(SourceTotal {
                    source: txn.source.clone(),
                    amount: txn.magnitude(),
                });
            }
        }
    }

    // sort_by is stable, which preserves first-seen order among ties
    totals.sort_by(|a, b| b.amount.cmp(&a.amount));
    totals
}

/// Gains for today, the trailing seven days, and the current month
///
/// Buckets compare calendar dates relative to `now`: `today` is `now`'s date,
/// `week` covers the seven dates ending on `now`'s date, and `month` is
/// `now`'s calendar month. Transactions dated after `now`'s date are not
/// counted in any bucket.
pub fn compute_dashboard_stats(transactions: &[Transaction], now: NaiveDateTime) -> DashboardStats {
    let today = now.date();
    let week_start = today - Duration::days(6);

    let mut stats = DashboardStats::default();
    for txn in transactions.iter().filter(|t| t.amount > 0) {
        let date = txn.date.date();
        if date > today {
            continue;
        }
        if date == today {
            stats.today = stats.today.saturating_add(txn.amount);
        }
        if date >= week_start {
            stats.week = stats.week.saturating_add(txn.amount);
        }
        if date.year() == today.year() && date.month() == today.month() {
            stats.month = stats.month.saturating_add(txn.amount);
        }
    }
    stats
}

/// Running balance after each transaction, in chronological order
pub fn compute_timeline(transactions: &[Transaction]) -> Vec<TimelinePoint> {
    let mut ordered: Vec<&Transaction> = transactions.iter().collect();
    ordered.sort_by(|a, b| a.date.cmp(&b.date));

    let mut balance = 0i64;
    ordered
        .into_iter()
        .map(|t| {
            balance = balance.saturating_add(t.amount);
            TimelinePoint {
                date: t.date,
                balance,
            }
        })
        .collect()
}

/// Distinct sources, sorted lexicographically
pub fn compute_unique_sources(transactions: &[Transaction]) -> Vec<String> {
    transactions
        .iter()
        .map(|t| t.source.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
