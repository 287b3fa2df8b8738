//! Dashboard snapshot
//!
//! Bundles every derived figure for one profile so the summary and
//! analytics views, and their JSON output, read from a single value.

use chrono::NaiveDateTime;
use serde::Serialize;

use super::engine::{
    compute_balance, compute_dashboard_stats, compute_earnings_and_spending, compute_progress,
    compute_source_breakdown, compute_timeline, DashboardStats, Flow, SourceTotal, TimelinePoint,
};
use crate::models::{ProfileSettings, Transaction};

/// Totals, breakdowns and timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsSection {
    pub total_earnings: i64,
    pub total_spending: i64,
    pub net_balance: i64,
    pub earnings_breakdown: Vec<SourceTotal>,
    pub spending_breakdown: Vec<SourceTotal>,
    pub timeline: Vec<TimelinePoint>,
}

/// Every aggregate for one profile at one instant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileSnapshot {
    pub profile: String,
    pub transaction_count: usize,
    pub balance: i64,
    pub goal: i64,
    pub progress: u8,
    /// Coins still needed to reach the goal
    pub remaining: i64,
    pub dark_mode: bool,
    pub dashboard_stats: DashboardStats,
    pub analytics: AnalyticsSection,
}

impl ProfileSnapshot {
    /// Derive the snapshot from a profile's transactions and settings
    pub fn build(
        profile: &str,
        transactions: &[Transaction],
        settings: &ProfileSettings,
        now: NaiveDateTime,
    ) -> Self {
        let balance = compute_balance(transactions);
        let totals = compute_earnings_and_spending(transactions);

        Self {
            profile: profile.to_string(),
            transaction_count: transactions.len(),
            balance,
            goal: settings.goal,
            progress: compute_progress(balance, settings.goal),
            remaining: settings.goal.saturating_sub(balance).max(0),
            dark_mode: settings.dark_mode,
            dashboard_stats: compute_dashboard_stats(transactions, now),
            analytics: AnalyticsSection {
                total_earnings: totals.earnings,
                total_spending: totals.spending,
                net_balance: totals.net(),
                earnings_breakdown: compute_source_breakdown(transactions, Flow::Earnings),
                spending_breakdown: compute_source_breakdown(transactions, Flow::Spending),
                timeline: compute_timeline(transactions),
            },
        }
    }

    /// Whether the goal has been reached
    pub fn goal_reached(&self) -> bool {
        self.goal > 0 && self.balance >= self.goal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, day)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn settings(goal: i64) -> ProfileSettings {
        ProfileSettings {
            goal,
            ..ProfileSettings::default()
        }
    }

    #[test]
    fn test_snapshot_gain_and_spend() {
        let t = vec![
            Transaction::new(300, "chores", at(10)),
            Transaction::new(-100, "snacks", at(11)),
        ];
        let snap = ProfileSnapshot::build("Default", &t, &settings(1000), at(11));

        assert_eq!(snap.balance, 200);
        assert_eq!(snap.progress, 20);
        assert_eq!(snap.remaining, 800);
        assert_eq!(snap.analytics.total_earnings, 300);
        assert_eq!(snap.analytics.total_spending, 100);
        assert_eq!(snap.analytics.net_balance, 200);
        assert_eq!(snap.dashboard_stats.week, 300);
        assert_eq!(snap.analytics.timeline.len(), 2);
        assert!(!snap.goal_reached());
    }

    #[test]
    fn test_snapshot_empty() {
        let snap = ProfileSnapshot::build("Kid", &[], &settings(500), at(1));
        assert_eq!(snap.balance, 0);
        assert_eq!(snap.progress, 0);
        assert_eq!(snap.transaction_count, 0);
        assert!(snap.analytics.earnings_breakdown.is_empty());
        assert!(snap.analytics.timeline.is_empty());
    }

    #[test]
    fn test_snapshot_goal_reached() {
        let t = vec![Transaction::new(1000, "bonus", at(3))];
        let snap = ProfileSnapshot::build("Default", &t, &settings(500), at(3));
        assert_eq!(snap.progress, 100);
        assert_eq!(snap.remaining, 0);
        assert!(snap.goal_reached());
    }

    #[test]
    fn test_snapshot_json_shape() {
        let t = vec![Transaction::new(50, "Watch Ads", at(2))];
        let snap = ProfileSnapshot::build("Default", &t, &settings(100), at(2));
        let value = serde_json::to_value(&snap).unwrap();
        assert_eq!(value["progress"], 50);
        assert_eq!(value["dashboard_stats"]["today"], 50);
        assert_eq!(value["analytics"]["earnings_breakdown"][0]["source"], "Watch Ads");
        assert_eq!(value["analytics"]["timeline"][0]["date"], "2025-01-02T09:00:00");
    }

    #[test]
    fn test_snapshot_remaining_with_deep_debt() {
        let t = vec![Transaction::new(-i64::MAX, "Box Draw", at(2))];
        let snap = ProfileSnapshot::build("Default", &t, &settings(500), at(2));
        assert_eq!(snap.balance, -i64::MAX);
        assert_eq!(snap.remaining, i64::MAX);
        assert_eq!(snap.progress, 0);
    }
}
