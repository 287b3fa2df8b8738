//! Report formatting for the summary and analytics views

use super::{format_bar, format_coins, format_signed, progress_bar, separator, truncate};
use crate::analytics::{ProfileSnapshot, SourceTotal};
use crate::models::QuickAction;

const WIDTH: usize = 48;
const BAR_WIDTH: usize = 20;
const LABEL_WIDTH: usize = 20;

/// Balance, goal progress and recent earnings
pub fn format_summary(snapshot: &ProfileSnapshot) -> String {
    let mut output = String::new();

    output.push_str(&format!("Profile: {}\n", snapshot.profile));
    output.push_str(&separator(WIDTH));
    output.push('\n');

    output.push_str(&format!("Balance:   {:>12}\n", format_coins(snapshot.balance)));
    output.push_str(&format!("Goal:      {:>12}\n", format_coins(snapshot.goal)));
    output.push_str(&format!(
        "Progress:  {} {:>3}%\n",
        progress_bar(snapshot.progress, BAR_WIDTH),
        snapshot.progress
    ));
    if snapshot.goal_reached() {
        output.push_str("Goal reached!\n");
    } else if snapshot.goal > 0 {
        output.push_str(&format!("Remaining: {:>12}\n", format_coins(snapshot.remaining)));
    }

    output.push('\n');
    output.push_str("Earned\n");
    let stats = &snapshot.dashboard_stats;
    output.push_str(&format!("  Today:      {:>12}\n", format_coins(stats.today)));
    output.push_str(&format!("  This week:  {:>12}\n", format_coins(stats.week)));
    output.push_str(&format!("  This month: {:>12}\n", format_coins(stats.month)));

    output
}

/// Totals, per-source breakdowns and the balance timeline
///
/// `top` limits how many sources each breakdown lists.
pub fn format_analytics(snapshot: &ProfileSnapshot, top: Option<usize>) -> String {
    let analytics = &snapshot.analytics;
    let mut output = String::new();

    output.push_str(&format!("Analytics: {}\n", snapshot.profile));
    output.push_str(&separator(WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "Total earnings: {:>12}\n",
        format_coins(analytics.total_earnings)
    ));
    output.push_str(&format!(
        "Total spending: {:>12}\n",
        format_coins(analytics.total_spending)
    ));
    output.push_str(&format!(
        "Net balance:    {:>12}\n",
        format_coins(analytics.net_balance)
    ));

    output.push('\n');
    output.push_str("Earnings by source\n");
    output.push_str(&format_breakdown(&analytics.earnings_breakdown, top));

    output.push('\n');
    output.push_str("Spending by source\n");
    output.push_str(&format_breakdown(&analytics.spending_breakdown, top));

    output.push('\n');
    output.push_str("Balance over time\n");
    if analytics.timeline.is_empty() {
        output.push_str("  (no transactions)\n");
    } else {
        let peak = analytics
            .timeline
            .iter()
            .map(|p| p.balance)
            .max()
            .unwrap_or(0);
        for point in &analytics.timeline {
            output.push_str(&format!(
                "  {}  {} {:>10}\n",
                point.date.format("%Y-%m-%d"),
                format_bar(point.balance, peak, BAR_WIDTH),
                format_coins(point.balance)
            ));
        }
    }

    output
}

fn format_breakdown(totals: &[SourceTotal], top: Option<usize>) -> String {
    if totals.is_empty() {
        return "  (none)\n".to_string();
    }

    let max = totals.first().map(|s| s.amount).unwrap_or(0);
    let shown = top.unwrap_or(totals.len()).min(totals.len());

    let mut output = String::new();
    for total in &totals[..shown] {
        output.push_str(&format!(
            "  {:<width$} {} {:>10}\n",
            truncate(&total.source, LABEL_WIDTH),
            format_bar(total.amount, max, BAR_WIDTH),
            format_coins(total.amount),
            width = LABEL_WIDTH
        ));
    }
    if shown < totals.len() {
        output.push_str(&format!("  ... and {} more\n", totals.len() - shown));
    }
    output
}

/// Numbered list of quick actions
pub fn format_quick_actions(actions: &[QuickAction]) -> String {
    if actions.is_empty() {
        return "No quick actions.\n".to_string();
    }

    actions
        .iter()
        .enumerate()
        .map(|(i, a)| {
            format!(
                "{:>3}. {:<width$} {:>8}\n",
                i + 1,
                truncate(&a.text, LABEL_WIDTH),
                format_signed(a.signed_value()),
                width = LABEL_WIDTH
            )
        })
        .collect()
}

/// One source per line
pub fn format_sources(sources: &[String]) -> String {
    if sources.is_empty() {
        return "No sources yet.\n".to_string();
    }
    sources.iter().map(|s| format!("{}\n", s)).collect()
}

/// Profile names with the current one marked
pub fn format_profile_list(profiles: &[String], current: &str) -> String {
    profiles
        .iter()
        .map(|p| {
            let marker = if p == current { "*" } else { " " };
            format!("{} {}\n", marker, p)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProfileSettings, Transaction};
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, day)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn snapshot(goal: i64) -> ProfileSnapshot {
        let transactions = vec![
            Transaction::new(300, "chores", at(10)),
            Transaction::new(-100, "snacks", at(11)),
            Transaction::new(50, "ads", at(11)),
        ];
        let settings = ProfileSettings {
            goal,
            ..ProfileSettings::default()
        };
        ProfileSnapshot::build("Default", &transactions, &settings, at(11))
    }

    #[test]
    fn test_summary() {
        let summary = format_summary(&snapshot(1000));
        assert!(summary.contains("Profile: Default"));
        assert!(summary.contains("250"));
        assert!(summary.contains(" 25%"));
        assert!(summary.contains("Remaining:"));
        assert!(summary.contains("750"));
    }

    #[test]
    fn test_summary_goal_reached() {
        let summary = format_summary(&snapshot(100));
        assert!(summary.contains("100%"));
        assert!(summary.contains("Goal reached!"));
    }

    #[test]
    fn test_analytics_top_limits_breakdown() {
        let report = format_analytics(&snapshot(1000), Some(1));
        assert!(report.contains("chores"));
        assert!(report.contains("... and 1 more"));
        assert!(report.contains("snacks"));
        assert!(report.contains("Net balance:"));
    }

    #[test]
    fn test_quick_actions() {
        let list = format_quick_actions(&[QuickAction::new("Box Draw", 100, false)]);
        assert!(list.contains("1. Box Draw"));
        assert!(list.contains("-100"));
    }

    #[test]
    fn test_profile_list_marks_current() {
        let list = format_profile_list(&["Default".into(), "Kid".into()], "Kid");
        assert_eq!(list, "  Default\n* Kid\n");
    }
}
