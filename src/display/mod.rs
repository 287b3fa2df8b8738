//! Display formatting for terminal output
//!
//! Provides utilities for formatting coins, bars and tables for the
//! terminal. Nothing here prints; callers decide where output goes.

pub mod report;
pub mod transaction;

pub use report::{
    format_analytics, format_profile_list, format_quick_actions, format_sources, format_summary,
};
pub use transaction::{format_transaction_details, format_transaction_table};

/// Format a coin amount with thousands separators
pub fn format_coins(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if amount < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Format a coin amount with an explicit sign
pub fn format_signed(amount: i64) -> String {
    if amount > 0 {
        format!("+{}", format_coins(amount))
    } else {
        format_coins(amount)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: i64, max_value: i64, width: usize) -> String {
    if max_value <= 0 || value <= 0 {
        return "░".repeat(width);
    }

    let filled = ((value as f64 / max_value as f64) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for a percentage in `0..=100`
pub fn progress_bar(percent: u8, width: usize) -> String {
    format_bar(i64::from(percent.min(100)), 100, width)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
