//! Balance and analytics derivation
//!
//! Pure functions from a transaction list (plus goal and evaluation instant)
//! to the figures shown in every view. Nothing here touches storage or the
//! clock.

pub mod engine;
pub mod filter;
pub mod snapshot;

pub use engine::{
    compute_balance, compute_dashboard_stats, compute_earnings_and_spending, compute_progress,
    compute_source_breakdown, compute_timeline, compute_unique_sources, DashboardStats, Flow,
    SourceTotal, TimelinePoint, Totals,
};
pub use filter::{filter_transactions, SourceFilter, TransactionFilter};
pub use snapshot::{AnalyticsSection, ProfileSnapshot};
