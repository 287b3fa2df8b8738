//! Transaction filtering
//!
//! Filters are conjunctive: a transaction is kept only if it passes every
//! criterion that is set. Results preserve input order.

use chrono::NaiveDate;

use crate::models::Transaction;

/// Source criterion; `All` is the "All Sources" choice
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SourceFilter {
    #[default]
    All,
    Exact(String),
}

impl SourceFilter {
    fn matches(&self, source: &str) -> bool {
        match self {
            SourceFilter::All => true,
            SourceFilter::Exact(wanted) => wanted == source,
        }
    }
}

/// Options for filtering transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// First calendar date to include
    pub date_from: Option<NaiveDate>,
    /// Last calendar date to include
    pub date_to: Option<NaiveDate>,
    pub source: SourceFilter,
    /// Case-insensitive text matched against source and amount
    pub search: Option<String>,
}

impl TransactionFilter {
    /// Create a filter that keeps everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep transactions dated on or after `date`
    pub fn from(mut self, date: NaiveDate) -> Self {
        self.date_from = Some(date);
        self
    }

    /// Keep transactions dated on or before `date`
    pub fn to(mut self, date: NaiveDate) -> Self {
        self.date_to = Some(date);
        self
    }

    /// Keep only transactions with exactly this source
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = SourceFilter::Exact(source.into());
        self
    }

    /// Keep transactions whose source or amount contains `text`
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    /// Whether no criterion is set
    pub fn is_empty(&self) -> bool {
        self.date_from.is_none()
            && self.date_to.is_none()
            && self.source == SourceFilter::All
            && self.search.as_deref().map_or(true, str::is_empty)
    }

    /// Check a single transaction against every criterion
    pub fn matches(&self, txn: &Transaction) -> bool {
        let date = txn.date.date();
        if self.date_from.is_some_and(|from| date < from) {
            return false;
        }
        if self.date_to.is_some_and(|to| date > to) {
            return false;
        }
        if !self.source.matches(&txn.source) {
            return false;
        }
        match self.search.as_deref() {
            Some(text) if !text.is_empty() => {
                let needle = text.to_lowercase();
                txn.source.to_lowercase().contains(&needle)
                    || txn.amount.to_string().contains(&needle)
            }
            _ => true,
        }
    }
}

/// Keep the transactions that pass `filter`, in input order
pub fn filter_transactions<'a>(
    transactions: &'a [Transaction],
    filter: &TransactionFilter,
) -> Vec<&'a Transaction> {
    transactions.iter().filter(|t| filter.matches(t)).collect()
}
