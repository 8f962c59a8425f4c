//! Filter engine
//!
//! Category and date-range criteria over the event collection. The filtered
//! view is recomputed after every mutation and every criteria change; it is
//! derived state and never a second source of truth.

use std::fmt;

use chrono::NaiveDate;
use tracing::debug;

use crate::models::Event;
use crate::storage::StorageBackend;

use super::EventStore;

/// Categories with dedicated filter controls; everything else is aggregated
/// under the "other" filter.
pub const PRIMARY_CATEGORIES: [&str; 4] = ["running", "soccer", "cycling", "volleyball"];

/// Category filter criteria
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No category filtering
    #[default]
    All,
    /// Every category outside the primary set
    OtherAll,
    /// One specific category, matched case-insensitively
    Category(String),
}

impl CategoryFilter {
    /// Parse the sentinel values used by the filter controls
    pub fn parse(value: &str) -> Self {
        match value {
            "all" => CategoryFilter::All,
            "other-all" => CategoryFilter::OtherAll,
            other => CategoryFilter::Category(other.to_string()),
        }
    }

    fn matches(&self, event: &Event) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::OtherAll => {
                !PRIMARY_CATEGORIES.contains(&event.category_key().as_str())
            }
            CategoryFilter::Category(category) => event.category_key() == category.to_lowercase(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "all"),
            CategoryFilter::OtherAll => write!(f, "other-all"),
            CategoryFilter::Category(category) => write!(f, "{}", category),
        }
    }
}

/// Current filter criteria
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    pub category: CategoryFilter,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl FilterState {
    /// Whether an event passes both the category and the date predicate
    pub fn matches(&self, event: &Event) -> bool {
        self.category.matches(event) && self.matches_date(event.date)
    }

    fn matches_date(&self, date: NaiveDate) -> bool {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => date >= start && date <= end,
            (Some(start), None) => date >= start,
            (None, Some(end)) => date <= end,
            (None, None) => true,
        }
    }
}

impl<S: StorageBackend> EventStore<S> {
    /// Recompute the filtered view from the current collection and criteria
    pub(super) fn apply_filters(&mut self) {
        let filters = &self.filters;
        let filtered: Vec<i64> = self
            .events
            .iter()
            .filter(|e| filters.matches(e))
            .map(|e| e.id)
            .collect();
        debug!(
            total = self.events.len(),
            filtered = filtered.len(),
            "Filters applied"
        );
        self.filtered = filtered;
    }

    /// Events passing the current filters, in collection order
    pub fn filtered_events(&self) -> Vec<&Event> {
        self.filtered
            .iter()
            .filter_map(|id| self.lookup(*id))
            .collect()
    }

    /// Set the category filter and recompute the view
    pub fn set_category(&mut self, category: CategoryFilter) {
        debug!(category = %category, "Category filter set");
        self.filters.category = category;
        self.apply_filters();
    }

    /// Set inclusive date bounds and recompute the view
    pub fn set_date_range(&mut self, start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) {
        self.filters.start_date = start_date;
        self.filters.end_date = end_date;
        self.apply_filters();
    }

    /// Clear both date bounds and recompute the view
    pub fn reset_date_range(&mut self) {
        self.filters.start_date = None;
        self.filters.end_date = None;
        self.apply_filters();
    }

    /// The active category filter
    pub fn current_category(&self) -> &CategoryFilter {
        &self.filters.category
    }

    /// The active date bounds
    pub fn date_filter(&self) -> (Option<NaiveDate>, Option<NaiveDate>) {
        (self.filters.start_date, self.filters.end_date)
    }

    /// Whether any date bound is active
    pub fn is_date_filter_active(&self) -> bool {
        self.filters.start_date.is_some() || self.filters.end_date.is_some()
    }
}
