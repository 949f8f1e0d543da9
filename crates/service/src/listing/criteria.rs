use serde::{Deserialize, Serialize};
use std::str::FromStr;

use models::reference::ALL_SENTINEL;

use crate::errors::ServiceError;

/// Ordering applied after filtering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Input order.
    #[default]
    Relevance,
    /// Highest rating first; unrated counts as zero.
    Rating,
    /// Most recent `createdAt` first; unparsable dates sort last.
    Newest,
}

impl SortBy {
    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::Relevance => "relevance",
            SortBy::Rating => "rating",
            SortBy::Newest => "newest",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortBy::Relevance => "Relevance",
            SortBy::Rating => "Highest Rated",
            SortBy::Newest => "Newest",
        }
    }
}

impl FromStr for SortBy {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "relevance" => Ok(SortBy::Relevance),
            "rating" => Ok(SortBy::Rating),
            "newest" => Ok(SortBy::Newest),
            other => Err(ServiceError::Validation(format!("unknown sort order '{other}'"))),
        }
    }
}

/// Search, filter and sort parameters. Every filter is optional; set filters are AND-ed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub sort: SortBy,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn sort(mut self, sort: SortBy) -> Self {
        self.sort = sort;
        self
    }

    /// Trimmed, lower-cased search needle; `None` when the search box is effectively empty.
    pub fn search_needle(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    pub fn location_filter(&self) -> Option<&str> {
        selection(self.location.as_deref())
    }

    pub fn category_filter(&self) -> Option<&str> {
        selection(self.category.as_deref())
    }

    /// Number of active filters (search, location, category). Sorting is not a filter.
    pub fn active_filter_count(&self) -> usize {
        [
            self.search_needle().is_some(),
            self.location_filter().is_some(),
            self.category_filter().is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }

    pub fn is_unfiltered(&self) -> bool {
        self.active_filter_count() == 0
    }

    /// Reset every filter and the sort order.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Empty and the reserved "all" value mean no restriction.
fn selection(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty() && *v != ALL_SENTINEL)
}
