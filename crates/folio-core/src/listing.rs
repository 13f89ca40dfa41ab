//! # Listing Filter
//!
//! Search and tag filtering for the projects and notes listings.
//!
//! Matching is a case-insensitive substring test over the title, the
//! description, the stack items and the tags. Results keep the input order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// =============================================================================
// LISTING ENTRY
// =============================================================================

/// One project or note as shown in a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingEntry {
    /// URL slug.
    pub slug: String,
    /// Display title.
    pub title: String,
    /// Short description.
    pub description: String,
    /// Technologies used.
    #[serde(default)]
    pub stack: Vec<String>,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ListingEntry {
    /// Create an entry with no stack or tags.
    pub fn new(
        slug: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            description: description.into(),
            stack: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Set the stack.
    #[must_use]
    pub fn with_stack<I, S>(mut self, stack: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stack = stack.into_iter().map(Into::into).collect();
        self
    }

    /// Set the tags.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    fn contains_text(&self, needle: &str) -> bool {
        let hit = |field: &str| field.to_lowercase().contains(needle);
        hit(&self.title)
            || hit(&self.description)
            || self.stack.iter().any(|s| hit(s))
            || self.tags.iter().any(|t| hit(t))
    }
}

// =============================================================================
// FILTER
// =============================================================================

/// The listing's search box and selected tag chip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingFilter {
    /// Free-text query.
    #[serde(default)]
    pub query: String,
    /// Selected tag, if any.
    #[serde(default)]
    pub tag: Option<String>,
}

impl ListingFilter {
    /// Filter by free text only.
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            tag: None,
        }
    }

    /// Also require `tag`.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Whether the filter lets everything through.
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty() && self.tag.as_deref().is_none_or(|t| t.trim().is_empty())
    }

    /// Whether `entry` passes the filter.
    pub fn matches(&self, entry: &ListingEntry) -> bool {
        if let Some(tag) = self.tag.as_deref().map(str::trim)
            && !tag.is_empty()
            && !entry.has_tag(tag)
        {
            return false;
        }

        let needle = self.query.trim().to_lowercase();
        needle.is_empty() || entry.contains_text(&needle)
    }

    /// Entries passing the filter, in input order.
    pub fn apply<'a>(&self, entries: &'a [ListingEntry]) -> Vec<&'a ListingEntry> {
        entries.iter().filter(|e| self.matches(e)).collect()
    }
}

/// Every tag used across `entries`, lowercased, deduplicated and sorted.
pub fn all_tags(entries: &[ListingEntry]) -> Vec<String> {
    entries
        .iter()
        .flat_map(|e| e.tags.iter())
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
