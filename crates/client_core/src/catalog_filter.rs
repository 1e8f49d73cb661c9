use std::sync::Arc;

use shared::domain::{CatalogEntry, CategoryFilter, EntryId};
use tracing::debug;

fn passes(entry: &CatalogEntry, needle_lower: &str, category: &CategoryFilter) -> bool {
    category.matches(&entry.category) && entry.matches_search(needle_lower)
}

/// Entries in catalog order whose category passes `category` and whose name or
/// secondary label contains `search`, ignoring case.
pub fn filter_entries<'a>(
    entries: &'a [CatalogEntry],
    search: &str,
    category: &CategoryFilter,
) -> Vec<&'a CatalogEntry> {
    let needle = search.to_lowercase();
    entries
        .iter()
        .filter(|entry| passes(entry, &needle, category))
        .collect()
}

/// `results()` is `None` until the first filter pass.
#[derive(Debug, Clone)]
pub struct CatalogView {
    entries: Arc<[CatalogEntry]>,
    search: String,
    category: CategoryFilter,
    matches: Option<Vec<usize>>,
}

impl CatalogView {
    pub fn new(entries: impl Into<Arc<[CatalogEntry]>>) -> Self {
        Self {
            entries: entries.into(),
            search: String::new(),
            category: CategoryFilter::All,
            matches: None,
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn set_search(&mut self, text: impl Into<String>) -> Vec<EntryId> {
        self.search = text.into();
        self.refresh()
    }

    pub fn set_category(&mut self, category: CategoryFilter) -> Vec<EntryId> {
        self.category = category;
        self.refresh()
    }

    pub fn refresh(&mut self) -> Vec<EntryId> {
        let needle = self.search.to_lowercase();
        let positions: Vec<usize> = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| passes(entry, &needle, &self.category))
            .map(|(position, _)| position)
            .collect();
        debug!(
            search = %self.search,
            category = self.category.label(),
            matches = positions.len(),
            "catalog filter applied"
        );
        self.matches = Some(positions);
        self.results().unwrap_or_default()
    }

    pub fn results(&self) -> Option<Vec<EntryId>> {
        self.visible()
            .map(|entries| entries.iter().map(|entry| entry.id).collect())
    }

    pub fn has_no_matches(&self) -> bool {
        self.matches.as_ref().is_some_and(Vec::is_empty)
    }

    pub fn visible(&self) -> Option<Vec<&CatalogEntry>> {
        let positions = self.matches.as_ref()?;
        Some(
            positions
                .iter()
                .filter_map(|&position| self.entries.get(position))
                .collect(),
        )
    }
}

#[cfg(test)]
#[path = "tests/catalog_filter_tests.rs"]
mod tests;
