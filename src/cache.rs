use std::collections::HashMap;

use log::debug;

use crate::external_api::tags_api::models::tag_page::TagPage;
use crate::query::QueryState;

/// Fetched pages keyed by the `(filter, page)` they were requested for
#[derive(Debug, Default)]
pub struct TagCache {
    pages: HashMap<QueryState, TagPage>,
}

impl TagCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &QueryState) -> Option<&TagPage> {
        self.pages.get(key)
    }

    pub fn insert(&mut self, key: QueryState, page: TagPage) {
        self.pages.insert(key, page);
    }

    /// Drop every cached page
    pub fn clear(&mut self) {
        debug!("Invalidating {} cached page(s)", self.pages.len());
        self.pages.clear();
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
