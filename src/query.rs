use reqwest::Url;
use serde::{Deserialize, Serialize};

const PAGE_PARAM: &str = "page";
const FILTER_PARAM: &str = "filter";

/// Committed view state of the tag list: the `(filter, page)` pair
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryState {
    pub filter: String,
    pub page: u32,
}

impl Default for QueryState {
    fn default() -> Self {
        Self { filter: String::new(), page: 1 }
    }
}

impl QueryState {
    pub fn new(filter: &str, page: u32) -> Self {
        Self { filter: filter.to_string(), page: page.max(1) }
    }

    /// Read `page` and `filter` from the address query.
    ///
    /// Missing, unparsable or zero `page` falls back to 1.
    pub fn from_url(url: &Url) -> Self {
        let mut state = Self::default();
        for (key, value) in url.query_pairs() {
            match &*key {
                PAGE_PARAM => state.page = value.parse::<u32>().ok().filter(|p| *p > 0).unwrap_or(1),
                FILTER_PARAM => state.filter = value.into_owned(),
                _ => {}
            }
        }
        state
    }

    /// Write `page` and `filter` into the address, keeping unrelated parameters
    pub fn apply_to_url(&self, url: &mut Url) {
        let others: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(key, _)| key != PAGE_PARAM && key != FILTER_PARAM)
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        pairs.extend_pairs(others);
        pairs.append_pair(PAGE_PARAM, &self.page.to_string());
        pairs.append_pair(FILTER_PARAM, &self.filter);
    }

    /// Same filter, another page
    pub fn with_page(&self, page: u32) -> Self {
        Self::new(&self.filter, page)
    }
}

/// Owner of the committed [`QueryState`]
pub trait Navigator {
    fn current(&self) -> QueryState;
    fn navigate(&mut self, state: QueryState);
}

/// Keeps the state in an address's query string, so the view is shareable as a link
#[derive(Debug, Clone)]
pub struct UrlNavigator {
    url: Url,
}

impl UrlNavigator {
    pub fn new(url: Url) -> Self {
        Self { url }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl Navigator for UrlNavigator {
    fn current(&self) -> QueryState {
        QueryState::from_url(&self.url)
    }

    fn navigate(&mut self, state: QueryState) {
        state.apply_to_url(&mut self.url);
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryNavigator {
    state: QueryState,
}

impl MemoryNavigator {
    pub fn new(state: QueryState) -> Self {
        Self { state }
    }
}

impl Navigator for MemoryNavigator {
    fn current(&self) -> QueryState {
        self.state.clone()
    }

    fn navigate(&mut self, state: QueryState) {
        self.state = state;
    }
}
