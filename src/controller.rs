use log::{debug, info, warn};

use crate::cache::TagCache;
use crate::external_api::tags_api::models::tag_page::TagPage;
use crate::external_api::tags_api::TagsApi;
use crate::external_api::ApiError;
use crate::query::{Navigator, QueryState};
use crate::tag_form::TagForm;

/// Keeps the displayed tag page consistent with the committed `(filter, page)`.
///
/// The previously loaded page stays displayed until data for the new state
/// arrives, and also when a fetch fails.
pub struct ListController<'a, N: Navigator> {
    api: &'a TagsApi,
    navigator: N,
    cache: TagCache,
    draft_filter: String,
    displayed: Option<(QueryState, TagPage)>,
}

impl<'a, N: Navigator> ListController<'a, N> {
    pub fn new(api: &'a TagsApi, navigator: N) -> Self {
        let draft_filter = navigator.current().filter;
        Self { api, navigator, cache: TagCache::new(), draft_filter, displayed: None }
    }

    pub fn state(&self) -> QueryState {
        self.navigator.current()
    }

    /// The api handle outlives the controller borrow, so a fetch can run while navigating
    pub fn api(&self) -> &'a TagsApi {
        self.api
    }

    /// The committed state when it still has to be fetched
    pub fn pending_request(&self) -> Option<QueryState> {
        let key = self.state();
        match self.cache.get(&key) {
            Some(_) => None,
            None => Some(key),
        }
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn draft_filter(&self) -> &str {
        &self.draft_filter
    }

    pub fn set_draft_filter(&mut self, text: &str) {
        self.draft_filter = text.to_string();
    }

    /// Commit the draft filter; a new filter always starts at page 1
    pub fn commit_filter(&mut self) {
        self.navigator.navigate(QueryState::new(&self.draft_filter, 1));
    }

    pub fn go_to_page(&mut self, page: u32) -> Result<(), ApiError> {
        if page == 0 {
            return Err(ApiError::PageMoreThenZero);
        }
        let state = self.state().with_page(page);
        self.navigator.navigate(state);
        Ok(())
    }

    /// Page count of the displayed page, at least 1
    pub fn page_count(&self) -> u32 {
        self.displayed().map_or(1, |page| page.page_count.max(1))
    }

    /// Returns false when already on the last page
    pub fn next_page(&mut self) -> bool {
        let page = self.state().page;
        if page >= self.page_count() {
            return false;
        }
        let state = self.state().with_page(page + 1);
        self.navigator.navigate(state);
        true
    }

    /// Returns false when already on the first page
    pub fn previous_page(&mut self) -> bool {
        let page = self.state().page;
        if page <= 1 {
            return false;
        }
        let state = self.state().with_page(page - 1);
        self.navigator.navigate(state);
        true
    }

    pub fn first_page(&mut self) {
        let state = self.state().with_page(1);
        self.navigator.navigate(state);
    }

    pub fn last_page(&mut self) {
        let state = self.state().with_page(self.page_count());
        self.navigator.navigate(state);
    }

    pub fn displayed(&self) -> Option<&TagPage> {
        self.displayed.as_ref().map(|(_, page)| page)
    }

    /// The displayed page belongs to a state other than the committed one
    pub fn is_stale(&self) -> bool {
        match &self.displayed {
            Some((key, _)) => *key != self.state(),
            None => false,
        }
    }

    /// Serve the committed state from cache, or fetch it once
    pub async fn sync(&mut self) -> Result<(), ApiError> {
        let key = self.state();
        if let Some(page) = self.cache.get(&key) {
            debug!("Cache hit for {:?}", key);
            self.displayed = Some((key, page.clone()));
            return Ok(());
        }
        debug!("Cache miss for {:?}", key);
        let (key, page) = fetch(self.api, key).await?;
        self.resolve(key, page);
        Ok(())
    }

    /// Store a fetched page. It is displayed only if `key` is still the committed state.
    pub fn resolve(&mut self, key: QueryState, page: TagPage) {
        self.cache.insert(key.clone(), page.clone());
        if key == self.state() {
            self.displayed = Some((key, page));
        } else {
            debug!("Not displaying superseded response for {:?}", key);
        }
    }

    /// Submit the form, then refetch so the new tag shows up.
    /// The tag exists once the POST succeeds; a failed refetch keeps the previous page.
    pub async fn create_tag(&mut self, form: &TagForm) -> Result<(), ApiError> {
        let request = form.to_request()?;
        self.api.create_tag(&request).await?;
        info!("Created tag '{}' ({})", request.title, request.slug);
        self.cache.clear();
        if let Err(e) = self.sync().await {
            warn!("Tag '{}' created, but refreshing the list failed: {}", request.title, e);
        }
        Ok(())
    }
}

/// Fetch the page for `key`. Only the api is borrowed; pass the result to
/// [`ListController::resolve`] once it arrives.
pub async fn fetch(api: &TagsApi, key: QueryState) -> Result<(QueryState, TagPage), ApiError> {
    let page = api.get_tags(&key).await?;
    Ok((key, page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external_api::tags_api::models::tag::Tag;
    use crate::query::{MemoryNavigator, UrlNavigator};
    use mockito::{Matcher, Server};
    use reqwest::Url;

    fn page_of(titles: &[&str], page: u32, page_count: u32) -> TagPage {
        TagPage {
            data: titles
                .iter()
                .enumerate()
                .map(|(i, title)| Tag::new(&format!("id-{i}"), title, 0))
                .collect(),
            page,
            page_count,
            total_items: titles.len() as u64,
        }
    }

    fn titles(page: Option<&TagPage>) -> Vec<String> {
        page.map(|p| p.data.iter().map(|t| t.title.clone()).collect()).unwrap_or_default()
    }

    #[tokio::test]
    async fn test_sync_fetches_once_per_state() {
        let mut server = Server::new_async().await;
        let state = QueryState::default();
        let mock = TagsApi::mock_get_tags(&mut server, &state, &page_of(&["Rust"], 1, 1), 1).await;
        let api = TagsApi::mock(&server.url());
        let mut controller = ListController::new(&api, MemoryNavigator::default());

        controller.sync().await.unwrap();
        controller.sync().await.unwrap();

        assert_eq!(titles(controller.displayed()), vec!["Rust"]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_commit_filter_resets_page() {
        let server = Server::new_async().await;
        let api = TagsApi::mock(&server.url());
        let mut controller =
            ListController::new(&api, MemoryNavigator::new(QueryState::new("old", 4)));
        assert_eq!(controller.draft_filter(), "old");

        controller.set_draft_filter("rust");
        assert_eq!(controller.state(), QueryState::new("old", 4));

        controller.commit_filter();
        assert_eq!(controller.state(), QueryState::new("rust", 1));
    }

    #[tokio::test]
    async fn test_previous_page_visible_while_pending() {
        let mut server = Server::new_async().await;
        let first = QueryState::default();
        let go = QueryState::new("go", 1);
        let _first = TagsApi::mock_get_tags(&mut server, &first, &page_of(&["Rust", "Go"], 1, 1), 1).await;
        let _go = TagsApi::mock_get_tags(&mut server, &go, &page_of(&["Go"], 1, 1), 1).await;
        let api = TagsApi::mock(&server.url());
        let mut controller = ListController::new(&api, MemoryNavigator::default());
        controller.sync().await.unwrap();

        controller.set_draft_filter("go");
        controller.commit_filter();
        let in_flight = fetch(controller.api(), controller.pending_request().unwrap());

        assert!(controller.is_stale());
        assert_eq!(titles(controller.displayed()), vec!["Rust", "Go"]);

        let (key, page) = in_flight.await.unwrap();
        controller.resolve(key, page);
        assert!(!controller.is_stale());
        assert_eq!(titles(controller.displayed()), vec!["Go"]);
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_previous_page() {
        let mut server = Server::new_async().await;
        let _ok = TagsApi::mock_get_tags(&mut server, &QueryState::default(), &page_of(&["Rust"], 1, 2), 1).await;
        let _failure = server
            .mock("GET", "/tags")
            .match_query(Matcher::UrlEncoded("_page".into(), "2".into()))
            .with_status(500)
            .create_async()
            .await;
        let api = TagsApi::mock(&server.url());
        let mut controller = ListController::new(&api, MemoryNavigator::default());
        controller.sync().await.unwrap();

        assert!(controller.next_page());
        let result = controller.sync().await;

        assert!(matches!(result, Err(ApiError::Api(_, _))));
        assert_eq!(titles(controller.displayed()), vec!["Rust"]);
        assert!(controller.is_stale());
    }

    #[tokio::test]
    async fn test_superseded_response_is_cached_not_displayed() {
        let mut server = Server::new_async().await;
        let old = QueryState::new("old", 1);
        let new = QueryState::new("new", 1);
        let old_mock = TagsApi::mock_get_tags(&mut server, &old, &page_of(&["Old"], 1, 1), 1).await;
        let new_mock = TagsApi::mock_get_tags(&mut server, &new, &page_of(&["New"], 1, 1), 1).await;
        let api = TagsApi::mock(&server.url());
        let mut controller = ListController::new(&api, MemoryNavigator::new(old.clone()));

        let in_flight = fetch(controller.api(), controller.pending_request().unwrap());
        let (fetched, synced) = tokio::join!(in_flight, async {
            controller.set_draft_filter("new");
            controller.commit_filter();
            controller.sync().await
        });
        synced.unwrap();
        let (key, page) = fetched.unwrap();
        assert_eq!(key, old);

        controller.resolve(key, page);
        assert_eq!(controller.state(), new);
        assert_eq!(titles(controller.displayed()), vec!["New"]);
        assert!(!controller.is_stale());

        controller.set_draft_filter("old");
        controller.commit_filter();
        assert_eq!(controller.pending_request(), None);
        controller.sync().await.unwrap();
        assert_eq!(titles(controller.displayed()), vec!["Old"]);
        old_mock.assert_async().await;
        new_mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_tag_refetches_active_filter() {
        let mut server = Server::new_async().await;
        let state = QueryState::new("ru", 1);
        let before = TagsApi::mock_get_tags(&mut server, &state, &page_of(&["Rust"], 1, 1), 1).await;
        let api = TagsApi::mock(&server.url());
        let mut controller = ListController::new(&api, MemoryNavigator::new(state.clone()));
        controller.sync().await.unwrap();
        before.assert_async().await;
        before.remove_async().await;

        let form = TagForm::new("Ruby on Rails");
        let create = TagsApi::mock_create_tag(&mut server, &form.to_request().unwrap()).await;
        let after =
            TagsApi::mock_get_tags(&mut server, &state, &page_of(&["Rust", "Ruby on Rails"], 1, 1), 1).await;

        controller.create_tag(&form).await.unwrap();

        create.assert_async().await;
        after.assert_async().await;
        assert_eq!(titles(controller.displayed()), vec!["Rust", "Ruby on Rails"]);
    }

    #[tokio::test]
    async fn test_create_tag_succeeds_when_refresh_fails() {
        let mut server = Server::new_async().await;
        let state = QueryState::default();
        let before = TagsApi::mock_get_tags(&mut server, &state, &page_of(&["Rust"], 1, 1), 1).await;
        let api = TagsApi::mock(&server.url());
        let mut controller = ListController::new(&api, MemoryNavigator::default());
        controller.sync().await.unwrap();
        before.assert_async().await;
        before.remove_async().await;

        let form = TagForm::new("Ruby");
        let create = TagsApi::mock_create_tag(&mut server, &form.to_request().unwrap()).await;
        let refresh = server
            .mock("GET", "/tags")
            .match_query(Matcher::Any)
            .with_status(500)
            .expect(1)
            .create_async()
            .await;

        let result = controller.create_tag(&form).await;

        assert!(result.is_ok());
        create.assert_async().await;
        refresh.assert_async().await;
        assert_eq!(titles(controller.displayed()), vec!["Rust"]);
    }

    #[tokio::test]
    async fn test_short_title_never_posts() {
        let mut server = Server::new_async().await;
        let create = server.mock("POST", "/tags").expect(0).create_async().await;
        let api = TagsApi::mock(&server.url());
        let mut controller = ListController::new(&api, MemoryNavigator::default());

        let result = controller.create_tag(&TagForm::new("ab")).await;

        assert!(matches!(result, Err(ApiError::TitleTooShort(3))));
        create.assert_async().await;
    }

    #[tokio::test]
    async fn test_pagination_bounds() {
        let server = Server::new_async().await;
        let api = TagsApi::mock(&server.url());
        let mut controller = ListController::new(&api, MemoryNavigator::default());
        controller.resolve(QueryState::default(), page_of(&["Rust"], 1, 3));

        assert!(!controller.previous_page());
        assert!(controller.next_page());
        assert_eq!(controller.state().page, 2);

        controller.last_page();
        assert_eq!(controller.state().page, 3);
        assert!(!controller.next_page());

        controller.first_page();
        assert_eq!(controller.state().page, 1);

        assert!(matches!(controller.go_to_page(0), Err(ApiError::PageMoreThenZero)));
        controller.go_to_page(9).unwrap();
        assert_eq!(controller.state().page, 9);
    }

    #[tokio::test]
    async fn test_url_navigator_holds_state() {
        let server = Server::new_async().await;
        let api = TagsApi::mock(&server.url());
        let url = Url::parse("http://localhost:3333/?filter=go&page=2").unwrap();
        let mut controller = ListController::new(&api, UrlNavigator::new(url));
        assert_eq!(controller.draft_filter(), "go");

        controller.set_draft_filter("rust lang");
        controller.commit_filter();

        assert_eq!(
            controller.navigator().url().as_str(),
            "http://localhost:3333/?page=1&filter=rust+lang"
        );
    }
}
