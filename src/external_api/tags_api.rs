pub mod models;

use super::{ApiError, BaseApiClient};
use crate::config::Config;
use crate::query::QueryState;
use models::create_tag_request::CreateTagRequest;
use models::tag_page::{TagPage, TagPageResponse};

const TAGS_ENDPOINT: &str = "/tags";

pub struct TagsApi {
    pub client: BaseApiClient,
    per_page: u32,
}

impl TagsApi {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        if config.per_page == 0 {
            return Err(ApiError::PerPageMoreThenZero);
        }
        let base_api_client = BaseApiClient::new(&config.base_url, config.request_timeout_secs)?;
        Ok(Self { client: base_api_client, per_page: config.per_page })
    }

    #[cfg(test)]
    pub fn mock(url: &str) -> Self {
        let base_api_client = BaseApiClient::new(url, 10).unwrap();
        Self { client: base_api_client, per_page: 10 }
    }

    #[cfg(test)]
    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Fetch one page of tags whose title contains the committed filter
    pub async fn get_tags(&self, state: &QueryState) -> Result<TagPage, ApiError> {
        let query = [
            ("_page", state.page.to_string()),
            ("per_page", self.per_page.to_string()),
            ("title", state.filter.clone()),
        ];
        let response = self.client.get::<TagPageResponse>(TAGS_ENDPOINT, &query).await?;
        Ok(response.into_page(state.page))
    }

    pub async fn create_tag(&self, request: &CreateTagRequest) -> Result<(), ApiError> {
        self.client.post(TAGS_ENDPOINT, request).await
    }

    #[cfg(test)]
    pub async fn mock_get_tags(
        server: &mut mockito::ServerGuard,
        state: &QueryState,
        page: &TagPage,
        expected_hits: usize,
    ) -> mockito::Mock {
        use mockito::Matcher;
        server
            .mock("GET", TAGS_ENDPOINT)
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("_page".into(), state.page.to_string()),
                Matcher::UrlEncoded("per_page".into(), "10".into()),
                Matcher::UrlEncoded("title".into(), state.filter.clone()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(page).unwrap())
            .expect(expected_hits)
            .create_async()
            .await
    }

    #[cfg(test)]
    pub async fn mock_create_tag(
        server: &mut mockito::ServerGuard,
        request: &CreateTagRequest,
    ) -> mockito::Mock {
        server
            .mock("POST", TAGS_ENDPOINT)
            .match_body(mockito::Matcher::Json(serde_json::to_value(request).unwrap()))
            .with_status(201)
            .with_body("{}")
            .create_async()
            .await
    }
}
