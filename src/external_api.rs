pub mod tags_api;

use log::debug;
use reqwest::{header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE}, Client, StatusCode, Url};
use thiserror::Error;

const APPLICATION_JSON: &str = "application/json";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("Api error {0}: {1}")]
    Api(StatusCode, String),
    #[error("Deserialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to retrieve the user's directories")]
    NotFoundUserDir,
    #[error("The string entered must be a URL")]
    InvalidUrl,
    #[error("Couldn't create a config")]
    CantCreateConfig,
    #[error("Title must be at least {0} characters long")]
    TitleTooShort(usize),
    #[error("The page number must be greater than zero")]
    PageMoreThenZero,
    #[error("The page size must be greater than zero")]
    PerPageMoreThenZero,
    #[error("Tag creation cancelled by user")]
    CreateCancelledByUser,
}

/// Basic api client
pub struct BaseApiClient {
    client: Client,
    pub base_url: Url,
}

impl BaseApiClient {

    /// Endpoints resolve under the base path, so `/api` + `/tags` is `/api/tags`
    fn build_url(&self, endpoint: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(endpoint.trim_start_matches('/'))
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    fn get_default_headers() -> HeaderMap {
        let mut headers = HeaderMap::with_capacity(2);
        headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
        headers
    }

    async fn check_status(response: reqwest::Response) -> Result<String, ApiError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::Api(status, body));
        }
        Ok(body)
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response
    ) -> Result<T, ApiError> {
        let body = Self::check_status(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, ApiError> {
        let client = Client::builder()
            .default_headers(Self::get_default_headers())
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()?;

        let mut parse_base_url = Url::parse(base_url)
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        if !parse_base_url.path().ends_with('/') {
            let path = format!("{}/", parse_base_url.path());
            parse_base_url.set_path(&path);
        }

        Ok(
            Self {
                client,
                base_url: parse_base_url,
        })
    }

    pub async fn get<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.build_url(endpoint)?;
        debug!("GET {} {:?}", url, query);
        let response = self.client.get(url).query(query).send().await?;
        Self::handle_response(response).await
    }

    /// POST a JSON body; the response body is not used
    pub async fn post<B: serde::Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let url = self.build_url(endpoint)?;
        debug!("POST {}", url);
        let response = self.client.post(url).json(body).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }
}
