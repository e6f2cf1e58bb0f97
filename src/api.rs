use crate::config::ClientConfig;
use crate::errors::ClientError;
use crate::models::{ActionStatus, AnalyticsPayload, SearchResponse};
use reqwest::{Client, Url};
use tracing::{debug, error};

#[derive(Debug, Clone)]
pub struct ChatApi {
    http: Client,
    base_url: Url,
}

impl ChatApi {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = Client::builder()
            .user_agent(concat!("chat_client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Transport)?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    pub async fn post_action(&self, segments: &[&str]) -> Result<ActionStatus, ClientError> {
        let url = self.endpoint(segments)?;
        debug!("POST {url}");
        let response = self.http.post(url.clone()).send().await.map_err(|err| {
            error!("POST {url} failed: {err}");
            ClientError::Transport(err)
        })?;
        Ok(ActionStatus::from_status(response.status()))
    }

    // Decoded whatever the status: misses come back as 404 with a `message`.
    pub async fn search_user(&self, username: &str) -> Result<SearchResponse, ClientError> {
        let url = self.search_url(username)?;
        debug!("GET {url}");

        let response = self.http.get(url).send().await.map_err(ClientError::Transport)?;
        response.json().await.map_err(ClientError::Decode)
    }

    pub async fn fetch_analytics(&self) -> Result<AnalyticsPayload, ClientError> {
        let url = self.endpoint(&["api", "analytics"])?;
        debug!("GET {url}");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(ClientError::Transport)?;
        response.json().await.map_err(ClientError::Decode)
    }

    // Spaces go out as %20, the way encodeURIComponent sends them; a literal
    // '+' is already %2B by then.
    fn search_url(&self, username: &str) -> Result<Url, ClientError> {
        let mut url = self.endpoint(&["search_user"])?;
        url.query_pairs_mut().append_pair("username", username);
        let query = url.query().map(|query| query.replace('+', "%20"));
        url.set_query(query.as_deref());
        Ok(url)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.path_segments_mut()
            .map_err(|_| ClientError::invalid_base_url(self.base_url.as_str()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}
