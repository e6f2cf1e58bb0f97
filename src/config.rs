use crate::errors::ClientError;
use reqwest::Url;
use std::env;
use tracing::info;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
    pub assume_yes: bool,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            assume_yes: false,
        })
    }

    pub fn from_env() -> Result<Self, ClientError> {
        let base_url = env::var("CHAT_BASE_URL").unwrap_or_else(|_| {
            info!("CHAT_BASE_URL not set, using default: {DEFAULT_BASE_URL}");
            DEFAULT_BASE_URL.to_string()
        });
        let assume_yes = env::var("CHAT_ASSUME_YES")
            .map(|value| parse_flag(&value))
            .unwrap_or(false);

        Ok(Self {
            base_url: parse_base_url(&base_url)?,
            assume_yes,
        })
    }
}

pub fn parse_base_url(raw: &str) -> Result<Url, ClientError> {
    let url = Url::parse(raw.trim()).map_err(|err| ClientError::invalid_base_url(format!("{raw}: {err}")))?;
    if url.cannot_be_a_base() {
        return Err(ClientError::invalid_base_url(raw));
    }
    Ok(url)
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}
