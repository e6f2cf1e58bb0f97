use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("could not decode response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ClientError {
    pub fn invalid_base_url(message: impl Into<String>) -> Self {
        Self::InvalidBaseUrl(message.into())
    }
}
