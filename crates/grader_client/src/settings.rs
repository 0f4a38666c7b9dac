use std::time::Duration;

/// Endpoints and limits for the backend and scoring collaborators.
///
/// The base URLs default to empty and are expected to be supplied by the
/// shell's configuration; the scoring base URL is the service's fixed
/// regional endpoint.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Base URL of the evaluation API (also hosts document and URL extraction).
    pub api_base: String,
    /// Base URL of the tweet-generation API.
    pub tweet_api_base: String,
    /// Base URL of the third-party scoring service.
    pub score_base: String,
    /// Public key identifying this client to the scoring service.
    pub score_public_key: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            tweet_api_base: String::new(),
            score_base: "https://us.cloud.langfuse.com".to_string(),
            score_public_key: String::new(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(60),
        }
    }
}
