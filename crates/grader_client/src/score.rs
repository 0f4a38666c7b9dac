use serde::Serialize;

use crate::{ApiError, ClientSettings, FailureKind, FeedbackScore};

/// Score label under which user judgments are recorded.
pub const SCORE_NAME: &str = "user_feedback";

#[derive(Debug, Serialize)]
struct ScoreRequest<'a> {
    #[serde(rename = "traceId")]
    trace_id: &'a str,
    name: &'a str,
    value: u8,
}

/// Client for the third-party scoring service. Talks to the service's public
/// ingestion surface directly, authenticated by the public key alone; the
/// application backend is not involved.
#[derive(Debug, Clone)]
pub struct ScoreClient {
    http: reqwest::Client,
    base_url: String,
    public_key: String,
}

impl ScoreClient {
    pub fn new(settings: &ClientSettings) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self {
            http,
            base_url: settings.score_base.clone(),
            public_key: settings.score_public_key.clone(),
        })
    }

    /// Records one judgment against a trace. No retry; the caller decides
    /// whether a failure is worth more than a log line.
    pub async fn record(&self, trace_id: &str, score: FeedbackScore) -> Result<(), ApiError> {
        let body = ScoreRequest {
            trace_id,
            name: SCORE_NAME,
            value: score.value(),
        };
        let response = self
            .http
            .post(format!("{}/api/public/scores", self.base_url))
            .basic_auth(&self.public_key, None::<&str>)
            .json(&body)
            .send()
            .await
            .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }
        Ok(())
    }
}
