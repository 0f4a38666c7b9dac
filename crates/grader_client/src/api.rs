use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::{ApiError, Caller, ClientSettings, EvaluationRecord, FailureKind};

#[derive(Debug, Serialize)]
struct CheckRequest<'a> {
    #[serde(rename = "blogContent")]
    blog_content: &'a str,
    #[serde(rename = "userEmail", skip_serializing_if = "Option::is_none")]
    user_email: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct CheckResponse {
    message: String,
    #[serde(rename = "traceId")]
    trace_id: String,
    #[serde(rename = "langfuseSessionId")]
    langfuse_session_id: String,
}

#[derive(Debug, Serialize)]
struct TweetRequest<'a> {
    #[serde(rename = "evalResult")]
    eval_result: &'a str,
    #[serde(rename = "userEmail", skip_serializing_if = "Option::is_none")]
    user_email: Option<&'a str>,
    #[serde(rename = "langfuseSessionId")]
    langfuse_session_id: &'a str,
}

#[derive(Debug, Deserialize)]
struct TweetResponse {
    message: String,
}

#[derive(Debug, Serialize)]
struct ExtractDocumentRequest<'a> {
    #[serde(rename = "pdfBase64")]
    pdf_base64: String,
    #[serde(rename = "userEmail", skip_serializing_if = "Option::is_none")]
    user_email: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct ExtractDocumentResponse {
    message: String,
    text: String,
    #[serde(rename = "objectKey")]
    object_key: String,
}

#[derive(Debug, Serialize)]
struct LoadUrlRequest<'a> {
    url: &'a str,
    #[serde(rename = "userEmail", skip_serializing_if = "Option::is_none")]
    user_email: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct LoadUrlResponse {
    message: String,
}

/// The backend contract, seamed so the engine can be driven by a test double.
#[async_trait::async_trait]
pub trait ContentApi: Send + Sync {
    /// One authenticated evaluation round-trip for an already-normalized text.
    async fn evaluate(&self, text: &str, caller: &Caller) -> Result<EvaluationRecord, ApiError>;

    /// Derives a short promotional post from a prior evaluation result.
    async fn derive_share_text(
        &self,
        eval_result: &str,
        session_id: &str,
        caller: &Caller,
    ) -> Result<String, ApiError>;

    /// Uploads document bytes and returns the extracted text.
    async fn extract_document(&self, bytes: &[u8], caller: &Caller) -> Result<String, ApiError>;

    /// Asks the backend to fetch a remote page and return its text content.
    async fn extract_url(&self, url: &str, caller: &Caller) -> Result<String, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    settings: ClientSettings,
}

impl ApiClient {
    pub fn new(settings: ClientSettings) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { http, settings })
    }

    async fn post_json<B, T>(&self, url: String, id_token: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(url)
            .bearer_auth(id_token)
            .json(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        response.json::<T>().await.map_err(map_reqwest_error)
    }
}

#[async_trait::async_trait]
impl ContentApi for ApiClient {
    async fn evaluate(&self, text: &str, caller: &Caller) -> Result<EvaluationRecord, ApiError> {
        // Re-checked here even though the caller validates: normalization and
        // evaluation are decoupled steps.
        if text.trim().is_empty() {
            return Err(ApiError::new(FailureKind::InvalidInput, "blank content"));
        }
        let body = CheckRequest {
            blog_content: text,
            user_email: caller.email.as_deref(),
        };
        let parsed: CheckResponse = self
            .post_json(
                format!("{}/check", self.settings.api_base),
                &caller.id_token,
                &body,
            )
            .await?;
        Ok(EvaluationRecord {
            message: parsed.message,
            trace_id: parsed.trace_id,
            session_id: parsed.langfuse_session_id,
        })
    }

    async fn derive_share_text(
        &self,
        eval_result: &str,
        session_id: &str,
        caller: &Caller,
    ) -> Result<String, ApiError> {
        let body = TweetRequest {
            eval_result,
            user_email: caller.email.as_deref(),
            langfuse_session_id: session_id,
        };
        let parsed: TweetResponse = self
            .post_json(
                format!("{}/check", self.settings.tweet_api_base),
                &caller.id_token,
                &body,
            )
            .await?;
        Ok(parsed.message)
    }

    async fn extract_document(&self, bytes: &[u8], caller: &Caller) -> Result<String, ApiError> {
        let body = ExtractDocumentRequest {
            pdf_base64: BASE64.encode(bytes),
            user_email: caller.email.as_deref(),
        };
        let parsed: ExtractDocumentResponse = self
            .post_json(
                format!("{}/load-pdf", self.settings.api_base),
                &caller.id_token,
                &body,
            )
            .await?;
        if parsed.text.trim().is_empty() {
            return Err(ApiError::new(
                FailureKind::EmptyExtraction,
                "document extraction returned no text",
            ));
        }
        Ok(parsed.text)
    }

    async fn extract_url(&self, url: &str, caller: &Caller) -> Result<String, ApiError> {
        let body = LoadUrlRequest {
            url,
            user_email: caller.email.as_deref(),
        };
        let parsed: LoadUrlResponse = self
            .post_json(
                format!("{}/load-url", self.settings.api_base),
                &caller.id_token,
                &body,
            )
            .await?;
        if parsed.message.trim().is_empty() {
            return Err(ApiError::new(
                FailureKind::EmptyExtraction,
                "url extraction returned no text",
            ));
        }
        Ok(parsed.message)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return ApiError::new(FailureKind::Decode, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}
