use serde::Serialize;
use thiserror::Error;
use tracing::instrument;
use url::Url;
use uuid::Uuid;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const SCORE_PATH: &str = "/onboarding/score";

/// Payload handed to the account backend once a session completes.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub session_id: Uuid,
    pub score: u8,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] ureq::Error),
    #[error("failed to read the response body: {0}")]
    Io(#[from] std::io::Error),
    #[error("the account API returned an error: {status}")]
    Server { status: u16 },
    #[error("invalid account API base URL: {0}")]
    BadBaseUrl(#[from] url::ParseError),
}

pub trait SubmitScore {
    fn submit_score(&self, report: &ScoreReport) -> Result<(), SubmitError>;
}

/// Blocking client for the account backend. Failures here never touch the
/// session itself; the caller keeps its completed state and may retry.
pub struct ApiClient {
    endpoint: Url,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self, SubmitError> {
        let endpoint = Url::parse(base_url)?.join(SCORE_PATH)?;
        Ok(Self { endpoint, token })
    }

    pub fn from_env() -> Result<Self, SubmitError> {
        let base = std::env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());
        let token = std::env::var("API_TOKEN").ok();
        Self::new(&base, token)
    }
}

impl SubmitScore for ApiClient {
    #[instrument(level = "info", skip(self, report))]
    fn submit_score(&self, report: &ScoreReport) -> Result<(), SubmitError> {
        let mut request = ureq::post(self.endpoint.as_str()).set("Content-Type", "application/json");
        if let Some(token) = &self.token {
            request = request.set("Authorization", &format!("Bearer {token}"));
        }

        let response = request.send_json(report).map_err(|e| match e {
            ureq::Error::Status(code, _) => SubmitError::Server { status: code },
            other => SubmitError::Http(other),
        })?;

        log::info!(
            "score {} for session {} acknowledged with {}",
            report.score,
            report.session_id,
            response.status()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_the_score_endpoint_from_the_base_url() {
        let client = ApiClient::new("http://localhost:8000", None).unwrap();
        assert_eq!(client.endpoint.as_str(), "http://localhost:8000/onboarding/score");
    }

    #[test]
    fn rejects_an_unparseable_base_url() {
        assert!(matches!(
            ApiClient::new("not a url", None),
            Err(SubmitError::BadBaseUrl(_))
        ));
    }

    #[test]
    fn reports_serialize_with_snake_case_fields() {
        let report = ScoreReport {
            session_id: Uuid::nil(),
            score: 83,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["score"], 83);
        assert_eq!(json["session_id"], "00000000-0000-0000-0000-000000000000");
    }
}
