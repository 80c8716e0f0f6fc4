//! OpenIE Client Implementation
//!
//! Talks to an OpenIE 5 style relation extraction server over HTTP.
//!
//! # Features
//!
//! - One `POST {base_url}/getExtraction` per sentence, sentence as the body
//! - Per-request timeout
//! - Typed response validation at the boundary
//!
//! Retrying is the caller's job; this client makes exactly one attempt.
//!
//! # Examples
//!
//! ```no_run
//! use kgraph_openie::OpenIeClient;
//!
//! let client = OpenIeClient::new("http://localhost:8000").unwrap();
//! ```

use crate::wire::parse_response;
use crate::ExtractError;
use async_trait::async_trait;
use kgraph_domain::{ExtractionRecord, RelationExtractor};
use std::time::Duration;
use tracing::debug;

/// Default extraction service endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000";

/// Default timeout for a single extraction request (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Longest error body kept in an `HttpStatus` error
const MAX_ERROR_BODY: usize = 512;

/// HTTP client for the extraction service
#[derive(Debug, Clone)]
pub struct OpenIeClient {
    endpoint: String,
    client: reqwest::Client,
}

impl OpenIeClient {
    /// Create a client with the default request timeout
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ExtractError> {
        Self::with_timeout(endpoint, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a client with an explicit request timeout
    pub fn with_timeout(
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ExtractError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Base URL requests are sent to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn request(&self, sentence: &str) -> Result<Vec<ExtractionRecord>, ExtractError> {
        let url = format!("{}/getExtraction", self.endpoint);

        let response = self
            .client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "text/plain; charset=utf-8")
            .body(sentence.to_string())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let mut body = body;
            if body.len() > MAX_ERROR_BODY {
                let cut = (0..=MAX_ERROR_BODY)
                    .rev()
                    .find(|&i| body.is_char_boundary(i))
                    .unwrap_or(0);
                body.truncate(cut);
            }
            return Err(ExtractError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let records = parse_response(&body)?;
        debug!("{} extractions for sentence ({} chars)", records.len(), sentence.len());
        Ok(records)
    }
}

#[async_trait]
impl RelationExtractor for OpenIeClient {
    type Error = ExtractError;

    async fn extract(&self, sentence: &str) -> Result<Vec<ExtractionRecord>, Self::Error> {
        self.request(sentence).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_client_creation_trims_slash() {
        let client = OpenIeClient::new("http://localhost:8000/").unwrap();
        assert_eq!(client.endpoint(), "http://localhost:8000");
    }

    #[tokio::test]
    async fn test_extract_returns_records() {
        let mock_server = MockServer::start().await;

        let response_json = r#"[
            {
                "confidence": 0.88,
                "extraction": {
                    "arg1": {"text": "Alice"},
                    "rel": {"text": "loves"},
                    "arg2s": [{"text": "Bob"}]
                }
            }
        ]"#;

        Mock::given(method("POST"))
            .and(path("/getExtraction"))
            .and(body_string("Alice loves Bob."))
            .respond_with(ResponseTemplate::new(200).set_body_string(response_json))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = OpenIeClient::new(mock_server.uri()).unwrap();
        let records = client.extract("Alice loves Bob.").await.unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].subject, "Alice");
        assert_eq!(records[0].first_object(), Some("Bob"));
    }

    #[tokio::test]
    async fn test_extract_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/getExtraction"))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .mount(&mock_server)
            .await;

        let client = OpenIeClient::new(mock_server.uri()).unwrap();
        let result = client.extract("Anything.").await;

        match result {
            Err(ExtractError::HttpStatus { status, body }) => {
                assert_eq!(status, 503);
                assert_eq!(body, "overloaded");
            }
            other => panic!("Expected HttpStatus error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_extract_malformed_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let client = OpenIeClient::new(mock_server.uri()).unwrap();
        let result = client.extract("Anything.").await;

        assert!(matches!(result, Err(ExtractError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_extract_connection_refused() {
        // Nothing listens on port 1
        let client = OpenIeClient::with_timeout("http://127.0.0.1:1", Duration::from_secs(2)).unwrap();
        let result = client.extract("test").await;

        assert!(matches!(result, Err(ExtractError::Communication(_))));
    }
}
