//! Figma REST API client for fetching file and node documents.

use std::time::Duration;

use log::debug;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use serde_json::Value;
use thiserror::Error;

use super::api_types::FigmaErrorBody;
use super::decode::parse_json;
use crate::FigxError;

pub const DEFAULT_API_BASE_URL: &str = "https://api.figma.com";

#[derive(Debug, Error)]
pub enum FigmaError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Figma API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("Missing access token")]
    MissingToken,
    #[error("Node not found: {0}")]
    NodeNotFound(String),
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),
    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

pub fn map_figma_error(e: FigmaError) -> FigxError {
    match e {
        FigmaError::Request(req_err) => FigxError::Network(req_err),
        FigmaError::Api { status, message } => FigxError::FigmaApi {
            status: Some(
                reqwest::StatusCode::from_u16(status)
                    .unwrap_or(reqwest::StatusCode::INTERNAL_SERVER_ERROR),
            ),
            message,
        },
        FigmaError::MissingToken => FigxError::Token("No Figma access token available".to_string()),
        FigmaError::NodeNotFound(id) => FigxError::Config(format!("Node {id} not found in file")),
        FigmaError::RateLimited(secs) => FigxError::FigmaApi {
            status: Some(reqwest::StatusCode::TOO_MANY_REQUESTS),
            message: format!("Rate limited, retry after {secs} seconds"),
        },
        FigmaError::Decode(err) => FigxError::Serialization(err),
    }
}

/// How requests authenticate: personal tokens go in `X-Figma-Token`, OAuth
/// tokens as a bearer `Authorization` header.
#[derive(Clone, PartialEq, Eq)]
pub enum FigmaAuth {
    PersonalAccessToken(String),
    OAuthToken(String),
}

impl FigmaAuth {
    /// `FIGMA_TOKEN`, then `FIGMA_OAUTH_TOKEN`; empty values are ignored.
    pub fn from_env() -> Option<Self> {
        if let Ok(token) = std::env::var("FIGMA_TOKEN") {
            if !token.trim().is_empty() {
                return Some(Self::PersonalAccessToken(token.trim().to_string()));
            }
        }

        if let Ok(token) = std::env::var("FIGMA_OAUTH_TOKEN") {
            if !token.trim().is_empty() {
                return Some(Self::OAuthToken(token.trim().to_string()));
            }
        }

        None
    }

    pub fn token(&self) -> &str {
        match self {
            FigmaAuth::PersonalAccessToken(token) | FigmaAuth::OAuthToken(token) => token,
        }
    }

    fn headers(&self) -> std::result::Result<HeaderMap, FigmaError> {
        let mut headers = HeaderMap::new();
        match self {
            FigmaAuth::PersonalAccessToken(token) => {
                headers.insert(
                    HeaderName::from_static("x-figma-token"),
                    HeaderValue::from_str(token).map_err(|_| FigmaError::MissingToken)?,
                );
            }
            FigmaAuth::OAuthToken(token) => {
                headers.insert(
                    AUTHORIZATION,
                    HeaderValue::from_str(&format!("Bearer {token}"))
                        .map_err(|_| FigmaError::MissingToken)?,
                );
            }
        }
        Ok(headers)
    }
}

// Tokens never end up in logs.
impl std::fmt::Debug for FigmaAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FigmaAuth::PersonalAccessToken(_) => f.write_str("PersonalAccessToken(***)"),
            FigmaAuth::OAuthToken(_) => f.write_str("OAuthToken(***)"),
        }
    }
}

#[derive(Debug)]
pub struct FigmaClient {
    client: reqwest::Client,
    base_url: String,
}

impl FigmaClient {
    pub fn new(
        auth: FigmaAuth,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> std::result::Result<Self, FigmaError> {
        if auth.token().is_empty() {
            return Err(FigmaError::MissingToken);
        }

        let client = reqwest::Client::builder()
            .default_headers(auth.headers()?)
            .no_proxy()
            .timeout(timeout)
            .build()?;

        let base_url: String = base_url.into();
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// `GET /v1/files/:key`, the whole document plus its style table.
    pub async fn get_file(&self, file_key: &str) -> std::result::Result<Value, FigmaError> {
        let url = format!("{}/v1/files/{}", self.base_url, file_key);
        debug!("GET {url}");
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// `GET /v1/files/:key/nodes?ids=…`, one envelope per requested node.
    pub async fn get_file_nodes(
        &self,
        file_key: &str,
        node_ids: &[&str],
    ) -> std::result::Result<Value, FigmaError> {
        let ids = node_ids.join(",");
        let url = format!("{}/v1/files/{}/nodes?ids={}", self.base_url, file_key, ids);
        debug!("GET {url}");
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> std::result::Result<Value, FigmaError> {
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok())
                .unwrap_or(60);
            return Err(FigmaError::RateLimited(retry_after));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FigmaError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let body = response.bytes().await?;
        Ok(parse_json(&body)?)
    }
}

/// The `err` field of a `{status, err}` body, else the body itself.
fn error_message(body: &str) -> String {
    serde_json::from_str::<FigmaErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.err)
        .filter(|err| !err.is_empty())
        .unwrap_or_else(|| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve a single canned HTTP response on a local port.
    async fn serve_once(response: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = vec![0u8; 4096];
                let _ = socket.read(&mut buf).await;
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });
        format!("http://{addr}")
    }

    fn http_response(status: &str, headers: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n{headers}\r\n{body}",
            body.len()
        )
    }

    fn client(base: &str) -> FigmaClient {
        FigmaClient::new(
            FigmaAuth::PersonalAccessToken("figd_test".into()),
            base,
            Duration::from_secs(5),
        )
        .expect("client")
    }

    #[test]
    fn empty_token_is_rejected() {
        let result = FigmaClient::new(
            FigmaAuth::PersonalAccessToken(String::new()),
            DEFAULT_API_BASE_URL,
            Duration::from_secs(1),
        );
        assert!(matches!(result.unwrap_err(), FigmaError::MissingToken));
    }

    #[test]
    fn auth_debug_hides_token() {
        let auth = FigmaAuth::OAuthToken("secret-value".into());
        assert_eq!(format!("{auth:?}"), "OAuthToken(***)");
    }

    #[test]
    fn error_body_prefers_err_field() {
        assert_eq!(error_message(r#"{"status":403,"err":"Invalid token"}"#), "Invalid token");
        assert_eq!(error_message("Bad Gateway\n"), "Bad Gateway");
    }

    #[test]
    fn errors_map_to_categories() {
        assert!(matches!(
            map_figma_error(FigmaError::MissingToken),
            FigxError::Token(_)
        ));
        match map_figma_error(FigmaError::Api {
            status: 404,
            message: "Not found".into(),
        }) {
            FigxError::FigmaApi { status, message } => {
                assert_eq!(status, Some(reqwest::StatusCode::NOT_FOUND));
                assert_eq!(message, "Not found");
            }
            other => panic!("unexpected {other:?}"),
        }
        match map_figma_error(FigmaError::NodeNotFound("1:2".into())) {
            FigxError::Config(message) => assert!(message.contains("1:2")),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn get_file_returns_json_envelope() {
        let body = r#"{"name":"Demo","document":{"id":"0:0","name":"Document","type":"DOCUMENT"}}"#;
        let base = serve_once(http_response("200 OK", "", body)).await;
        let value = client(&base).get_file("abc").await.expect("file");
        assert_eq!(value["document"]["type"], "DOCUMENT");
    }

    #[tokio::test]
    async fn api_error_uses_err_message() {
        let body = r#"{"status":403,"err":"Invalid token"}"#;
        let base = serve_once(http_response("403 Forbidden", "", body)).await;
        let err = client(&base).get_file_nodes("abc", &["1:2"]).await.unwrap_err();
        match err {
            FigmaError::Api { status, message } => {
                assert_eq!(status, 403);
                assert_eq!(message, "Invalid token");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn rate_limit_reads_retry_after() {
        let base = serve_once(http_response(
            "429 Too Many Requests",
            "Retry-After: 12\r\n",
            "{}",
        ))
        .await;
        let err = client(&base).get_file("abc").await.unwrap_err();
        assert!(matches!(err, FigmaError::RateLimited(12)));
    }

    #[tokio::test]
    async fn unreachable_host_is_a_request_error() {
        let err = client("http://127.0.0.1:1").get_file("abc").await.unwrap_err();
        assert!(matches!(err, FigmaError::Request(_)));
    }

    #[tokio::test]
    async fn deep_documents_are_not_rejected() {
        let depth = 150;
        let mut document = String::new();
        for level in 0..depth {
            document.push_str(&format!(
                r#"{{"id":"1:{level}","name":"L{level}","type":"FRAME","children":["#
            ));
        }
        document.push_str(&"]}".repeat(depth));
        let body = format!(r#"{{"document":{document}}}"#);

        let base = serve_once(http_response("200 OK", "", &body)).await;
        let value = client(&base).get_file("abc").await.expect("deep file");
        assert_eq!(value["document"]["children"][0]["id"], "1:1");
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let base = serve_once(http_response("200 OK", "", "{not json")).await;
        let err = client(&base).get_file("abc").await.unwrap_err();
        assert!(matches!(err, FigmaError::Decode(_)));
        assert!(matches!(map_figma_error(err), FigxError::Serialization(_)));
    }
}
