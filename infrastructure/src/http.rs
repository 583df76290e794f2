//! reqwest adapter for the council backend
//!
//! Implements [`DiscussionGateway`] with a single HTTP call per operation.
//! No retries, no timeout, no caching: a request runs to completion or
//! failure and the outcome is reported as-is.

use async_trait::async_trait;
use council_application::{ClientConfig, DiscussionGateway, GatewayError};
use council_domain::{CouncilMembers, DiscussionRequest, DomainError};
use serde_json::Value;
use tracing::{debug, warn};

/// Path of the discussion endpoint
pub const DISCUSS_PATH: &str = "/council/discuss";

/// Path of the membership endpoint
pub const MEMBERS_PATH: &str = "/council/members";

/// Gateway that talks to the council API over HTTP
pub struct HttpDiscussionGateway {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpDiscussionGateway {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: ClientConfig) -> Self {
        Self { client, config }
    }

    /// Check the status and decode the body as JSON
    async fn read_json(response: reqwest::Response) -> Result<Value, GatewayError> {
        let status = response.status();
        if !status.is_success() {
            warn!(
                "Backend answered {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            );
            return Err(GatewayError::HttpStatus(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        debug!("Received {} bytes", body.len());

        serde_json::from_slice(&body).map_err(|e| GatewayError::Parse(e.to_string()))
    }
}

#[async_trait]
impl DiscussionGateway for HttpDiscussionGateway {
    fn origin(&self) -> &str {
        &self.config.origin
    }

    async fn discuss(&self, request: &DiscussionRequest) -> Result<Value, GatewayError> {
        let url = self.config.endpoint(DISCUSS_PATH);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        Self::read_json(response).await
    }

    async fn members(&self) -> Result<CouncilMembers, GatewayError> {
        let url = self.config.endpoint(MEMBERS_PATH);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let body = Self::read_json(response).await?;
        serde_json::from_value(body)
            .map_err(|e| DomainError::MalformedResponse(e.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve exactly one canned response and hand back the raw request.
    async fn serve_once(status_line: &str, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let origin = format!("http://{}", listener.local_addr().unwrap());
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = stream.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&buf[..n]);
                if request_complete(&raw) {
                    break;
                }
            }
            stream.write_all(response.as_bytes()).await.unwrap();
            let _ = stream.shutdown().await;
            String::from_utf8_lossy(&raw).into_owned()
        });

        (origin, handle)
    }

    fn request_complete(raw: &[u8]) -> bool {
        let text = String::from_utf8_lossy(raw);
        let Some(header_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..header_end]
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        raw.len() >= header_end + 4 + content_length
    }

    fn gateway(origin: impl Into<String>) -> HttpDiscussionGateway {
        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        HttpDiscussionGateway::with_client(client, ClientConfig::new(origin))
    }

    fn request_body(raw: &str) -> Value {
        let (_, body) = raw.split_once("\r\n\r\n").unwrap();
        serde_json::from_str(body).unwrap()
    }

    #[tokio::test]
    async fn test_discuss_posts_json_body() {
        let (origin, server) = serve_once(
            "200 OK",
            r#"{"topic":"t","rounds":[{"round":1,"responses":{"B":"b","A":"a"}}]}"#,
        )
        .await;
        let gateway = gateway(origin);

        let body = gateway
            .discuss(&DiscussionRequest::from_form("Is Rust fun?", "3"))
            .await
            .unwrap();
        let raw = server.await.unwrap();

        assert!(raw.starts_with("POST /council/discuss HTTP/1.1\r\n"));
        assert!(
            raw.to_ascii_lowercase()
                .contains("content-type: application/json")
        );
        assert_eq!(
            request_body(&raw),
            json!({"topic": "Is Rust fun?", "rounds": 3})
        );

        let names: Vec<_> = body["rounds"][0]["responses"]
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[tokio::test]
    async fn test_discuss_sends_null_for_nan_rounds() {
        let (origin, server) = serve_once("200 OK", r#"{"rounds":[]}"#).await;
        let gateway = gateway(origin);

        gateway
            .discuss(&DiscussionRequest::from_form("t", "abc"))
            .await
            .unwrap();
        let raw = server.await.unwrap();

        assert_eq!(request_body(&raw), json!({"topic": "t", "rounds": null}));
    }

    #[tokio::test]
    async fn test_non_success_status_is_http_error() {
        let (origin, server) = serve_once(
            "500 Internal Server Error",
            r#"{"detail":"Error in council discussion"}"#,
        )
        .await;
        let gateway = gateway(origin);

        let err = gateway
            .discuss(&DiscussionRequest::from_form("t", "1"))
            .await
            .unwrap_err();
        server.await.unwrap();

        assert_eq!(err.status(), Some(500));
        assert_eq!(err.to_string(), "HTTP error! status: 500");
    }

    #[tokio::test]
    async fn test_invalid_json_is_parse_error() {
        let (origin, server) = serve_once("200 OK", "<html>not json</html>").await;
        let gateway = gateway(origin);

        let err = gateway
            .discuss(&DiscussionRequest::from_form("t", "1"))
            .await
            .unwrap_err();
        server.await.unwrap();

        assert!(matches!(err, GatewayError::Parse(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let origin = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);
        let gateway = gateway(origin);

        let err = gateway
            .discuss(&DiscussionRequest::from_form("t", "1"))
            .await
            .unwrap_err();

        assert!(matches!(err, GatewayError::Transport(_)));
    }

    #[tokio::test]
    async fn test_members() {
        let (origin, server) = serve_once(
            "200 OK",
            r#"{"chairman":"Chairman (Gemini)","members":["Council Member 1 (Mistral)"]}"#,
        )
        .await;
        let gateway = gateway(format!("{}/", origin));

        let members = gateway.members().await.unwrap();
        let raw = server.await.unwrap();

        assert!(raw.starts_with("GET /council/members HTTP/1.1\r\n"));
        assert_eq!(members.chairman, "Chairman (Gemini)");
        assert_eq!(members.members.len(), 1);
    }

    #[tokio::test]
    async fn test_members_shape_mismatch() {
        let (origin, server) = serve_once("200 OK", r#"{"members":"nobody"}"#).await;
        let gateway = gateway(origin);

        let err = gateway.members().await.unwrap_err();
        server.await.unwrap();

        assert!(matches!(err, GatewayError::MalformedResponse(_)));
    }
}
