//! reqwest implementation of the ask gateway

use async_trait::async_trait;
use qachat_application::{AskGateway, EndpointParams, GatewayError};
use qachat_domain::util::truncate_str;
use qachat_domain::{AskRequest, AskResponse};
use tracing::{debug, warn};

/// Maximum number of bytes of an error body kept for diagnostics
const MAX_ERROR_BODY: usize = 512;

/// Gateway that POSTs each request as JSON to a fixed endpoint.
#[derive(Clone)]
pub struct HttpAskGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpAskGateway {
    /// Build a gateway with its own client.
    ///
    /// A timeout is only applied when `params.timeout` is set; otherwise a
    /// request waits for the server as long as the connection stays open.
    pub fn new(params: &EndpointParams) -> Result<Self, GatewayError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("qachat/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = params.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self::with_client(client, params.url.clone()))
    }

    /// Build a gateway around an existing client.
    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

fn map_send_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else {
        GatewayError::ConnectionError(e.to_string())
    }
}

#[async_trait]
impl AskGateway for HttpAskGateway {
    async fn ask(&self, request: &AskRequest) -> Result<AskResponse, GatewayError> {
        debug!("POST {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(
                "Ask endpoint returned {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            );
            return Err(GatewayError::HttpStatus {
                status: status.as_u16(),
                body: truncate_str(&body, MAX_ERROR_BODY).to_string(),
            });
        }

        let bytes = response.bytes().await.map_err(map_send_error)?;
        serde_json::from_slice::<AskResponse>(&bytes)
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qachat_domain::{Message, Query, SessionId};
    use std::time::Duration;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn gateway_for(server: &MockServer) -> HttpAskGateway {
        HttpAskGateway::new(&EndpointParams::new(format!("{}/ask", server.uri()))).unwrap()
    }

    fn request(query: &str, session: Option<&str>) -> AskRequest {
        AskRequest::new(Query::try_new(query).unwrap(), session.map(SessionId::from))
    }

    #[tokio::test]
    async fn test_posts_query_with_null_session() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/ask"))
            .and(body_json(serde_json::json!({ "query": "hi", "session_id": null })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "session_id": "s1",
                "history": [{ "role": "user", "content": "hi" }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = gateway_for(&server).ask(&request("hi", None)).await.unwrap();

        assert_eq!(response.session_id.as_str(), "s1");
        assert_eq!(response.history, vec![Message::user("hi")]);
    }

    #[tokio::test]
    async fn test_echoes_session_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/ask"))
            .and(body_json(serde_json::json!({ "query": "more", "session_id": "s1" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "response": "sure",
                "session_id": "s1",
                "history": [
                    { "role": "user", "content": "more" },
                    { "role": "assistant", "content": "sure" }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = gateway_for(&server)
            .ask(&request("more", Some("s1")))
            .await
            .unwrap();

        assert_eq!(response.response.as_deref(), Some("sure"));
        assert_eq!(response.history.len(), 2);
    }

    #[tokio::test]
    async fn test_non_2xx_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/ask"))
            .respond_with(
                ResponseTemplate::new(503)
                    .set_body_json(serde_json::json!({ "detail": "Service temporarily unavailable" })),
            )
            .mount(&server)
            .await;

        let err = gateway_for(&server)
            .ask(&request("hi", None))
            .await
            .unwrap_err();

        match err {
            GatewayError::HttpStatus { status, body } => {
                assert_eq!(status, 503);
                assert!(body.contains("temporarily unavailable"));
            }
            other => panic!("Expected HttpStatus, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/ask"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "answer": "42" })),
            )
            .mount(&server)
            .await;

        let err = gateway_for(&server)
            .ask(&request("hi", None))
            .await
            .unwrap_err();

        assert!(matches!(err, GatewayError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_an_error() {
        // Reserve a port, then release it so nothing is listening there
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let endpoint = format!("http://{}/ask", listener.local_addr().unwrap());
        drop(listener);

        let gateway = HttpAskGateway::new(&EndpointParams::new(endpoint)).unwrap();
        let err = gateway.ask(&request("hi", None)).await.unwrap_err();

        assert!(matches!(err, GatewayError::ConnectionError(_)));
    }

    #[tokio::test]
    async fn test_configured_timeout_applies() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/ask"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "session_id": "s1", "history": [] }))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let params = EndpointParams::new(format!("{}/ask", server.uri()))
            .with_timeout(Some(Duration::from_millis(100)));
        let err = HttpAskGateway::new(&params)
            .unwrap()
            .ask(&request("hi", None))
            .await
            .unwrap_err();

        assert!(matches!(err, GatewayError::Timeout));
    }

    #[tokio::test]
    async fn test_each_call_is_one_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/ask"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "session_id": "s1", "history": [] })),
            )
            .expect(2)
            .mount(&server)
            .await;

        let gateway = gateway_for(&server);
        let req = request("again", None);
        gateway.ask(&req).await.unwrap();
        gateway.ask(&req).await.unwrap();
        // `expect(2)` is verified when the server drops
    }
}
