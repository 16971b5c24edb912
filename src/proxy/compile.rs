//! Compile request forwarding.
//!
//! Each request moves through
//! `buffer inbound body → await upstream → {buffer upstream body → relay}
//! | {transport failure → 502}`. The inbound body is fully buffered by the
//! caller before [`CompileProxy::forward`] is entered, and the upstream body is
//! fully buffered before a response exists, so the client never sees a
//! partial relay.

use std::time::Duration;

use axum::body::Bytes;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use reqwest::Client;

use crate::config::UpstreamConfig;
use crate::proxy::error::{GatewayErrorBody, UpstreamError};

const APPLICATION_JSON: &str = "application/json";

/// Terminal state of one forwarded compile request.
#[derive(Debug)]
pub enum ProxyOutcome {
    /// The upstream answered; status and body are relayed verbatim.
    Relayed { status: StatusCode, body: Bytes },
    /// The upstream could not be reached.
    Unreachable(UpstreamError),
}

impl IntoResponse for ProxyOutcome {
    fn into_response(self) -> Response {
        match self {
            ProxyOutcome::Relayed { status, body } => (
                status,
                [(header::CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON))],
                body,
            )
                .into_response(),
            ProxyOutcome::Unreachable(err) => (
                StatusCode::BAD_GATEWAY,
                Json(GatewayErrorBody::unreachable(&err)),
            )
                .into_response(),
        }
    }
}

/// Forwards compile bodies to the configured upstream endpoint.
#[derive(Debug, Clone)]
pub struct CompileProxy {
    client: Client,
    endpoint: String,
}

impl CompileProxy {
    /// Build the upstream client.
    ///
    /// Idle connections are never kept, so every compile opens a fresh
    /// connection. Proxy environment variables are ignored.
    pub fn new(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder()
            .pool_max_idle_per_host(0)
            .no_proxy();

        if let Some(secs) = config.connect_timeout_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: config.url.clone(),
        })
    }

    /// Forward a buffered compile body and capture the upstream's answer.
    ///
    /// The body is not inspected; malformed JSON is the upstream's to report.
    pub async fn forward(&self, body: Bytes) -> ProxyOutcome {
        tracing::info!(
            upstream = %self.endpoint,
            bytes = body.len(),
            "Forwarding compile request to Wandbox"
        );

        match self.exchange(body).await {
            Ok((status, body)) => {
                tracing::info!(
                    status = status.as_u16(),
                    bytes = body.len(),
                    "Wandbox responded"
                );
                ProxyOutcome::Relayed { status, body }
            }
            Err(err) => {
                tracing::error!(error = %err, "Error reaching Wandbox");
                ProxyOutcome::Unreachable(err)
            }
        }
    }

    async fn exchange(&self, body: Bytes) -> Result<(StatusCode, Bytes), UpstreamError> {
        // reqwest derives Content-Length from the buffered body.
        let response = self
            .client
            .post(&self.endpoint)
            .header(header::CONTENT_TYPE, APPLICATION_JSON)
            .body(body)
            .send()
            .await
            .map_err(UpstreamError::Transport)?;

        let status = response.status();
        let body = response.bytes().await.map_err(UpstreamError::Transport)?;
        Ok((status, body))
    }
}
