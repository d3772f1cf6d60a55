//! Delivery of sent messages to the host page's `api-endpoint` and
//! `webhook-url`.
//!
//! Requests run as tokio tasks; outcomes come back to the UI loop over an
//! unbounded channel tagged with the widget's session id, so results for a
//! widget that has since been unmounted can be dropped by the receiver.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::mpsc::UnboundedSender;
use url::Url;

use crate::error::{Result, WidgetError};

const SESSION_PREFIX: &str = "session_";
const SESSION_SUFFIX_LEN: usize = 9;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// `session_` followed by nine lowercase base-36 characters.
pub fn new_session_id() -> String {
    let suffix: String = (0..SESSION_SUFFIX_LEN)
        .map(|_| BASE36[fastrand::usize(..BASE36.len())] as char)
        .collect();
    format!("{}{}", SESSION_PREFIX, suffix)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchEvent {
    /// The endpoint accepted the message; `reply` is its answer, if any.
    Delivered {
        session_id: String,
        message_id: u64,
        reply: Option<String>,
    },
    Failed {
        session_id: String,
        message_id: u64,
        error: String,
    },
}

impl DispatchEvent {
    pub fn session_id(&self) -> &str {
        match self {
            DispatchEvent::Delivered { session_id, .. } | DispatchEvent::Failed { session_id, .. } => session_id,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutgoingMessage {
    pub message: String,
    pub timestamp: String,
    pub session_id: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    reply: Option<String>,
}

/// HTTP seam; the production implementation is [`HttpTransport`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(&self, url: &Url, body: &OutgoingMessage) -> Result<Value>;
}

pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| WidgetError::Dispatch(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, url: &Url, body: &OutgoingMessage) -> Result<Value> {
        let response = self
            .client
            .post(url.clone())
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| WidgetError::Dispatch(e.to_string()))?;

        if !response.status().is_success() {
            return Err(WidgetError::Dispatch(format!("HTTP {} from {}", response.status(), url)));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| WidgetError::Dispatch(format!("Invalid JSON from {}: {}", url, e)))
    }
}

/// Endpoints are `http`/`https` URLs. Relative values are joined onto `base`
/// when one is configured.
pub fn parse_endpoint(value: &str, base: Option<&Url>) -> Result<Url> {
    let url = match (Url::parse(value), base) {
        (Ok(url), _) => url,
        (Err(url::ParseError::RelativeUrlWithoutBase), Some(base)) => base
            .join(value)
            .map_err(|e| WidgetError::Dispatch(format!("Invalid endpoint '{}': {}", value, e)))?,
        (Err(e), _) => return Err(WidgetError::Dispatch(format!("Invalid endpoint '{}': {}", value, e))),
    };
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(WidgetError::Dispatch(format!(
            "Unsupported endpoint scheme '{}' in '{}'",
            other, value
        ))),
    }
}

/// A configured endpoint. An unusable one stays configured so that sends
/// to it fail per message instead of taking the widget down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Ready(Url),
    Unusable(String),
}

impl Endpoint {
    pub fn parse(value: &str, base: Option<&Url>) -> Self {
        match parse_endpoint(value, base) {
            Ok(url) => Endpoint::Ready(url),
            Err(e) => {
                tracing::warn!("{}", e);
                Endpoint::Unusable(e.to_string())
            }
        }
    }

    fn url(&self) -> std::result::Result<&Url, &str> {
        match self {
            Endpoint::Ready(url) => Ok(url),
            Endpoint::Unusable(reason) => Err(reason),
        }
    }
}

/// Where the host page sends messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct Endpoints<'a> {
    pub api: Option<&'a str>,
    pub webhook: Option<&'a str>,
    pub base: Option<&'a Url>,
}

pub struct Dispatcher {
    api_endpoint: Option<Endpoint>,
    webhook_url: Option<Endpoint>,
    session_id: String,
    transport: Arc<dyn Transport>,
    events: Option<UnboundedSender<DispatchEvent>>,
}

impl Dispatcher {
    pub fn new(
        endpoints: Endpoints<'_>,
        session_id: String,
        timeout: Duration,
        events: Option<UnboundedSender<DispatchEvent>>,
    ) -> Result<Self> {
        let transport = Arc::new(HttpTransport::new(timeout)?);
        Ok(Self::with_transport(endpoints, session_id, transport, events))
    }

    pub fn with_transport(
        endpoints: Endpoints<'_>,
        session_id: String,
        transport: Arc<dyn Transport>,
        events: Option<UnboundedSender<DispatchEvent>>,
    ) -> Self {
        Self {
            api_endpoint: endpoints.api.map(|value| Endpoint::parse(value, endpoints.base)),
            webhook_url: endpoints.webhook.map(|value| Endpoint::parse(value, endpoints.base)),
            session_id,
            transport,
            events,
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    fn outgoing(&self, text: &str, kind: Option<&'static str>) -> OutgoingMessage {
        OutgoingMessage {
            message: text.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            session_id: self.session_id.clone(),
            kind,
        }
    }

    /// Post `text` to the configured endpoints. Returns `true` when an API
    /// request was started and a [`DispatchEvent`] will follow.
    pub fn send(&self, message_id: u64, text: &str) -> bool {
        let handle = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                tracing::warn!("No async runtime available, message {} not dispatched", message_id);
                return false;
            }
        };

        match self.webhook_url.as_ref().map(Endpoint::url) {
            Some(Ok(url)) => self.post_webhook(&handle, url.clone(), text),
            Some(Err(reason)) => tracing::warn!("Webhook for message {} skipped: {}", message_id, reason),
            None => {}
        }

        let url = match self.api_endpoint.as_ref().map(Endpoint::url) {
            Some(Ok(url)) => url.clone(),
            Some(Err(reason)) => {
                tracing::warn!("Message {} not dispatched: {}", message_id, reason);
                return false;
            }
            None => return false,
        };

        let transport = Arc::clone(&self.transport);
        let body = self.outgoing(text, None);
        let events = self.events.clone();
        let session_id = self.session_id.clone();
        handle.spawn(async move {
            let event = match transport.post_json(&url, &body).await {
                Ok(value) => {
                    let reply = serde_json::from_value::<ChatResponse>(value)
                        .ok()
                        .and_then(|response| response.reply)
                        .filter(|reply| !reply.is_empty());
                    DispatchEvent::Delivered {
                        session_id,
                        message_id,
                        reply,
                    }
                }
                Err(e) => {
                    tracing::warn!("Error sending message to API: {}", e);
                    DispatchEvent::Failed {
                        session_id,
                        message_id,
                        error: e.to_string(),
                    }
                }
            };
            if let Some(events) = events {
                let _ = events.send(event);
            }
        });
        true
    }

    fn post_webhook(&self, handle: &tokio::runtime::Handle, url: Url, text: &str) {
        let transport = Arc::clone(&self.transport);
        let body = self.outgoing(text, Some("new_message"));
        handle.spawn(async move {
            if let Err(e) = transport.post_json(&url, &body).await {
                tracing::warn!("Error sending webhook: {}", e);
            }
        });
    }
}
