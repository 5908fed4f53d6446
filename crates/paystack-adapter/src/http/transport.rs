/*
[INPUT]:  HTTP verb, endpoint path, optional JSON body, per-call options
[OUTPUT]: Raw JSON response bodies or PaystackError
[POS]:    HTTP layer - transport contract and reqwest implementation
[UPDATE]: When changing envelope handling, auth headers, or call options
*/

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, Method, StatusCode, Url};
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::http::client::ClientConfig;
use crate::http::{PaystackError, Result};

/// Per-call deadline and cancellation
///
/// Both are optional; an empty `RequestOptions` behaves like a plain call
/// bounded only by the client-wide timeout.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub timeout: Option<Duration>,
    pub cancellation: Option<CancellationToken>,
}

impl RequestOptions {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }
}

/// Executes Paystack calls
///
/// The two entry points differ in how the response envelope is treated:
/// `call` expects the standard `{status, message, data, meta}` envelope and
/// fails unless `status` is `true`; `call_simple` only checks the HTTP status
/// and hands the body back untouched.
#[async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    async fn call(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        options: &RequestOptions,
    ) -> Result<Value>;

    async fn call_simple(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        options: &RequestOptions,
    ) -> Result<Value>;
}

/// Default transport backed by reqwest
pub struct HttpTransport {
    http_client: Client,
    base_url: Url,
    secret_key: String,
    timeout: Duration,
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url.as_str())
            .field("secret_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl HttpTransport {
    pub fn new(secret_key: impl Into<String>, config: &ClientConfig) -> Result<Self> {
        let secret_key = secret_key.into();
        if secret_key.trim().is_empty() {
            return Err(PaystackError::Config("secret key must not be empty".to_string()));
        }

        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(concat!("paystack-adapter/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let mut base_url = Url::parse(&config.base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            http_client,
            base_url,
            secret_key,
            timeout: config.timeout,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Endpoint paths resolve below the base URL's path, never replacing it
    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    async fn execute(
        &self,
        op: &'static str,
        method: Method,
        path: &str,
        body: Option<Value>,
        options: &RequestOptions,
    ) -> Result<(StatusCode, Value)> {
        let url = self.endpoint(path)?;
        let deadline = options.timeout.unwrap_or(self.timeout);
        debug!(op, method = %method, path, "sending paystack request");

        let mut builder = self
            .http_client
            .request(method, url)
            .bearer_auth(&self.secret_key)
            .header(ACCEPT, "application/json")
            .timeout(deadline);
        if let Some(body) = body.as_ref() {
            builder = builder.json(body);
        }

        let exchange = async {
            let response = builder.send().await?;
            let status = response.status();
            let bytes = response.bytes().await?;
            Ok::<_, reqwest::Error>((status, bytes))
        };

        let outcome = match &options.cancellation {
            Some(token) => tokio::select! {
                biased;
                _ = token.cancelled() => {
                    debug!(op, path, "paystack request cancelled");
                    return Err(PaystackError::Cancelled);
                }
                outcome = exchange => outcome,
            },
            None => exchange.await,
        };

        let (status, bytes) = outcome.map_err(|err| {
            if err.is_timeout() {
                PaystackError::Timeout { duration: deadline }
            } else {
                PaystackError::Http(err)
            }
        })?;
        debug!(op, status = status.as_u16(), "received paystack response");

        let value = decode_body(status, &bytes)?;
        Ok((status, value))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn call(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        options: &RequestOptions,
    ) -> Result<Value> {
        let (status, value) = self.execute("call", method, path, body, options).await?;

        if value.get("status").and_then(Value::as_bool) != Some(true) {
            let message = envelope_message(&value)
                .unwrap_or_else(|| "request was not successful".to_string());
            warn!(status = status.as_u16(), %message, "paystack envelope reported failure");
            return Err(PaystackError::api_error(status, message));
        }

        Ok(value)
    }

    async fn call_simple(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        options: &RequestOptions,
    ) -> Result<Value> {
        let (_, value) = self
            .execute("call_simple", method, path, body, options)
            .await?;
        Ok(value)
    }
}

fn decode_body(status: StatusCode, bytes: &[u8]) -> Result<Value> {
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        match serde_json::from_slice::<Value>(bytes) {
            Ok(value) => value,
            Err(err) if status.is_success() => {
                return Err(PaystackError::InvalidResponse(format!(
                    "response body is not JSON: {err}"
                )));
            }
            Err(_) => {
                let message = String::from_utf8_lossy(bytes).trim().to_string();
                warn!(status = status.as_u16(), %message, "paystack request failed");
                return Err(PaystackError::api_error(status, message));
            }
        }
    };

    if !status.is_success() {
        let message = envelope_message(&value).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        });
        warn!(status = status.as_u16(), %message, "paystack request failed");
        return Err(PaystackError::api_error(status, message));
    }

    Ok(value)
}

fn envelope_message(value: &Value) -> Option<String> {
    value
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[cfg(test)]
pub(crate) mod mock {
    use std::sync::Mutex;

    use super::*;

    /// Which transport entry point a service used
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) enum CallKind {
        Standard,
        Simple,
    }

    #[derive(Debug, Clone)]
    pub(crate) struct RecordedCall {
        pub kind: CallKind,
        pub method: Method,
        pub path: String,
        pub body: Option<Value>,
        pub timeout: Option<Duration>,
    }

    type Responder = Box<dyn Fn() -> Result<Value> + Send + Sync>;

    /// In-memory transport that records every call and replays a canned answer
    pub(crate) struct RecordingTransport {
        calls: Mutex<Vec<RecordedCall>>,
        responder: Responder,
    }

    impl fmt::Debug for RecordingTransport {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_struct("RecordingTransport")
                .field("calls", &self.calls)
                .finish_non_exhaustive()
        }
    }

    impl RecordingTransport {
        pub(crate) fn returning(value: Value) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                responder: Box::new(move || Ok(value.clone())),
            }
        }

        pub(crate) fn failing(make_error: impl Fn() -> PaystackError + Send + Sync + 'static) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                responder: Box::new(move || Err(make_error())),
            }
        }

        pub(crate) fn calls(&self) -> Vec<RecordedCall> {
            self.calls.lock().expect("calls lock").clone()
        }

        fn record(
            &self,
            kind: CallKind,
            method: Method,
            path: &str,
            body: Option<Value>,
            options: &RequestOptions,
        ) -> Result<Value> {
            self.calls.lock().expect("calls lock").push(RecordedCall {
                kind,
                method,
                path: path.to_string(),
                body,
                timeout: options.timeout,
            });
            (self.responder)()
        }
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn call(
            &self,
            method: Method,
            path: &str,
            body: Option<Value>,
            options: &RequestOptions,
        ) -> Result<Value> {
            self.record(CallKind::Standard, method, path, body, options)
        }

        async fn call_simple(
            &self,
            method: Method,
            path: &str,
            body: Option<Value>,
            options: &RequestOptions,
        ) -> Result<Value> {
            self.record(CallKind::Simple, method, path, body, options)
        }
    }
}
