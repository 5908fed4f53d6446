/*
[INPUT]:  HTTP configuration (base URL, timeouts) and secret key, or a custom transport
[OUTPUT]: Configured Paystack client handing out per-resource services
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or new resource services
*/

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::http::dedicated_account::DedicatedAccountService;
use crate::http::refund::RefundService;
use crate::http::transport::{HttpTransport, RequestOptions, Transport};
use crate::http::Result;

/// Base URL for the Paystack API
pub const DEFAULT_BASE_URL: &str = "https://api.paystack.co";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Endpoint paths are appended below this URL, so a proxy prefix such as
    /// `https://gateway.example.com/paystack` is kept
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Main client for the Paystack API
///
/// Cheap to clone; every clone shares the same transport.
#[derive(Debug, Clone)]
pub struct PaystackClient {
    transport: Arc<dyn Transport>,
}

impl PaystackClient {
    /// Create a new client with default configuration
    pub fn new(secret_key: impl Into<String>) -> Result<Self> {
        Self::with_config(secret_key, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(secret_key: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(secret_key, &config)?;
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// Create a new client pointed at an explicit base URL
    pub fn with_config_and_base_url(
        secret_key: impl Into<String>,
        config: ClientConfig,
        base_url: &str,
    ) -> Result<Self> {
        let config = ClientConfig {
            base_url: base_url.to_string(),
            ..config
        };
        Self::with_config(secret_key, config)
    }

    /// Create a client over any transport implementation
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Dedicated virtual account endpoints
    pub fn dedicated_accounts(&self) -> DedicatedAccountService<'_> {
        DedicatedAccountService::new(self)
    }

    /// Refund endpoints
    pub fn refunds(&self) -> RefundService<'_> {
        RefundService::new(self)
    }

    /// Issue a standard-envelope call and decode the body
    pub(crate) async fn call_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        options: &RequestOptions,
    ) -> Result<T> {
        let value = self.transport.call(method, path, body, options).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Issue a simple call and decode the body
    pub(crate) async fn call_simple_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        options: &RequestOptions,
    ) -> Result<T> {
        let value = self
            .transport
            .call_simple(method, path, body, options)
            .await?;
        Ok(serde_json::from_value(value)?)
    }
}
