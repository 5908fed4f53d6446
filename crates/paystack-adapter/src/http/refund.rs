/*
[INPUT]:  RefundRequest
[OUTPUT]: Refund detail with transaction snapshot
[POS]:    HTTP layer - refund endpoints (simple call, full body returned)
[UPDATE]: When adding refund endpoints or changing refund payloads
*/

use std::time::Duration;

use reqwest::Method;
use tokio_util::sync::CancellationToken;

use crate::http::transport::RequestOptions;
use crate::http::{PaystackClient, Result};
use crate::types::{RefundRequest, RefundResponse};

const REFUND_PATH: &str = "/refund";

/// Refund operations
///
/// See <https://paystack.com/docs/api/refund/>
#[derive(Debug, Clone)]
pub struct RefundService<'a> {
    client: &'a PaystackClient,
    options: RequestOptions,
}

impl<'a> RefundService<'a> {
    pub(crate) fn new(client: &'a PaystackClient) -> Self {
        Self {
            client,
            options: RequestOptions::default(),
        }
    }

    /// Bound every call made through this handle by `timeout`
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.options = self.options.with_timeout(timeout);
        self
    }

    /// Abort in-flight calls when `token` is cancelled
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.options = self.options.with_cancellation(token);
        self
    }

    /// Refund a transaction, fully or partially
    ///
    /// POST /refund
    pub async fn refund(&self, req: &RefundRequest) -> Result<RefundResponse> {
        let body = serde_json::to_value(req)?;
        self.client
            .call_simple_json(Method::POST, REFUND_PATH, Some(body), &self.options)
            .await
    }
}
