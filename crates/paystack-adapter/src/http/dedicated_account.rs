/*
[INPUT]:  BankAccountRequest, account id codes, pagination count/offset
[OUTPUT]: Assignment acknowledgments, account details, paginated account lists
[POS]:    HTTP layer - dedicated virtual account endpoints
[UPDATE]: When adding dedicated account endpoints or changing list filters
*/

// ### Dedicated Account Endpoints

use std::time::Duration;

use reqwest::Method;
use tokio_util::sync::CancellationToken;

use crate::http::pagination::{paginate_path, DEFAULT_PAGE_SIZE};
use crate::http::transport::RequestOptions;
use crate::http::{PaystackClient, Result};
use crate::types::{BankAccountList, BankAccountRequest, BankAccountResponse, SingleDedicatedBankAccount};

const ASSIGN_PATH: &str = "/dedicated_account/assign";
const LIST_PATH: &str = "/dedicated_account?active=true&currency=NGN";

/// Dedicated virtual account operations
///
/// See <https://paystack.com/docs/api/dedicated-virtual-account>
#[derive(Debug, Clone)]
pub struct DedicatedAccountService<'a> {
    client: &'a PaystackClient,
    options: RequestOptions,
}

impl<'a> DedicatedAccountService<'a> {
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

    /// Create and assign a dedicated account
    ///
    /// POST /dedicated_account/assign
    pub async fn create(&self, req: &BankAccountRequest) -> Result<BankAccountResponse> {
        let body = serde_json::to_value(req)?;
        self.client
            .call_json(Method::POST, ASSIGN_PATH, Some(body), &self.options)
            .await
    }

    /// Fetch a single dedicated account
    ///
    /// GET /dedicated_account/{id_code}
    pub async fn get(&self, id_code: &str) -> Result<SingleDedicatedBankAccount> {
        let endpoint = format!("/dedicated_account/{}", id_code);
        self.client
            .call_json(Method::GET, &endpoint, None, &self.options)
            .await
    }

    /// First page of active NGN accounts
    pub async fn list(&self) -> Result<BankAccountList> {
        self.list_n(DEFAULT_PAGE_SIZE, 0).await
    }

    /// Active NGN accounts, `count` per page
    ///
    /// GET /dedicated_account?active=true&currency=NGN&perPage={count}&page={offset}
    pub async fn list_n(&self, count: u32, offset: u32) -> Result<BankAccountList> {
        let endpoint = paginate_path(LIST_PATH, count, offset);
        self.client
            .call_json(Method::GET, &endpoint, None, &self.options)
            .await
    }
}
