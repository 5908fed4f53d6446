/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ### Dedicated accounts

/// Dedicated account as it appears in list results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DedicatedBankAccount {
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub customer: AccountCustomer,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub bank: AccountBank,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub account_name: String,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub account_number: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub currency: String,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub split_config: SplitConfig,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub active: bool,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub assigned: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountCustomer {
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub first_name: String,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub last_name: String,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub customer_code: String,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub risk_action: String,
    /// Format varies between accounts
    pub international_format_phone: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountBank {
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub slug: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub subaccount: String,
}

/// Customer record returned by `GET /dedicated_account/{id}`
///
/// Shares a few fields with [`DedicatedBankAccount`] but the remote API
/// returns a different shape here, so the two stay separate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DedicatedAccountCustomer {
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub transactions: Vec<Value>,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub subscriptions: Vec<Value>,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub authorizations: Vec<Value>,
    pub first_name: Value,
    pub last_name: Value,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub email: String,
    pub phone: Value,
    pub metadata: Value,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub domain: String,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub customer_code: String,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub risk_action: String,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub integration: i64,
    #[serde(rename = "createdAt")]
    pub created_at_camel: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt")]
    pub updated_at_camel: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub total_transactions: i64,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub total_transaction_value: Vec<Value>,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub dedicated_account: DedicatedAccountDetail,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DedicatedAccountDetail {
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub account_name: String,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub account_number: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub currency: String,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub active: bool,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub assigned: bool,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub provider: AccountProvider,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub assignment: AccountAssignment,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountProvider {
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub provider_slug: String,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub bank_id: i64,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub bank_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountAssignment {
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub assignee_id: i64,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub assignee_type: String,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub account_type: String,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub integration: i64,
}

/// Pagination block returned alongside list results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListMeta {
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub total: i64,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub skipped: i64,
    #[serde(rename = "perPage")]
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub per_page: i64,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub page: i64,
    #[serde(rename = "pageCount")]
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub page_count: i64,
}

// ### Refunds

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefundDetail {
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub transaction: RefundTransaction,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub integration: i64,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub deducted_amount: i64,
    pub channel: Value,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub merchant_note: String,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub customer_note: String,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub refunded_by: String,
    pub expected_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub currency: String,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub domain: String,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub amount: i64,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub fully_deducted: bool,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub id: i64,
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Snapshot of the transaction being refunded
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefundTransaction {
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub domain: String,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub reference: String,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub amount: i64,
    pub paid_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub channel: String,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub currency: String,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub authorization: TransactionAuthorization,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub customer: TransactionCustomer,
    /// Schema differs between plan and no-plan transactions
    pub plan: Value,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub subaccount: TransactionSubaccount,
    pub split: Value,
    pub order_id: Value,
    #[serde(rename = "paidAt")]
    pub paid_at_camel: Option<DateTime<Utc>>,
    pub pos_transaction_data: Value,
    pub source: Value,
    pub fees_breakdown: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionAuthorization {
    pub exp_month: Value,
    pub exp_year: Value,
    pub account_name: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionCustomer {
    pub international_format_phone: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionSubaccount {
    pub currency: Value,
}

pub(crate) mod serde_helpers {
    use serde::{Deserialize, Deserializer};

    /// Paystack sends `null` for blank strings and empty sub-objects
    pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Default + Deserialize<'de>,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }
}
