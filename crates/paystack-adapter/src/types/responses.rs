/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::models::{serde_helpers, DedicatedAccountCustomer, DedicatedBankAccount, ListMeta, RefundDetail};

/// Acknowledgment of `POST /dedicated_account/assign`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankAccountResponse {
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub status: bool,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SingleDedicatedBankAccount {
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub status: bool,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub message: String,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub data: DedicatedAccountCustomer,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankAccountList {
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub meta: ListMeta,
    #[serde(rename = "data")]
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub values: Vec<DedicatedBankAccount>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefundResponse {
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub status: bool,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub message: String,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub data: RefundDetail,
}
