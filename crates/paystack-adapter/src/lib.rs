/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Paystack adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    DedicatedAccountService,
    HttpTransport,
    PaystackClient,
    PaystackError,
    RefundService,
    RequestOptions,
    Result,
    Transport,
};

pub use tokio_util::sync::CancellationToken;

// Re-export all types
pub use types::*;
