/*
[INPUT]:  Client configuration, secret key, and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod dedicated_account;
pub mod error;
pub mod pagination;
pub mod refund;
pub mod transport;

pub use error::{PaystackError, Result};

pub use client::{ClientConfig, PaystackClient, DEFAULT_BASE_URL};
pub use dedicated_account::DedicatedAccountService;
pub use pagination::{paginate_path, DEFAULT_PAGE_SIZE};
pub use refund::RefundService;
pub use transport::{HttpTransport, RequestOptions, Transport};
