//! Request and response types
//!
//! Caller-supplied inputs, the structures assembled from the scraped
//! pages, and the JSON envelope they are returned in.

pub mod request;
pub mod response;

pub use request::{Credentials, ScrapeQuery};
pub use response::{
    AccountData, PaymentRecord, PingResponse, ScrapeResponse, UsageRecord, UserInfo,
};
