//! Response type definitions
//!
//! Defines the structures assembled from the scraped portal pages and the
//! JSON envelope returned to callers.

use serde::{Deserialize, Serialize};

/// Labeled account fields scraped from the dashboard page
///
/// Every field is best-effort: when the corresponding markup element is
/// absent the value is the literal string `"N/A"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    /// Customer display name
    pub name: String,

    /// Customer identifier
    pub id: String,

    /// Portal login username
    pub username: String,

    /// Registered mobile number
    pub mobile: String,

    /// Account status (active, suspended, ...)
    #[serde(rename = "accountStatus")]
    pub account_status: String,

    /// Current connection status
    #[serde(rename = "connectionStatus")]
    pub connection_status: String,

    /// Subscription expiry date
    #[serde(rename = "expiryDate")]
    pub expiry_date: String,

    /// Subscribed package name
    pub package: String,

    /// Plan rate description
    #[serde(rename = "planRate")]
    pub plan_rate: String,
}

/// One row of the dashboard's payment-history table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// Date the payment was made
    #[serde(rename = "payDate")]
    pub pay_date: String,

    /// Billed amount
    #[serde(rename = "billAmount")]
    pub bill_amount: String,

    /// Amount received
    #[serde(rename = "receivedAmount")]
    pub received_amount: String,

    /// Free-text remarks, internal whitespace collapsed
    pub remarks: String,
}

/// One row of the usage log's session-history table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageRecord {
    /// Session start timestamp
    #[serde(rename = "connectionDate")]
    pub connection_date: String,

    /// Session end timestamp
    #[serde(rename = "disconnectionDate")]
    pub disconnection_date: String,

    /// Uploaded volume
    pub upload: String,

    /// Downloaded volume
    pub download: String,

    /// Session duration
    #[serde(rename = "sessionTime")]
    pub session_time: String,
}

/// Everything scraped in one call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountData {
    /// Labeled dashboard fields
    #[serde(rename = "userInfo")]
    pub user_info: UserInfo,

    /// Payment-history rows in source order
    #[serde(rename = "paymentHistory")]
    pub payment_history: Vec<PaymentRecord>,

    /// Usage-session rows in source order
    #[serde(rename = "usageHistory")]
    pub usage_history: Vec<UsageRecord>,
}

/// JSON envelope for the scrape endpoint
///
/// `data` is present iff `success` is true; `error` carries the failure
/// message iff `success` is false and is serialized as `null` on success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeResponse {
    /// Whether the scrape completed
    pub success: bool,

    /// Aggregated account data, absent on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<AccountData>,

    /// Human-readable failure message, `null` on success
    pub error: Option<String>,
}

impl ScrapeResponse {
    /// Build the success envelope around scraped account data
    pub fn success(data: AccountData) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Build the failure envelope around an error message
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

/// Ping response for health checks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PingResponse {
    /// Server uptime in seconds
    pub server_uptime: u64,

    /// Server version
    pub version: String,
}

impl PingResponse {
    /// Create a new ping response
    pub fn new(server_uptime: u64, version: impl Into<String>) -> Self {
        Self {
            server_uptime,
            version: version.into(),
        }
    }
}
