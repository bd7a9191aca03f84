use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a freshly created session as reported by the merchant backend.
///
/// Any string deserializes; values other than `created` and `rejected` are kept
/// verbatim in `Other` so the reconciler can report them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SessionStatus {
    Created,
    Rejected,
    Other(String),
}

impl From<String> for SessionStatus {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "created" => SessionStatus::Created,
            "rejected" => SessionStatus::Rejected,
            _ => SessionStatus::Other(value),
        }
    }
}

impl From<SessionStatus> for String {
    fn from(status: SessionStatus) -> Self {
        match status {
            SessionStatus::Created => "created".to_string(),
            SessionStatus::Rejected => "rejected".to_string(),
            SessionStatus::Other(value) => value,
        }
    }
}

/// Business reason attached to a rejected session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RejectionReason {
    OrderAmountTooHigh,
    OrderAmountTooLow,
    Other(String),
}

impl RejectionReason {
    pub fn as_str(&self) -> &str {
        match self {
            RejectionReason::OrderAmountTooHigh => "order_amount_too_high",
            RejectionReason::OrderAmountTooLow => "order_amount_too_low",
            RejectionReason::Other(value) => value,
        }
    }
}

impl From<String> for RejectionReason {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "order_amount_too_high" => RejectionReason::OrderAmountTooHigh,
            "order_amount_too_low" => RejectionReason::OrderAmountTooLow,
            _ => RejectionReason::Other(value),
        }
    }
}

impl From<RejectionReason> for String {
    fn from(reason: RejectionReason) -> Self {
        match reason {
            RejectionReason::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reply of the create-session endpoint.
///
/// Every field is optional: a missing or `null` key maps to `None` and unknown
/// keys are ignored. Both camelCase and snake_case spellings are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default, alias = "status_code")]
    pub status_code: Option<i64>,
    #[serde(default, alias = "session_status")]
    pub session_status: Option<SessionStatus>,
    #[serde(default)]
    pub configuration: Option<Configuration>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(default)]
    pub products: Option<Products>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Products {
    #[serde(default)]
    pub installments: Option<Installments>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Installments {
    #[serde(default, rename = "type")]
    pub r#type: Option<String>,
    #[serde(default, alias = "is_available")]
    pub is_available: Option<bool>,
    #[serde(default, alias = "rejection_reason")]
    pub rejection_reason: Option<RejectionReason>,
}

impl SessionResponse {
    /// Parses a reply body. Fails only on invalid JSON or mistyped values.
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str(body)
    }

    pub fn installments(&self) -> Option<&Installments> {
        self.configuration
            .as_ref()?
            .products
            .as_ref()?
            .installments
            .as_ref()
    }

    pub fn rejection_reason(&self) -> Option<&RejectionReason> {
        self.installments()?.rejection_reason.as_ref()
    }
}
