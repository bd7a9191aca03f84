use crate::error::{CheckoutError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Terminal result of the hosted checkout, delivered once per attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutOutcome {
    Authorized,
    Rejected,
    Closed,
    Expired,
}

impl CheckoutOutcome {
    pub const ALL: [CheckoutOutcome; 4] = [
        CheckoutOutcome::Authorized,
        CheckoutOutcome::Rejected,
        CheckoutOutcome::Closed,
        CheckoutOutcome::Expired,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutOutcome::Authorized => "authorized",
            CheckoutOutcome::Rejected => "rejected",
            CheckoutOutcome::Closed => "closed",
            CheckoutOutcome::Expired => "expired",
        }
    }

    /// Maps the outcome onto the error taxonomy. Only `Authorized` is `Ok`.
    pub fn into_result(self) -> Result<()> {
        match self {
            CheckoutOutcome::Authorized => Ok(()),
            CheckoutOutcome::Rejected => Err(CheckoutError::RejectedByProvider { reason: None }),
            CheckoutOutcome::Closed => Err(CheckoutError::CheckoutAbandoned),
            CheckoutOutcome::Expired => Err(CheckoutError::CheckoutExpired),
        }
    }
}

impl FromStr for CheckoutOutcome {
    type Err = CheckoutError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|outcome| outcome.as_str() == wanted)
            .ok_or_else(|| CheckoutError::Config(format!("unknown checkout outcome '{s}'")))
    }
}

impl fmt::Display for CheckoutOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
