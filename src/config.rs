//! Runtime settings: merchant identity, display language and the endpoint the
//! session gateway talks to.

use crate::domain::message::Language;
use crate::error::{CheckoutError, Result};
use std::time::Duration;
use url::Url;

pub const ENV_MERCHANT_CODE: &str = "TABBY_MERCHANT_CODE";
pub const ENV_LANGUAGE: &str = "TABBY_LANGUAGE";
pub const ENV_API_BASE_URL: &str = "TABBY_API_BASE_URL";
pub const ENV_API_TIMEOUT_SECS: &str = "TABBY_API_TIMEOUT_SECS";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const CREATE_SESSION_PATH: &str = "create-session";

/// Values passed unchanged to the vendor SDK.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub merchant_code: String,
    pub language: Language,
}

impl Settings {
    pub fn new(merchant_code: impl Into<String>, language: Language) -> Result<Self> {
        let merchant_code = merchant_code.into().trim().to_string();
        if merchant_code.is_empty() {
            return Err(CheckoutError::Config(
                "merchant code must not be empty".to_string(),
            ));
        }
        Ok(Self {
            merchant_code,
            language,
        })
    }
}

/// Where and how long to wait for the merchant backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    pub base_url: Url,
    pub timeout: Duration,
}

impl ApiSettings {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| CheckoutError::Config(format!("invalid base url '{base_url}': {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(CheckoutError::Config(format!(
                "base url '{base_url}' cannot carry a path"
            )));
        }
        if timeout.is_zero() {
            return Err(CheckoutError::Config(
                "timeout must be greater than zero".to_string(),
            ));
        }
        Ok(Self { base_url, timeout })
    }

    /// Full URL of the create-session endpoint below `base_url`.
    pub fn create_session_url(&self) -> Result<Url> {
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(CREATE_SESSION_PATH)
            .map_err(|e| CheckoutError::Config(e.to_string()))
    }
}
