use crate::config::Settings;
use crate::domain::message::{Language, MessageKey};
use crate::domain::order::OrderId;
use crate::domain::outcome::CheckoutOutcome;
use serde::Serialize;
use tracing::{info, warn};

/// What the screen does once the hosted checkout reports back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum CheckoutEffect {
    /// Payment authorized; continue with order confirmation.
    Success { order_id: OrderId },
    /// Non-fatal notice; the user may restart from order creation.
    Notice { message: MessageKey },
    /// The user backed out without an outcome.
    Dismissed,
}

impl CheckoutEffect {
    pub fn is_success(&self) -> bool {
        matches!(self, CheckoutEffect::Success { .. })
    }
}

/// Maps an outcome to the notice it shows, or `None` for the success path.
pub fn interpret(outcome: CheckoutOutcome) -> Option<MessageKey> {
    match outcome {
        CheckoutOutcome::Authorized => None,
        CheckoutOutcome::Rejected => Some(MessageKey::GenericRejection),
        CheckoutOutcome::Closed => Some(MessageKey::CheckoutClosed),
        CheckoutOutcome::Expired => Some(MessageKey::CheckoutExpired),
    }
}

/// Parameters handed unchanged to the vendor SDK when launching checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchParams {
    pub merchant_code: String,
    pub language: Language,
    pub order_id: OrderId,
}

/// One pass through the hosted checkout for a single order.
///
/// `finish` takes the attempt by value, so an outcome can be applied at most once.
#[derive(Debug)]
pub struct CheckoutAttempt {
    params: LaunchParams,
}

impl CheckoutAttempt {
    pub fn begin(settings: &Settings, order_id: OrderId) -> Self {
        Self {
            params: LaunchParams {
                merchant_code: settings.merchant_code.clone(),
                language: settings.language,
                order_id,
            },
        }
    }

    pub fn launch_params(&self) -> &LaunchParams {
        &self.params
    }

    pub fn finish(self, outcome: Option<CheckoutOutcome>) -> CheckoutEffect {
        let order_id = self.params.order_id;
        let Some(outcome) = outcome else {
            info!(%order_id, "checkout dismissed without outcome");
            return CheckoutEffect::Dismissed;
        };

        match interpret(outcome) {
            None => {
                info!(%order_id, "checkout authorized");
                CheckoutEffect::Success { order_id }
            }
            Some(message) => {
                if let Err(err) = outcome.into_result() {
                    warn!(%order_id, error = %err, "checkout did not complete");
                }
                CheckoutEffect::Notice { message }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attempt() -> CheckoutAttempt {
        let settings = Settings::new("shop_ae", Language::Arabic).unwrap();
        CheckoutAttempt::begin(&settings, OrderId::new("ord-7").unwrap())
    }

    #[test]
    fn test_launch_params_carry_settings() {
        let attempt = attempt();
        let params = attempt.launch_params();
        assert_eq!(params.merchant_code, "shop_ae");
        assert_eq!(params.language, Language::Arabic);
        assert_eq!(params.order_id.as_str(), "ord-7");
    }

    #[test]
    fn test_outcome_effects() {
        assert_eq!(
            attempt().finish(Some(CheckoutOutcome::Authorized)),
            CheckoutEffect::Success {
                order_id: OrderId::new("ord-7").unwrap()
            }
        );
        assert_eq!(
            attempt().finish(Some(CheckoutOutcome::Rejected)),
            CheckoutEffect::Notice {
                message: MessageKey::GenericRejection
            }
        );
        assert_eq!(
            attempt().finish(Some(CheckoutOutcome::Closed)),
            CheckoutEffect::Notice {
                message: MessageKey::CheckoutClosed
            }
        );
        assert_eq!(
            attempt().finish(Some(CheckoutOutcome::Expired)),
            CheckoutEffect::Notice {
                message: MessageKey::CheckoutExpired
            }
        );
    }

    #[test]
    fn test_missing_outcome_is_a_no_op() {
        assert_eq!(attempt().finish(None), CheckoutEffect::Dismissed);
    }

    #[test]
    fn test_only_authorized_reaches_success() {
        let successes = CheckoutOutcome::ALL
            .into_iter()
            .filter(|outcome| attempt().finish(Some(*outcome)).is_success())
            .count();
        assert_eq!(successes, 1);
    }

    #[test]
    fn test_effect_serialization() {
        let json = serde_json::to_value(CheckoutEffect::Notice {
            message: MessageKey::CheckoutClosed,
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"effect": "notice", "message": "checkout_closed"})
        );
    }
}
