use crate::domain::message::MessageKey;
use crate::domain::order::OrderId;
use crate::domain::payment_option::{OptionState, PaymentMethod, PaymentOptions};
use crate::domain::ports::SessionGatewayBox;
use crate::domain::session::{RejectionReason, SessionResponse, SessionStatus};
use crate::error::{CheckoutError, NetworkError, Result};
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument, warn};

/// What the installments option should look like after a session attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EligibilityState {
    pub installments: OptionState,
    pub message: Option<MessageKey>,
}

impl EligibilityState {
    pub const ELIGIBLE: Self = Self {
        installments: OptionState::Enabled,
        message: None,
    };

    pub fn ineligible(message: MessageKey) -> Self {
        Self {
            installments: OptionState::Disabled,
            message: Some(message),
        }
    }

    pub fn is_eligible(&self) -> bool {
        self.installments == OptionState::Enabled
    }

    /// Returns the refreshed option list with installments set accordingly.
    pub fn apply(&self, options: &PaymentOptions) -> PaymentOptions {
        options.with_state(PaymentMethod::Installments, self.installments)
    }
}

/// Result of one eligibility check: the state and the list it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EligibilityUpdate {
    pub state: EligibilityState,
    pub options: PaymentOptions,
}

/// Maps a gateway reply onto the error taxonomy. `created` is the only success.
pub fn classify(reply: &std::result::Result<SessionResponse, NetworkError>) -> Result<()> {
    let response = match reply {
        Ok(response) => response,
        Err(err) => return Err(CheckoutError::Network(err.clone())),
    };

    match &response.session_status {
        Some(SessionStatus::Created) => Ok(()),
        Some(SessionStatus::Rejected) => Err(CheckoutError::RejectedByProvider {
            reason: response.rejection_reason().cloned(),
        }),
        Some(SessionStatus::Other(status)) => Err(CheckoutError::UnknownStatus(Some(status.clone()))),
        None => Err(CheckoutError::UnknownStatus(None)),
    }
}

pub fn rejection_message(reason: Option<&RejectionReason>) -> MessageKey {
    match reason {
        Some(RejectionReason::OrderAmountTooHigh) => MessageKey::AmountTooHigh,
        Some(RejectionReason::OrderAmountTooLow) => MessageKey::AmountTooLow,
        Some(RejectionReason::Other(_)) | None => MessageKey::GenericRejection,
    }
}

/// Decides whether installments are offered. Every failure is absorbed into a
/// disabled option with a message.
pub fn reconcile(reply: &std::result::Result<SessionResponse, NetworkError>) -> EligibilityState {
    match classify(reply) {
        Ok(()) => EligibilityState::ELIGIBLE,
        Err(CheckoutError::RejectedByProvider { reason }) => {
            EligibilityState::ineligible(rejection_message(reason.as_ref()))
        }
        Err(_) => EligibilityState::ineligible(MessageKey::GenericRejection),
    }
}

/// Runs the create-session call for an order and reconciles the reply.
pub struct EligibilityService {
    gateway: SessionGatewayBox,
}

impl EligibilityService {
    pub fn new(gateway: SessionGatewayBox) -> Self {
        Self { gateway }
    }

    /// Issues exactly one gateway call. Never fails: errors become a disabled
    /// installments option.
    #[instrument(skip(self, order_id, options), fields(order_id = %order_id))]
    pub async fn check(&self, order_id: &OrderId, options: &PaymentOptions) -> EligibilityUpdate {
        let reply = self.gateway.create_session(order_id).await;
        let update = Self::settle(&reply, options);
        info!(installments = ?update.state.installments, "eligibility settled");
        update
    }

    /// Like `check`, but yields `None` once `cancel` fires so a closed screen
    /// never receives the update.
    #[instrument(skip(self, order_id, options, cancel), fields(order_id = %order_id))]
    pub async fn check_until_cancelled(
        &self,
        order_id: &OrderId,
        options: &PaymentOptions,
        cancel: &CancellationToken,
    ) -> Option<EligibilityUpdate> {
        let reply = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                info!("eligibility check cancelled before reply");
                return None;
            }
            reply = self.gateway.create_session(order_id) => reply,
        };

        if cancel.is_cancelled() {
            info!("discarding reply for cancelled eligibility check");
            return None;
        }
        Some(Self::settle(&reply, options))
    }

    fn settle(
        reply: &std::result::Result<SessionResponse, NetworkError>,
        options: &PaymentOptions,
    ) -> EligibilityUpdate {
        if let Err(err) = classify(reply) {
            warn!(error = %err, "installments unavailable");
        }
        let state = reconcile(reply);
        EligibilityUpdate {
            state,
            options: state.apply(options),
        }
    }
}
