use proptest::option;
use proptest::prelude::*;
use tabby_checkout::application::eligibility::{EligibilityState, reconcile};
use tabby_checkout::domain::message::MessageKey;
use tabby_checkout::domain::payment_option::OptionState;
use tabby_checkout::domain::session::{
    Configuration, Installments, Products, RejectionReason, SessionResponse, SessionStatus,
};
use tabby_checkout::error::NetworkError;

fn known_reason(reason: &Option<String>) -> bool {
    matches!(
        reason.as_deref().map(str::to_ascii_lowercase).as_deref(),
        Some("order_amount_too_high" | "order_amount_too_low")
    )
}

fn response(status: Option<String>, reason: Option<String>, flags: (Option<bool>, Option<i64>, Option<bool>)) -> SessionResponse {
    let (success, status_code, is_available) = flags;
    SessionResponse {
        success,
        status_code,
        session_status: status.map(SessionStatus::from),
        configuration: Some(Configuration {
            products: Some(Products {
                installments: Some(Installments {
                    r#type: Some("installments".to_string()),
                    is_available,
                    rejection_reason: reason.map(RejectionReason::from),
                }),
            }),
        }),
    }
}

fn flags() -> impl Strategy<Value = (Option<bool>, Option<i64>, Option<bool>)> {
    (
        option::of(any::<bool>()),
        option::of(100i64..600),
        option::of(any::<bool>()),
    )
}

fn network_error() -> impl Strategy<Value = NetworkError> {
    prop_oneof![
        Just(NetworkError::Timeout),
        (400u16..600, "[a-z ]{0,20}").prop_map(|(status, message)| NetworkError::Status { status, message }),
        "[a-z ]{0,20}".prop_map(NetworkError::Connection),
        "[a-z ]{0,20}".prop_map(NetworkError::MalformedBody),
    ]
}

proptest! {
    #[test]
    fn created_always_enables(reason in option::of("[a-z_]{0,24}"), flags in flags()) {
        let reply = Ok(response(Some("created".into()), reason, flags));
        prop_assert_eq!(reconcile(&reply), EligibilityState::ELIGIBLE);
    }

    #[test]
    fn amount_too_high_selects_high_limit_message(flags in flags()) {
        let reply = Ok(response(Some("rejected".into()), Some("order_amount_too_high".into()), flags));
        prop_assert_eq!(reconcile(&reply), EligibilityState::ineligible(MessageKey::AmountTooHigh));
    }

    #[test]
    fn amount_too_low_selects_low_limit_message(flags in flags()) {
        let reply = Ok(response(Some("rejected".into()), Some("order_amount_too_low".into()), flags));
        prop_assert_eq!(reconcile(&reply), EligibilityState::ineligible(MessageKey::AmountTooLow));
    }

    #[test]
    fn other_rejections_select_generic_message(reason in option::of("[a-z_]{0,24}"), flags in flags()) {
        prop_assume!(!known_reason(&reason));
        let reply = Ok(response(Some("rejected".into()), reason, flags));
        prop_assert_eq!(reconcile(&reply), EligibilityState::ineligible(MessageKey::GenericRejection));
    }

    #[test]
    fn unrecognized_status_disables(status in option::of("[a-z]{1,12}"), reason in option::of("[a-z_]{0,24}"), flags in flags()) {
        prop_assume!(!matches!(status.as_deref(), Some("created" | "rejected")));
        let reply = Ok(response(status, reason, flags));
        prop_assert_eq!(reconcile(&reply), EligibilityState::ineligible(MessageKey::GenericRejection));
    }

    #[test]
    fn network_errors_disable(err in network_error()) {
        let state = reconcile(&Err(err));
        prop_assert_eq!(state.installments, OptionState::Disabled);
        prop_assert_eq!(state.message, Some(MessageKey::GenericRejection));
    }

    #[test]
    fn reconcile_is_idempotent(status in option::of(prop_oneof![Just("created".to_string()), Just("rejected".to_string()), "[a-z]{1,8}"]), reason in option::of("[a-z_]{0,24}"), flags in flags()) {
        let reply = Ok(response(status, reason, flags));
        prop_assert_eq!(reconcile(&reply), reconcile(&reply));
    }
}
