use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Card,
    CashOnDelivery,
    /// Buy-now-pay-later installments, gated by session eligibility.
    Installments,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionState {
    Enabled,
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaymentOption {
    pub method: PaymentMethod,
    pub state: OptionState,
}

/// Immutable snapshot of the payment options offered on the checkout screen.
///
/// Updates never mutate in place: `with_state` returns a new snapshot that the
/// presentation layer swaps in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentOptions {
    options: Vec<PaymentOption>,
}

impl Default for PaymentOptions {
    fn default() -> Self {
        Self::new([
            PaymentOption {
                method: PaymentMethod::Card,
                state: OptionState::Enabled,
            },
            PaymentOption {
                method: PaymentMethod::CashOnDelivery,
                state: OptionState::Enabled,
            },
            PaymentOption {
                method: PaymentMethod::Installments,
                state: OptionState::Disabled,
            },
        ])
    }
}

impl PaymentOptions {
    /// Builds a snapshot, keeping the first entry for a repeated method.
    pub fn new(options: impl IntoIterator<Item = PaymentOption>) -> Self {
        let mut unique: Vec<PaymentOption> = Vec::new();
        for option in options {
            if !unique.iter().any(|o| o.method == option.method) {
                unique.push(option);
            }
        }
        Self { options: unique }
    }

    /// Returns a copy with `method` set to `state`; unknown methods are appended.
    pub fn with_state(&self, method: PaymentMethod, state: OptionState) -> Self {
        let mut options = self.options.clone();
        match options.iter_mut().find(|o| o.method == method) {
            Some(option) => option.state = state,
            None => options.push(PaymentOption { method, state }),
        }
        Self { options }
    }

    pub fn state_of(&self, method: PaymentMethod) -> Option<OptionState> {
        self.options
            .iter()
            .find(|o| o.method == method)
            .map(|o| o.state)
    }

    /// The list of methods the user can currently pick, in display order.
    pub fn available(&self) -> Vec<PaymentMethod> {
        self.options
            .iter()
            .filter(|o| o.state == OptionState::Enabled)
            .map(|o| o.method)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PaymentOption> {
        self.options.iter()
    }
}
