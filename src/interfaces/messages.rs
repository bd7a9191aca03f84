use crate::domain::message::{Language, MessageKey};

/// Shown for an expired checkout in every language.
pub const EXPIRED_MESSAGE: &str = "expired";

/// Localized user-facing strings, looked up by key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MessageCatalog {
    language: Language,
}

impl MessageCatalog {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn lookup(&self, key: MessageKey) -> &'static str {
        match (self.language, key) {
            (_, MessageKey::CheckoutExpired) => EXPIRED_MESSAGE,
            (Language::English, MessageKey::GenericRejection) => {
                "Sorry, Tabby is unable to approve this purchase. Please use an alternative payment method for your order."
            }
            (Language::English, MessageKey::AmountTooHigh) => {
                "This purchase is above your current spending limit with Tabby, try a smaller cart or use another payment method."
            }
            (Language::English, MessageKey::AmountTooLow) => {
                "The purchase amount is below the minimum amount required to use Tabby, try adding more items or use another payment method."
            }
            (Language::English, MessageKey::CheckoutClosed) => {
                "You aborted the payment. Please retry or choose another payment method."
            }
            (Language::Arabic, MessageKey::GenericRejection) => {
                "نأسف، تابي غير قادرة على الموافقة على هذه العملية. الرجاء استخدام طريقة دفع أخرى."
            }
            (Language::Arabic, MessageKey::AmountTooHigh) => {
                "قيمة الطلب تفوق الحد الأقصى المسموح به حاليًا مع تابي. يُرجى تخفيض قيمة السلة أو استخدام وسيلة دفع أخرى."
            }
            (Language::Arabic, MessageKey::AmountTooLow) => {
                "قيمة الطلب أقل من الحد الأدنى المطلوب لاستخدام خدمة تابي. يُرجى زيادة قيمة الطلب أو استخدام وسيلة دفع أخرى."
            }
            (Language::Arabic, MessageKey::CheckoutClosed) => {
                "لقد ألغيت الدفعة. فضلاً حاول مجددًا أو اختر طريقة دفع أخرى."
            }
        }
    }
}
