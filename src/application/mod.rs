//! Application layer: decides what the checkout screen shows.
//!
//! `eligibility` turns a create-session reply into an immutable view state and
//! `checkout` interprets the outcome of the hosted payment flow. Neither keeps
//! state between calls, so applying the same input twice gives the same result.

pub mod checkout;
pub mod eligibility;
