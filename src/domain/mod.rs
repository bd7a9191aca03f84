//! Domain layer: the session reply shape, checkout outcomes, payment options
//! and the port through which sessions are created.

pub mod message;
pub mod order;
pub mod outcome;
pub mod payment_option;
pub mod ports;
pub mod session;
