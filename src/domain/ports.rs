use super::order::OrderId;
use super::session::SessionResponse;
use crate::error::NetworkError;
use async_trait::async_trait;

/// Creates one payment session per call. Implementations must not retry.
#[async_trait]
pub trait SessionGateway: Send + Sync {
    async fn create_session(&self, order_id: &OrderId) -> Result<SessionResponse, NetworkError>;
}

pub type SessionGatewayBox = Box<dyn SessionGateway>;
