use crate::domain::order::OrderId;
use crate::domain::ports::SessionGateway;
use crate::domain::session::SessionResponse;
use crate::error::NetworkError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

type Reply = Result<SessionResponse, NetworkError>;

/// A scripted gateway answering from a table of canned replies.
///
/// Uses `Arc<RwLock<HashMap<OrderId, Reply>>>` so clones share the script and
/// the call counter. Orders without a script answer with HTTP 404.
#[derive(Default, Clone)]
pub struct InMemorySessionGateway {
    replies: Arc<RwLock<HashMap<OrderId, Reply>>>,
    calls: Arc<AtomicUsize>,
    latency: Option<Duration>,
}

impl InMemorySessionGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delays every reply by `latency`, to exercise cancellation.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub async fn insert(&self, order_id: OrderId, reply: Reply) {
        let mut replies = self.replies.write().await;
        replies.insert(order_id, reply);
    }

    /// Number of `create_session` calls received so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionGateway for InMemorySessionGateway {
    async fn create_session(&self, order_id: &OrderId) -> Reply {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        let replies = self.replies.read().await;
        replies.get(order_id).cloned().unwrap_or_else(|| {
            Err(NetworkError::Status {
                status: 404,
                message: format!("order {order_id} not found"),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::SessionStatus;

    #[tokio::test]
    async fn test_scripted_reply() {
        let gateway = InMemorySessionGateway::new();
        let order = OrderId::new("ord-1").unwrap();
        let reply = SessionResponse {
            session_status: Some(SessionStatus::Created),
            ..Default::default()
        };
        gateway.insert(order.clone(), Ok(reply.clone())).await;

        assert_eq!(gateway.create_session(&order).await, Ok(reply));
        assert_eq!(gateway.calls(), 1);
    }

    #[tokio::test]
    async fn test_unknown_order_is_not_found() {
        let gateway = InMemorySessionGateway::new();
        let order = OrderId::new("missing").unwrap();

        let result = gateway.create_session(&order).await;
        assert!(matches!(result, Err(NetworkError::Status { status: 404, .. })));
    }

    #[tokio::test]
    async fn test_clones_share_script_and_counter() {
        let gateway = InMemorySessionGateway::new();
        let clone = gateway.clone();
        let order = OrderId::new("ord-2").unwrap();
        gateway.insert(order.clone(), Err(NetworkError::Timeout)).await;

        assert_eq!(clone.create_session(&order).await, Err(NetworkError::Timeout));
        assert_eq!(gateway.calls(), 1);
    }
}
