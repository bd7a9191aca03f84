use crate::config::ApiSettings;
use crate::domain::order::OrderId;
use crate::domain::ports::SessionGateway;
use crate::domain::session::SessionResponse;
use crate::error::{CheckoutError, NetworkError, Result};
use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;
use url::Url;

#[derive(Serialize)]
struct CreateSessionForm<'a> {
    order_id: &'a str,
}

/// Creates sessions through the merchant backend's `create-session` endpoint.
///
/// One form-encoded POST per call; no retry or backoff.
#[derive(Debug, Clone)]
pub struct HttpSessionGateway {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpSessionGateway {
    pub fn new(api: &ApiSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(api.timeout)
            .build()
            .map_err(|e| CheckoutError::Network(NetworkError::Build(e.to_string())))?;
        Ok(Self {
            client,
            endpoint: api.create_session_url()?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl SessionGateway for HttpSessionGateway {
    async fn create_session(&self, order_id: &OrderId) -> std::result::Result<SessionResponse, NetworkError> {
        debug!(endpoint = %self.endpoint, %order_id, "creating session");

        let response = self
            .client
            .post(self.endpoint.clone())
            .form(&CreateSessionForm {
                order_id: order_id.as_str(),
            })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "session reply received");

        if !status.is_success() {
            return Err(NetworkError::Status {
                status: status.as_u16(),
                message: body,
            });
        }

        SessionResponse::from_json(&body).map_err(|e| NetworkError::MalformedBody(e.to_string()))
    }
}
