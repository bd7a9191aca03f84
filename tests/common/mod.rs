#![allow(dead_code)]

use serde_json::{Value, json};

/// A create-session reply body as the merchant backend sends it.
pub fn session_body(status: Option<&str>, reason: Option<&str>) -> Value {
    json!({
        "success": true,
        "statusCode": 200,
        "sessionStatus": status,
        "configuration": {
            "products": {
                "installments": {
                    "type": "installments",
                    "isAvailable": status == Some("created"),
                    "rejectionReason": reason
                }
            }
        }
    })
}

/// Binds a listener that accepts connections and never answers them.
pub async fn silent_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });
    format!("http://{addr}")
}
