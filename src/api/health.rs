use axum::response::Json;
use serde_json::{Value, json};

/// Liveness probe for the callback server. Useful for verifying that the
/// configured `SERVER_ADDRESS` is reachable before kicking off an auth run.
pub async fn health() -> Json<Value> {
    Json(json!({
        "service": env!("CARGO_PKG_NAME"),
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
