use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};
use tokio::sync::Mutex;

use crate::{config::Config, spotify, types::AuthState, warning};

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<Arc<Mutex<Option<AuthState>>>>,
    Extension(config): Extension<Config>,
) -> Html<&'static str> {
    if let Some(code) = params.get("code") {
        let mut state = shared_state.lock().await;
        let Some(ref mut auth_state) = state.as_mut() else {
            return Html("<h4>No authentication in progress.</h4>");
        };

        // reject redirects that don't belong to this run
        match params.get("state") {
            Some(s) if *s == auth_state.csrf_state => {}
            _ => {
                warning!("Callback received with a mismatched state value.");
                return Html("<h4>State mismatch, login rejected.</h4>");
            }
        }

        match spotify::auth::exchange_code(code, &config).await {
            Ok(token) => {
                auth_state.token = Some(token);
                Html("<h2>Authentication successful.</h2><p>You can close this browser window.</p>")
            }
            Err(e) => {
                warning!("Token exchange failed: {}", e);
                Html("<h4>Login failed.</h4>")
            }
        }
    } else {
        Html("<h4>Missing authorization code.</h4>")
    }
}
