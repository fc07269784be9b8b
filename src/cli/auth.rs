use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{config::Config, spotify, types::AuthState};

pub async fn auth(config: &Config, shared_state: Arc<Mutex<Option<AuthState>>>) {
    spotify::auth::auth(config, shared_state).await;
}
