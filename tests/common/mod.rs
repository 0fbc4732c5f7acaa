use std::sync::Arc;

use my_finance_client::AppState;
use my_finance_client::models::PublicUser;
use my_finance_client::storage::{MemoryStore, SharedStore};

/// Builds an initialized [`AppState`] over a fresh in-memory store and
/// hands the store back so tests can inspect what was persisted.
pub async fn setup_app() -> (AppState, SharedStore) {
    let store: SharedStore = Arc::new(MemoryStore::new());
    let mut app = AppState::new(store.clone());
    app.init().await;
    (app, store)
}

/// Registers (and thereby signs in) a throwaway account.
pub async fn register_test_user(app: &mut AppState, name: &str, email: &str) -> PublicUser {
    app.register(name, email, "secret")
        .await
        .unwrap_or_else(|e| panic!("Failed to register test user {}: {}", email, e))
}
