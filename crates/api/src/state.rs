use std::sync::Arc;

use notekeeper_db::EntityStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Backing store for users, categories and notes.
    pub store: Arc<dyn EntityStore>,
    pub config: Arc<ServerConfig>,
}
