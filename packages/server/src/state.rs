use std::sync::Arc;

use common::ObjectStore;
use sea_orm::DatabaseConnection;

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Constructed once at startup, shared by reference for the process
    /// lifetime.
    pub store: Arc<dyn ObjectStore>,
    pub config: AppConfig,
}
