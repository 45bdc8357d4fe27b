use std::sync::Arc;

use crate::config::cors::CorsConfig;
use crate::config::database::init_db_pool;
use crate::i18n::MessageCatalog;
use crate::modules::students::service::{PgStudentService, StudentService};

/// Composition root: the collaborators every handler depends on, injected
/// through axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub students: Arc<dyn StudentService>,
    pub messages: Arc<MessageCatalog>,
    pub cors_config: CorsConfig,
}

pub async fn init_app_state() -> AppState {
    AppState {
        students: Arc::new(PgStudentService::new(init_db_pool().await)),
        messages: Arc::new(MessageCatalog::new()),
        cors_config: CorsConfig::from_env(),
    }
}
