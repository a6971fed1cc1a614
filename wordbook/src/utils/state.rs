use crate::domain::word::{SqliteWordRepository, WordRepository};
use sqlx::SqlitePool;
use std::sync::Arc;

/// Shared by every request. The store handle is the only shared resource and
/// the pool behind it is safe for concurrent use.
#[derive(Clone)]
pub struct AppState {
    pub word_storage: Arc<dyn WordRepository>,
}

impl AppState {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        AppState {
            word_storage: Arc::new(SqliteWordRepository::new(pool)),
        }
    }

    pub fn with_repository(word_storage: Arc<dyn WordRepository>) -> Self {
        AppState { word_storage }
    }
}
