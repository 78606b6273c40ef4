//! Implements a struct that holds the state of the REST server.

use axum::extract::FromRef;
use rusqlite::Connection;

use crate::{
    BackendKind, Error, ServerConfig,
    category::{CategoryBackend, CategoryStore, InMemoryCategoryBackend, SQLiteCategoryBackend},
};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The store that route handlers create, list, update and delete categories through.
    pub category_store: CategoryStore,
}

impl AppState {
    /// Create a new [AppState] that keeps categories in `backend`.
    pub fn new(backend: impl CategoryBackend + 'static) -> Self {
        Self {
            category_store: CategoryStore::new(backend),
        }
    }

    /// Create a new [AppState] with the backend chosen in `config`.
    ///
    /// For the SQLite backend this opens the database at `config.db_path` and
    /// creates the category table if it does not exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or initialized.
    pub fn from_config(config: &ServerConfig) -> Result<Self, Error> {
        match config.backend {
            BackendKind::Sqlite => {
                let connection = Connection::open(&config.db_path)?;
                Ok(Self::new(SQLiteCategoryBackend::new(connection)?))
            }
            BackendKind::Memory => Ok(Self::new(InMemoryCategoryBackend::new())),
        }
    }
}

impl FromRef<AppState> for CategoryStore {
    fn from_ref(state: &AppState) -> Self {
        state.category_store.clone()
    }
}
