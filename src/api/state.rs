//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::{Database, ProductStore};
use crate::services::{ProductManager, ProductService};

/// Application state shared across handlers.
///
/// The store client is built once and handed down explicitly; there is no
/// global connection handle.
#[derive(Clone)]
pub struct AppState {
    /// Product service
    pub product_service: Arc<dyn ProductService>,
    /// Database handle, used for health checks
    pub database: Arc<Database>,
}

impl AppState {
    /// Wire repository and service on top of `database`.
    pub fn from_database(database: Arc<Database>) -> Self {
        let repo = Arc::new(ProductStore::new(database.get_connection()));
        let product_service = Arc::new(ProductManager::new(repo));

        Self {
            product_service,
            database,
        }
    }

    /// Create application state with a manually injected service.
    pub fn new(product_service: Arc<dyn ProductService>, database: Arc<Database>) -> Self {
        Self {
            product_service,
            database,
        }
    }
}
