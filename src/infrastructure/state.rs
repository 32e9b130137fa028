//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::{
    CatalogRepository, ClientRepository, DemoRepository, LibraryRepository, ReviewRepository,
};
use crate::infrastructure::{
    SeaOrmCatalogRepository, SeaOrmClientRepository, SeaOrmDemoRepository,
    SeaOrmLibraryRepository, SeaOrmReviewRepository,
};

/// Application state shared across all handlers
///
/// Every repository wraps a clone of the same connection pool. Tests may
/// swap any field for a fake implementation.
#[derive(Clone)]
pub struct AppState {
    /// Demo `test` table
    pub demo_repo: Arc<dyn DemoRepository>,
    /// Book searches
    pub catalog_repo: Arc<dyn CatalogRepository>,
    /// Reviews
    pub review_repo: Arc<dyn ReviewRepository>,
    /// Clients and their loans
    pub client_repo: Arc<dyn ClientRepository>,
    /// Libraries
    pub library_repo: Arc<dyn LibraryRepository>,
}

impl AppState {
    /// Create a new AppState with all repositories initialized
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            demo_repo: Arc::new(SeaOrmDemoRepository::new(db.clone())),
            catalog_repo: Arc::new(SeaOrmCatalogRepository::new(db.clone())),
            review_repo: Arc::new(SeaOrmReviewRepository::new(db.clone())),
            client_repo: Arc::new(SeaOrmClientRepository::new(db.clone())),
            library_repo: Arc::new(SeaOrmLibraryRepository::new(db)),
        }
    }
}
