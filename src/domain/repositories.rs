//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;

use super::{
    BookListing, BorrowedListing, DomainError, LibraryListing, NameListing, ReviewListing,
};

/// Input for recording a review of a borrowed copy
#[derive(Debug, Clone, serde::Deserialize)]
pub struct NewReview {
    #[serde(rename = "copy")]
    pub copy_id: i32,
    pub username: String,
    #[serde(rename = "review")]
    pub text: String,
    pub stars: i32,
}

/// Repository trait for the demo `test` table
#[async_trait]
pub trait DemoRepository: Send + Sync {
    /// List every stored name in insertion order
    async fn list_names(&self) -> Result<NameListing, DomainError>;

    /// Insert a name and commit
    async fn add_name(&self, name: &str) -> Result<(), DomainError>;
}

/// Repository trait for catalog (book) searches
///
/// Every search matches case-insensitively on a substring of the given text.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Books whose title contains `text`
    async fn search_by_title(&self, text: &str) -> Result<BookListing, DomainError>;

    /// Books with at least one author whose "first last" name contains `text`
    async fn search_by_author(&self, text: &str) -> Result<BookListing, DomainError>;

    /// Books held by at least one library whose name contains `text`
    async fn search_by_library(&self, text: &str) -> Result<BookListing, DomainError>;
}

/// Repository trait for reviews
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// All reviews
    async fn find_all(&self) -> Result<ReviewListing, DomainError>;

    /// Reviews of books whose title contains `text`
    async fn search_by_title(&self, text: &str) -> Result<ReviewListing, DomainError>;

    /// Insert a review stamped with the current time and commit
    async fn create(&self, review: NewReview) -> Result<(), DomainError>;
}

/// Repository trait for library clients
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Whether a client with this username exists
    async fn exists(&self, username: &str) -> Result<bool, DomainError>;

    /// Copies borrowed by the client
    async fn borrowed_copies(&self, username: &str) -> Result<BorrowedListing, DomainError>;
}

/// Repository trait for libraries
#[async_trait]
pub trait LibraryRepository: Send + Sync {
    /// All libraries with their affiliated university
    async fn find_all(&self) -> Result<LibraryListing, DomainError>;

    /// Libraries whose name contains `text`
    async fn search_by_name(&self, text: &str) -> Result<LibraryListing, DomainError>;
}
