//! Domain layer - Pure business abstractions
//!
//! No Axum here, and SeaORM only in the `From<DbErr>` conversion of
//! `DomainError`. Only trait definitions, column-oriented listings and
//! domain error types.

pub mod errors;
pub mod listings;
pub mod repositories;

pub use errors::DomainError;
pub use listings::*;
pub use repositories::*;
