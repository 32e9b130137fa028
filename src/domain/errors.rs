//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.

use std::fmt;

#[derive(Debug)]
pub enum DomainError {
    /// No connection could be obtained from the pool
    Connection(String),
    /// Query execution error (bad SQL, constraint violation, decode failure)
    Database(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::Connection(msg) => write!(f, "Connection error: {}", msg),
            DomainError::Database(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

// Conversion from SeaORM errors (used in infrastructure layer)
impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        match e {
            sea_orm::DbErr::Conn(_) | sea_orm::DbErr::ConnectionAcquire(_) => {
                DomainError::Connection(e.to_string())
            }
            other => DomainError::Database(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbErr, RuntimeErr};

    #[test]
    fn connection_failures_are_kept_apart_from_query_failures() {
        let conn = DomainError::from(DbErr::Conn(RuntimeErr::Internal("refused".into())));
        assert!(matches!(conn, DomainError::Connection(_)));

        let query = DomainError::from(DbErr::Custom("no such table: review".into()));
        assert!(matches!(query, DomainError::Database(_)));
        assert!(query.to_string().contains("no such table"));
    }
}
