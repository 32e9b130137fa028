//! SeaORM implementation of LibraryRepository

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, FromQueryResult, Statement};

use super::contains_ci;
use crate::domain::{DomainError, LibraryListing, LibraryRepository};
use crate::models::LibraryRow;

const LIBRARIES: &str = "\
    SELECT L.name AS name, \
           L.address AS address, \
           L.hours AS hours, \
           L.specialization AS specialization, \
           U.name AS affiliation \
    FROM library L \
    LEFT JOIN university U ON L.affiliated_with = U.university_id \
    ORDER BY L.name";

pub struct SeaOrmLibraryRepository {
    db: DatabaseConnection,
}

impl SeaOrmLibraryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn rows(&self) -> Result<Vec<LibraryRow>, DomainError> {
        let rows = LibraryRow::find_by_statement(Statement::from_string(
            self.db.get_database_backend(),
            LIBRARIES.to_owned(),
        ))
        .all(&self.db)
        .await?;
        Ok(rows)
    }
}

#[async_trait]
impl LibraryRepository for SeaOrmLibraryRepository {
    async fn find_all(&self) -> Result<LibraryListing, DomainError> {
        Ok(self.rows().await?.into_iter().collect())
    }

    async fn search_by_name(&self, text: &str) -> Result<LibraryListing, DomainError> {
        Ok(self
            .rows()
            .await?
            .into_iter()
            .filter(|row| contains_ci(&row.name, text))
            .collect())
    }
}
