//! SeaORM implementation of CatalogRepository

use std::collections::HashSet;

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, FromQueryResult, Statement};

use super::contains_ci;
use crate::domain::{BookListing, CatalogRepository, DomainError};
use crate::models::book::group_by_isbn;
use crate::models::{BookCopyRow, IsbnLabelRow};

/// Every (copy, author, owning library) combination. Copies without an
/// author or an owning library drop out of the inner joins.
const BOOK_COPIES: &str = "\
    SELECT B.isbn AS isbn, \
           B.title AS title, \
           B.pub_year AS pub_year, \
           A.first_name || ' ' || A.last_name AS author, \
           L.name AS library \
    FROM book B \
    JOIN wrote W ON B.copy_id = W.copy_id \
    JOIN author A ON W.author_id = A.author_id \
    JOIN library L ON B.owned_by = L.library_id \
    ORDER BY B.title, B.isbn, B.pub_year";

/// Author names per ISBN, over every copy with an author.
const ISBN_AUTHORS: &str = "\
    SELECT DISTINCT B.isbn AS isbn, A.first_name || ' ' || A.last_name AS label \
    FROM book B \
    JOIN wrote W ON B.copy_id = W.copy_id \
    JOIN author A ON W.author_id = A.author_id";

/// Holding library names per ISBN, over every owned copy.
const ISBN_LIBRARIES: &str = "\
    SELECT DISTINCT B.isbn AS isbn, L.name AS label \
    FROM book B \
    JOIN library L ON B.owned_by = L.library_id";

pub struct SeaOrmCatalogRepository {
    db: DatabaseConnection,
}

impl SeaOrmCatalogRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn copies(&self) -> Result<Vec<BookCopyRow>, DomainError> {
        let rows = BookCopyRow::find_by_statement(Statement::from_string(
            self.db.get_database_backend(),
            BOOK_COPIES.to_owned(),
        ))
        .all(&self.db)
        .await?;
        Ok(rows)
    }

    /// ISBNs having at least one label (author or library name) containing `text`.
    async fn isbns_labelled(
        &self,
        sql: &str,
        text: &str,
    ) -> Result<HashSet<String>, DomainError> {
        let rows = IsbnLabelRow::find_by_statement(Statement::from_string(
            self.db.get_database_backend(),
            sql.to_owned(),
        ))
        .all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .filter(|row| contains_ci(&row.label, text))
            .map(|row| row.isbn)
            .collect())
    }

    /// Keep every copy of the given ISBNs, so the aggregated columns still
    /// list all authors and all holding libraries.
    async fn copies_of(&self, isbns: HashSet<String>) -> Result<BookListing, DomainError> {
        if isbns.is_empty() {
            return Ok(BookListing::default());
        }

        let rows: Vec<_> = self
            .copies()
            .await?
            .into_iter()
            .filter(|row| isbns.contains(&row.isbn))
            .collect();

        tracing::debug!("catalog search matched {} copy rows", rows.len());
        Ok(group_by_isbn(rows))
    }
}

#[async_trait]
impl CatalogRepository for SeaOrmCatalogRepository {
    async fn search_by_title(&self, text: &str) -> Result<BookListing, DomainError> {
        let rows: Vec<_> = self
            .copies()
            .await?
            .into_iter()
            .filter(|row| contains_ci(&row.title, text))
            .collect();

        tracing::debug!("catalog search matched {} copy rows", rows.len());
        Ok(group_by_isbn(rows))
    }

    async fn search_by_author(&self, text: &str) -> Result<BookListing, DomainError> {
        let isbns = self.isbns_labelled(ISBN_AUTHORS, text).await?;
        self.copies_of(isbns).await
    }

    async fn search_by_library(&self, text: &str) -> Result<BookListing, DomainError> {
        let isbns = self.isbns_labelled(ISBN_LIBRARIES, text).await?;
        self.copies_of(isbns).await
    }
}
