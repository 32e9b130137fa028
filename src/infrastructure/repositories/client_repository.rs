//! SeaORM implementation of ClientRepository

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, FromQueryResult, Statement};

use crate::domain::{BorrowedListing, ClientRepository, DomainError};
use crate::models::{BorrowedCopyRow, CountRow};

const COUNT_CLIENT: &str = "SELECT COUNT(*) AS count FROM client WHERE username = ?";

const BORROWED_COPIES: &str = "\
    SELECT B.title AS title, B.copy_id AS copy_id \
    FROM book B \
    JOIN borrows W ON B.copy_id = W.copy_id \
    JOIN client C ON W.username = C.username \
    WHERE C.username = ? \
    ORDER BY B.title, B.copy_id";

pub struct SeaOrmClientRepository {
    db: DatabaseConnection,
}

impl SeaOrmClientRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ClientRepository for SeaOrmClientRepository {
    async fn exists(&self, username: &str) -> Result<bool, DomainError> {
        let found = CountRow::find_by_statement(Statement::from_sql_and_values(
            self.db.get_database_backend(),
            COUNT_CLIENT,
            [username.into()],
        ))
        .one(&self.db)
        .await?;

        Ok(found.is_some_and(|row| row.count > 0))
    }

    async fn borrowed_copies(&self, username: &str) -> Result<BorrowedListing, DomainError> {
        let rows = BorrowedCopyRow::find_by_statement(Statement::from_sql_and_values(
            self.db.get_database_backend(),
            BORROWED_COPIES,
            [username.into()],
        ))
        .all(&self.db)
        .await?;

        let mut listing = BorrowedListing::new(username);
        for row in rows {
            listing.push(row.title, row.copy_id);
        }
        Ok(listing)
    }
}
