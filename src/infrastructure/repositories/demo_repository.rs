//! SeaORM implementation of DemoRepository

use async_trait::async_trait;
use sea_orm::{
    ConnectionTrait, DatabaseConnection, FromQueryResult, Statement, TransactionTrait,
};

use crate::domain::{DemoRepository, DomainError, NameListing};
use crate::models::NameRow;

pub struct SeaOrmDemoRepository {
    db: DatabaseConnection,
}

impl SeaOrmDemoRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DemoRepository for SeaOrmDemoRepository {
    async fn list_names(&self) -> Result<NameListing, DomainError> {
        let rows = NameRow::find_by_statement(Statement::from_string(
            self.db.get_database_backend(),
            "SELECT name FROM test WHERE name IS NOT NULL ORDER BY id".to_owned(),
        ))
        .all(&self.db)
        .await?;

        Ok(rows.into_iter().collect())
    }

    async fn add_name(&self, name: &str) -> Result<(), DomainError> {
        let txn = self.db.begin().await?;
        txn.execute(Statement::from_sql_and_values(
            self.db.get_database_backend(),
            "INSERT INTO test (name) VALUES (?)",
            [name.into()],
        ))
        .await?;
        txn.commit().await?;

        Ok(())
    }
}
