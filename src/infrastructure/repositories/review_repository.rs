//! SeaORM implementation of ReviewRepository

use async_trait::async_trait;
use sea_orm::{
    ConnectionTrait, DatabaseConnection, FromQueryResult, Statement, TransactionTrait,
};

use super::contains_ci;
use crate::domain::{DomainError, NewReview, ReviewListing, ReviewRepository};
use crate::models::ReviewRow;

const REVIEWS: &str = "\
    SELECT B.title AS title, \
           R.pub_date AS pub_date, \
           R.text AS text, \
           R.stars AS stars, \
           R.username AS username \
    FROM review R \
    LEFT JOIN book B ON B.copy_id = R.copy_id \
    ORDER BY R.pub_date, R.copy_id";

const INSERT_REVIEW: &str = "\
    INSERT INTO review (copy_id, username, pub_date, text, stars) \
    VALUES (?, ?, CURRENT_TIMESTAMP, ?, ?)";

pub struct SeaOrmReviewRepository {
    db: DatabaseConnection,
}

impl SeaOrmReviewRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn rows(&self) -> Result<Vec<ReviewRow>, DomainError> {
        let rows = ReviewRow::find_by_statement(Statement::from_string(
            self.db.get_database_backend(),
            REVIEWS.to_owned(),
        ))
        .all(&self.db)
        .await?;
        Ok(rows)
    }
}

#[async_trait]
impl ReviewRepository for SeaOrmReviewRepository {
    async fn find_all(&self) -> Result<ReviewListing, DomainError> {
        Ok(self.rows().await?.into_iter().collect())
    }

    /// Reviews whose copy no longer exists have no title and never match.
    async fn search_by_title(&self, text: &str) -> Result<ReviewListing, DomainError> {
        Ok(self
            .rows()
            .await?
            .into_iter()
            .filter(|row| row.title.as_deref().is_some_and(|title| contains_ci(title, text)))
            .collect())
    }

    async fn create(&self, review: NewReview) -> Result<(), DomainError> {
        let txn = self.db.begin().await?;
        txn.execute(Statement::from_sql_and_values(
            self.db.get_database_backend(),
            INSERT_REVIEW,
            [
                review.copy_id.into(),
                review.username.into(),
                review.text.into(),
                review.stars.into(),
            ],
        ))
        .await?;
        txn.commit().await?;

        tracing::info!("Recorded review of copy {}", review.copy_id);
        Ok(())
    }
}
