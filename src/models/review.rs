use chrono::NaiveDateTime;
use sea_orm::FromQueryResult;

use crate::domain::ReviewListing;

/// A review joined with the title of the reviewed copy, if the copy still exists.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct ReviewRow {
    pub title: Option<String>,
    pub pub_date: NaiveDateTime,
    pub text: String,
    pub stars: i32,
    pub username: String,
}

impl FromIterator<ReviewRow> for ReviewListing {
    fn from_iter<I: IntoIterator<Item = ReviewRow>>(rows: I) -> Self {
        let mut listing = ReviewListing::default();
        for r in rows {
            listing.push(r.title, &r.pub_date, r.text, r.stars, r.username);
        }
        listing
    }
}
