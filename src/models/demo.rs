use sea_orm::FromQueryResult;

use crate::domain::NameListing;

#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct NameRow {
    pub name: String,
}

impl FromIterator<NameRow> for NameListing {
    fn from_iter<I: IntoIterator<Item = NameRow>>(rows: I) -> Self {
        let mut listing = NameListing::default();
        for r in rows {
            listing.push(r.name);
        }
        listing
    }
}
