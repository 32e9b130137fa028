use sea_orm::FromQueryResult;

use crate::domain::LibraryListing;

#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct LibraryRow {
    pub name: String,
    pub address: Option<String>,
    pub hours: Option<String>,
    pub specialization: Option<String>,
    /// Name of the affiliated university
    pub affiliation: Option<String>,
}

impl FromIterator<LibraryRow> for LibraryListing {
    fn from_iter<I: IntoIterator<Item = LibraryRow>>(rows: I) -> Self {
        let mut listing = LibraryListing::default();
        for r in rows {
            listing.push(r.name, r.address, r.hours, r.specialization, r.affiliation);
        }
        listing
    }
}
