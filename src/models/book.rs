use std::collections::BTreeSet;

use sea_orm::FromQueryResult;

use crate::domain::BookListing;

/// One (copy, author, library) combination from the catalog join.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct BookCopyRow {
    pub isbn: String,
    pub title: String,
    pub pub_year: Option<i32>,
    pub author: String,
    pub library: String,
}

/// A name attached to an ISBN: one of its authors or one of its holding libraries.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct IsbnLabelRow {
    pub isbn: String,
    pub label: String,
}

/// Fold rows ordered by (title, isbn, pub_year) into one listing entry per
/// (isbn, title, pub_year) group. Authors and libraries are de-duplicated,
/// sorted and joined with ", ".
pub fn group_by_isbn(rows: Vec<BookCopyRow>) -> BookListing {
    let mut listing = BookListing::default();
    let mut current: Option<(String, String, Option<i32>)> = None;
    let mut authors = BTreeSet::new();
    let mut libraries = BTreeSet::new();

    for row in rows {
        let key = (row.isbn, row.title, row.pub_year);
        if current.as_ref() != Some(&key) {
            if let Some((isbn, title, year)) = current.take() {
                listing.push(
                    title,
                    join(&mut authors),
                    year,
                    join(&mut libraries),
                    isbn,
                );
            }
            current = Some(key);
        }
        authors.insert(row.author);
        libraries.insert(row.library);
    }

    if let Some((isbn, title, year)) = current {
        listing.push(title, join(&mut authors), year, join(&mut libraries), isbn);
    }

    listing
}

fn join(set: &mut BTreeSet<String>) -> String {
    let joined = set.iter().map(String::as_str).collect::<Vec<_>>().join(", ");
    set.clear();
    joined
}
