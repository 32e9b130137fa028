//! Column-oriented result sets handed from repositories to views.
//!
//! Each listing stores one sequence per displayed column. Columns only grow
//! through `push`, which appends to every column at once, so they always
//! have the same length and index `i` of each column belongs to row `i`.

use chrono::NaiveDateTime;

/// Display format for review dates, e.g. `October 18 2026`.
pub const REVIEW_DATE_FORMAT: &str = "%B %d %Y";

pub fn format_review_date(date: &NaiveDateTime) -> String {
    date.format(REVIEW_DATE_FORMAT).to_string()
}

/// Names from the demo `test` table.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct NameListing {
    names: Vec<String>,
}

impl NameListing {
    pub fn push(&mut self, name: String) {
        self.names.push(name);
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// One aggregated catalog entry: an ISBN with its authors and holding libraries.
#[derive(Debug, Clone, PartialEq)]
pub struct BookEntry<'a> {
    pub title: &'a str,
    pub authors: &'a str,
    pub year: Option<i32>,
    pub libraries: &'a str,
    pub isbn: &'a str,
}

/// Book search results: title, authors, publication year, libraries, ISBN.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BookListing {
    titles: Vec<String>,
    authors: Vec<String>,
    dates: Vec<Option<i32>>,
    libraries: Vec<String>,
    isbns: Vec<String>,
}

impl BookListing {
    pub fn push(
        &mut self,
        title: String,
        authors: String,
        year: Option<i32>,
        libraries: String,
        isbn: String,
    ) {
        self.titles.push(title);
        self.authors.push(authors);
        self.dates.push(year);
        self.libraries.push(libraries);
        self.isbns.push(isbn);
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    pub fn dates(&self) -> &[Option<i32>] {
        &self.dates
    }

    pub fn libraries(&self) -> &[String] {
        &self.libraries
    }

    pub fn isbns(&self) -> &[String] {
        &self.isbns
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = BookEntry<'_>> {
        (0..self.len()).map(move |i| BookEntry {
            title: &self.titles[i],
            authors: &self.authors[i],
            year: self.dates[i],
            libraries: &self.libraries[i],
            isbn: &self.isbns[i],
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewEntry<'a> {
    pub title: Option<&'a str>,
    pub date: &'a str,
    pub review: &'a str,
    pub stars: i32,
    pub username: &'a str,
}

/// Reviews: book title, formatted date, text, star rating, reviewer.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ReviewListing {
    titles: Vec<Option<String>>,
    dates: Vec<String>,
    reviews: Vec<String>,
    stars: Vec<i32>,
    usernames: Vec<String>,
}

impl ReviewListing {
    /// Appends one review; the timestamp is stored already formatted for display.
    pub fn push(
        &mut self,
        title: Option<String>,
        pub_date: &NaiveDateTime,
        review: String,
        stars: i32,
        username: String,
    ) {
        self.titles.push(title);
        self.dates.push(format_review_date(pub_date));
        self.reviews.push(review);
        self.stars.push(stars);
        self.usernames.push(username);
    }

    pub fn titles(&self) -> &[Option<String>] {
        &self.titles
    }

    pub fn dates(&self) -> &[String] {
        &self.dates
    }

    pub fn reviews(&self) -> &[String] {
        &self.reviews
    }

    pub fn stars(&self) -> &[i32] {
        &self.stars
    }

    pub fn usernames(&self) -> &[String] {
        &self.usernames
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = ReviewEntry<'_>> {
        (0..self.len()).map(move |i| ReviewEntry {
            title: self.titles[i].as_deref(),
            date: &self.dates[i],
            review: &self.reviews[i],
            stars: self.stars[i],
            username: &self.usernames[i],
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LibraryEntry<'a> {
    pub name: &'a str,
    pub address: Option<&'a str>,
    pub hours: Option<&'a str>,
    pub specialization: Option<&'a str>,
    pub affiliation: Option<&'a str>,
}

/// Libraries: name, address, opening hours, specialization, affiliated university.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LibraryListing {
    names: Vec<String>,
    addresses: Vec<Option<String>>,
    hours: Vec<Option<String>>,
    specializations: Vec<Option<String>>,
    affiliations: Vec<Option<String>>,
}

impl LibraryListing {
    pub fn push(
        &mut self,
        name: String,
        address: Option<String>,
        hours: Option<String>,
        specialization: Option<String>,
        affiliation: Option<String>,
    ) {
        self.names.push(name);
        self.addresses.push(address);
        self.hours.push(hours);
        self.specializations.push(specialization);
        self.affiliations.push(affiliation);
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn addresses(&self) -> &[Option<String>] {
        &self.addresses
    }

    pub fn hours(&self) -> &[Option<String>] {
        &self.hours
    }

    pub fn specializations(&self) -> &[Option<String>] {
        &self.specializations
    }

    pub fn affiliations(&self) -> &[Option<String>] {
        &self.affiliations
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = LibraryEntry<'_>> {
        (0..self.len()).map(move |i| LibraryEntry {
            name: &self.names[i],
            address: self.addresses[i].as_deref(),
            hours: self.hours[i].as_deref(),
            specialization: self.specializations[i].as_deref(),
            affiliation: self.affiliations[i].as_deref(),
        })
    }
}

/// Copies a client has borrowed and may review.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BorrowedListing {
    username: String,
    titles: Vec<String>,
    ids: Vec<i32>,
}

impl BorrowedListing {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Default::default()
        }
    }

    pub fn push(&mut self, title: String, copy_id: i32) {
        self.titles.push(title);
        self.ids.push(copy_id);
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn ids(&self) -> &[i32] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = (&str, i32)> {
        self.titles.iter().map(String::as_str).zip(self.ids.iter().copied())
    }
}
