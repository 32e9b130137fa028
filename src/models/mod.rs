//! Raw query rows, decoded with `FromQueryResult` from hand-written SQL.

pub mod book;
pub mod client;
pub mod demo;
pub mod library;
pub mod review;

pub use book::{BookCopyRow, IsbnLabelRow};
pub use client::{BorrowedCopyRow, CountRow};
pub use demo::NameRow;
pub use library::LibraryRow;
pub use review::ReviewRow;
