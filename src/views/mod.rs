//! HTML pages rendered with maud.
//!
//! Every page takes the listing it displays and renders each row in full;
//! there is no pagination. Dynamic values are escaped by maud.

mod layout;

pub mod book;
pub mod index;
pub mod library;
pub mod review;

pub use layout::page;
