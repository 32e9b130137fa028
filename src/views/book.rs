use maud::{Markup, html};

use super::page;
use crate::domain::BookListing;

fn search_form(action: &str, field: &str, label: &str) -> Markup {
    html! {
        form method="post" action=(action) {
            label for=(field) { (label) }
            input type="text" id=(field) name=(field);
            button type="submit" { "Search" }
        }
    }
}

pub fn render(books: &BookListing) -> Markup {
    page(
        "Books",
        html! {
            (search_form("/book_title_query", "title", "Title"))
            (search_form("/book_author_query", "author_name", "Author"))
            (search_form("/book_library_query", "library_name", "Library"))
            table {
                thead {
                    tr {
                        th { "Title" }
                        th { "Authors" }
                        th { "Year" }
                        th { "Available at" }
                        th { "ISBN" }
                    }
                }
                tbody {
                    @for book in books.rows() {
                        tr.result {
                            td { (book.title) }
                            td { (book.authors) }
                            td { @if let Some(year) = book.year { (year) } }
                            td { (book.libraries) }
                            td { (book.isbn) }
                        }
                    }
                }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_table_row_per_entry() {
        let mut books = BookListing::default();
        books.push(
            "Dune".into(),
            "Frank Herbert".into(),
            Some(1965),
            "Butler Library".into(),
            "9780441013593".into(),
        );
        books.push(
            "Emma".into(),
            "Jane Austen".into(),
            None,
            "New York Public Library".into(),
            "9780141439518".into(),
        );

        let html = render(&books).into_string();
        assert_eq!(html.matches(r#"<tr class="result">"#).count(), 2);
        assert!(html.contains("<td>1965</td>"));
        assert!(html.contains(r#"action="/book_author_query""#));
    }

    #[test]
    fn values_are_escaped() {
        let mut books = BookListing::default();
        books.push(
            "<script>alert(1)</script>".into(),
            "A & B".into(),
            None,
            String::new(),
            "1".into(),
        );

        let html = render(&books).into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("A &amp; B"));
    }
}
