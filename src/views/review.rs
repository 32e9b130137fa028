use maud::{Markup, html};

use super::page;
use crate::domain::{BorrowedListing, ReviewListing};

pub fn render(reviews: &ReviewListing) -> Markup {
    page(
        "Reviews",
        html! {
            form method="post" action="/review_query" {
                label for="title" { "Book title" }
                input type="text" id="title" name="title";
                button type="submit" { "Search" }
            }
            p { a href="/review_all" { "All reviews" } }
            table {
                thead {
                    tr {
                        th { "Title" }
                        th { "Date" }
                        th { "Review" }
                        th { "Stars" }
                        th { "By" }
                    }
                }
                tbody {
                    @for review in reviews.rows() {
                        tr.result {
                            td { (review.title.unwrap_or_default()) }
                            td { (review.date) }
                            td { (review.review) }
                            td { (review.stars) }
                            td { (review.username) }
                        }
                    }
                }
            }
        },
    )
}

/// Username prompt; nothing is authenticated.
pub fn login_form() -> Markup {
    page(
        "Write a review",
        html! {
            form method="post" action="/review_add" {
                label for="username" { "Username" }
                input type="text" id="username" name="username";
                button type="submit" { "Continue" }
            }
        },
    )
}

/// Review form listing the copies the client has borrowed.
pub fn add_form(borrowed: &BorrowedListing) -> Markup {
    page(
        "Write a review",
        html! {
            p { "Reviewing as " strong { (borrowed.username()) } }
            @if borrowed.is_empty() {
                p { "You have not borrowed any books yet." }
            } @else {
                form method="post" action="/review_add_add" {
                    input type="hidden" name="username" value=(borrowed.username());
                    p {
                        label for="copy" { "Book" }
                        select id="copy" name="copy" {
                            @for (title, copy_id) in borrowed.rows() {
                                option.result value=(copy_id) { (title) }
                            }
                        }
                    }
                    p {
                        label for="review" { "Review" }
                        textarea id="review" name="review" rows="4" cols="60" {}
                    }
                    p {
                        label for="stars" { "Stars" }
                        input type="number" id="stars" name="stars" min="1" max="5" value="5";
                    }
                    button type="submit" { "Submit review" }
                }
            }
        },
    )
}

pub fn invalid() -> Markup {
    page(
        "Unknown user",
        html! {
            p { "No client with that username exists." }
            p { a href="/review_login" { "Try again" } }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_form_carries_username_and_copy_ids() {
        let mut borrowed = BorrowedListing::new("ab1234");
        borrowed.push("Dune".into(), 3);
        borrowed.push("Emma".into(), 5);

        let html = add_form(&borrowed).into_string();
        assert!(html.contains(r#"name="username" value="ab1234""#));
        assert!(html.contains(r#"value="3">Dune</option>"#));
        assert!(html.contains(r#"value="5">Emma</option>"#));
    }

    #[test]
    fn add_form_without_loans_has_no_form() {
        let html = add_form(&BorrowedListing::new("cd5678")).into_string();
        assert!(!html.contains("/review_add_add"));
    }

    #[test]
    fn empty_listing_renders_header_only() {
        let html = render(&ReviewListing::default()).into_string();
        assert!(html.contains("<th>Stars</th>"));
        assert!(!html.contains(r#"class="result""#));
    }
}
