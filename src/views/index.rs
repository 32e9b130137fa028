use maud::{Markup, html};

use super::page;
use crate::domain::NameListing;

pub fn render(names: &NameListing) -> Markup {
    page(
        "Demo names",
        html! {
            ul {
                @for name in names.names() {
                    li.result { (name) }
                }
            }
            form method="post" action="/add" {
                label for="name" { "Name" }
                input type="text" id="name" name="name";
                button type="submit" { "Add" }
            }
            p { a href="/login" { "Log in" } }
        },
    )
}
