use maud::{Markup, html};

use super::page;
use crate::domain::LibraryListing;

pub fn render(libraries: &LibraryListing) -> Markup {
    page(
        "Libraries",
        html! {
            form method="post" action="/library_all" {
                button type="submit" { "Show all libraries" }
            }
            form method="post" action="/library_query" {
                label for="name" { "Name" }
                input type="text" id="name" name="name";
                button type="submit" { "Search" }
            }
            table {
                thead {
                    tr {
                        th { "Name" }
                        th { "Address" }
                        th { "Hours" }
                        th { "Specialization" }
                        th { "Affiliated with" }
                    }
                }
                tbody {
                    @for library in libraries.rows() {
                        tr.result {
                            td { (library.name) }
                            td { (library.address.unwrap_or_default()) }
                            td { (library.hours.unwrap_or_default()) }
                            td { (library.specialization.unwrap_or_default()) }
                            td { (library.affiliation.unwrap_or_default()) }
                        }
                    }
                }
            }
        },
    )
}
