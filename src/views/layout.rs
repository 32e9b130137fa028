use maud::{DOCTYPE, Markup, PreEscaped, html};

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;margin:0 auto;max-width:64rem;padding:0 1rem}\
nav{display:flex;gap:1rem;padding:1rem 0;border-bottom:1px solid #ccc}\
table{border-collapse:collapse;width:100%;margin-top:1rem}\
th,td{border:1px solid #ddd;padding:.4rem;text-align:left}\
form{margin:.75rem 0}\
label{margin-right:.5rem}";

/// Shared page chrome with the site navigation.
pub fn page(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | Library Catalog" }
                style { (PreEscaped(STYLE)) }
            }
            body {
                nav {
                    a href="/" { "Home" }
                    a href="/book.html" { "Books" }
                    a href="/review.html" { "Reviews" }
                    a href="/library.html" { "Libraries" }
                    a href="/review_login" { "Write a review" }
                }
                main {
                    h1 { (title) }
                    (content)
                }
            }
        }
    }
}
