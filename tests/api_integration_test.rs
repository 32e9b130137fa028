use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
};
use bibliocatalog::{db, seed, server};
use sea_orm::{ConnectionTrait, Statement};
use tower::util::ServiceExt; // for `oneshot`

// Helper to build the app over a seeded in-memory catalog
async fn setup_app() -> Router {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    seed::seed_demo_data(&db).await.expect("Failed to seed DB");
    server::build_router(db)
}

/// Accented names whose capitals SQLite's ASCII-only `LOWER` leaves unfolded.
const ACCENTED_CATALOG: &[&str] = &[
    "INSERT INTO library (library_id, name, address, hours, specialization, affiliated_with) \
     VALUES (4, 'BIBLIOTHÈQUE ÉCOLE', '45 Rue d''Ulm', '8am-8pm', 'Letters', NULL)",
    "INSERT INTO author (author_id, first_name, last_name) VALUES (6, 'Émile', 'Zola')",
    "INSERT INTO book (copy_id, isbn, title, pub_year, owned_by) \
     VALUES (6, '9782070000001', 'ÉMILE ET LES ÉTOILES', 1880, 4)",
    "INSERT INTO wrote (copy_id, author_id) VALUES (6, 6)",
    "INSERT INTO review (copy_id, username, pub_date, text, stars) \
     VALUES (6, 'ab1234', '2025-02-01 10:00:00', 'Magnifique.', 5)",
];

// Helper to build the app over the seeded catalog plus accented rows
async fn setup_accented_app() -> Router {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    seed::seed_demo_data(&db).await.expect("Failed to seed DB");
    for insert in ACCENTED_CATALOG {
        db.execute(Statement::from_string(db.get_database_backend(), insert.to_string()))
            .await
            .expect("Failed to insert accented rows");
    }
    server::build_router(db)
}

async fn get(app: &Router, uri: &str) -> Response {
    let req = Request::builder()
        .uri(uri)
        .method("GET")
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(req).await.unwrap()
}

async fn post_form(app: &Router, uri: &str, form: &str) -> Response {
    let req = Request::builder()
        .uri(uri)
        .method("POST")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();
    app.clone().oneshot(req).await.unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

fn result_rows(html: &str) -> usize {
    html.matches(r#"class="result""#).count()
}

#[tokio::test]
async fn test_index_lists_demo_names() {
    let app = setup_app().await;

    let response = get(&app, "/?debug=1").await;
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));

    let html = body_text(response).await;
    assert_eq!(result_rows(&html), 3);
    assert!(html.contains("grace hopper"));
    assert!(html.contains("alan turing"));
    assert!(html.contains("ada lovelace"));
}

#[tokio::test]
async fn test_add_then_index_round_trip() {
    let app = setup_app().await;

    let response = post_form(&app, "/add", "name=Grace").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    let html = body_text(get(&app, "/").await).await;
    assert_eq!(result_rows(&html), 4);
    assert!(html.contains(r#"<li class="result">Grace</li>"#));
}

#[tokio::test]
async fn test_book_title_search_is_case_insensitive_substring() {
    let app = setup_app().await;

    let response = post_form(&app, "/book_title_query", "title=Hopper").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    // Two copies of the same ISBN collapse into one row
    assert_eq!(result_rows(&html), 1);
    assert!(html.contains(
        "<td>Grace Hopper and the Invention of the Information Age</td>\
         <td>Kurt Beyer</td>\
         <td>2009</td>\
         <td>Butler Library, New York Public Library</td>\
         <td>9780262517843</td>"
    ));
    assert!(!html.contains("Dune"));
}

#[tokio::test]
async fn test_book_title_search_without_match_renders_no_rows() {
    let app = setup_app().await;

    let response = post_form(&app, "/book_title_query", "title=zzz").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(result_rows(&body_text(response).await), 0);
}

#[tokio::test]
async fn test_book_author_search_lists_every_coauthor() {
    let app = setup_app().await;

    let response = post_form(&app, "/book_author_query", "author_name=GAIMAN").await;
    let html = body_text(response).await;
    assert_eq!(result_rows(&html), 1);
    assert!(html.contains("<td>Good Omens</td><td>Neil Gaiman, Terry Pratchett</td>"));

    let response = post_form(&app, "/book_author_query", "author_name=frank+herb").await;
    let html = body_text(response).await;
    assert_eq!(result_rows(&html), 1);
    assert!(html.contains("<td>Dune</td>"));
}

#[tokio::test]
async fn test_book_library_search_keeps_all_holding_libraries() {
    let app = setup_app().await;

    let response = post_form(&app, "/book_library_query", "library_name=public").await;
    let html = body_text(response).await;
    assert_eq!(result_rows(&html), 2);

    let emma = html.find("<td>Emma</td>").expect("Emma listed");
    let hopper = html
        .find("<td>Grace Hopper and the Invention of the Information Age</td>")
        .expect("Grace Hopper listed");
    assert!(emma < hopper, "rows are ordered by title");
    assert!(html.contains("<td>Butler Library, New York Public Library</td>"));
}

#[tokio::test]
async fn test_searches_fold_case_beyond_ascii() {
    let app = setup_accented_app().await;

    let response = post_form(&app, "/book_title_query", "title=%C3%A9mile").await;
    let html = body_text(response).await;
    assert_eq!(result_rows(&html), 1);
    assert!(html.contains("<td>ÉMILE ET LES ÉTOILES</td><td>Émile Zola</td><td>1880</td>"));

    let response = post_form(&app, "/book_author_query", "author_name=%C3%A9mile+zola").await;
    assert_eq!(result_rows(&body_text(response).await), 1);

    let response = post_form(&app, "/book_library_query", "library_name=%C3%A9cole").await;
    let html = body_text(response).await;
    assert_eq!(result_rows(&html), 1);
    assert!(html.contains("<td>BIBLIOTHÈQUE ÉCOLE</td>"));

    let response = post_form(&app, "/library_query", "name=%C3%A9cole").await;
    assert_eq!(result_rows(&body_text(response).await), 1);

    let response = post_form(&app, "/review_query", "title=%C3%A9toiles").await;
    let html = body_text(response).await;
    assert_eq!(result_rows(&html), 1);
    assert!(html.contains("<td>Magnifique.</td>"));
}

#[tokio::test]
async fn test_review_all_formats_dates() {
    let app = setup_app().await;

    let response = get(&app, "/review_all").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert_eq!(result_rows(&html), 2);
    assert!(html.contains(
        "<td>Dune</td><td>March 07 2023</td><td>A desert epic.</td><td>5</td><td>ab1234</td>"
    ));
    assert!(html.contains("<td>January 15 2024</td>"));
}

#[tokio::test]
async fn test_review_query_by_title() {
    let app = setup_app().await;

    let html = body_text(post_form(&app, "/review_query", "title=DUNE").await).await;
    assert_eq!(result_rows(&html), 1);
    assert!(html.contains("A desert epic."));
    assert!(!html.contains("Witty and sharp."));
}

#[tokio::test]
async fn test_review_add_add_then_review_all() {
    let app = setup_app().await;
    let before = chrono::Utc::now().format("%B %d %Y").to_string();

    let response = post_form(
        &app,
        "/review_add_add",
        "copy=1&username=cd5678&review=Inspiring+read&stars=5",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/review_all");

    let after = chrono::Utc::now().format("%B %d %Y").to_string();
    let html = body_text(get(&app, "/review_all").await).await;
    assert_eq!(result_rows(&html), 3);
    assert!(html.contains("<td>Inspiring read</td>"));
    assert!(
        html.contains(&format!("<td>{}</td>", before))
            || html.contains(&format!("<td>{}</td>", after))
    );
}

#[tokio::test]
async fn test_review_add_for_unknown_user_redirects_to_invalid() {
    let app = setup_app().await;

    let response = post_form(&app, "/review_add", "username=nobody").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/invalid.html");

    let response = get(&app, "/invalid.html").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("No client with that username"));
}

#[tokio::test]
async fn test_review_add_lists_borrowed_copies() {
    let app = setup_app().await;

    let response = post_form(&app, "/review_add", "username=ab1234").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert_eq!(result_rows(&html), 2);
    assert!(html.contains(r#"value="3">Dune</option>"#));
    assert!(html.contains(r#"value="5">Emma</option>"#));
    assert!(html.contains(r#"name="username" value="ab1234""#));
}

#[tokio::test]
async fn test_library_all_and_query() {
    let app = setup_app().await;

    let html = body_text(post_form(&app, "/library_all", "").await).await;
    assert_eq!(result_rows(&html), 3);
    assert_eq!(html.matches("<td>Columbia University</td>").count(), 2);
    // No affiliated university renders an empty cell
    assert!(html.contains("<td>General</td><td></td>"));

    let html = body_text(post_form(&app, "/library_query", "name=AVERY").await).await;
    assert_eq!(result_rows(&html), 1);
    assert!(html.contains("<td>Avery Architectural Library</td><td>1172 Amsterdam Ave</td>"));
}

#[tokio::test]
async fn test_landing_pages_render_without_rows() {
    let app = setup_app().await;

    for uri in [
        "/book.html",
        "/review.html",
        "/library.html",
        "/review_login",
        "/invalid.html",
    ] {
        let response = get(&app, uri).await;
        assert_eq!(response.status(), StatusCode::OK, "GET {}", uri);
        assert_eq!(result_rows(&body_text(response).await), 0, "GET {}", uri);
    }
}

#[tokio::test]
async fn test_login_is_always_unauthorized() {
    let app = setup_app().await;

    assert_eq!(get(&app, "/login").await.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        get(&app, "/login?username=admin&password=admin").await.status(),
        StatusCode::UNAUTHORIZED
    );
}
