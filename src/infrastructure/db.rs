use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};

/// Catalog schema. Every statement is idempotent so an existing database is left as is.
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS university (
        university_id INTEGER PRIMARY KEY,
        name TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS library (
        library_id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        address TEXT,
        hours TEXT,
        specialization TEXT,
        affiliated_with INTEGER REFERENCES university(university_id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS author (
        author_id INTEGER PRIMARY KEY,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS book (
        copy_id INTEGER PRIMARY KEY,
        isbn TEXT NOT NULL,
        title TEXT NOT NULL,
        pub_year INTEGER,
        owned_by INTEGER NOT NULL REFERENCES library(library_id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS wrote (
        copy_id INTEGER NOT NULL REFERENCES book(copy_id),
        author_id INTEGER NOT NULL REFERENCES author(author_id),
        PRIMARY KEY (copy_id, author_id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS client (
        username TEXT PRIMARY KEY
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS borrows (
        username TEXT NOT NULL REFERENCES client(username),
        copy_id INTEGER NOT NULL REFERENCES book(copy_id),
        PRIMARY KEY (username, copy_id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS review (
        copy_id INTEGER NOT NULL REFERENCES book(copy_id),
        username TEXT NOT NULL REFERENCES client(username),
        pub_date TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
        text TEXT NOT NULL,
        stars INTEGER NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS test (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT
    )
    "#,
];

/// Demo rows for the `test` table, inserted only while the table is empty.
const SEED_DEMO_NAMES: &str = r#"
    INSERT INTO test (name)
    SELECT name FROM (
        SELECT 'grace hopper' AS name
        UNION ALL SELECT 'alan turing'
        UNION ALL SELECT 'ada lovelace'
    )
    WHERE NOT EXISTS (SELECT 1 FROM test)
"#;

pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;

    run_migrations(&db).await?;

    Ok(db)
}

async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();

    for ddl in SCHEMA {
        db.execute(Statement::from_string(backend, ddl.to_string())).await?;
    }

    let seeded = db
        .execute(Statement::from_string(backend, SEED_DEMO_NAMES.to_owned()))
        .await?;
    if seeded.rows_affected() > 0 {
        tracing::info!("Seeded demo table with {} names", seeded.rows_affected());
    }

    Ok(())
}
