use sea_orm::{
    ConnectionTrait, DatabaseConnection, DbErr, FromQueryResult, Statement, TransactionTrait,
};

use crate::models::CountRow;

/// A small sample catalog: two universities, three libraries, five copies of
/// four titles, two clients with loans and two reviews.
const DEMO_CATALOG: &[&str] = &[
    "INSERT INTO university (university_id, name) VALUES
        (1, 'Columbia University'),
        (2, 'Barnard College')",
    "INSERT INTO library (library_id, name, address, hours, specialization, affiliated_with) VALUES
        (1, 'Butler Library', '535 W 114th St', '9am-11pm', 'Humanities', 1),
        (2, 'Avery Architectural Library', '1172 Amsterdam Ave', '9am-7pm', 'Architecture', 1),
        (3, 'New York Public Library', '476 5th Ave', '10am-6pm', 'General', NULL)",
    "INSERT INTO author (author_id, first_name, last_name) VALUES
        (1, 'Kurt', 'Beyer'),
        (2, 'Frank', 'Herbert'),
        (3, 'Terry', 'Pratchett'),
        (4, 'Neil', 'Gaiman'),
        (5, 'Jane', 'Austen')",
    "INSERT INTO book (copy_id, isbn, title, pub_year, owned_by) VALUES
        (1, '9780262517843', 'Grace Hopper and the Invention of the Information Age', 2009, 1),
        (2, '9780262517843', 'Grace Hopper and the Invention of the Information Age', 2009, 3),
        (3, '9780441013593', 'Dune', 1965, 1),
        (4, '9780060853983', 'Good Omens', 1990, 2),
        (5, '9780141439518', 'Emma', 1815, 3)",
    "INSERT INTO wrote (copy_id, author_id) VALUES
        (1, 1), (2, 1), (3, 2), (4, 3), (4, 4), (5, 5)",
    "INSERT INTO client (username) VALUES ('ab1234'), ('cd5678')",
    "INSERT INTO borrows (username, copy_id) VALUES
        ('ab1234', 3), ('ab1234', 5), ('cd5678', 1)",
    "INSERT INTO review (copy_id, username, pub_date, text, stars) VALUES
        (3, 'ab1234', '2023-03-07 14:30:00', 'A desert epic.', 5),
        (5, 'ab1234', '2024-01-15 09:00:00', 'Witty and sharp.', 4)",
];

/// Load the sample catalog unless the database already holds books.
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();

    let books = CountRow::find_by_statement(Statement::from_string(
        backend,
        "SELECT COUNT(*) AS count FROM book".to_owned(),
    ))
    .one(db)
    .await?
    .map(|row| row.count)
    .unwrap_or(0);

    if books > 0 {
        tracing::info!("Catalog already holds {} copies, skipping demo seed", books);
        return Ok(());
    }

    let txn = db.begin().await?;
    for insert in DEMO_CATALOG {
        txn.execute(Statement::from_string(backend, insert.to_string())).await?;
    }
    txn.commit().await?;

    Ok(())
}
