use sea_orm::FromQueryResult;

#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct BorrowedCopyRow {
    pub title: String,
    pub copy_id: i32,
}

/// `SELECT COUNT(*) AS count ...`
#[derive(Debug, Clone, Copy, FromQueryResult)]
pub struct CountRow {
    pub count: i64,
}
