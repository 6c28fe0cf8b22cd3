/**
 * Book Database Operations
 *
 * Books are always read joined with their owner so responses can embed the
 * owner's public fields without a second round trip.
 */

use chrono::Utc;
use serde::Serialize;
use sqlx::SqlitePool;

/// Public fields of a book's owner
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BookOwner {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// A book with its owner embedded
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Owner ID, exposed only through `user`
    #[serde(skip_serializing)]
    pub user_id: i64,
    pub user: BookOwner,
}

#[derive(sqlx::FromRow)]
struct BookRow {
    id: i64,
    title: String,
    description: String,
    user_id: i64,
    owner_name: String,
    owner_email: String,
}

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        Book {
            id: row.id,
            title: row.title,
            description: row.description,
            user_id: row.user_id,
            user: BookOwner {
                id: row.user_id,
                name: row.owner_name,
                email: row.owner_email,
            },
        }
    }
}

const SELECT_BOOKS: &str = r#"
    SELECT b.id, b.title, b.description, b.user_id,
           u.name AS owner_name, u.email AS owner_email
    FROM books b
    JOIN users u ON u.id = b.user_id
"#;

/// List every book, oldest first
pub async fn all_books(pool: &SqlitePool) -> Result<Vec<Book>, sqlx::Error> {
    let rows = sqlx::query_as::<_, BookRow>(&format!("{SELECT_BOOKS} ORDER BY b.id"))
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(Book::from).collect())
}

/// List the books owned by one user
pub async fn books_by_user(pool: &SqlitePool, user_id: i64) -> Result<Vec<Book>, sqlx::Error> {
    let rows = sqlx::query_as::<_, BookRow>(&format!(
        "{SELECT_BOOKS} WHERE b.user_id = $1 ORDER BY b.id"
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Book::from).collect())
}

/// Get a book by ID
pub async fn find_book_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Book>, sqlx::Error> {
    let row = sqlx::query_as::<_, BookRow>(&format!("{SELECT_BOOKS} WHERE b.id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(Book::from))
}

/// Owner ID of a book, or None if the book does not exist
pub async fn book_owner(pool: &SqlitePool, id: i64) -> Result<Option<i64>, sqlx::Error> {
    sqlx::query_scalar("SELECT user_id FROM books WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Insert a book owned by `user_id`
pub async fn insert_book(
    pool: &SqlitePool,
    user_id: i64,
    title: String,
    description: String,
) -> Result<Book, sqlx::Error> {
    let now = Utc::now();

    let id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO books (title, description, user_id, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
        "#
    )
    .bind(&title)
    .bind(&description)
    .bind(user_id)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    find_book_by_id(pool, id).await?.ok_or(sqlx::Error::RowNotFound)
}

/// Update a book's title and description
///
/// # Returns
/// Updated book, or None if no book has this ID
pub async fn update_book(
    pool: &SqlitePool,
    id: i64,
    title: String,
    description: String,
) -> Result<Option<Book>, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE books
        SET title = $1, description = $2, updated_at = $3
        WHERE id = $4
        "#
    )
    .bind(&title)
    .bind(&description)
    .bind(Utc::now())
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }

    find_book_by_id(pool, id).await
}

/// Delete a book
///
/// # Returns
/// Whether a row was deleted
pub async fn delete_book(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM books WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
