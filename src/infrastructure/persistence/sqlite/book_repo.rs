//! SQLite Book Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use super::DbPool;
use crate::application::ports::{BookRecord, BookRepositoryPort, RepositoryError};

/// SQLite Book Repository
pub struct SqliteBookRepository {
    pool: DbPool,
}

impl SqliteBookRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct BookRow {
    id: String,
    title: String,
    author: String,
    genre: String,
    cover_url: Option<String>,
    description: Option<String>,
    created_at: String,
    updated_at: String,
}

impl TryFrom<BookRow> for BookRecord {
    type Error = RepositoryError;

    fn try_from(row: BookRow) -> Result<Self, Self::Error> {
        Ok(BookRecord {
            id: Uuid::parse_str(&row.id)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?,
            title: row.title,
            author: row.author,
            genre: row.genre,
            cover_url: row.cover_url,
            description: row.description,
            created_at: DateTime::parse_from_rfc3339(&row.created_at)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?
                .with_timezone(&Utc),
            updated_at: DateTime::parse_from_rfc3339(&row.updated_at)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?
                .with_timezone(&Utc),
        })
    }
}

#[async_trait]
impl BookRepositoryPort for SqliteBookRepository {
    async fn save(&self, book: &BookRecord) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO books (id, title, author, genre, cover_url, description, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                title = excluded.title,
                author = excluded.author,
                genre = excluded.genre,
                cover_url = excluded.cover_url,
                description = excluded.description,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(book.id.to_string())
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.genre)
        .bind(&book.cover_url)
        .bind(&book.description)
        .bind(book.created_at.to_rfc3339())
        .bind(book.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<BookRecord>, RepositoryError> {
        let row: Option<BookRow> = sqlx::query_as(
            "SELECT id, title, author, genre, cover_url, description, created_at, updated_at
             FROM books WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        row.map(BookRecord::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<BookRecord>, RepositoryError> {
        // 目录顺序：按登记时间，其次按 ID，保证稳定
        let rows: Vec<BookRow> = sqlx::query_as(
            "SELECT id, title, author, genre, cover_url, description, created_at, updated_at
             FROM books ORDER BY created_at, id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(BookRecord::try_from).collect()
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Book {}", id)));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::sqlite::{create_pool, run_migrations, DatabaseConfig};
    use chrono::Duration;

    async fn test_repo() -> SqliteBookRepository {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        SqliteBookRepository::new(pool)
    }

    fn record_at(title: &str, genre: &str, created_at: DateTime<Utc>) -> BookRecord {
        BookRecord {
            id: Uuid::new_v4(),
            title: title.to_string(),
            author: "佚名".to_string(),
            genre: genre.to_string(),
            cover_url: None,
            description: None,
            created_at,
            updated_at: created_at,
        }
    }

    #[tokio::test]
    async fn test_save_and_find_by_id() {
        let repo = test_repo().await;
        let mut record = record_at("三体", "Science Fiction", Utc::now());
        record.cover_url = Some("/covers/santi.jpg".to_string());
        record.description = Some("地球往事三部曲第一部".to_string());

        repo.save(&record).await.unwrap();

        let found = repo.find_by_id(record.id).await.unwrap().unwrap();
        assert_eq!(found.title, "三体");
        assert_eq!(found.genre, "Science Fiction");
        assert_eq!(found.cover_url.as_deref(), Some("/covers/santi.jpg"));
    }

    #[tokio::test]
    async fn test_find_by_id_missing_is_none() {
        let repo = test_repo().await;
        assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_all_in_catalog_order() {
        let repo = test_repo().await;
        let base = Utc::now();

        // 乱序插入，登记时间决定目录顺序
        let second = record_at("b", "Fantasy", base + Duration::seconds(1));
        let first = record_at("a", "Horror", base);
        let third = record_at("c", "Romance", base + Duration::seconds(2));
        for r in [&second, &first, &third] {
            repo.save(r).await.unwrap();
        }

        let all = repo.find_all().await.unwrap();
        let titles: Vec<&str> = all.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_save_is_upsert() {
        let repo = test_repo().await;
        let mut record = record_at("初版书名", "Drama", Utc::now());
        repo.save(&record).await.unwrap();

        record.title = "修订书名".to_string();
        record.updated_at = record.updated_at + Duration::seconds(5);
        repo.save(&record).await.unwrap();

        let found = repo.find_by_id(record.id).await.unwrap().unwrap();
        assert_eq!(found.title, "修订书名");
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = test_repo().await;
        let record = record_at("x", "Drama", Utc::now());
        repo.save(&record).await.unwrap();

        repo.delete(record.id).await.unwrap();
        assert!(repo.find_by_id(record.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let repo = test_repo().await;
        let result = repo.delete(Uuid::new_v4()).await;
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    }
}
