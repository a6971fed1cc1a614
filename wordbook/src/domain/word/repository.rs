use crate::domain::word::{WordEntry, WordRecord};
use crate::error::AppError;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

type Result<T> = std::result::Result<T, AppError>;

#[async_trait::async_trait]
pub trait WordRepository: Send + Sync {
    /// Returns `None` when no record exists for `letter`. A record with an
    /// empty word list is returned as `Some` with no entries.
    async fn find_by_letter(&self, letter: &str) -> Result<Option<WordRecord>>;

    /// Drops every stored record and writes `records` in their place.
    async fn replace_all(&self, records: &[WordRecord]) -> Result<()>;

    async fn count_records(&self) -> Result<u64>;
}

#[derive(Debug, FromRow)]
struct EntryRow {
    letter: String,
    word: Option<String>,
    image_url: Option<String>,
}

#[derive(Debug)]
pub struct SqliteWordRepository {
    pub pool: Arc<SqlitePool>,
}

impl SqliteWordRepository {
    pub fn new(pool: Arc<SqlitePool>) -> SqliteWordRepository {
        SqliteWordRepository { pool }
    }
}

#[async_trait::async_trait]
impl WordRepository for SqliteWordRepository {
    async fn find_by_letter(&self, letter: &str) -> Result<Option<WordRecord>> {
        let rows = sqlx::query_as::<_, EntryRow>(
            "SELECT l.letter, e.word, e.image_url \
             FROM letters l LEFT JOIN word_entries e ON e.letter = l.letter \
             WHERE l.letter = ? \
             ORDER BY e.position",
        )
        .bind(letter)
        .fetch_all(self.pool.as_ref())
        .await?;

        let Some(first) = rows.first() else {
            return Ok(None);
        };
        let mut record = WordRecord::new(first.letter.clone(), Vec::with_capacity(rows.len()));
        for row in rows {
            // The left join yields one all-null entry row for a letter without words.
            if let (Some(word), Some(image_url)) = (row.word, row.image_url) {
                record.words.push(WordEntry { word, image_url });
            }
        }
        Ok(Some(record))
    }

    async fn replace_all(&self, records: &[WordRecord]) -> Result<()> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM word_entries").execute(&mut *tx).await?;
        sqlx::query("DELETE FROM letters").execute(&mut *tx).await?;

        for record in records {
            sqlx::query("INSERT INTO letters (letter) VALUES (?)")
                .bind(&record.letter)
                .execute(&mut *tx)
                .await?;
            for (position, entry) in record.words.iter().enumerate() {
                sqlx::query(
                    "INSERT INTO word_entries (letter, position, word, image_url) VALUES (?, ?, ?, ?)",
                )
                .bind(&record.letter)
                .bind(position as i64)
                .bind(&entry.word)
                .bind(&entry.image_url)
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;
        Ok(())
    }

    async fn count_records(&self) -> Result<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM letters")
            .fetch_one(self.pool.as_ref())
            .await?;
        Ok(count as u64)
    }
}
