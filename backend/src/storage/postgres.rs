//! PostgreSQL-backed diary store

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{CaptionRecord, DiaryEntry, DiaryStore, NewCaptionRecord, NewDiaryEntry};
use crate::error::AppResult;

/// Diary store backed by the application database
#[derive(Clone)]
pub struct PgDiaryStore {
    db: PgPool,
}

impl PgDiaryStore {
    /// Create a new PgDiaryStore instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DiaryStore for PgDiaryStore {
    async fn insert_caption(&self, input: NewCaptionRecord) -> AppResult<CaptionRecord> {
        let record = sqlx::query_as::<_, CaptionRecord>(
            r#"
            INSERT INTO caption_records (weather, caption)
            VALUES ($1, $2)
            RETURNING id, weather, caption, created_at
            "#,
        )
        .bind(&input.weather)
        .bind(&input.caption)
        .fetch_one(&self.db)
        .await?;

        Ok(record)
    }

    async fn insert_diary(&self, input: NewDiaryEntry) -> AppResult<DiaryEntry> {
        let entry = sqlx::query_as::<_, DiaryEntry>(
            r#"
            INSERT INTO diary_entries (title, content, weather)
            VALUES ($1, $2, $3)
            RETURNING id, title, content, weather, created_at
            "#,
        )
        .bind(&input.title)
        .bind(&input.content)
        .bind(&input.weather)
        .fetch_one(&self.db)
        .await?;

        Ok(entry)
    }

    async fn list_diaries(&self, limit: i64) -> AppResult<Vec<DiaryEntry>> {
        let entries = sqlx::query_as::<_, DiaryEntry>(
            r#"
            SELECT id, title, content, weather, created_at
            FROM diary_entries
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.db)
        .await?;

        Ok(entries)
    }

    async fn get_diary(&self, diary_id: Uuid) -> AppResult<Option<DiaryEntry>> {
        let entry = sqlx::query_as::<_, DiaryEntry>(
            r#"
            SELECT id, title, content, weather, created_at
            FROM diary_entries
            WHERE id = $1
            "#,
        )
        .bind(diary_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(entry)
    }

    async fn delete_diary(&self, diary_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM diary_entries WHERE id = $1")
            .bind(diary_id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
