//! Persistence layer for caption records and diary entries

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::AppResult;

mod postgres;

#[cfg(test)]
pub mod memory;

pub use postgres::PgDiaryStore;

/// Stored caption record
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CaptionRecord {
    pub id: Uuid,
    pub weather: String,
    pub caption: String,
    pub created_at: DateTime<Utc>,
}

/// Input for storing a caption
#[derive(Debug, Clone)]
pub struct NewCaptionRecord {
    pub weather: String,
    pub caption: String,
}

/// Stored diary entry
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct DiaryEntry {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub weather: String,
    pub created_at: DateTime<Utc>,
}

/// Input for storing a diary entry
#[derive(Debug, Clone)]
pub struct NewDiaryEntry {
    pub title: String,
    pub content: String,
    pub weather: String,
}

/// Persistence seam used by the caption and diary services
#[async_trait]
pub trait DiaryStore: Send + Sync {
    async fn insert_caption(&self, input: NewCaptionRecord) -> AppResult<CaptionRecord>;
    async fn insert_diary(&self, input: NewDiaryEntry) -> AppResult<DiaryEntry>;
    async fn list_diaries(&self, limit: i64) -> AppResult<Vec<DiaryEntry>>;
    async fn get_diary(&self, diary_id: Uuid) -> AppResult<Option<DiaryEntry>>;
    async fn delete_diary(&self, diary_id: Uuid) -> AppResult<bool>;
}
