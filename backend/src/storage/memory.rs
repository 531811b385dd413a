//! In-memory diary store used by service tests

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;
use uuid::Uuid;

use super::{CaptionRecord, DiaryEntry, DiaryStore, NewCaptionRecord, NewDiaryEntry};
use crate::error::AppResult;

/// Diary store holding everything in process memory
#[derive(Default)]
pub struct MemoryDiaryStore {
    captions: Mutex<Vec<CaptionRecord>>,
    diaries: Mutex<Vec<DiaryEntry>>,
}

impl MemoryDiaryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn caption_count(&self) -> usize {
        self.captions.lock().unwrap().len()
    }
}

#[async_trait]
impl DiaryStore for MemoryDiaryStore {
    async fn insert_caption(&self, input: NewCaptionRecord) -> AppResult<CaptionRecord> {
        let record = CaptionRecord {
            id: Uuid::new_v4(),
            weather: input.weather,
            caption: input.caption,
            created_at: Utc::now(),
        };
        self.captions.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn insert_diary(&self, input: NewDiaryEntry) -> AppResult<DiaryEntry> {
        let entry = DiaryEntry {
            id: Uuid::new_v4(),
            title: input.title,
            content: input.content,
            weather: input.weather,
            created_at: Utc::now(),
        };
        self.diaries.lock().unwrap().push(entry.clone());
        Ok(entry)
    }

    async fn list_diaries(&self, limit: i64) -> AppResult<Vec<DiaryEntry>> {
        let mut entries = self.diaries.lock().unwrap().clone();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        entries.truncate(limit.max(0) as usize);
        Ok(entries)
    }

    async fn get_diary(&self, diary_id: Uuid) -> AppResult<Option<DiaryEntry>> {
        let entries = self.diaries.lock().unwrap();
        Ok(entries.iter().find(|entry| entry.id == diary_id).cloned())
    }

    async fn delete_diary(&self, diary_id: Uuid) -> AppResult<bool> {
        let mut entries = self.diaries.lock().unwrap();
        let before = entries.len();
        entries.retain(|entry| entry.id != diary_id);
        Ok(entries.len() < before)
    }
}
