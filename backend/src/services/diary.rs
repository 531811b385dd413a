//! Diary service for saving and browsing weather diary entries

use std::sync::Arc;

use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::storage::{DiaryEntry, DiaryStore, NewDiaryEntry};

/// Upper bound on how many entries one history request may return
pub const MAX_HISTORY_LIMIT: i64 = 100;

/// Diary service
#[derive(Clone)]
pub struct DiaryService {
    store: Arc<dyn DiaryStore>,
}

impl DiaryService {
    /// Create a new DiaryService instance
    pub fn new(store: Arc<dyn DiaryStore>) -> Self {
        Self { store }
    }

    /// Store a new diary entry
    pub async fn save(&self, input: NewDiaryEntry) -> AppResult<DiaryEntry> {
        self.store.insert_diary(input).await
    }

    /// Most recent entries, newest first
    pub async fn history(&self, limit: i64) -> AppResult<Vec<DiaryEntry>> {
        self.store
            .list_diaries(limit.clamp(1, MAX_HISTORY_LIMIT))
            .await
    }

    /// Fetch a single entry by id
    pub async fn get(&self, diary_id: Uuid) -> AppResult<DiaryEntry> {
        self.store
            .get_diary(diary_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Diary entry".to_string()))
    }

    /// Delete a single entry by id
    pub async fn delete(&self, diary_id: Uuid) -> AppResult<()> {
        if !self.store.delete_diary(diary_id).await? {
            return Err(AppError::NotFound("Diary entry".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryDiaryStore;

    fn entry(title: &str) -> NewDiaryEntry {
        NewDiaryEntry {
            title: title.to_string(),
            content: "오늘의 기록".to_string(),
            weather: "sunny".to_string(),
        }
    }

    fn service() -> DiaryService {
        DiaryService::new(Arc::new(MemoryDiaryStore::new()))
    }

    #[tokio::test]
    async fn test_save_then_get_round_trip() {
        let service = service();

        let saved = service.save(entry("산책")).await.unwrap();
        let fetched = service.get(saved.id).await.unwrap();

        assert_eq!(fetched.id, saved.id);
        assert_eq!(fetched.title, "산책");
        assert_eq!(fetched.weather, "sunny");
    }

    #[tokio::test]
    async fn test_history_is_newest_first_and_limited() {
        let service = service();

        service.save(entry("first")).await.unwrap();
        service.save(entry("second")).await.unwrap();
        service.save(entry("third")).await.unwrap();

        let recent = service.history(2).await.unwrap();

        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].title, "third");
        assert_eq!(recent[1].title, "second");
    }

    #[tokio::test]
    async fn test_history_limit_is_clamped() {
        let service = service();
        service.save(entry("only")).await.unwrap();

        // A zero or negative limit still returns at least one entry
        let recent = service.history(0).await.unwrap();
        assert_eq!(recent.len(), 1);
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_not_found() {
        let service = service();

        let result = service.get(Uuid::new_v4()).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_is_not_repeatable() {
        let service = service();
        let saved = service.save(entry("지울 일기")).await.unwrap();

        service.delete(saved.id).await.unwrap();
        let second = service.delete(saved.id).await;

        assert!(matches!(second, Err(AppError::NotFound(_))));
    }
}
