//! Caption service pairing a weather class with its stored caption

use std::sync::Arc;

use crate::error::AppResult;
use crate::storage::{CaptionRecord, DiaryStore, NewCaptionRecord};
use shared::{Language, WeatherClass};

/// Caption service persisting every generated caption
#[derive(Clone)]
pub struct CaptionService {
    store: Arc<dyn DiaryStore>,
}

impl CaptionService {
    /// Create a new CaptionService instance
    pub fn new(store: Arc<dyn DiaryStore>) -> Self {
        Self { store }
    }

    /// Store and return the caption for a weather class
    pub async fn create_caption(&self, weather: WeatherClass) -> AppResult<CaptionRecord> {
        let input = NewCaptionRecord {
            weather: weather.as_str().to_string(),
            caption: weather.caption(Language::Korean).to_string(),
        };

        self.store.insert_caption(input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryDiaryStore;

    #[tokio::test]
    async fn test_create_caption_persists_korean_caption() {
        let store = Arc::new(MemoryDiaryStore::new());
        let service = CaptionService::new(store.clone());

        let record = service.create_caption(WeatherClass::Rainy).await.unwrap();

        assert_eq!(record.weather, "rainy");
        assert_eq!(record.caption, "비가 오고 있어요. 우산 챙기고 발걸음 조심하세요!");
        assert_eq!(store.caption_count(), 1);
    }

    #[tokio::test]
    async fn test_every_weather_class_has_a_caption() {
        let store = Arc::new(MemoryDiaryStore::new());
        let service = CaptionService::new(store);

        for weather in WeatherClass::ALL {
            let record = service.create_caption(weather).await.unwrap();
            assert_eq!(record.weather, weather.as_str());
            assert!(!record.caption.is_empty());
        }
    }
}
