//! HTTP handlers for weather diary endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::handlers::caption::unknown_weather_error;
use crate::services::diary::MAX_HISTORY_LIMIT;
use crate::services::{DiaryService, ForecastService};
use crate::storage::{DiaryEntry, NewDiaryEntry};
use crate::AppState;
use shared::{
    validate_coordinates, validate_diary_content, validate_diary_title, GeoCoordinates,
    WeatherClass,
};

/// Request body for saving a diary entry.
///
/// The weather can be given directly or inferred from coordinates.
#[derive(Debug, Deserialize)]
pub struct SaveDiaryRequest {
    pub title: String,
    pub content: String,
    pub weather: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// Save a diary entry
pub async fn save_diary(
    State(state): State<AppState>,
    Json(request): Json<SaveDiaryRequest>,
) -> AppResult<(StatusCode, Json<DiaryEntry>)> {
    if let Err(message) = validate_diary_title(&request.title) {
        return Err(AppError::Validation {
            field: "title".to_string(),
            message: message.to_string(),
            message_ko: "일기 제목이 올바르지 않습니다.".to_string(),
        });
    }

    if let Err(message) = validate_diary_content(&request.content) {
        return Err(AppError::Validation {
            field: "content".to_string(),
            message: message.to_string(),
            message_ko: "일기 내용이 올바르지 않습니다.".to_string(),
        });
    }

    let weather = match (&request.weather, request.lat, request.lon) {
        (Some(raw), _, _) => raw
            .parse::<WeatherClass>()
            .map_err(|_| unknown_weather_error(raw))?,
        (None, Some(lat), Some(lon)) => {
            if let Err(message) = validate_coordinates(lat, lon) {
                return Err(AppError::Validation {
                    field: "location".to_string(),
                    message: message.to_string(),
                    message_ko: "위치 좌표가 올바르지 않습니다.".to_string(),
                });
            }

            ForecastService::new(state.kma.clone())
                .forecast_for(GeoCoordinates::new(lat, lon))
                .await?
                .weather
        }
        _ => {
            return Err(AppError::Validation {
                field: "weather".to_string(),
                message: "Provide either a weather class or lat/lon coordinates".to_string(),
                message_ko: "날씨 값 또는 위도/경도 좌표가 필요합니다.".to_string(),
            })
        }
    };

    let service = DiaryService::new(state.store.clone());
    let entry = service
        .save(NewDiaryEntry {
            title: request.title,
            content: request.content,
            weather: weather.as_str().to_string(),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(entry)))
}

/// Query parameters for diary history
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<i64>,
}

/// List recent diary entries, newest first
pub async fn diary_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> AppResult<Json<Vec<DiaryEntry>>> {
    let service = DiaryService::new(state.store.clone());
    let entries = service
        .history(query.limit.unwrap_or(MAX_HISTORY_LIMIT))
        .await?;
    Ok(Json(entries))
}

/// Fetch a diary entry by ID
pub async fn get_diary(
    State(state): State<AppState>,
    Path(diary_id): Path<Uuid>,
) -> AppResult<Json<DiaryEntry>> {
    let service = DiaryService::new(state.store.clone());
    let entry = service.get(diary_id).await?;
    Ok(Json(entry))
}

/// Response body for a successful delete
#[derive(Debug, Serialize)]
pub struct DeleteDiaryResponse {
    pub message: String,
    pub message_ko: String,
}

/// Delete a diary entry by ID
pub async fn delete_diary(
    State(state): State<AppState>,
    Path(diary_id): Path<Uuid>,
) -> AppResult<Json<DeleteDiaryResponse>> {
    let service = DiaryService::new(state.store.clone());
    service.delete(diary_id).await?;

    Ok(Json(DeleteDiaryResponse {
        message: "Diary entry deleted successfully".to_string(),
        message_ko: "일기가 성공적으로 삭제되었습니다.".to_string(),
    }))
}
