//! HTTP handlers for caption endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::services::{CaptionService, ForecastService};
use crate::storage::CaptionRecord;
use crate::AppState;
use shared::{
    is_within_kma_coverage, validate_coordinates, GeoCoordinates, GridCell, SummaryText,
    WeatherClass,
};

/// Query parameters for caption generation
#[derive(Debug, Deserialize)]
pub struct CaptionQuery {
    pub weather: String,
}

/// Generate and store a caption for a known weather class
pub async fn generate_caption(
    State(state): State<AppState>,
    Query(query): Query<CaptionQuery>,
) -> AppResult<Json<CaptionRecord>> {
    let weather = query
        .weather
        .parse::<WeatherClass>()
        .map_err(|_| unknown_weather_error(&query.weather))?;

    let service = CaptionService::new(state.store.clone());
    let record = service.create_caption(weather).await?;
    Ok(Json(record))
}

/// Query parameters for location-based captions
#[derive(Debug, Deserialize)]
pub struct LocationQuery {
    pub lat: f64,
    pub lon: f64,
}

/// Location caption response: the stored caption plus the forecast details
#[derive(Debug, Serialize)]
pub struct LocationCaptionResponse {
    pub caption_item: CaptionRecord,
    pub weather: WeatherClass,
    pub grid: GridCell,
    pub base_date: String,
    pub base_time: String,
    pub description: SummaryText,
}

/// Look up the weather at a location and store a matching caption
pub async fn caption_from_location(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> AppResult<Json<LocationCaptionResponse>> {
    if let Err(message) = validate_coordinates(query.lat, query.lon) {
        return Err(AppError::Validation {
            field: "location".to_string(),
            message: message.to_string(),
            message_ko: "위치 좌표가 올바르지 않습니다.".to_string(),
        });
    }

    if !is_within_kma_coverage(query.lat, query.lon) {
        tracing::warn!(
            "Coordinates ({}, {}) are outside KMA grid coverage",
            query.lat,
            query.lon
        );
    }

    let forecast = ForecastService::new(state.kma.clone())
        .forecast_for(GeoCoordinates::new(query.lat, query.lon))
        .await?;

    let caption_item = CaptionService::new(state.store.clone())
        .create_caption(forecast.weather)
        .await?;

    let description = forecast.summary.describe();

    Ok(Json(LocationCaptionResponse {
        caption_item,
        weather: forecast.weather,
        grid: forecast.grid,
        base_date: forecast.base_date,
        base_time: forecast.base_time,
        description,
    }))
}

/// Request body for image captions
#[derive(Debug, Deserialize)]
pub struct ImageCaptionRequest {
    pub image_base64: String,
}

/// Caption an uploaded photo.
///
/// The photo is decoded and validated, but the weather class is drawn at
/// random until an image classifier is wired in.
pub async fn caption_from_image(
    State(state): State<AppState>,
    Json(request): Json<ImageCaptionRequest>,
) -> AppResult<Json<CaptionRecord>> {
    let bytes = STANDARD
        .decode(&request.image_base64)
        .map_err(|e| AppError::Validation {
            field: "image_base64".to_string(),
            message: format!("Invalid base64 image data: {}", e),
            message_ko: "이미지 데이터가 올바른 base64 형식이 아닙니다.".to_string(),
        })?;

    let image = image::load_from_memory(&bytes).map_err(|e| AppError::Validation {
        field: "image_base64".to_string(),
        message: format!("Unreadable image: {}", e),
        message_ko: "이미지를 해석할 수 없습니다.".to_string(),
    })?;

    tracing::debug!(
        "Captioning a {}x{} image",
        image.width(),
        image.height()
    );

    let weather = random_weather();

    let service = CaptionService::new(state.store.clone());
    let record = service.create_caption(weather).await?;
    Ok(Json(record))
}

/// 400 response for a weather value that is not one of the known classes
pub(crate) fn unknown_weather_error(raw: &str) -> AppError {
    let accepted = WeatherClass::ALL
        .iter()
        .map(|weather| weather.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    AppError::Validation {
        field: "weather".to_string(),
        message: format!(
            "Unknown weather class '{}'. Accepted values: {}",
            raw, accepted
        ),
        message_ko: format!(
            "알 수 없는 날씨 '{}'입니다. 사용 가능한 값: {}",
            raw, accepted
        ),
    }
}

fn random_weather() -> WeatherClass {
    let index = rand::rng().random_range(0..WeatherClass::ALL.len());
    WeatherClass::ALL[index]
}
