//! WebAssembly module for the Weather Caption Service
//!
//! Provides client-side computation for:
//! - GPS to KMA grid conversion
//! - Weather classification and captions
//! - Forecast window summaries
//! - Base-time selection

use chrono::{DateTime, FixedOffset};
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::forecast::*;
pub use shared::models::*;
pub use shared::projection::*;
pub use shared::types::*;
pub use shared::validation::*;

/// KMA base times are published in Korea Standard Time (UTC+9)
const KST_OFFSET_SECS: i32 = 9 * 3600;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    web_sys::console::log_1(&"weather-caption wasm module loaded".into());
}

/// Convert GPS coordinates to the KMA grid cell, as JSON
#[wasm_bindgen]
pub fn convert_to_grid(latitude: f64, longitude: f64) -> Result<String, JsValue> {
    let cell = to_grid(latitude, longitude);
    serde_json::to_string(&cell).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Caption for a weather class name ("sunny", "rainy", ...)
///
/// Unknown names get the fallback caption instead of an error.
#[wasm_bindgen]
pub fn caption_for_weather(weather: &str, lang: &str) -> String {
    let language = if lang == Language::English.code() {
        Language::English
    } else {
        Language::Korean
    };

    match weather.parse::<WeatherClass>() {
        Ok(class) => class.caption(language).to_string(),
        Err(_) => fallback_caption(language).to_string(),
    }
}

/// Classify a forecast window (JSON array of feed observations)
#[wasm_bindgen]
pub fn classify_observations(items_json: &str) -> Result<String, JsValue> {
    let observations: Vec<ForecastObservation> = serde_json::from_str(items_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid observations JSON: {}", e)))?;

    Ok(classify(&observations).as_str().to_string())
}

/// Summarize a forecast window into bilingual display text, as JSON
#[wasm_bindgen]
pub fn summarize_observations(items_json: &str) -> Result<String, JsValue> {
    let observations: Vec<ForecastObservation> = serde_json::from_str(items_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid observations JSON: {}", e)))?;

    let text = summarize(&observations).describe();
    serde_json::to_string(&text).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Base-time candidates for the current moment, as JSON date/time pairs
#[wasm_bindgen]
pub fn base_time_candidates_now() -> Result<String, JsValue> {
    let now_ms = js_sys::Date::now();
    let utc = DateTime::from_timestamp_millis(now_ms as i64)
        .ok_or_else(|| JsValue::from_str("Clock out of range"))?;
    let kst = utc.with_timezone(&FixedOffset::east_opt(KST_OFFSET_SECS).expect("valid KST offset"));

    let pairs: Vec<(String, String)> = base_time_candidates(kst.naive_local())
        .iter()
        .map(|slot| (slot.date_param(), slot.time.to_string()))
        .collect();

    serde_json::to_string(&pairs).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_to_grid_seoul() {
        let json = convert_to_grid(37.5665, 126.9780).unwrap();
        assert_eq!(json, r#"{"nx":60,"ny":127}"#);
    }

    #[test]
    fn test_caption_for_weather() {
        assert_eq!(
            caption_for_weather("rainy", "ko"),
            "비가 오고 있어요. 우산 챙기고 발걸음 조심하세요!"
        );
        assert_eq!(
            caption_for_weather("sunny", "en"),
            "A bright and sunny day. How about heading out somewhere?"
        );
        assert_eq!(
            caption_for_weather("volcanic", "ko"),
            "날씨에 맞는 캡션을 찾을 수 없어요."
        );
    }

    #[test]
    fn test_classify_observations() {
        let items = r#"[
            {"category": "SKY", "fcstTime": "1200", "fcstValue": "1"},
            {"category": "PTY", "fcstTime": "1200", "fcstValue": "3"}
        ]"#;

        assert_eq!(classify_observations(items).unwrap(), "snowy");
    }

    #[test]
    fn test_summarize_observations() {
        let items = r#"[
            {"category": "TMP", "fcstTime": "1200", "fcstValue": "21"},
            {"category": "SKY", "fcstTime": "1200", "fcstValue": "1"}
        ]"#;

        let json = summarize_observations(items).unwrap();
        assert!(json.contains("21.0~21.0°C"));
        assert!(json.contains("맑음"));
    }
}
