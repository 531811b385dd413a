//! Interpretation of village-forecast observations
//!
//! The upstream feed answers a grid/base-time query with an unordered list
//! of categorized observations. The functions here reduce such a list to a
//! [`WeatherClass`], a [`WeatherSummary`], and the base-time slots worth
//! requesting at a given local time. All of them are pure; fetching and
//! scanning live in the backend.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::{PrecipitationOutlook, SkyOutlook, ValueRange, WeatherClass, WeatherSummary};

/// One observation from the village forecast feed.
///
/// Serialized names follow the upstream feed (`fcstTime`, `fcstValue`), so
/// raw feed items deserialize directly; extra upstream fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ForecastObservation {
    pub category: String,
    pub fcst_time: String,
    pub fcst_value: String,
}

impl ForecastObservation {
    pub fn new(category: &str, fcst_time: &str, fcst_value: &str) -> Self {
        Self {
            category: category.to_string(),
            fcst_time: fcst_time.to_string(),
            fcst_value: fcst_value.to_string(),
        }
    }
}

/// Severity rank of a precipitation-type value; higher is more severe.
/// "0" and unrecognized values carry no precipitation signal.
fn pty_severity(value: &str) -> u8 {
    match value {
        "2" => 4, // rain and snow mixed
        "3" => 3, // snow
        "1" => 2, // rain
        "4" => 1, // shower
        _ => 0,
    }
}

/// Classify a forecast window into a weather class.
///
/// Precipitation wins over sky condition: the most severe precipitation
/// type anywhere in the window decides the class, independent of list
/// order. Without a precipitation signal the most overcast sky value
/// decides. An empty or uninformative window classifies as sunny.
pub fn classify(observations: &[ForecastObservation]) -> WeatherClass {
    let severest_pty = observations
        .iter()
        .filter(|obs| obs.category == "PTY")
        .map(|obs| obs.fcst_value.as_str())
        .max_by_key(|value| pty_severity(value))
        .filter(|value| pty_severity(value) > 0);

    if let Some(value) = severest_pty {
        return match value {
            "2" | "3" => WeatherClass::Snowy,
            "1" => WeatherClass::Rainy,
            _ => WeatherClass::Shower,
        };
    }

    let skies: Vec<&str> = observations
        .iter()
        .filter(|obs| obs.category == "SKY")
        .map(|obs| obs.fcst_value.as_str())
        .collect();

    if skies.contains(&"4") {
        WeatherClass::Cloudy
    } else if skies.contains(&"3") {
        WeatherClass::PartlyCloudy
    } else {
        WeatherClass::Sunny
    }
}

/// Keep only the observations of the most recent forecast time in the
/// window. `fcstTime` is "HHMM", so lexicographic order is numeric order.
pub fn latest_slot(observations: &[ForecastObservation]) -> Vec<ForecastObservation> {
    match observations.iter().map(|obs| obs.fcst_time.as_str()).max() {
        Some(latest) => observations
            .iter()
            .filter(|obs| obs.fcst_time == latest)
            .cloned()
            .collect(),
        None => Vec::new(),
    }
}

/// Summarize a forecast window: temperature and wind ranges, mean humidity,
/// precipitation and sky outlooks.
///
/// Unparsable numeric values are skipped. Missing categories stay `None`;
/// absence never becomes a numeric default.
pub fn summarize(observations: &[ForecastObservation]) -> WeatherSummary {
    let mut temps = Vec::new();
    let mut winds = Vec::new();
    let mut humidities = Vec::new();
    let mut skies = Vec::new();
    let mut precip_types = Vec::new();

    for obs in observations {
        match obs.category.as_str() {
            "TMP" | "T1H" => {
                if let Ok(value) = obs.fcst_value.parse::<f64>() {
                    temps.push(value);
                }
            }
            "WSD" => {
                if let Ok(value) = obs.fcst_value.parse::<f64>() {
                    winds.push(value);
                }
            }
            "REH" => {
                if let Ok(value) = obs.fcst_value.parse::<f64>() {
                    humidities.push(value);
                }
            }
            "SKY" => skies.push(obs.fcst_value.as_str()),
            "PTY" => precip_types.push(obs.fcst_value.as_str()),
            _ => {}
        }
    }

    let precipitation = if precip_types.contains(&"1") {
        PrecipitationOutlook::Rain
    } else if precip_types.contains(&"2") {
        PrecipitationOutlook::RainOrSnow
    } else if precip_types.contains(&"3") {
        PrecipitationOutlook::Snow
    } else {
        PrecipitationOutlook::NotExpected
    };

    let sky = if skies.contains(&"4") {
        Some(SkyOutlook::Overcast)
    } else if skies.contains(&"3") {
        Some(SkyOutlook::MostlyCloudy)
    } else if skies.contains(&"1") {
        Some(SkyOutlook::Clear)
    } else {
        None
    };

    WeatherSummary {
        temperature_c: min_max(&temps),
        wind_speed_ms: min_max(&winds),
        humidity_pct_avg: mean_one_decimal(&humidities),
        precipitation,
        sky,
        has_precipitation_data: !precip_types.is_empty(),
    }
}

fn min_max(values: &[f64]) -> Option<ValueRange> {
    if values.is_empty() {
        return None;
    }
    let mut min = values[0];
    let mut max = values[0];
    for &value in &values[1..] {
        if value < min {
            min = value;
        }
        if value > max {
            max = value;
        }
    }
    Some(ValueRange { min, max })
}

fn mean_one_decimal(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    Some((mean * 10.0).round() / 10.0)
}

/// Publication times of the village forecast, newest first ("HHMM", KST)
pub const BASE_TIMES: [&str; 8] = [
    "2300", "2000", "1700", "1400", "1100", "0800", "0500", "0200",
];

/// One base_date/base_time pair to request from the feed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseSlot {
    pub date: NaiveDate,
    pub time: &'static str,
}

impl BaseSlot {
    /// The date formatted as the feed expects ("YYYYMMDD")
    pub fn date_param(&self) -> String {
        self.date.format("%Y%m%d").to_string()
    }
}

/// Base slots worth requesting at the given local time, newest first.
///
/// Every same-day publication at or before the current time of day is a
/// candidate; before the day's first publication the only candidate is
/// yesterday's last one.
pub fn base_time_candidates(now: NaiveDateTime) -> Vec<BaseSlot> {
    let current = now.format("%H%M").to_string();
    let mut candidates: Vec<BaseSlot> = BASE_TIMES
        .iter()
        .copied()
        .filter(|time| current.as_str() >= *time)
        .map(|time| BaseSlot {
            date: now.date(),
            time,
        })
        .collect();
    if candidates.is_empty() {
        candidates.push(BaseSlot {
            date: now.date() - Duration::days(1),
            time: "2300",
        });
    }
    candidates
}
