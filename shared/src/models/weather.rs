//! Weather classification and summary models

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::Language;

/// Weather classification derived from the village forecast
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WeatherClass {
    Sunny,
    PartlyCloudy,
    Cloudy,
    Rainy,
    Shower,
    Snowy,
}

impl WeatherClass {
    /// All classes, in caption-catalog order
    pub const ALL: [WeatherClass; 6] = [
        WeatherClass::Sunny,
        WeatherClass::PartlyCloudy,
        WeatherClass::Cloudy,
        WeatherClass::Rainy,
        WeatherClass::Shower,
        WeatherClass::Snowy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherClass::Sunny => "sunny",
            WeatherClass::PartlyCloudy => "partly_cloudy",
            WeatherClass::Cloudy => "cloudy",
            WeatherClass::Rainy => "rainy",
            WeatherClass::Shower => "shower",
            WeatherClass::Snowy => "snowy",
        }
    }

    /// Diary caption for this weather
    pub fn caption(&self, language: Language) -> &'static str {
        match language {
            Language::Korean => match self {
                WeatherClass::Sunny => "맑고 화창한 하루예요. 어디론가 훌쩍 떠나보는 건 어때요?",
                WeatherClass::PartlyCloudy => {
                    "구름이 조금 있지만, 바깥 활동엔 무리 없을 것 같아요!"
                }
                WeatherClass::Cloudy => {
                    "하늘이 잔뜩 흐렸네요. 조용한 실내 활동이 잘 어울리는 날이에요."
                }
                WeatherClass::Rainy => "비가 오고 있어요. 우산 챙기고 발걸음 조심하세요!",
                WeatherClass::Shower => "갑작스런 소나기가 내릴 수 있어요. 짧은 외출도 우산은 필수!",
                WeatherClass::Snowy => "눈이 내려요. 포근한 옷차림과 따뜻한 음료를 곁들여보세요!",
            },
            Language::English => match self {
                WeatherClass::Sunny => "A bright and sunny day. How about heading out somewhere?",
                WeatherClass::PartlyCloudy => {
                    "A few clouds around, but nothing that should keep you indoors!"
                }
                WeatherClass::Cloudy => {
                    "The sky is heavily overcast. A good day for quiet indoor plans."
                }
                WeatherClass::Rainy => "It's raining. Take an umbrella and watch your step!",
                WeatherClass::Shower => {
                    "Sudden showers are possible. Keep an umbrella handy even for short trips!"
                }
                WeatherClass::Snowy => "It's snowing. Dress warm and treat yourself to a hot drink!",
            },
        }
    }
}

impl fmt::Display for WeatherClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a weather name does not match any class
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown weather class: {0}")]
pub struct UnknownWeatherClass(pub String);

impl FromStr for WeatherClass {
    type Err = UnknownWeatherClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sunny" => Ok(WeatherClass::Sunny),
            "partly_cloudy" => Ok(WeatherClass::PartlyCloudy),
            "cloudy" => Ok(WeatherClass::Cloudy),
            "rainy" => Ok(WeatherClass::Rainy),
            "shower" => Ok(WeatherClass::Shower),
            "snowy" => Ok(WeatherClass::Snowy),
            _ => Err(UnknownWeatherClass(s.to_string())),
        }
    }
}

/// Caption shown when no class matches the requested weather name.
///
/// The HTTP API rejects unknown names instead; this survives for surfaces
/// with no error channel, such as the WASM caption lookup.
pub fn fallback_caption(language: Language) -> &'static str {
    match language {
        Language::Korean => "날씨에 맞는 캡션을 찾을 수 없어요.",
        Language::English => "No caption matches this weather.",
    }
}

/// Closed min/max range of a measured value
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

/// Precipitation outlook from the forecast window
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PrecipitationOutlook {
    Rain,
    RainOrSnow,
    Snow,
    NotExpected,
}

/// Sky condition outlook from the forecast window
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SkyOutlook {
    Overcast,
    MostlyCloudy,
    Clear,
}

/// Numeric summary of a forecast window
///
/// Fields are `None` when the window carried no parsable observations for
/// the category. Absence is never rendered as zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherSummary {
    pub temperature_c: Option<ValueRange>,
    pub wind_speed_ms: Option<ValueRange>,
    pub humidity_pct_avg: Option<f64>,
    pub precipitation: PrecipitationOutlook,
    pub sky: Option<SkyOutlook>,
    pub has_precipitation_data: bool,
}

/// Human-readable rendering of a [`WeatherSummary`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryText {
    pub temperature: String,
    pub temperature_ko: String,
    pub wind_speed: String,
    pub wind_speed_ko: String,
    pub humidity: String,
    pub humidity_ko: String,
    pub precipitation_probability: String,
    pub precipitation_probability_ko: String,
    pub precipitation: String,
    pub precipitation_ko: String,
    pub sky_condition: String,
    pub sky_condition_ko: String,
}

impl WeatherSummary {
    /// Render the summary in both languages.
    pub fn describe(&self) -> SummaryText {
        let (temperature, temperature_ko) = match &self.temperature_c {
            Some(range) => {
                let text = format!(
                    "{}~{}°C",
                    format_measurement(range.min),
                    format_measurement(range.max)
                );
                (text.clone(), text)
            }
            None => (
                "No temperature data available.".to_string(),
                "기온 정보가 없습니다.".to_string(),
            ),
        };

        let (wind_speed, wind_speed_ko) = match &self.wind_speed_ms {
            Some(range) => {
                let text = format!(
                    "{}~{}m/s",
                    format_measurement(range.min),
                    format_measurement(range.max)
                );
                (text.clone(), text)
            }
            None => (
                "No wind speed data available.".to_string(),
                "풍속 정보가 없습니다.".to_string(),
            ),
        };

        let (humidity, humidity_ko) = match self.humidity_pct_avg {
            Some(avg) => (
                format!("avg {}%", format_measurement(avg)),
                format!("평균 {}%", format_measurement(avg)),
            ),
            None => (
                "No humidity data available.".to_string(),
                "습도 정보가 없습니다.".to_string(),
            ),
        };

        let (precipitation_probability, precipitation_probability_ko) = match self.precipitation {
            PrecipitationOutlook::Rain => ("Rain is likely", "비가 올 가능성 있음"),
            PrecipitationOutlook::RainOrSnow => {
                ("Rain or snow is likely", "비 또는 눈이 내릴 가능성 있음")
            }
            PrecipitationOutlook::Snow => ("Snow is likely", "눈이 올 가능성 있음"),
            PrecipitationOutlook::NotExpected => ("No precipitation expected", "강수 예상 없음"),
        };

        let (precipitation, precipitation_ko) = if self.has_precipitation_data {
            ("0~1mm".to_string(), "0~1mm".to_string())
        } else {
            (
                "No precipitation data available.".to_string(),
                "강수량 정보가 없습니다.".to_string(),
            )
        };

        let (sky_condition, sky_condition_ko) = match self.sky {
            Some(SkyOutlook::Overcast) => ("Overcast", "흐림"),
            Some(SkyOutlook::MostlyCloudy) => ("Mostly cloudy", "구름 많음"),
            Some(SkyOutlook::Clear) => ("Clear", "맑음"),
            None => ("No sky condition data.", "하늘 상태가 없습니다."),
        };

        SummaryText {
            temperature,
            temperature_ko,
            wind_speed,
            wind_speed_ko,
            humidity,
            humidity_ko,
            precipitation_probability: precipitation_probability.to_string(),
            precipitation_probability_ko: precipitation_probability_ko.to_string(),
            precipitation,
            precipitation_ko,
            sky_condition: sky_condition.to_string(),
            sky_condition_ko: sky_condition_ko.to_string(),
        }
    }
}

/// Format a measurement with at least one decimal place, so whole-number
/// readings render as "12.0" rather than "12".
fn format_measurement(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
