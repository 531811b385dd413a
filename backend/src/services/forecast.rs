//! Forecast service turning coordinates into a classified weather picture
//!
//! Converts the location to a KMA grid cell, walks the published base
//! times from newest to oldest, and reduces the first usable forecast
//! to a weather class and summary.

use std::future::Future;

use chrono::{FixedOffset, NaiveDateTime, Utc};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::external::kma::{FetchOutcome, KmaClient};
use shared::{
    base_time_candidates, classify, latest_slot, summarize, to_grid, BaseSlot,
    ForecastObservation, GeoCoordinates, GridCell, WeatherClass, WeatherSummary,
};

/// KMA base times are published in Korea Standard Time (UTC+9, no DST)
const KST_OFFSET_SECS: i32 = 9 * 3600;

/// Forecast service resolving locations to weather
#[derive(Clone)]
pub struct ForecastService {
    kma: KmaClient,
}

/// Everything the forecast pipeline learned about one location
#[derive(Debug, Clone, Serialize)]
pub struct LocationForecast {
    pub grid: GridCell,
    pub base_date: String,
    pub base_time: String,
    pub weather: WeatherClass,
    pub summary: WeatherSummary,
}

impl ForecastService {
    /// Create a new ForecastService instance
    pub fn new(kma: KmaClient) -> Self {
        Self { kma }
    }

    /// Resolve a location to its current weather class and summary
    pub async fn forecast_for(&self, location: GeoCoordinates) -> AppResult<LocationForecast> {
        if !self.kma.has_service_key() {
            return Err(AppError::Configuration(
                "KMA service key is not configured".to_string(),
            ));
        }

        let grid = to_grid(location.latitude, location.longitude);
        let candidates = base_time_candidates(kst_now());

        let kma = self.kma.clone();
        let (slot, observations) = scan_candidates(&candidates, |slot| {
            let kma = kma.clone();
            async move { kma.fetch_observations(slot, grid).await }
        })
        .await?;

        let current = latest_slot(&observations);
        let weather = classify(&current);
        let summary = summarize(&current);

        tracing::info!(
            "Forecast for ({}, {}) -> grid ({}, {}), base {} {}, weather {}",
            location.latitude,
            location.longitude,
            grid.nx,
            grid.ny,
            slot.date_param(),
            slot.time,
            weather
        );

        Ok(LocationForecast {
            grid,
            base_date: slot.date_param(),
            base_time: slot.time.to_string(),
            weather,
            summary,
        })
    }
}

/// Current wall-clock time in KST
fn kst_now() -> NaiveDateTime {
    let kst = FixedOffset::east_opt(KST_OFFSET_SECS).expect("valid KST offset");
    Utc::now().with_timezone(&kst).naive_local()
}

/// Walk base-time candidates until one yields observations.
///
/// `NoDataYet` and `Transient` move on to the next candidate, `Fatal`
/// aborts immediately, and running out of candidates is a not-found.
pub async fn scan_candidates<F, Fut>(
    candidates: &[BaseSlot],
    mut fetch: F,
) -> AppResult<(BaseSlot, Vec<ForecastObservation>)>
where
    F: FnMut(BaseSlot) -> Fut,
    Fut: Future<Output = FetchOutcome>,
{
    for slot in candidates.iter().copied() {
        match fetch(slot).await {
            FetchOutcome::Success(observations) if observations.is_empty() => {
                tracing::debug!(
                    "Base time {} {} answered with no rows, trying next",
                    slot.date_param(),
                    slot.time
                );
            }
            FetchOutcome::Success(observations) => return Ok((slot, observations)),
            FetchOutcome::NoDataYet => {
                tracing::debug!(
                    "Base time {} {} not published yet, trying next",
                    slot.date_param(),
                    slot.time
                );
            }
            FetchOutcome::Transient(reason) => {
                tracing::warn!(
                    "Base time {} {} failed ({}), trying next",
                    slot.date_param(),
                    slot.time,
                    reason
                );
            }
            FetchOutcome::Fatal(error) => return Err(error),
        }
    }

    Err(AppError::NoForecastAvailable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::sync::Mutex;

    fn slots(n: usize) -> Vec<BaseSlot> {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        shared::BASE_TIMES[..n]
            .iter()
            .map(|&time| BaseSlot { date, time })
            .collect()
    }

    fn observation() -> ForecastObservation {
        ForecastObservation::new("TMP", "1200", "23")
    }

    #[tokio::test]
    async fn test_scan_returns_first_success() {
        let candidates = slots(3);
        let outcomes = Mutex::new(vec![
            FetchOutcome::NoDataYet,
            FetchOutcome::Success(vec![observation()]),
            FetchOutcome::Success(vec![]),
        ]);

        let (slot, observations) = scan_candidates(&candidates, |_| {
            let outcome = outcomes.lock().unwrap().remove(0);
            async move { outcome }
        })
        .await
        .unwrap();

        assert_eq!(slot.time, candidates[1].time);
        assert_eq!(observations.len(), 1);
    }

    #[tokio::test]
    async fn test_scan_skips_empty_success_and_transient() {
        let candidates = slots(3);
        let outcomes = Mutex::new(vec![
            FetchOutcome::Success(vec![]),
            FetchOutcome::Transient("HTTP 500".to_string()),
            FetchOutcome::Success(vec![observation()]),
        ]);

        let (slot, _) = scan_candidates(&candidates, |_| {
            let outcome = outcomes.lock().unwrap().remove(0);
            async move { outcome }
        })
        .await
        .unwrap();

        assert_eq!(slot.time, candidates[2].time);
    }

    #[tokio::test]
    async fn test_scan_stops_on_fatal() {
        let candidates = slots(3);
        let calls = Mutex::new(0usize);

        let result = scan_candidates(&candidates, |_| {
            *calls.lock().unwrap() += 1;
            async { FetchOutcome::Fatal(AppError::ForecastServiceUnavailable) }
        })
        .await;

        assert!(matches!(result, Err(AppError::ForecastServiceUnavailable)));
        assert_eq!(*calls.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_scan_exhaustion_is_not_found() {
        let candidates = slots(4);

        let result = scan_candidates(&candidates, |_| async { FetchOutcome::NoDataYet }).await;

        assert!(matches!(result, Err(AppError::NoForecastAvailable)));
    }
}
