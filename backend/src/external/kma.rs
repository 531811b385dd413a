//! KMA village forecast API client
//!
//! Integrates with the Korea Meteorological Administration short-term
//! forecast service (VilageFcstInfoService 2.0)

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::config::KmaConfig;
use crate::error::{AppError, AppResult};
use shared::{BaseSlot, ForecastObservation, GridCell};

/// Public endpoint of the village forecast service
pub const DEFAULT_BASE_URL: &str =
    "https://apis.data.go.kr/1360000/VilageFcstInfoService_2.0/getVilageFcst";

/// One page is enough: a single base time carries well under 1000 rows
const NUM_OF_ROWS: u32 = 1000;

/// KMA API client
#[derive(Clone)]
pub struct KmaClient {
    client: Client,
    service_key: String,
    base_url: String,
}

/// Result of fetching one base-time candidate.
///
/// The caller walks base times from newest to oldest; `NoDataYet` and
/// `Transient` mean "try the next candidate", `Fatal` aborts the scan.
#[derive(Debug)]
pub enum FetchOutcome {
    /// The API answered normally; the items may still be empty
    Success(Vec<ForecastObservation>),
    /// The forecast for this base time has not been published yet
    NoDataYet,
    /// This attempt failed in a way the next candidate might not
    Transient(String),
    /// The service itself is broken; scanning further is pointless
    Fatal(AppError),
}

/// Envelope of the KMA response
#[derive(Debug, Deserialize)]
struct KmaEnvelope {
    response: KmaResponse,
}

#[derive(Debug, Deserialize)]
struct KmaResponse {
    header: KmaHeader,
    body: Option<KmaBody>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct KmaHeader {
    result_code: String,
    result_msg: String,
}

#[derive(Debug, Deserialize)]
struct KmaBody {
    items: Option<KmaItems>,
}

#[derive(Debug, Deserialize)]
struct KmaItems {
    item: Vec<ForecastObservation>,
}

impl KmaClient {
    /// Create a new KmaClient from configuration
    pub fn new(config: &KmaConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            service_key: config.service_key.clone(),
            base_url: config.base_url.clone(),
        })
    }

    /// Whether a service key was configured at all
    pub fn has_service_key(&self) -> bool {
        !self.service_key.is_empty()
    }

    /// Fetch every forecast row published for one base time and grid cell
    pub async fn fetch_observations(&self, slot: BaseSlot, grid: GridCell) -> FetchOutcome {
        let base_date = slot.date_param();

        let request = self
            .client
            .get(&self.base_url)
            .query(&[
                ("serviceKey", self.service_key.as_str()),
                ("dataType", "JSON"),
            ])
            .query(&[("numOfRows", NUM_OF_ROWS), ("pageNo", 1)])
            .query(&[("base_date", base_date.as_str()), ("base_time", slot.time)])
            .query(&[("nx", grid.nx), ("ny", grid.ny)]);

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("KMA API request failed: {}", e);
                return FetchOutcome::Fatal(AppError::ForecastServiceUnavailable);
            }
        };

        if !response.status().is_success() {
            return FetchOutcome::Transient(format!("HTTP {}", response.status()));
        }

        let envelope: KmaEnvelope = match response.json().await {
            Ok(envelope) => envelope,
            Err(e) => return FetchOutcome::Transient(format!("Unreadable response: {}", e)),
        };

        outcome_from_envelope(envelope)
    }
}

/// Map the KMA result header to a fetch outcome
fn outcome_from_envelope(envelope: KmaEnvelope) -> FetchOutcome {
    let KmaResponse { header, body } = envelope.response;

    match header.result_code.as_str() {
        "00" => {
            let items = body
                .and_then(|body| body.items)
                .map(|items| items.item)
                .unwrap_or_default();
            FetchOutcome::Success(items)
        }
        _ if header.result_msg == "NO_DATA" => FetchOutcome::NoDataYet,
        code => FetchOutcome::Fatal(AppError::UpstreamError(format!(
            "{} ({})",
            header.result_msg, code
        ))),
    }
}
