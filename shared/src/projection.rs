//! Lambert Conformal Conic projection onto the KMA village-forecast grid
//!
//! The Korea Meteorological Administration publishes village forecasts on a
//! 5 km grid. This module converts WGS84 coordinates to grid cells with the
//! same arithmetic as the official reference conversion, so cell indices
//! match the upstream feed exactly.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Earth radius (km)
pub const EARTH_RADIUS_KM: f64 = 6371.00877;
/// Grid spacing (km)
pub const GRID_SPACING_KM: f64 = 5.0;
/// First standard parallel (degrees)
pub const STANDARD_PARALLEL_1: f64 = 30.0;
/// Second standard parallel (degrees)
pub const STANDARD_PARALLEL_2: f64 = 60.0;
/// Longitude of the projection origin (degrees)
pub const ORIGIN_LON: f64 = 126.0;
/// Latitude of the projection origin (degrees)
pub const ORIGIN_LAT: f64 = 38.0;
/// Grid x of the projection origin
pub const ORIGIN_X: i32 = 43;
/// Grid y of the projection origin
pub const ORIGIN_Y: i32 = 136;

/// A cell on the KMA forecast grid
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GridCell {
    pub nx: i32,
    pub ny: i32,
}

/// Convert WGS84 coordinates to a KMA grid cell.
///
/// Rounding is half-up via `+ 0.5` followed by truncation, matching the
/// reference conversion. Defined for any finite coordinate; out-of-range
/// inputs are rejected at the HTTP layer, not here.
pub fn to_grid(latitude: f64, longitude: f64) -> GridCell {
    let degrad = PI / 180.0;
    let re = EARTH_RADIUS_KM / GRID_SPACING_KM;
    let slat1 = STANDARD_PARALLEL_1 * degrad;
    let slat2 = STANDARD_PARALLEL_2 * degrad;
    let olon = ORIGIN_LON * degrad;
    let olat = ORIGIN_LAT * degrad;

    let mut sn = (PI * 0.25 + slat2 * 0.5).tan() / (PI * 0.25 + slat1 * 0.5).tan();
    sn = (slat1.cos() / slat2.cos()).ln() / sn.ln();
    let mut sf = (PI * 0.25 + slat1 * 0.5).tan();
    sf = sf.powf(sn) * slat1.cos() / sn;
    let mut ro = (PI * 0.25 + olat * 0.5).tan();
    ro = re * sf / ro.powf(sn);

    let mut ra = (PI * 0.25 + latitude * degrad * 0.5).tan();
    ra = re * sf / ra.powf(sn);
    let mut theta = longitude * degrad - olon;
    if theta > PI {
        theta -= 2.0 * PI;
    }
    if theta < -PI {
        theta += 2.0 * PI;
    }
    theta *= sn;

    let nx = (ra * theta.sin() + f64::from(ORIGIN_X) + 0.5) as i32;
    let ny = (ro - ra * theta.cos() + f64::from(ORIGIN_Y) + 0.5) as i32;
    GridCell { nx, ny }
}
