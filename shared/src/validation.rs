//! Validation utilities for the Weather Caption Service
//!
//! Input checks applied at the HTTP layer. The projection itself accepts
//! any finite coordinate; these guards keep nonsense out of the pipeline.

// ============================================================================
// Coordinate Validations
// ============================================================================

/// Validate latitude is a finite value in world range
pub fn validate_latitude(latitude: f64) -> Result<(), &'static str> {
    if !latitude.is_finite() {
        return Err("Latitude must be a finite number");
    }
    if !(-90.0..=90.0).contains(&latitude) {
        return Err("Latitude must be between -90 and 90");
    }
    Ok(())
}

/// Validate longitude is a finite value in world range
pub fn validate_longitude(longitude: f64) -> Result<(), &'static str> {
    if !longitude.is_finite() {
        return Err("Longitude must be a finite number");
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err("Longitude must be between -180 and 180");
    }
    Ok(())
}

/// Validate a coordinate pair
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), &'static str> {
    validate_latitude(latitude)?;
    validate_longitude(longitude)
}

/// Rough bounding box of the KMA village-forecast grid.
///
/// Advisory only: coordinates outside it still project to a cell, the feed
/// just answers NO_DATA for every base time.
pub fn is_within_kma_coverage(latitude: f64, longitude: f64) -> bool {
    (32.0..=44.0).contains(&latitude) && (120.0..=133.0).contains(&longitude)
}

// ============================================================================
// Diary Validations
// ============================================================================

/// Maximum diary title length in characters
pub const MAX_DIARY_TITLE_CHARS: usize = 200;
/// Maximum diary content length in characters
pub const MAX_DIARY_CONTENT_CHARS: usize = 10_000;

/// Validate diary title (non-blank, bounded length)
pub fn validate_diary_title(title: &str) -> Result<(), &'static str> {
    if title.trim().is_empty() {
        return Err("Diary title cannot be empty");
    }
    if title.chars().count() > MAX_DIARY_TITLE_CHARS {
        return Err("Diary title must be at most 200 characters");
    }
    Ok(())
}

/// Validate diary content length
pub fn validate_diary_content(content: &str) -> Result<(), &'static str> {
    if content.chars().count() > MAX_DIARY_CONTENT_CHARS {
        return Err("Diary content must be at most 10000 characters");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Coordinate Validation Tests
    // ========================================================================

    #[test]
    fn test_validate_latitude_valid() {
        assert!(validate_latitude(37.5665).is_ok());
        assert!(validate_latitude(-90.0).is_ok());
        assert!(validate_latitude(90.0).is_ok());
        assert!(validate_latitude(0.0).is_ok());
    }

    #[test]
    fn test_validate_latitude_invalid() {
        assert!(validate_latitude(90.0001).is_err());
        assert!(validate_latitude(-91.0).is_err());
        assert!(validate_latitude(f64::NAN).is_err());
        assert!(validate_latitude(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_longitude_valid() {
        assert!(validate_longitude(126.978).is_ok());
        assert!(validate_longitude(-180.0).is_ok());
        assert!(validate_longitude(180.0).is_ok());
    }

    #[test]
    fn test_validate_longitude_invalid() {
        assert!(validate_longitude(180.5).is_err());
        assert!(validate_longitude(-200.0).is_err());
        assert!(validate_longitude(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_coordinates_pair() {
        assert!(validate_coordinates(37.5665, 126.978).is_ok());
        assert!(validate_coordinates(95.0, 126.978).is_err());
        assert!(validate_coordinates(37.5665, 200.0).is_err());
    }

    #[test]
    fn test_kma_coverage() {
        assert!(is_within_kma_coverage(37.5665, 126.978)); // Seoul
        assert!(is_within_kma_coverage(33.4996, 126.5312)); // Jeju
        assert!(!is_within_kma_coverage(48.8566, 2.3522)); // Paris
        assert!(!is_within_kma_coverage(-33.8688, 151.2093)); // Sydney
    }

    // ========================================================================
    // Diary Validation Tests
    // ========================================================================

    #[test]
    fn test_validate_diary_title_valid() {
        assert!(validate_diary_title("오늘의 날씨 일기").is_ok());
        assert!(validate_diary_title("A rainy day").is_ok());
    }

    #[test]
    fn test_validate_diary_title_invalid() {
        assert!(validate_diary_title("").is_err());
        assert!(validate_diary_title("   ").is_err());
        let too_long = "가".repeat(MAX_DIARY_TITLE_CHARS + 1);
        assert!(validate_diary_title(&too_long).is_err());
    }

    #[test]
    fn test_validate_diary_content() {
        assert!(validate_diary_content("").is_ok());
        assert!(validate_diary_content("비가 와서 집에서 쉬었다.").is_ok());
        let too_long = "a".repeat(MAX_DIARY_CONTENT_CHARS + 1);
        assert!(validate_diary_content(&too_long).is_err());
    }
}
