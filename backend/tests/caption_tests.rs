//! Weather class and caption catalog tests
//!
//! Tests for the weather model including:
//! - Weather class name parsing
//! - The bilingual caption catalog

use proptest::prelude::*;

use shared::{fallback_caption, Language, WeatherClass};

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Every canonical name parses back to its class
    #[test]
    fn test_parse_known_classes() {
        for class in WeatherClass::ALL {
            assert_eq!(class.as_str().parse::<WeatherClass>(), Ok(class));
        }
    }

    /// Parsing ignores case, mirroring the lowercase lookup of the API
    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("SUNNY".parse::<WeatherClass>(), Ok(WeatherClass::Sunny));
        assert_eq!(
            "Partly_Cloudy".parse::<WeatherClass>(),
            Ok(WeatherClass::PartlyCloudy)
        );
    }

    /// Unknown names are an error carrying the rejected input
    #[test]
    fn test_parse_unknown_name() {
        let error = "volcanic".parse::<WeatherClass>().unwrap_err();

        assert_eq!(error.0, "volcanic");
    }

    /// The Korean catalog carries the published caption for every class
    #[test]
    fn test_korean_caption_catalog() {
        let cases = [
            (
                WeatherClass::Sunny,
                "맑고 화창한 하루예요. 어디론가 훌쩍 떠나보는 건 어때요?",
            ),
            (
                WeatherClass::PartlyCloudy,
                "구름이 조금 있지만, 바깥 활동엔 무리 없을 것 같아요!",
            ),
            (
                WeatherClass::Cloudy,
                "하늘이 잔뜩 흐렸네요. 조용한 실내 활동이 잘 어울리는 날이에요.",
            ),
            (
                WeatherClass::Rainy,
                "비가 오고 있어요. 우산 챙기고 발걸음 조심하세요!",
            ),
            (
                WeatherClass::Shower,
                "갑작스런 소나기가 내릴 수 있어요. 짧은 외출도 우산은 필수!",
            ),
            (
                WeatherClass::Snowy,
                "눈이 내려요. 포근한 옷차림과 따뜻한 음료를 곁들여보세요!",
            ),
        ];

        for (class, expected) in cases {
            assert_eq!(class.caption(Language::Korean), expected);
        }
    }

    /// Every class also has a distinct English caption
    #[test]
    fn test_english_captions_are_distinct() {
        let captions: Vec<&str> = WeatherClass::ALL
            .iter()
            .map(|class| class.caption(Language::English))
            .collect();

        for caption in &captions {
            assert!(!caption.is_empty());
        }
        for (i, a) in captions.iter().enumerate() {
            for b in &captions[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_fallback_caption() {
        assert_eq!(
            fallback_caption(Language::Korean),
            "날씨에 맞는 캡션을 찾을 수 없어요."
        );
        assert_eq!(
            fallback_caption(Language::English),
            "No caption matches this weather."
        );
    }

    /// Display output is the canonical snake_case name
    #[test]
    fn test_display_matches_canonical_name() {
        assert_eq!(WeatherClass::PartlyCloudy.to_string(), "partly_cloudy");
        assert_eq!(WeatherClass::Snowy.to_string(), "snowy");
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    /// Strategy picking one of the six weather classes
    fn weather_class_strategy() -> impl Strategy<Value = WeatherClass> {
        (0..WeatherClass::ALL.len()).prop_map(|index| WeatherClass::ALL[index])
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Parsing accepts exactly the canonical names, in any casing
        #[test]
        fn prop_parse_accepts_only_canonical_names(name in "[a-zA-Z_]{1,15}") {
            match name.parse::<WeatherClass>() {
                Ok(class) => prop_assert_eq!(class.as_str(), name.to_lowercase()),
                Err(error) => prop_assert_eq!(error.0, name),
            }
        }

        /// The two language catalogs never collide
        #[test]
        fn prop_catalogs_are_bilingual(class in weather_class_strategy()) {
            let korean = class.caption(Language::Korean);
            let english = class.caption(Language::English);

            prop_assert!(!korean.is_empty());
            prop_assert!(!english.is_empty());
            prop_assert_ne!(korean, english);
        }
    }
}
