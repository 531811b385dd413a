//! Business logic services for the Weather Caption Service

pub mod caption;
pub mod diary;
pub mod forecast;

pub use caption::CaptionService;
pub use diary::DiaryService;
pub use forecast::ForecastService;
