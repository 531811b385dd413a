//! HTTP request handlers for the Weather Caption Service

pub mod caption;
pub mod diary;
pub mod health;

pub use caption::{caption_from_image, caption_from_location, generate_caption};
pub use diary::{delete_diary, diary_history, get_diary, save_diary};
pub use health::health_check;
