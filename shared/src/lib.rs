//! Shared types and domain logic for the Weather Caption Service
//!
//! This crate contains the pure parts of the system shared between the
//! backend, the frontend (via WASM), and other components: the KMA grid
//! projection, forecast interpretation, and the weather caption models.

pub mod forecast;
pub mod models;
pub mod projection;
pub mod types;
pub mod validation;

pub use forecast::*;
pub use models::*;
pub use projection::*;
pub use types::*;
pub use validation::*;
