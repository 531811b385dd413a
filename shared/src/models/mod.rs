//! Domain models for the Weather Caption Service

mod weather;

pub use weather::*;
