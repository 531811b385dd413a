//! External API integrations

pub mod kma;

pub use kma::KmaClient;
