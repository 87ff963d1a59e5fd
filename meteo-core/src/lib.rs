//! Core library for the `meteo` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The Meteosource provider client (place search + daily forecast)
//! - Shared domain models (place matches, forecast records)
//!
//! It is used by `meteo-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;

pub use config::{API_KEY_ENV, Config};
pub use error::ProviderError;
pub use model::{ForecastRecord, PlaceMatch};
pub use provider::meteosource::Meteosource;
