//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Country name to ISO code resolution
//! - The OpenWeather provider behind a small async trait
//! - `WeatherSession`, the per-session state (inputs, last snapshot, history)
//!
//! It is used by `weather-cli`, but can also be reused by other front ends.

pub mod config;
pub mod country;
pub mod error;
pub mod history;
pub mod model;
pub mod provider;
pub mod session;

pub use config::Config;
pub use error::FetchError;
pub use history::{HistoryEntry, SearchHistory};
pub use model::{CurrentConditions, WeatherRequest, WeatherSnapshot};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider, provider_from_config};
pub use session::{SearchOutcome, SkipReason, WeatherSession};
