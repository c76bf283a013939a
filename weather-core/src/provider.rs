use crate::{
    Config, CurrentConditions, WeatherRequest, error::FetchError,
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Source of current conditions for a city.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, request: &WeatherRequest) -> Result<CurrentConditions, FetchError>;
}

/// Construct the provider described by `config`.
///
/// A missing API key is not an error here: requests go out unauthenticated and
/// the provider rejects them like any other failed fetch.
pub fn provider_from_config(config: &Config) -> Box<dyn WeatherProvider> {
    if config.api_key().is_none() {
        tracing::warn!(
            "No API key configured; set {} or run `weather configure`. Searches will fail.",
            crate::config::API_KEY_ENV
        );
    }

    Box::new(
        OpenWeatherProvider::new(config.api_key().map(str::to_owned))
            .with_base_url(config.endpoint())
            .with_units(config.units()),
    )
}
