use chrono::{DateTime, Local};

/// One current-weather query: a city and the two-letter code of its country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherRequest {
    pub city: String,
    pub country_code: String,
}

impl WeatherRequest {
    pub fn new(city: impl Into<String>, country_code: impl Into<String>) -> Self {
        Self { city: city.into(), country_code: country_code.into() }
    }

    /// Value of the provider's `q` parameter, `<city>,<code>`.
    pub fn query(&self) -> String {
        format!("{},{}", self.city, self.country_code)
    }
}

/// Conditions reported by a provider for one query.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub description: String,
    /// Degrees Celsius when the provider is asked for metric units.
    pub temperature: f64,
    /// Relative humidity, percent.
    pub humidity: f64,
}

/// Most recent successful weather result for the session.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    /// `<city>, <country>` as typed when the search was issued.
    pub location: String,
    pub conditions: CurrentConditions,
    pub observed_at: DateTime<Local>,
}

impl WeatherSnapshot {
    pub fn new(location: impl Into<String>, conditions: CurrentConditions) -> Self {
        Self { location: location.into(), conditions, observed_at: Local::now() }
    }
}
