//! Single-writer state container for one interactive weather session.

use crate::{
    country,
    history::{HistoryEntry, SearchHistory},
    model::{WeatherRequest, WeatherSnapshot},
    provider::WeatherProvider,
};
use std::fmt;

/// Why a search was dropped before reaching the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingCity,
    MissingCountry,
    /// The country name has no two-letter code.
    UnknownCountry,
    /// Replay was asked for a history position that does not exist.
    NoSuchEntry,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            SkipReason::MissingCity => "city is empty",
            SkipReason::MissingCountry => "country is empty",
            SkipReason::UnknownCountry => "country name has no ISO code",
            SkipReason::NoSuchEntry => "no such history entry",
        };
        f.write_str(msg)
    }
}

/// Result of a search or replay, as seen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A new snapshot is on display.
    Updated,
    Skipped(SkipReason),
    /// The fetch failed; snapshot and history are unchanged.
    Failed,
}

/// Inputs, resolved country code, last snapshot and history for one session.
///
/// Every mutation goes through `&mut self`, so a session never has more than
/// one fetch in flight.
#[derive(Debug)]
pub struct WeatherSession {
    provider: Box<dyn WeatherProvider>,
    city: String,
    country: String,
    country_code: String,
    snapshot: Option<WeatherSnapshot>,
    history: SearchHistory,
}

impl WeatherSession {
    pub fn new(provider: Box<dyn WeatherProvider>) -> Self {
        let mut session = Self {
            provider,
            city: String::new(),
            country: String::new(),
            country_code: String::new(),
            snapshot: None,
            history: SearchHistory::new(),
        };
        session.resolve_country_code();
        session
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    /// Code for the current country name, empty when it does not resolve.
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn history(&self) -> &SearchHistory {
        &self.history
    }

    pub fn set_city(&mut self, city: impl Into<String>) {
        self.city = city.into();
    }

    /// Set the country name and re-resolve its code immediately.
    pub fn set_country(&mut self, country: impl Into<String>) {
        self.country = country.into();
        self.resolve_country_code();
    }

    /// Reset both inputs. Snapshot and history stay as they are.
    pub fn clear_inputs(&mut self) {
        self.set_city("");
        self.set_country("");
    }

    fn resolve_country_code(&mut self) {
        self.country_code = country::resolve(&self.country).unwrap_or_default().to_string();
        tracing::debug!(country = %self.country, code = %self.country_code, "resolved country code");
    }

    fn check_inputs(&self) -> Result<WeatherRequest, SkipReason> {
        check_search(&self.city, &self.country, &self.country_code)?;
        Ok(WeatherRequest::new(self.city.trim(), &self.country_code))
    }

    /// Fetch current weather for the current inputs.
    ///
    /// On success the snapshot is replaced and `"<city>, <country>"` is
    /// prepended to history.
    pub async fn search(&mut self) -> SearchOutcome {
        let request = match self.check_inputs() {
            Ok(request) => request,
            Err(reason) => {
                tracing::warn!(?reason, city = %self.city, country = %self.country, "search skipped");
                return SearchOutcome::Skipped(reason);
            }
        };

        let label = HistoryEntry::new(self.city.trim(), self.country.trim());
        let outcome = self.fetch(&request, &label.label).await;
        if outcome == SearchOutcome::Updated {
            self.history.record(label);
        }
        outcome
    }

    /// Re-run the search stored at `index` in history.
    ///
    /// The entry's city and country go through the same checks and code
    /// resolution as a normal search, and are written back into the inputs only
    /// once those pass. No new history entry is added.
    pub async fn replay(&mut self, index: usize) -> SearchOutcome {
        let Some(entry) = self.history.get(index) else {
            tracing::warn!(index, len = self.history.len(), "no history entry to replay");
            return SearchOutcome::Skipped(SkipReason::NoSuchEntry);
        };
        let (city, country_name) = entry.split();

        let code = country::resolve(&country_name).unwrap_or_default();
        if let Err(reason) = check_search(&city, &country_name, code) {
            tracing::warn!(?reason, index, "replay skipped");
            return SearchOutcome::Skipped(reason);
        }

        self.set_city(city);
        self.set_country(country_name);
        let request = match self.check_inputs() {
            Ok(request) => request,
            Err(reason) => return SearchOutcome::Skipped(reason),
        };

        let location = format!("{}, {}", self.city, self.country);
        self.fetch(&request, &location).await
    }

    async fn fetch(&mut self, request: &WeatherRequest, location: &str) -> SearchOutcome {
        match self.provider.current(request).await {
            Ok(conditions) => {
                tracing::info!(
                    location,
                    description = %conditions.description,
                    temperature = conditions.temperature,
                    humidity = conditions.humidity,
                    "weather updated"
                );
                self.snapshot = Some(WeatherSnapshot::new(location, conditions));
                SearchOutcome::Updated
            }
            Err(err) => {
                tracing::error!(error = %err, query = %request.query(), "Error fetching weather data");
                SearchOutcome::Failed
            }
        }
    }

    /// Remove the history entry at `index`, if any.
    pub fn delete_entry(&mut self, index: usize) -> Option<HistoryEntry> {
        let removed = self.history.remove(index);
        if removed.is_none() {
            tracing::warn!(index, len = self.history.len(), "no history entry to delete");
        }
        removed
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

/// Inputs a search needs before it may reach the network.
fn check_search(city: &str, country: &str, country_code: &str) -> Result<(), SkipReason> {
    if city.trim().is_empty() {
        return Err(SkipReason::MissingCity);
    }
    if country.trim().is_empty() {
        return Err(SkipReason::MissingCountry);
    }
    if country_code.is_empty() {
        return Err(SkipReason::UnknownCountry);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::FetchError, model::CurrentConditions};
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use std::sync::{Arc, Mutex};

    /// Answers from a fixed script and records every query it sees.
    #[derive(Debug, Default)]
    struct ScriptedProvider {
        fail: bool,
        seen: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl WeatherProvider for ScriptedProvider {
        async fn current(
            &self,
            request: &WeatherRequest,
        ) -> Result<CurrentConditions, FetchError> {
            self.seen.lock().unwrap().push(request.query());
            if self.fail {
                return Err(FetchError::Status {
                    status: StatusCode::NOT_FOUND,
                    body: "city not found".into(),
                });
            }
            Ok(CurrentConditions {
                description: format!("sky over {}", request.city),
                temperature: 15.0,
                humidity: 60.0,
            })
        }
    }

    fn session(fail: bool) -> (WeatherSession, Arc<Mutex<Vec<String>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let provider = ScriptedProvider { fail, seen: Arc::clone(&seen) };
        (WeatherSession::new(Box::new(provider)), seen)
    }

    #[test]
    fn starts_empty() {
        let (s, _) = session(false);

        assert_eq!(s.city(), "");
        assert_eq!(s.country(), "");
        assert_eq!(s.country_code(), "");
        assert!(s.snapshot().is_none());
        assert!(s.history().is_empty());
    }

    #[test]
    fn country_code_follows_country_name() {
        let (mut s, _) = session(false);

        s.set_country("United Kingdom");
        assert_eq!(s.country_code(), "GB");

        s.set_country("Nowhereland");
        assert_eq!(s.country_code(), "");

        s.set_country("Germany");
        s.clear_inputs();
        assert_eq!(s.country_code(), "");
    }

    #[tokio::test]
    async fn successful_search_updates_snapshot_and_history() {
        let (mut s, seen) = session(false);
        s.set_city("London");
        s.set_country("United Kingdom");

        assert_eq!(s.search().await, SearchOutcome::Updated);

        assert_eq!(*seen.lock().unwrap(), vec!["London,GB".to_string()]);
        let snap = s.snapshot().expect("snapshot");
        assert_eq!(snap.location, "London, United Kingdom");
        assert_eq!(snap.conditions.humidity, 60.0);
        assert_eq!(s.history().labels(), vec!["London, United Kingdom"]);
    }

    #[tokio::test]
    async fn guard_failures_never_call_provider() {
        let (mut s, seen) = session(false);

        assert_eq!(s.search().await, SearchOutcome::Skipped(SkipReason::MissingCity));

        s.set_city("London");
        assert_eq!(s.search().await, SearchOutcome::Skipped(SkipReason::MissingCountry));

        s.set_country("Nowhereland");
        assert_eq!(s.search().await, SearchOutcome::Skipped(SkipReason::UnknownCountry));

        assert!(seen.lock().unwrap().is_empty());
        assert!(s.history().is_empty());
        assert!(s.snapshot().is_none());
    }

    #[tokio::test]
    async fn failed_search_leaves_state_alone() {
        let (mut s, seen) = session(true);
        s.set_city("Atlantis");
        s.set_country("Greece");

        assert_eq!(s.search().await, SearchOutcome::Failed);
        assert_eq!(seen.lock().unwrap().len(), 1);
        assert!(s.snapshot().is_none());
        assert!(s.history().is_empty());
    }

    #[tokio::test]
    async fn clear_inputs_keeps_snapshot_and_history() {
        let (mut s, _) = session(false);
        s.set_city("Paris");
        s.set_country("France");
        s.search().await;

        s.clear_inputs();

        assert_eq!(s.city(), "");
        assert_eq!(s.country(), "");
        assert!(s.snapshot().is_some());
        assert_eq!(s.history().len(), 1);
    }

    #[tokio::test]
    async fn replay_resolves_country_and_restores_inputs() {
        let (mut s, seen) = session(false);
        s.set_city("London");
        s.set_country("United Kingdom");
        s.search().await;
        s.set_city("Paris");
        s.set_country("France");
        s.search().await;
        s.clear_inputs();

        assert_eq!(s.replay(1).await, SearchOutcome::Updated);

        assert_eq!(s.city(), "London");
        assert_eq!(s.country(), "United Kingdom");
        assert_eq!(s.country_code(), "GB");
        assert_eq!(seen.lock().unwrap().last().map(String::as_str), Some("London,GB"));
        assert_eq!(s.snapshot().map(|x| x.location.as_str()), Some("London, United Kingdom"));
        // Replay does not grow history.
        assert_eq!(s.history().len(), 2);
    }

    #[tokio::test]
    async fn skipped_replay_leaves_inputs_untouched() {
        let (mut s, seen) = session(false);
        s.history.record(HistoryEntry::new("Springfield", "Nowhereland"));
        s.set_city("Oslo");
        s.set_country("Norway");

        assert_eq!(s.replay(0).await, SearchOutcome::Skipped(SkipReason::UnknownCountry));

        assert_eq!(s.city(), "Oslo");
        assert_eq!(s.country(), "Norway");
        assert_eq!(s.country_code(), "NO");
        assert!(seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn replay_out_of_range_is_skipped() {
        let (mut s, seen) = session(false);

        assert_eq!(s.replay(0).await, SearchOutcome::Skipped(SkipReason::NoSuchEntry));
        assert!(seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_and_clear_history() {
        let (mut s, _) = session(false);
        for (city, country) in [("Oslo", "Norway"), ("Rome", "Italy")] {
            s.set_city(city);
            s.set_country(country);
            s.search().await;
        }

        let removed = s.delete_entry(0).expect("entry");
        assert_eq!(removed.label, "Rome, Italy");
        assert_eq!(s.history().labels(), vec!["Oslo, Norway"]);
        assert!(s.delete_entry(5).is_none());

        s.clear_history();
        assert!(s.history().is_empty());
        assert!(s.snapshot().is_some());
    }
}
