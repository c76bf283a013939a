use weather_core::{HistoryEntry, SearchHistory, WeatherSnapshot};

const TIME_FORMAT: &str = "%H:%M:%S";

/// Results panel for the last successful search.
pub fn snapshot_panel(snapshot: &WeatherSnapshot) -> String {
    let c = &snapshot.conditions;
    format!(
        "{}\n  Description: {}\n  Temperature: {}\u{00b0}C\n  Humidity: {}%\n  Time: {}\n",
        snapshot.location,
        c.description,
        c.temperature,
        c.humidity,
        snapshot.observed_at.format(TIME_FORMAT),
    )
}

/// Numbered history list, newest first.
pub fn history_panel(history: &SearchHistory) -> String {
    if history.is_empty() {
        return "Search History: (empty)\n".to_string();
    }

    let lines: String = history
        .iter()
        .enumerate()
        .map(|(i, entry)| format!("  {}. {}\n", i + 1, history_line(entry)))
        .collect();
    format!("Search History:\n{lines}")
}

pub fn history_line(entry: &HistoryEntry) -> String {
    format!("{} - {}", entry.label, entry.searched_at.format(TIME_FORMAT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use weather_core::CurrentConditions;

    fn london() -> WeatherSnapshot {
        WeatherSnapshot::new(
            "London, United Kingdom",
            CurrentConditions { description: "clear sky".into(), temperature: 15.0, humidity: 60.0 },
        )
    }

    #[test]
    fn panel_shows_all_fields() {
        let panel = snapshot_panel(&london());

        assert!(panel.starts_with("London, United Kingdom\n"));
        assert!(panel.contains("Description: clear sky"));
        assert!(panel.contains("Temperature: 15°C"));
        assert!(panel.contains("Humidity: 60%"));
        assert!(panel.contains("Time: "));
    }

    #[test]
    fn fractional_temperatures_are_kept() {
        let mut snap = london();
        snap.conditions.temperature = 12.34;
        assert!(snapshot_panel(&snap).contains("Temperature: 12.34°C"));
    }

    #[test]
    fn history_is_numbered_from_one() {
        let mut history = SearchHistory::new();
        history.record(HistoryEntry::new("London", "United Kingdom"));
        history.record(HistoryEntry::new("Paris", "France"));

        let panel = history_panel(&history);
        let lines: Vec<&str> = panel.lines().collect();
        assert_eq!(lines[0], "Search History:");
        assert!(lines[1].starts_with("  1. Paris, France - "));
        assert!(lines[2].starts_with("  2. London, United Kingdom - "));
    }

    #[test]
    fn empty_history_says_so() {
        assert_eq!(history_panel(&SearchHistory::new()), "Search History: (empty)\n");
    }
}
