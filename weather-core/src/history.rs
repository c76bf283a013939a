use chrono::{DateTime, Local};

/// One past successful search.
///
/// `label` is the `"<city>, <country>"` text shown to the user; the parts are
/// kept alongside it so a replay gets back exactly what was searched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub label: String,
    pub city: String,
    pub country: String,
    pub searched_at: DateTime<Local>,
}

impl HistoryEntry {
    pub fn new(city: &str, country: &str) -> Self {
        Self {
            label: format!("{city}, {country}"),
            city: city.to_string(),
            country: country.to_string(),
            searched_at: Local::now(),
        }
    }

    /// The `(city, country)` pair this entry was recorded with.
    pub fn split(&self) -> (String, String) {
        (self.city.clone(), self.country.clone())
    }
}

/// Session search history, newest first. Entries are addressed by position.
#[derive(Debug, Clone, Default)]
pub struct SearchHistory {
    entries: Vec<HistoryEntry>,
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend an entry. Repeated searches are kept as separate entries.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Remove the entry at `index`; later entries shift up by one.
    pub fn remove(&mut self, index: usize) -> Option<HistoryEntry> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }
}
