use serde::{Deserialize, Serialize};

pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Moves `entry` to the front of `log`, dropping any older copy, and keeps at most `max_size` entries.
pub fn push(log: &[String], entry: &str, max_size: usize) -> Vec<String> {
    std::iter::once(entry.to_string())
        .chain(log.iter().filter(|existing| existing.as_str() != entry).cloned())
        .take(max_size)
        .collect()
}

/// Splits a `"name, location"` entry back into its parts.
pub fn parse_entry(entry: &str) -> Option<(String, String)> {
    let mut parts = entry.split(", ");
    let name = parts.next()?.trim();
    let location = parts.next()?.trim();
    if name.is_empty() || location.is_empty() {
        return None;
    }
    Some((name.to_string(), location.to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentSearchLog {
    entries: Vec<String>,
    limit: usize,
}

impl RecentSearchLog {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit,
        }
    }

    pub fn record(&mut self, entry: &str) {
        self.entries = push(&self.entries, entry, self.limit);
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RecentSearchLog {
    fn default() -> Self {
        Self::new(DEFAULT_RECENT_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_into_empty_log() {
        assert_eq!(push(&[], "A, Mumbai", 5), vec!["A, Mumbai".to_string()]);
    }

    #[test]
    fn test_push_duplicate_does_not_grow() {
        let log = vec!["A, Mumbai".to_string()];
        assert_eq!(push(&log, "A, Mumbai", 5), vec!["A, Mumbai".to_string()]);
    }

    #[test]
    fn test_push_duplicate_moves_to_front() {
        let log: Vec<String> = ["C, Pune", "B, Delhi", "A, Mumbai"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let updated = push(&log, "A, Mumbai", 5);
        assert_eq!(updated, vec!["A, Mumbai", "C, Pune", "B, Delhi"]);
    }

    #[test]
    fn test_push_truncates_to_most_recent() {
        let mut log = Vec::new();
        for i in 1..=6 {
            log = push(&log, &format!("Biz {i}, Mumbai"), DEFAULT_RECENT_LIMIT);
        }
        assert_eq!(log.len(), 5);
        assert_eq!(log[0], "Biz 6, Mumbai");
        assert_eq!(log[4], "Biz 2, Mumbai");
        assert!(!log.contains(&"Biz 1, Mumbai".to_string()));
    }

    #[test]
    fn test_parse_entry() {
        assert_eq!(
            parse_entry("Cake & Co, Mumbai"),
            Some(("Cake & Co".to_string(), "Mumbai".to_string()))
        );
        // Only the first two segments are used.
        assert_eq!(
            parse_entry("Shop, Andheri, Mumbai"),
            Some(("Shop".to_string(), "Andheri".to_string()))
        );
        assert_eq!(parse_entry("NoSeparator"), None);
    }

    #[test]
    fn test_log_respects_limit() {
        let mut log = RecentSearchLog::new(2);
        log.record("A, X");
        log.record("B, Y");
        log.record("C, Z");
        assert_eq!(log.entries(), &["C, Z".to_string(), "B, Y".to_string()]);
        assert_eq!(log.get(1), Some("B, Y"));
        assert_eq!(log.get(2), None);
    }
}
