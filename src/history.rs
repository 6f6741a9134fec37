// src/history.rs

// Append-only record of the passwords generated this session. Not a
// cache: no deduplication, no capacity limit, no eviction. Dropped
// with the process.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        History::default()
    }

    pub fn push(&mut self, password: String) {
        self.entries.push(password);
    }

    /// All entries in insertion order, most recent last.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let mut history = History::new();
        history.push("P1".to_string());
        history.push("P2".to_string());
        history.push("P3".to_string());

        assert_eq!(history.entries(), &["P1", "P2", "P3"]);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn keeps_duplicates() {
        let mut history = History::new();
        history.push("same".to_string());
        history.push("same".to_string());

        assert_eq!(history.entries(), &["same", "same"]);
    }

    #[test]
    fn starts_empty() {
        let history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
    }
}
