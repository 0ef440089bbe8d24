//! Ordered list of wheel entries.
//!
//! Entries are identified only by position. Labels are trimmed on the way in
//! and never edited afterwards; duplicates are allowed.

#[cfg(test)]
#[path = "entries_test.rs"]
mod entries_test;

/// The ordered entry sequence shown on the wheel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryStore {
    entries: Vec<String>,
}

impl EntryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `text` trimmed of surrounding whitespace.
    ///
    /// Returns the index of the new entry, or `None` if the trimmed text is empty.
    pub fn add(&mut self, text: &str) -> Option<usize> {
        let label = text.trim();
        if label.is_empty() {
            return None;
        }
        self.entries.push(label.to_owned());
        Some(self.entries.len() - 1)
    }

    /// Remove the entry at `index`, shifting later entries down by one.
    ///
    /// Returns the removed label, or `None` if `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index >= self.entries.len() {
            return None;
        }
        Some(self.entries.remove(index))
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }
}

impl<S: AsRef<str>> FromIterator<S> for EntryStore {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut store = Self::new();
        for text in iter {
            store.add(text.as_ref());
        }
        store
    }
}
