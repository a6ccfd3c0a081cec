/// Ordered header map with exact, case-sensitive name lookup.
///
/// Insertion order is preserved and is the order headers render in.
/// Overwriting an existing name keeps its position; removing a name and
/// adding it again appends at the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        match self.entries.iter().position(|(n, _)| *n == name) {
            Some(index) => self.entries[index].1 = value.into(),
            None => self.entries.push((name, value.into())),
        }
    }

    pub fn remove(&mut self, name: &str) {
        self.entries.retain(|(n, _)| n != name);
    }

    /// `Some` inserts or overwrites, `None` removes. Bulk header operations
    /// on messages funnel through this.
    pub fn apply(&mut self, name: &str, value: Option<&str>) {
        match value {
            Some(value) => self.insert(name, value),
            None => self.remove(name),
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
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
    fn test_lookup_is_case_sensitive() {
        let mut headers = Headers::new();
        headers.insert("X-Test", "Test");

        assert_eq!(headers.get("X-Test"), Some("Test"));
        assert_eq!(headers.get("x-test"), None);
        assert!(headers.contains("X-Test"));
        assert!(!headers.contains("X-TEST"));
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut headers = Headers::new();
        headers.insert("First", "1");
        headers.insert("Second", "2");
        headers.insert("First", "one");

        let entries: Vec<_> = headers.iter().collect();
        assert_eq!(entries, vec![("First", "one"), ("Second", "2")]);
    }

    #[test]
    fn test_remove_then_insert_appends() {
        let mut headers = Headers::new();
        headers.insert("First", "1");
        headers.insert("Second", "2");
        headers.remove("First");
        headers.insert("First", "1");

        let entries: Vec<_> = headers.iter().collect();
        assert_eq!(entries, vec![("Second", "2"), ("First", "1")]);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut headers = Headers::new();
        headers.insert("First", "1");
        headers.remove("Missing");

        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn test_apply_inserts_and_removes() {
        let mut headers = Headers::new();
        headers.apply("First", Some("1"));
        headers.apply("Second", Some("2"));
        headers.apply("First", None);

        assert!(!headers.contains("First"));
        assert_eq!(headers.get("Second"), Some("2"));
        assert_eq!(headers.len(), 1);
    }
}
