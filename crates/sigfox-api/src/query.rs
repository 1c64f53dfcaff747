//! Ordered query-parameter builder.
//!
//! Encodes the filter conventions shared by every list endpoint:
//! unset or empty values are omitted entirely, array values are
//! comma-joined into one parameter, and boolean flags are sent as the
//! literal `"true"` only when set.

use std::fmt::Display;

/// Ordered `(name, value)` query pairs for a single request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a string filter. `None` and `""` are skipped.
    #[must_use]
    pub fn text(mut self, name: &str, value: Option<&str>) -> Self {
        if let Some(v) = value.filter(|v| !v.is_empty()) {
            self.pairs.push((name.to_owned(), v.to_owned()));
        }
        self
    }

    /// Add a numeric (or other `Display`) filter. `None` is skipped.
    #[must_use]
    pub fn num<T: Display>(mut self, name: &str, value: Option<T>) -> Self {
        if let Some(v) = value {
            self.pairs.push((name.to_owned(), v.to_string()));
        }
        self
    }

    /// Add an array filter as one comma-joined value. Empty slices are skipped.
    #[must_use]
    pub fn list<T: Display>(mut self, name: &str, values: &[T]) -> Self {
        if !values.is_empty() {
            let joined = values
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",");
            self.pairs.push((name.to_owned(), joined));
        }
        self
    }

    /// Add a boolean flag: `"true"` when set, omitted otherwise.
    #[must_use]
    pub fn flag(mut self, name: &str, value: bool) -> Self {
        if value {
            self.pairs.push((name.to_owned(), "true".to_owned()));
        }
        self
    }

    /// Insert or overwrite a parameter in place, keeping its position.
    pub fn set(&mut self, name: &str, value: impl Display) {
        let value = value.to_string();
        match self.pairs.iter_mut().find(|(k, _)| k == name) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((name.to_owned(), value)),
        }
    }

    /// First value for `name`, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn as_pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}
