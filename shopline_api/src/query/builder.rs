//! Ordered query-string accumulator shared by every list endpoint.

use chrono::{DateTime, SecondsFormat, Utc};
use url::{form_urlencoded, Url};

/// Fluent builder for URL query strings.
///
/// Every adder skips "unset" input (empty strings, non-positive integers,
/// `None`), so option structs can be forwarded field by field without
/// checking each one. Keys are rendered in the order they were first added.
/// Adding a key that is already present replaces its value in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryBuilder {
    params: Vec<(String, Vec<String>)>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `key=value` unless `value` is empty.
    pub fn string(self, key: &str, value: &str) -> Self {
        if value.is_empty() {
            return self;
        }
        self.set(key, vec![value.to_string()])
    }

    /// Adds one `key=value` pair per non-empty entry of `values`.
    pub fn strings<S: AsRef<str>>(self, key: &str, values: &[S]) -> Self {
        let values: Vec<String> = values
            .iter()
            .map(AsRef::as_ref)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect();
        if values.is_empty() {
            return self;
        }
        self.set(key, values)
    }

    /// Adds `key=value` unless `value` is zero or negative.
    pub fn int(self, key: &str, value: i64) -> Self {
        if value <= 0 {
            return self;
        }
        self.set(key, vec![value.to_string()])
    }

    /// Adds `key=true` when `value` is set. `false` is treated as unset.
    pub fn bool(self, key: &str, value: bool) -> Self {
        if !value {
            return self;
        }
        self.set(key, vec!["true".to_string()])
    }

    /// Adds `key=true` or `key=false` when a value is present.
    ///
    /// Use this instead of [`QueryBuilder::bool`] when an explicit `false`
    /// must reach the server.
    pub fn bool_opt(self, key: &str, value: Option<bool>) -> Self {
        match value {
            Some(v) => self.set(key, vec![v.to_string()]),
            None => self,
        }
    }

    /// Adds the timestamp as RFC 3339 in UTC with second precision (`2024-01-15T10:30:00Z`).
    pub fn time(self, key: &str, value: Option<&DateTime<Utc>>) -> Self {
        match value {
            Some(t) => self.set(key, vec![t.to_rfc3339_opts(SecondsFormat::Secs, true)]),
            None => self,
        }
    }

    /// Number of distinct keys set.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns the first value stored for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, values)| values.first())
            .map(String::as_str)
    }

    /// Renders the pairs without a leading `?`.
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, values) in &self.params {
            for value in values {
                serializer.append_pair(key, value);
            }
        }
        serializer.finish()
    }

    /// Renders the pairs with a leading `?`, or an empty string when nothing was set.
    pub fn build(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        format!("?{}", self.encode())
    }

    /// Appends the pairs to `url`, keeping any query it already has.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if self.is_empty() {
            return url;
        }
        {
            let mut pairs = url.query_pairs_mut();
            for (key, values) in &self.params {
                for value in values {
                    pairs.append_pair(key, value);
                }
            }
        }
        url
    }

    fn set(mut self, key: &str, values: Vec<String>) -> Self {
        match self.params.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = values,
            None => self.params.push((key.to_string(), values)),
        }
        self
    }
}
