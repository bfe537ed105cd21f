use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://.+").expect("static URL pattern"));

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email pattern"));

/// Field-level validation failures, in the order the form declares its
/// fields. One message per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    entries: Vec<(&'static str, &'static str)>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// First message for a field wins.
    pub fn add(&mut self, field: &'static str, message: &'static str) {
        if self.get(field).is_none() {
            self.entries.push((field, message));
        }
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, m)| *m)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(f, _)| *f)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    /// Builds the validated value only when no error was recorded.
    pub fn finish<T>(self, build: impl FnOnce() -> T) -> Result<T, FormErrors> {
        if self.is_empty() {
            Ok(build())
        } else {
            Err(self)
        }
    }

    pub(crate) fn require(&mut self, field: &'static str, value: &str, message: &'static str) {
        if value.trim().is_empty() {
            self.add(field, message);
        }
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
        }
        Ok(())
    }
}

impl std::error::Error for FormErrors {}

pub(crate) fn is_valid_url(value: &str) -> bool {
    URL_PATTERN.is_match(value)
}

pub(crate) fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Trimmed entries, blanks dropped, first occurrence kept.
pub(crate) fn normalize_list(values: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(values.len());
    for v in values {
        let v = v.trim();
        if !v.is_empty() && !out.iter().any(|o| o == v) {
            out.push(v.to_string());
        }
    }
    out
}
