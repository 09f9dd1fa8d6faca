use std::fmt;
use std::slice;
use tracing::debug;

use crate::util;
use crate::{ErrorKind, Result};

/// Header field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HeaderField {
    name: String,
    value: String,
}
impl HeaderField {
    /// Returns the name of the header field.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the value of the header field.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Parses a `name: value` line.
    ///
    /// Returns `None` if the line has no colon.
    fn parse(line: &str) -> Option<Self> {
        let colon = line.find(':')?;
        Some(HeaderField {
            name: line[..colon].trim_matches(util::is_whitespace).to_owned(),
            value: line[colon + 1..].trim_matches(util::is_whitespace).to_owned(),
        })
    }
}
impl fmt::Display for HeaderField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}\r\n", self.name, self.value)
    }
}

/// Ordered header fields of an HTTP message.
///
/// Names are compared case-insensitively.
/// The number of fields is bounded by `limit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderFields {
    fields: Vec<HeaderField>,
    limit: usize,
}
impl HeaderFields {
    /// Makes a new empty `HeaderFields` which can hold up to `limit` fields.
    pub fn new(limit: usize) -> Self {
        HeaderFields {
            fields: Vec::new(),
            limit,
        }
    }

    /// Returns the maximum number of fields.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if there are no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Appends a field.
    ///
    /// # Errors
    ///
    /// If the container already holds `limit` fields,
    /// an `ErrorKind::TooManyHeaderFields` error will be returned.
    pub fn add<N, V>(&mut self, name: N, value: V) -> Result<()>
    where
        N: Into<String>,
        V: Into<String>,
    {
        track_assert!(
            self.fields.len() < self.limit,
            ErrorKind::TooManyHeaderFields,
            "limit={}",
            self.limit
        );
        self.fields.push(HeaderField {
            name: name.into(),
            value: value.into(),
        });
        Ok(())
    }

    /// Parses header lines from the head of `buf` and appends them.
    ///
    /// Parsing stops at the first empty line (`\r\n` or bare `\n`)
    /// and the text after it is returned.
    /// Lines without a colon are skipped.
    pub fn add_lines<'a>(&mut self, buf: &'a str) -> Result<&'a str> {
        let mut rest = buf;
        while !rest.is_empty() {
            let (line, next) = match rest.find('\n') {
                Some(i) => (rest[..i].trim_end_matches('\r'), &rest[i + 1..]),
                None => (rest, &rest[rest.len()..]),
            };
            rest = next;
            if line.is_empty() {
                break;
            }
            match HeaderField::parse(line) {
                Some(field) => {
                    track!(self.add(field.name, field.value))?;
                }
                None => debug!(line, "skipped a header line without a colon"),
            }
        }
        Ok(rest)
    }

    /// Returns the value of the first field named `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(name))
            .map(|f| f.value())
    }

    /// Returns `true` if a field named `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Removes every field named `name`, and returns the number of removed fields.
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.fields.len();
        self.fields.retain(|f| !f.name.eq_ignore_ascii_case(name));
        before - self.fields.len()
    }

    /// Removes all fields.
    pub fn clear(&mut self) {
        self.fields.clear();
    }

    /// Returns an iterator over the fields.
    pub fn iter(&self) -> slice::Iter<HeaderField> {
        self.fields.iter()
    }
}
impl<'a> IntoIterator for &'a HeaderFields {
    type Item = &'a HeaderField;
    type IntoIter = slice::Iter<'a, HeaderField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
impl fmt::Display for HeaderFields {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for field in &self.fields {
            write!(f, "{}", field)?;
        }
        Ok(())
    }
}
