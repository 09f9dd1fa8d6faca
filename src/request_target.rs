use std::fmt;

use crate::util;

/// Request target ([RFC 7230#5.3]).
///
/// The target is stored and echoed verbatim; no normalization is performed.
///
/// [RFC 7230#5.3]: https://tools.ietf.org/html/rfc7230#section-5.3
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestTarget(String);
impl RequestTarget {
    /// Makes a new `RequestTarget` instance.
    pub fn new<T: Into<String>>(target: T) -> Self {
        RequestTarget(target.into())
    }

    /// Returns the string representation of the target.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the query part of the target (the text after the first `?`), if any.
    pub fn query(&self) -> Option<&str> {
        self.0.find('?').map(|i| &self.0[i + 1..])
    }

    /// Returns the value associated with `name` in the query part of the target.
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query().and_then(|q| util::find_pair_value(q, name))
    }

    /// Takes ownership of the target, and returns the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}
impl Default for RequestTarget {
    fn default() -> Self {
        RequestTarget("/".to_owned())
    }
}
impl<'a> From<&'a str> for RequestTarget {
    fn from(f: &'a str) -> Self {
        RequestTarget::new(f)
    }
}
impl From<String> for RequestTarget {
    fn from(f: String) -> Self {
        RequestTarget(f)
    }
}
impl AsRef<str> for RequestTarget {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
impl fmt::Display for RequestTarget {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}
