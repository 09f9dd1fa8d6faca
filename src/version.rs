use std::fmt;
use std::str::FromStr;

use crate::util;
use crate::{Error, ErrorKind, Result};

/// HTTP version.
///
/// It is rendered as `HTTP/{major}.{minor}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HttpVersion {
    major: u32,
    minor: u32,
}
impl HttpVersion {
    /// `HTTP/1.0`
    pub const V1_0: HttpVersion = HttpVersion { major: 1, minor: 0 };

    /// `HTTP/1.1`
    pub const V1_1: HttpVersion = HttpVersion { major: 1, minor: 1 };

    /// Makes a new `HttpVersion` instance.
    pub fn new(major: u32, minor: u32) -> Self {
        HttpVersion { major, minor }
    }

    /// Returns the major version number.
    pub fn major(&self) -> u32 {
        self.major
    }

    /// Returns the minor version number.
    pub fn minor(&self) -> u32 {
        self.minor
    }

    /// Decodes a version token such as `HTTP/1.1`.
    ///
    /// A token without `/` or without a following `.` fails with `delimiter_error`;
    /// non-numeric halves fail with `ErrorKind::MalformedVersion`.
    pub(crate) fn parse_token(token: &str, delimiter_error: ErrorKind) -> Result<Self> {
        let slash = match token.find('/') {
            Some(i) => i,
            None => track_panic!(delimiter_error, "No '/' in version: {:?}", token),
        };
        let numbers = &token[slash + 1..];
        let dot = match numbers.find('.') {
            Some(i) => i,
            None => track_panic!(delimiter_error, "No '.' in version: {:?}", token),
        };

        let major = util::parse_decimal(&numbers[..dot]);
        let minor = util::parse_decimal(&numbers[dot + 1..]);
        match (major, minor) {
            (Some(major), Some(minor)) => Ok(HttpVersion { major, minor }),
            _ => track_panic!(ErrorKind::MalformedVersion, "version={:?}", token),
        }
    }
}
impl Default for HttpVersion {
    fn default() -> Self {
        HttpVersion::V1_1
    }
}
impl fmt::Display for HttpVersion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "HTTP/{}.{}", self.major, self.minor)
    }
}
impl FromStr for HttpVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        track!(Self::parse_token(s, ErrorKind::MalformedVersion))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn version_parse_works() {
        let v: HttpVersion = track_try_unwrap!("HTTP/1.0".parse::<HttpVersion>());
        assert_eq!(v, HttpVersion::V1_0);

        let v: HttpVersion = track_try_unwrap!("HTTP/2.13".parse::<HttpVersion>());
        assert_eq!((v.major(), v.minor()), (2, 13));
        assert_eq!(v.to_string(), "HTTP/2.13");

        assert_eq!(
            "HTTP/x.y".parse::<HttpVersion>().err().map(|e| *e.kind()),
            Some(ErrorKind::MalformedVersion)
        );
        assert_eq!(
            "HTTP/1.".parse::<HttpVersion>().err().map(|e| *e.kind()),
            Some(ErrorKind::MalformedVersion)
        );
        assert_eq!(
            HttpVersion::parse_token("HTTP1.1", ErrorKind::MalformedStatusLine)
                .err()
                .map(|e| *e.kind()),
            Some(ErrorKind::MalformedStatusLine)
        );
        assert_eq!(
            HttpVersion::parse_token("HTTP/11", ErrorKind::MalformedRequestLine)
                .err()
                .map(|e| *e.kind()),
            Some(ErrorKind::MalformedRequestLine)
        );
    }

    #[test]
    fn default_version_is_1_1() {
        assert_eq!(HttpVersion::default().to_string(), "HTTP/1.1");
    }
}
