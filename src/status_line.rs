use std::fmt;

use crate::start_line::StartLine;
use crate::util;
use crate::{DecodeOptions, ErrorKind, HttpVersion, Result, StatusCode};

/// Status-line of an HTTP response (e.g., `HTTP/1.1 404 Not Found`).
///
/// Only the version and the code are kept;
/// the reason phrase is derived from the code when the line is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StatusLine {
    version: HttpVersion,
    code: StatusCode,
}
impl StatusLine {
    /// Makes a new `StatusLine` instance.
    pub fn new(version: HttpVersion, code: StatusCode) -> Self {
        StatusLine { version, code }
    }

    /// Parses the status-line at the head of `buf`.
    ///
    /// On success the returned slice is the rest of `buf` after the line and its CRLF.
    /// The reason phrase of the input is discarded.
    ///
    /// # Errors
    ///
    /// - `ErrorKind::MalformedStatusLine`: the space after the version, `/` or `.` is missing
    /// - `ErrorKind::MalformedVersion`: the version numbers are not unsigned integers
    /// - `ErrorKind::MalformedStatusCode`: the code is not a number between 100 and 999
    pub fn parse(buf: &str) -> Result<(Self, &str)> {
        let (line, rest) = util::split_first_line(buf);
        let (version, line) = match util::split_first_space(line) {
            Some(x) => x,
            None => track_panic!(ErrorKind::MalformedStatusLine, "line={:?}", line),
        };
        let version = track!(HttpVersion::parse_token(
            version,
            ErrorKind::MalformedStatusLine
        ))?;

        let code = match util::split_first_space(line) {
            Some((code, _reason)) => code,
            None => line,
        };
        let code = track!(StatusCode::parse_token(code))?;
        Ok((StatusLine { version, code }, rest))
    }

    /// Returns the HTTP version of the response.
    pub fn version(&self) -> HttpVersion {
        self.version
    }

    /// Sets the HTTP version of the response.
    pub fn set_version(&mut self, version: HttpVersion) {
        self.version = version;
    }

    /// Returns the status code of the response.
    pub fn code(&self) -> StatusCode {
        self.code
    }

    /// Sets the status code of the response.
    pub fn set_code(&mut self, code: StatusCode) {
        self.code = code;
    }

    /// Returns the reason phrase for the status code.
    pub fn reason_phrase(&self) -> &'static str {
        self.code.reason_phrase()
    }
}
impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {}\r\n",
            self.version,
            self.code,
            self.reason_phrase()
        )
    }
}
impl StartLine for StatusLine {
    fn parse_start_line<'a>(buf: &'a str, _options: &DecodeOptions) -> Result<(Self, &'a str)> {
        track!(Self::parse(buf))
    }
}
