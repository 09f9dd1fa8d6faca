use std::fmt;
use tracing::trace;

use crate::start_line::StartLine;
use crate::util;
use crate::{DecodeOptions, ErrorKind, HttpVersion, Method, RequestTarget, Result};

/// Request-line of an HTTP request (e.g., `GET /index.html HTTP/1.1`).
///
/// The default value is `GET / HTTP/1.1`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RequestLine {
    method: Method,
    target: RequestTarget,
    version: HttpVersion,
}
impl RequestLine {
    /// Makes a new `RequestLine` instance.
    pub fn new<T: Into<RequestTarget>>(method: Method, target: T, version: HttpVersion) -> Self {
        RequestLine {
            method,
            target: target.into(),
            version,
        }
    }

    /// Parses the request-line at the head of `buf`.
    ///
    /// On success the returned slice is the rest of `buf` after the line and its CRLF.
    ///
    /// A buffer shorter than `DecodeOptions::DEFAULT_MIN_REQUEST_LINE_SIZE` is not
    /// consumed: the default request-line and `buf` itself are returned.
    ///
    /// # Errors
    ///
    /// - `ErrorKind::MalformedRequestLine`: a separating space, `/` or `.` is missing
    /// - `ErrorKind::MalformedVersion`: the version numbers are not unsigned integers
    pub fn parse(buf: &str) -> Result<(Self, &str)> {
        track!(Self::parse_with_options(buf, &DecodeOptions::default()))
    }

    /// Parses the request-line at the head of `buf` with the given options.
    pub fn parse_with_options<'a>(
        buf: &'a str,
        options: &DecodeOptions,
    ) -> Result<(Self, &'a str)> {
        if buf.len() < options.min_request_line_size {
            trace!(
                len = buf.len(),
                min = options.min_request_line_size,
                "input shorter than a request-line; keeping defaults"
            );
            return Ok((RequestLine::default(), buf));
        }

        let (line, rest) = util::split_first_line(buf);
        let (method, line) = match util::split_first_space(line) {
            Some(x) => x,
            None => track_panic!(ErrorKind::MalformedRequestLine, "line={:?}", line),
        };
        let (target, version) = match util::split_last_space(line) {
            Some(x) => x,
            None => track_panic!(ErrorKind::MalformedRequestLine, "line={:?}", line),
        };
        track_assert!(!method.is_empty(), ErrorKind::MalformedRequestLine; line);
        track_assert!(!target.is_empty(), ErrorKind::MalformedRequestLine; line);

        let version = track!(HttpVersion::parse_token(
            version,
            ErrorKind::MalformedRequestLine
        ))?;
        let request_line = RequestLine {
            method: Method::from_token(method),
            target: RequestTarget::new(target),
            version,
        };
        Ok((request_line, rest))
    }

    /// Returns the method of the request.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Sets the method of the request.
    pub fn set_method(&mut self, method: Method) {
        self.method = method;
    }

    /// Returns the target (URI) of the request.
    pub fn target(&self) -> &RequestTarget {
        &self.target
    }

    /// Sets the target (URI) of the request.
    pub fn set_target<T: Into<RequestTarget>>(&mut self, target: T) {
        self.target = target.into();
    }

    /// Returns the HTTP version of the request.
    pub fn version(&self) -> HttpVersion {
        self.version
    }

    /// Sets the HTTP version of the request.
    pub fn set_version(&mut self, version: HttpVersion) {
        self.version = version;
    }
}
impl fmt::Display for RequestLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}\r\n", self.method, self.target, self.version)
    }
}
impl StartLine for RequestLine {
    fn parse_start_line<'a>(buf: &'a str, options: &DecodeOptions) -> Result<(Self, &'a str)> {
        track!(Self::parse_with_options(buf, options))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn request_line_parse_works() {
        let (line, rest) = track_try_unwrap!(RequestLine::parse(
            "GET /index.html HTTP/1.1\r\nHost: x\r\n\r\n"
        ));
        assert_eq!(line.method(), &Method::Get);
        assert_eq!(line.target().as_str(), "/index.html");
        assert_eq!(line.version(), HttpVersion::new(1, 1));
        assert_eq!(rest, "Host: x\r\n\r\n");
    }

    #[test]
    fn leading_whitespace_is_skipped() {
        let (line, rest) = track_try_unwrap!(RequestLine::parse(
            "\t\x0B\x0C POST /form HTTP/1.0\r\nbody"
        ));
        assert_eq!(line.method(), &Method::Post);
        assert_eq!(line.target().as_str(), "/form");
        assert_eq!(line.version(), HttpVersion::V1_0);
        assert_eq!(rest, "body");
    }

    #[test]
    fn target_is_split_on_last_space() {
        let (line, _) = track_try_unwrap!(RequestLine::parse("GET /a b/c HTTP/1.1\r\nHost: x\r\n"));
        assert_eq!(line.target().as_str(), "/a b/c");
        assert_eq!(line.version(), HttpVersion::V1_1);
    }

    #[test]
    fn short_input_keeps_defaults() {
        for buf in &["", "GET / HTTP/1.1", "x\r\n\r\n"] {
            let (line, rest) = track_try_unwrap!(RequestLine::parse(buf));
            assert_eq!(line, RequestLine::default());
            assert_eq!(line.to_string(), "GET / HTTP/1.1\r\n");
            assert_eq!(rest, *buf);
        }

        let options = DecodeOptions {
            min_request_line_size: 4,
            ..DecodeOptions::default()
        };
        let (line, rest) =
            track_try_unwrap!(RequestLine::parse_with_options("PUT / HTTP/1.0", &options));
        assert_eq!(line.method(), &Method::Put);
        assert_eq!(rest, "");
    }

    #[test]
    fn malformed_version_is_rejected() {
        assert_eq!(
            RequestLine::parse("GET / HTTP/x.y\r\nHost: x\r\n")
                .err()
                .map(|e| *e.kind()),
            Some(ErrorKind::MalformedVersion)
        );
        assert_eq!(
            RequestLine::parse("GET / HTTP/1.1a\r\nHost: x\r\n")
                .err()
                .map(|e| *e.kind()),
            Some(ErrorKind::MalformedVersion)
        );
    }

    #[test]
    fn malformed_request_line_is_rejected() {
        let inputs = [
            "GET\r\nHost: example.com\r\n",
            "GET /index.html\r\nHost: x\r\n",
            "GET /index.html HTTP1.1\r\nHost: x\r\n",
            "GET /index.html HTTP/11\r\nHost: x\r\n",
            "GET  HTTP/1.1\r\nHost: example\r\n",
            "                \r\n",
        ];
        for input in &inputs {
            assert_eq!(
                RequestLine::parse(input).err().map(|e| *e.kind()),
                Some(ErrorKind::MalformedRequestLine),
                "input={:?}",
                input
            );
        }
    }

    #[test]
    fn serialized_request_line_round_trips() {
        let lines = [
            RequestLine::default(),
            RequestLine::new(Method::Delete, "/items/42?force=1", HttpVersion::V1_0),
            RequestLine::new(Method::from_token("PURGE"), "/a b", HttpVersion::new(2, 0)),
        ];
        for line in &lines {
            let text = line.to_string();
            let (parsed, rest) = track_try_unwrap!(RequestLine::parse(&text));
            assert_eq!(&parsed, line);
            assert_eq!(rest, "");
        }
    }

    #[test]
    fn setters_work() {
        let mut line = RequestLine::default();
        line.set_method(Method::Options);
        line.set_target("*");
        line.set_version(HttpVersion::V1_0);
        assert_eq!(line.to_string(), "OPTIONS * HTTP/1.0\r\n");
    }
}
