use crate::message::{Message, MessageDecoder, MessageEncoder};
use crate::util;
use crate::{HttpVersion, Method, RequestLine, RequestTarget};

/// HTTP request message.
pub type Request = Message<RequestLine>;

/// HTTP request decoder.
pub type RequestDecoder = MessageDecoder<RequestLine>;

/// HTTP request encoder.
pub type RequestEncoder = MessageEncoder<RequestLine>;

impl Message<RequestLine> {
    /// Makes a new `Request` instance with the given request-line components.
    pub fn new<T: Into<RequestTarget>>(method: Method, target: T, version: HttpVersion) -> Self {
        Message::with_start_line(RequestLine::new(method, target, version))
    }

    /// Returns the method of the request.
    pub fn method(&self) -> &Method {
        self.start_line().method()
    }

    /// Sets the method of the request.
    pub fn set_method(&mut self, method: Method) -> &mut Self {
        self.start_line_mut().set_method(method);
        self
    }

    /// Returns the target (URI) of the request.
    pub fn uri(&self) -> &RequestTarget {
        self.start_line().target()
    }

    /// Sets the target (URI) of the request.
    pub fn set_uri<T: Into<RequestTarget>>(&mut self, target: T) -> &mut Self {
        self.start_line_mut().set_target(target);
        self
    }

    /// Returns the HTTP version of the request.
    pub fn version(&self) -> HttpVersion {
        self.start_line().version()
    }

    /// Sets the HTTP version of the request.
    pub fn set_version(&mut self, version: HttpVersion) -> &mut Self {
        self.start_line_mut().set_version(version);
        self
    }

    /// Returns the value associated with `name` in the query string of the target.
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.uri().query_value(name)
    }

    /// Returns the value associated with `name` in a form encoded body.
    ///
    /// Only `POST` requests have such values.
    pub fn post_value(&self, name: &str) -> Option<&str> {
        if *self.method() != Method::Post {
            return None;
        }
        util::find_pair_value(self.body(), name)
    }
}

#[cfg(test)]
mod test {
    use bytecodec::io::{IoDecodeExt, IoEncodeExt};
    use bytecodec::EncodeExt;

    use super::*;
    use crate::{DecodeOptions, ErrorKind};

    #[test]
    fn request_parse_works() {
        let req = track_try_unwrap!(Request::parse(
            "GET /index.html?lang=en HTTP/1.1\r\nHost: x\r\nAccept: */*\r\n\r\n"
        ));
        assert_eq!(req.method(), &Method::Get);
        assert_eq!(req.uri().as_str(), "/index.html?lang=en");
        assert_eq!(req.version(), HttpVersion::V1_1);
        assert_eq!(req.header().get("host"), Some("x"));
        assert_eq!(req.header().len(), 2);
        assert_eq!(req.body(), "");
        assert_eq!(req.query_value("lang"), Some("en"));
        assert_eq!(req.post_value("lang"), None);
    }

    #[test]
    fn post_value_works() {
        let req = track_try_unwrap!(Request::parse(
            "POST /login HTTP/1.1\r\nContent-Type: application/x-www-form-urlencoded\r\n\r\nuser=alice&pass=secret"
        ));
        assert_eq!(req.body(), "user=alice&pass=secret");
        assert_eq!(req.post_value("user"), Some("alice"));
        assert_eq!(req.post_value("pass"), Some("secret"));
        assert_eq!(req.post_value("token"), None);
    }

    #[test]
    fn request_without_headers_keeps_body() {
        let req = track_try_unwrap!(Request::parse("PUT /doc HTTP/1.1\r\n\r\nhello"));
        assert!(req.header().is_empty());
        assert_eq!(req.body(), "hello");
    }

    #[test]
    fn malformed_request_is_rejected() {
        assert_eq!(
            Request::parse("GET / HTTP/x.y\r\nHost: x\r\n\r\n")
                .err()
                .map(|e| *e.kind()),
            Some(ErrorKind::MalformedVersion)
        );

        let options = DecodeOptions {
            max_header_fields: 1,
            ..DecodeOptions::default()
        };
        assert_eq!(
            Request::parse_with_options("GET / HTTP/1.1\r\nA: 1\r\nB: 2\r\n\r\n", &options)
                .err()
                .map(|e| *e.kind()),
            Some(ErrorKind::TooManyHeaderFields)
        );
    }

    #[test]
    fn request_to_string_works() {
        let mut req = Request::new(Method::Post, "/upload", HttpVersion::V1_0);
        track_try_unwrap!(req.add_header("Host", "example.com"));
        track_try_unwrap!(req.add_headers("Content-Length: 3\r\n"));
        req.add_body("a").add_body("bc");
        assert_eq!(
            req.to_string(),
            "POST /upload HTTP/1.0\r\nHost: example.com\r\nContent-Length: 3\r\n\r\nabc"
        );

        let parsed = track_try_unwrap!(Request::parse(&req.to_string()));
        assert_eq!(parsed, req);
    }

    #[test]
    fn reset_works() {
        let mut req = track_try_unwrap!(Request::parse(
            "DELETE /items/1 HTTP/1.0\r\nHost: x\r\n\r\nbody"
        ));
        req.reset();
        assert_eq!(req, Request::default());
        assert_eq!(req.to_string(), "GET / HTTP/1.1\r\n\r\n");

        req.set_method(Method::Head)
            .set_uri("/status")
            .set_version(HttpVersion::V1_0);
        assert_eq!(req.to_string(), "HEAD /status HTTP/1.0\r\n\r\n");
    }

    #[test]
    fn request_encoder_works() {
        let mut req = Request::new(Method::Get, "/", HttpVersion::V1_1);
        track_try_unwrap!(req.add_header("Host", "x"));
        let mut encoder = track_try_unwrap!(RequestEncoder::with_item(req));

        let mut buf = Vec::new();
        track_try_unwrap!(encoder.encode_all(&mut buf));
        assert_eq!(buf, b"GET / HTTP/1.1\r\nHost: x\r\n\r\n".as_ref());
    }

    #[test]
    fn request_decoder_works() {
        let mut decoder = RequestDecoder::default();
        let item = track_try_unwrap!(
            decoder.decode_exact(b"GET /a b/c HTTP/1.1\r\nHost: x\r\n\r\nfoo".as_ref())
        );
        assert_eq!(item.uri().as_str(), "/a b/c");
        assert_eq!(item.body(), "foo");

        let mut decoder = RequestDecoder::default();
        assert_eq!(
            decoder
                .decode_exact(b"GET / HTTP/1.1\r\n\xff: x\r\n\r\n".as_ref())
                .err()
                .map(|e| *e.kind()),
            Some(bytecodec::ErrorKind::InvalidInput)
        );
    }
}
