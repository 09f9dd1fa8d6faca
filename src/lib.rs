//! Parsers and serializers for the start-lines of HTTP/1.x messages.
//!
//! A request-line (`GET /index.html HTTP/1.1`) is handled by [`RequestLine`],
//! and a status-line (`HTTP/1.1 404 Not Found`) by [`StatusLine`].
//! Both parse the head of a text buffer and return the unconsumed remainder,
//! which [`Message`] splits into header fields and a body.
//!
//! [`RequestLine`]: ./struct.RequestLine.html
//! [`StatusLine`]: ./struct.StatusLine.html
//! [`Message`]: ./struct.Message.html
//!
//! # Examples
//!
//! ```
//! use startline::{HttpVersion, Method, RequestLine, StatusCode, StatusLine};
//!
//! let (line, rest) = RequestLine::parse("GET /index.html HTTP/1.1\r\nHost: x\r\n\r\n").unwrap();
//! assert_eq!(line.method(), &Method::Get);
//! assert_eq!(line.target().as_str(), "/index.html");
//! assert_eq!(line.version(), HttpVersion::V1_1);
//! assert_eq!(rest, "Host: x\r\n\r\n");
//!
//! let line = StatusLine::new(HttpVersion::V1_1, StatusCode::NOT_FOUND);
//! assert_eq!(line.to_string(), "HTTP/1.1 404 Not Found\r\n");
//! ```
extern crate bytecodec;
#[macro_use]
extern crate trackable;
extern crate tracing;

pub use error::{Error, ErrorKind, Result};
pub use header::{HeaderField, HeaderFields};
pub use message::{Message, MessageDecoder, MessageEncoder};
pub use method::Method;
pub use options::DecodeOptions;
pub use request::{Request, RequestDecoder, RequestEncoder};
pub use request_line::RequestLine;
pub use request_target::RequestTarget;
pub use response::{Response, ResponseDecoder, ResponseEncoder};
pub use start_line::StartLine;
pub use status::StatusCode;
pub use status_line::StatusLine;
pub use version::HttpVersion;

mod error;
mod header;
mod message;
mod method;
mod options;
mod request;
mod request_line;
mod request_target;
mod response;
mod start_line;
mod status;
mod status_line;
mod util;
mod version;
