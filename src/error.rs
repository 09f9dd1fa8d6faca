use trackable::error::{self, TrackableError};

/// This crate specific error type.
pub type Error = TrackableError<ErrorKind>;

/// This crate specific result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Possible error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The request-line lacks a separating space or a version delimiter.
    MalformedRequestLine,

    /// The status-line lacks a separating space or a version delimiter.
    MalformedStatusLine,

    /// The major or minor part of an HTTP version is not an unsigned integer.
    MalformedVersion,

    /// The status code is not a three digit number.
    MalformedStatusCode,

    /// The header section already holds as many fields as its limit allows.
    TooManyHeaderFields,
}
impl error::ErrorKind for ErrorKind {
    fn description(&self) -> &str {
        match *self {
            ErrorKind::MalformedRequestLine => "Malformed request-line",
            ErrorKind::MalformedStatusLine => "Malformed status-line",
            ErrorKind::MalformedVersion => "Malformed HTTP version",
            ErrorKind::MalformedStatusCode => "Malformed status code",
            ErrorKind::TooManyHeaderFields => "Too many header fields",
        }
    }
}
