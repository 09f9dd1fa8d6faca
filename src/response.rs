use crate::message::{Message, MessageDecoder, MessageEncoder};
use crate::{HttpVersion, StatusCode, StatusLine};

/// HTTP response message.
pub type Response = Message<StatusLine>;

/// HTTP response decoder.
pub type ResponseDecoder = MessageDecoder<StatusLine>;

/// HTTP response encoder.
pub type ResponseEncoder = MessageEncoder<StatusLine>;

impl Message<StatusLine> {
    /// Makes a new `Response` instance with the given status-line components.
    pub fn new(code: StatusCode, version: HttpVersion) -> Self {
        Message::with_start_line(StatusLine::new(version, code))
    }

    /// Returns the status code of the response.
    pub fn status_code(&self) -> StatusCode {
        self.start_line().code()
    }

    /// Sets the status code of the response.
    pub fn set_status_code(&mut self, code: StatusCode) -> &mut Self {
        self.start_line_mut().set_code(code);
        self
    }

    /// Returns the HTTP version of the response.
    pub fn version(&self) -> HttpVersion {
        self.start_line().version()
    }

    /// Sets the HTTP version of the response.
    pub fn set_version(&mut self, version: HttpVersion) -> &mut Self {
        self.start_line_mut().set_version(version);
        self
    }
}
