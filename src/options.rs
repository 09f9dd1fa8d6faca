/// Options for start-line and message parsers.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
    /// The minimum number of bytes a buffer must have to be parsed as a request.
    ///
    /// Shorter buffers leave the request-line at its default value (`GET / HTTP/1.1`)
    /// and are not consumed.
    pub min_request_line_size: usize,

    /// The maximum number of fields allowed in a header part.
    pub max_header_fields: usize,
}
impl DecodeOptions {
    /// The default value of `min_request_line_size` field.
    pub const DEFAULT_MIN_REQUEST_LINE_SIZE: usize = 16;

    /// The default value of `max_header_fields` field.
    pub const DEFAULT_MAX_HEADER_FIELDS: usize = 100;
}
impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            min_request_line_size: Self::DEFAULT_MIN_REQUEST_LINE_SIZE,
            max_header_fields: Self::DEFAULT_MAX_HEADER_FIELDS,
        }
    }
}
