use bytecodec::bytes::{BytesEncoder, RemainingBytesDecoder};
use bytecodec::{self, ByteCount, Decode, Encode, Eos, SizedEncode};
use std::fmt;
use std::marker::PhantomData;
use std::str;
use trackable::error::ErrorKindExt;
use tracing::trace;

use crate::start_line::StartLine;
use crate::{DecodeOptions, HeaderFields, Result};

/// HTTP message made of a start-line, a header and a body.
///
/// `Request` and `Response` are the two instantiations of this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message<S> {
    start_line: S,
    header: HeaderFields,
    body: String,
}
impl<S: StartLine> Message<S> {
    /// Makes a new `Message` instance with the given start-line and the default header limit.
    pub fn with_start_line(start_line: S) -> Self {
        Message {
            start_line,
            header: HeaderFields::new(DecodeOptions::DEFAULT_MAX_HEADER_FIELDS),
            body: String::new(),
        }
    }

    /// Parses a complete message from `buf`.
    pub fn parse(buf: &str) -> Result<Self> {
        track!(Self::parse_with_options(buf, &DecodeOptions::default()))
    }

    /// Parses a complete message from `buf` with the given options.
    ///
    /// The start-line is followed by header lines up to an empty line;
    /// everything after the empty line is the body.
    pub fn parse_with_options(buf: &str, options: &DecodeOptions) -> Result<Self> {
        let (start_line, rest) = track!(S::parse_start_line(buf, options))?;
        let mut header = HeaderFields::new(options.max_header_fields);
        let body = track!(header.add_lines(rest))?;
        trace!(
            header_fields = header.len(),
            body_size = body.len(),
            "parsed a message"
        );
        Ok(Message {
            start_line,
            header,
            body: body.to_owned(),
        })
    }

    /// Returns a reference to the start-line of the message.
    pub fn start_line(&self) -> &S {
        &self.start_line
    }

    /// Returns a mutable reference to the start-line of the message.
    pub fn start_line_mut(&mut self) -> &mut S {
        &mut self.start_line
    }

    /// Returns the header of the message.
    pub fn header(&self) -> &HeaderFields {
        &self.header
    }

    /// Returns the mutable header of the message.
    pub fn header_mut(&mut self) -> &mut HeaderFields {
        &mut self.header
    }

    /// Appends a header field.
    ///
    /// # Errors
    ///
    /// Fails with `ErrorKind::TooManyHeaderFields` if the header is full.
    pub fn add_header<N, V>(&mut self, name: N, value: V) -> Result<&mut Self>
    where
        N: Into<String>,
        V: Into<String>,
    {
        track!(self.header.add(name, value))?;
        Ok(self)
    }

    /// Parses a block of header lines and appends the fields.
    ///
    /// Text after the terminating empty line, if any, is ignored.
    pub fn add_headers(&mut self, text: &str) -> Result<&mut Self> {
        track!(self.header.add_lines(text))?;
        Ok(self)
    }

    /// Returns the body of the message.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Appends `data` to the body.
    pub fn add_body(&mut self, data: &str) -> &mut Self {
        self.body.push_str(data);
        self
    }

    /// Replaces the body.
    pub fn set_body<T: Into<String>>(&mut self, body: T) -> &mut Self {
        self.body = body.into();
        self
    }

    /// Removes the body.
    pub fn clear_body(&mut self) -> &mut Self {
        self.body.clear();
        self
    }

    /// Resets the message as if it was now default constructed.
    ///
    /// The header limit is kept.
    pub fn reset(&mut self) -> &mut Self {
        self.start_line = S::default();
        self.header.clear();
        self.body.clear();
        self
    }

    /// Takes ownership of the message, and returns its body.
    pub fn into_body(self) -> String {
        self.body
    }
}
impl<S: StartLine> Default for Message<S> {
    fn default() -> Self {
        Self::with_start_line(S::default())
    }
}
impl<S: StartLine> fmt::Display for Message<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.start_line)?;
        write!(f, "{}", self.header)?;
        write!(f, "\r\n")?;
        write!(f, "{}", self.body)?;
        Ok(())
    }
}

/// Decoder for a single, already delimited, HTTP message.
///
/// The input is buffered until the end of the stream is reached,
/// and then parsed as UTF-8 text.
#[derive(Debug)]
pub struct MessageDecoder<S> {
    bytes: RemainingBytesDecoder,
    options: DecodeOptions,
    _start_line: PhantomData<S>,
}
impl<S: StartLine> MessageDecoder<S> {
    /// Makes a new `MessageDecoder` instance.
    pub fn new() -> Self {
        Self::with_options(DecodeOptions::default())
    }

    /// Makes a new `MessageDecoder` instance with the given options.
    pub fn with_options(options: DecodeOptions) -> Self {
        MessageDecoder {
            bytes: RemainingBytesDecoder::default(),
            options,
            _start_line: PhantomData,
        }
    }
}
impl<S: StartLine> Decode for MessageDecoder<S> {
    type Item = Message<S>;

    fn decode(&mut self, buf: &[u8], eos: Eos) -> bytecodec::Result<usize> {
        track!(self.bytes.decode(buf, eos))
    }

    fn finish_decoding(&mut self) -> bytecodec::Result<Self::Item> {
        let bytes = track!(self.bytes.finish_decoding())?;
        let text = track!(str::from_utf8(&bytes).map_err(into_invalid_input))?;
        let message = track!(Message::parse_with_options(text, &self.options)
            .map_err(into_invalid_input))?;
        Ok(message)
    }

    fn requiring_bytes(&self) -> ByteCount {
        self.bytes.requiring_bytes()
    }

    fn is_idle(&self) -> bool {
        self.bytes.is_idle()
    }
}
impl<S: StartLine> Default for MessageDecoder<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Encoder which renders an HTTP message into its wire format.
#[derive(Debug)]
pub struct MessageEncoder<S> {
    bytes: BytesEncoder<Vec<u8>>,
    _start_line: PhantomData<S>,
}
impl<S: StartLine> MessageEncoder<S> {
    /// Makes a new `MessageEncoder` instance.
    pub fn new() -> Self {
        MessageEncoder {
            bytes: BytesEncoder::default(),
            _start_line: PhantomData,
        }
    }
}
impl<S: StartLine> Encode for MessageEncoder<S> {
    type Item = Message<S>;

    fn encode(&mut self, buf: &mut [u8], eos: Eos) -> bytecodec::Result<usize> {
        track!(self.bytes.encode(buf, eos))
    }

    fn start_encoding(&mut self, item: Self::Item) -> bytecodec::Result<()> {
        track!(self.bytes.start_encoding(item.to_string().into_bytes()))
    }

    fn requiring_bytes(&self) -> ByteCount {
        self.bytes.requiring_bytes()
    }

    fn is_idle(&self) -> bool {
        self.bytes.is_idle()
    }
}
impl<S: StartLine> SizedEncode for MessageEncoder<S> {
    fn exact_requiring_bytes(&self) -> u64 {
        self.bytes.exact_requiring_bytes()
    }
}
impl<S: StartLine> Default for MessageEncoder<S> {
    fn default() -> Self {
        Self::new()
    }
}

fn into_invalid_input<E>(e: E) -> bytecodec::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    bytecodec::ErrorKind::InvalidInput.cause(e).into()
}
