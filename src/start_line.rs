use std::fmt;

use crate::{DecodeOptions, Result};

/// The first line of an HTTP message.
///
/// `Display` renders the line including its trailing CRLF.
pub trait StartLine: Default + fmt::Display {
    /// Parses the start-line at the head of `buf`, and returns it with the rest of `buf`.
    fn parse_start_line<'a>(buf: &'a str, options: &DecodeOptions) -> Result<(Self, &'a str)>;
}
