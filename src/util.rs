/// Horizontal whitespace skipped before a start-line.
pub fn is_line_whitespace(c: char) -> bool {
    match c {
        '\x0C' | '\t' | '\x0B' | ' ' => true,
        _ => false,
    }
}

pub fn is_whitespace(c: char) -> bool {
    match c {
        ' ' | '\t' => true,
        _ => false,
    }
}

pub fn is_digit(b: u8) -> bool {
    b'0' <= b && b <= b'9'
}

/// Splits the first line off `buf`.
///
/// Leading horizontal whitespace is skipped. The line ends at the first CRLF,
/// and the returned remainder starts right after it.
/// If `buf` has no CRLF, the whole (trimmed) buffer is the line and the remainder is empty.
pub fn split_first_line(buf: &str) -> (&str, &str) {
    let start = buf.trim_start_matches(is_line_whitespace);
    match start.find("\r\n") {
        Some(end) => (&start[..end], &start[end + 2..]),
        None => (start, &start[start.len()..]),
    }
}

/// Splits `line` at the first space, excluding the space itself.
pub fn split_first_space(line: &str) -> Option<(&str, &str)> {
    line.find(' ').map(|i| (&line[..i], &line[i + 1..]))
}

/// Splits `line` at the last space, excluding the space itself.
pub fn split_last_space(line: &str) -> Option<(&str, &str)> {
    line.rfind(' ').map(|i| (&line[..i], &line[i + 1..]))
}

/// Parses a non-empty run of decimal digits.
pub fn parse_decimal<T: std::str::FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || !s.bytes().all(is_digit) {
        return None;
    }
    s.parse().ok()
}

/// Looks up `name` in `name=value` pairs separated by `&`.
pub fn find_pair_value<'a>(pairs: &'a str, name: &str) -> Option<&'a str> {
    if name.is_empty() {
        return None;
    }
    pairs.split('&').find_map(|pair| {
        let mut kv = pair.splitn(2, '=');
        let key = kv.next()?;
        let value = kv.next()?;
        if key == name {
            Some(value)
        } else {
            None
        }
    })
}
