use crate::http::request::{MAX_METHOD_LEN, MAX_PATH_LEN, MAX_VERSION_LEN, Request};

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The request line is empty, not UTF-8, or does not split into
    /// exactly three whitespace-separated tokens.
    InvalidRequestLine,
    /// A token exceeds its fixed maximum length. Over-length tokens are
    /// rejected outright rather than truncated.
    TokenTooLong,
}

/// Parses the request line out of the raw bytes received on a connection.
///
/// Only the first line (up to the first `\r` or `\n`, or the whole buffer
/// if none) is consumed; any header lines that follow are intentionally
/// ignored. No percent-decoding or query-string splitting is performed.
pub fn parse_request_line(buf: &[u8]) -> Result<Request, ParseError> {
    let line_end = buf
        .iter()
        .position(|&b| b == b'\r' || b == b'\n')
        .unwrap_or(buf.len());

    let line = std::str::from_utf8(&buf[..line_end])
        .map_err(|_| ParseError::InvalidRequestLine)?;

    let mut tokens = line.split_whitespace();

    let method = tokens.next().ok_or(ParseError::InvalidRequestLine)?;
    let path = tokens.next().ok_or(ParseError::InvalidRequestLine)?;
    let version = tokens.next().ok_or(ParseError::InvalidRequestLine)?;

    // Exactly three tokens; trailing garbage is a malformed request.
    if tokens.next().is_some() {
        return Err(ParseError::InvalidRequestLine);
    }

    if method.len() > MAX_METHOD_LEN
        || path.len() > MAX_PATH_LEN
        || version.len() > MAX_VERSION_LEN
    {
        return Err(ParseError::TokenTooLong);
    }

    Ok(Request {
        method: method.to_string(),
        path: path.to_string(),
        version: version.to_string(),
    })
}
