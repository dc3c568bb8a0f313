/// Maximum accepted length of the method token, in bytes.
pub const MAX_METHOD_LEN: usize = 15;
/// Maximum accepted length of the path token, in bytes.
pub const MAX_PATH_LEN: usize = 255;
/// Maximum accepted length of the version token, in bytes.
pub const MAX_VERSION_LEN: usize = 15;

/// A parsed HTTP request line.
///
/// Holds only the three request-line tokens. Header lines after the request
/// line are read off the socket but never interpreted, and request bodies
/// are unsupported, so nothing else is retained.
///
/// Invariant: all three fields are non-empty and within their maximum
/// lengths; the parser rejects anything else before a `Request` is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method token, e.g. "GET". Kept verbatim; unsupported
    /// methods are answered with 501 by the connection handler.
    pub method: String,
    /// The request path, e.g. "/index.html".
    pub path: String,
    /// HTTP version token, typically "HTTP/1.1".
    pub version: String,
}

impl Request {
    /// Whether this request uses the one method the server actually serves.
    pub fn is_get(&self) -> bool {
        self.method == "GET"
    }
}
