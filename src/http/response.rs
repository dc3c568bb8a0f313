/// HTTP status codes produced by the server.
///
/// - `Ok` (200): File served successfully
/// - `BadRequest` (400): Malformed request line
/// - `Forbidden` (403): Path contains a traversal sequence
/// - `NotFound` (404): File absent or unreadable
/// - `InternalServerError` (500): Unclassified internal failure
/// - `NotImplemented` (501): Any method other than GET
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 403 Forbidden
    Forbidden,
    /// 404 Not Found
    NotFound,
    /// 500 Internal Server Error
    InternalServerError,
    /// 501 Not Implemented
    NotImplemented,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use staticd::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::Forbidden => 403,
            StatusCode::NotFound => 404,
            StatusCode::InternalServerError => 500,
            StatusCode::NotImplemented => 501,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use staticd::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
            StatusCode::InternalServerError => "Internal Server Error",
            StatusCode::NotImplemented => "Not Implemented",
        }
    }
}

/// A fully buffered HTTP response.
///
/// Used for generated pages (error responses). File bodies are never
/// buffered like this; they are streamed by the file server through the
/// writer in fixed-size chunks.
#[derive(Debug)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// Value of the Content-Type header
    pub content_type: &'static str,
    /// Response body as bytes
    pub body: Vec<u8>,
}

impl Response {
    /// Builds the self-describing HTML error page for a status code.
    ///
    /// The reason phrase is used as both status text and body content. The
    /// body is not escaped: phrases are fixed literals chosen by the server
    /// and must never incorporate request data.
    pub fn error_page(status: StatusCode) -> Self {
        let phrase = status.reason_phrase();
        let body = format!(
            "<html><body><h1>{} {}</h1><p>{}</p></body></html>",
            status.as_u16(),
            phrase,
            phrase
        );

        Self {
            status,
            content_type: "text/html",
            body: body.into_bytes(),
        }
    }
}
