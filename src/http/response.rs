/// HTTP status codes the server can answer with.
///
/// - `Ok` (200): file found and served
/// - `NotFound` (404): no file at the requested path
/// - `MethodNotAllowed` (405): request was not a GET
/// - `InternalServerError` (500): forced for `/error.html`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
    /// 500 Internal Server Error
    InternalServerError,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
            StatusCode::InternalServerError => 500,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }

    /// The status portion of the response line, e.g. `200 OK`.
    pub fn status_line(&self) -> String {
        format!("{} {}", self.as_u16(), self.reason_phrase())
    }
}

/// The protocol version named in every status line.
pub const HTTP_VERSION: &str = "HTTP/1.1";

/// A complete response: a status and a body, nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// The fixed response for any non-GET request.
    pub fn method_not_allowed() -> Self {
        Self::new(
            StatusCode::MethodNotAllowed,
            "<h1>405 Method Not Allowed</h1>",
        )
    }

    /// Serializes the wire format: `HTTP/1.1 <status>\n\n<body>`.
    ///
    /// The separator is a bare `\n\n` and there are no headers; this is the
    /// original wire format, kept as-is rather than corrected to CRLF
    /// framing.
    pub fn to_bytes(&self) -> Vec<u8> {
        let status_line = self.status.status_line();

        let mut buf =
            Vec::with_capacity(HTTP_VERSION.len() + 1 + status_line.len() + 2 + self.body.len());
        buf.extend_from_slice(HTTP_VERSION.as_bytes());
        buf.push(b' ');
        buf.extend_from_slice(status_line.as_bytes());
        buf.extend_from_slice(b"\n\n");
        buf.extend_from_slice(&self.body);

        buf
    }
}
