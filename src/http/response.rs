use bytes::Bytes;

/// HTTP status codes produced by the server.
///
/// The full set the server ever emits:
/// - `Ok` (200): request answered
/// - `BadRequest` (400): malformed request or unusable path kind
/// - `NotFound` (404): resolution, containment, or open failure
/// - `InternalServerError` (500): CGI spawn or internal I/O failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
    /// 500 Internal Server Error
    InternalServerError,
}

impl Status {
    /// Returns the numeric HTTP status code.
    pub fn as_u16(&self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::BadRequest => 400,
            Status::NotFound => 404,
            Status::InternalServerError => 500,
        }
    }

    /// Returns the fixed reason phrase for this status.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::BadRequest => "Bad Request",
            Status::NotFound => "Not Found",
            Status::InternalServerError => "Internal Server Error",
        }
    }
}

/// A response with a fully buffered body, ready to be serialized.
///
/// Headers are kept as an ordered list and written in insertion order.
/// Streamed bodies (static files, CGI output) do not go through this
/// type; see `http::writer`.
#[derive(Debug)]
pub struct Response {
    pub status: Status,
    pub headers: Vec<(String, String)>,
    pub body: Bytes,
}

/// Builder for constructing responses in a fluent style.
pub struct ResponseBuilder {
    status: Status,
    headers: Vec<(String, String)>,
    body: Bytes,
}

impl ResponseBuilder {
    pub fn new(status: Status) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Bytes::new(),
        }
    }

    /// Appends a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Builds the final Response.
    ///
    /// Adds a Content-Length header from the body size unless one was
    /// set explicitly.
    pub fn build(mut self) -> Response {
        if !self
            .headers
            .iter()
            .any(|(n, _)| n.eq_ignore_ascii_case("Content-Length"))
        {
            self.headers
                .push(("Content-Length".to_string(), self.body.len().to_string()));
        }

        Response {
            status: self.status,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Response {
    /// Creates an HTML response with the given status and body.
    pub fn html(status: Status, body: impl Into<Bytes>) -> Self {
        ResponseBuilder::new(status)
            .header("Content-Type", "text/html")
            .body(body)
            .build()
    }

    /// Creates the minimal HTML error page for a non-OK status.
    pub fn error_page(status: Status) -> Self {
        let body = format!(
            "<html><body><h1>{} {}</h1></body></html>\n",
            status.as_u16(),
            status.reason_phrase()
        );
        Self::html(status, body)
    }

    /// Retrieves the first header with the given name, case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}
