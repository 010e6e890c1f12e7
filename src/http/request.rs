use std::path::PathBuf;

/// A parsed HTTP/1.0 request.
///
/// `uri` and `query` come from splitting the request target at the first
/// `?`; the query is the empty string when there is none. Headers keep
/// their wire order and duplicates are retained rather than merged.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method token, verbatim (e.g. "GET")
    pub method: String,
    /// The raw path component of the request target, without the query
    pub uri: String,
    /// Everything after the first `?` in the target, or ""
    pub query: String,
    /// Headers as (name, value) pairs in wire order
    pub headers: Vec<(String, String)>,
    /// Canonical filesystem path, set during dispatch
    pub resolved_path: Option<PathBuf>,
}

impl Request {
    /// Retrieves the first header with the given name, case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}
