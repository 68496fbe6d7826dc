use std::fmt;

/// What the submission service answered on success
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitReceipt {
    /// Server-side task name, e.g. `170405_101010:user_crab_TT`
    pub task_name: Option<String>,
    /// Local project directory created by the client
    pub project_dir: Option<String>,
}

/// A submission rejected at the HTTP level by the submission server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpFailure {
    pub status: Option<u16>,
    pub reason: Option<String>,
    /// Response headers, in the order the server sent them
    pub headers: Vec<(String, String)>,
}

impl HttpFailure {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for HttpFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.status, self.reason.as_deref()) {
            (Some(status), Some(reason)) => write!(f, "HTTP {status} {reason}"),
            (Some(status), None) => write!(f, "HTTP {status}"),
            (None, Some(reason)) => write!(f, "HTTP error: {reason}"),
            (None, None) => f.write_str("HTTP error"),
        }
    }
}
