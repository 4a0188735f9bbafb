/*!
HTTP methods understood by the argument builder.

GET and HEAD never produce `--request`: curl issues GET by default and HEAD
is requested through the dedicated `--head` flag.
*/

use std::fmt;

/// Request method for a single curl invocation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Method {
    Get,
    Head,
    Post,
    // No subcommand issues these yet; the builder accepts them.
    #[allow(dead_code)]
    Put,
    #[allow(dead_code)]
    Patch,
    #[allow(dead_code)]
    Delete,
    #[allow(dead_code)]
    Options,
}

impl Method {
    /// Upper-case token as curl expects it after `--request`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
            Method::Options => "OPTIONS",
        }
    }

    /// Whether `--request <METHOD>` must be emitted for this method.
    pub fn needs_request_flag(&self) -> bool {
        !matches!(self, Method::Get | Method::Head)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/* --------------------------------- Tests ---------------------------------- */
