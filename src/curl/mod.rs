//! curl command assembly and execution.
//!
//! builder  -> CurlBuilder (ordered argv + shell-quoted display string)
//! args     -> split_url_and_curl_args (URL vs. arguments after `--`)
//! executor -> Executor (PATH lookup, inherited stdio, exit propagation)
//! method   -> Method (which methods need `--request`)

pub mod args;
pub mod builder;
pub mod executor;
pub mod method;

pub use args::{rejoin, split_url_and_curl_args};
pub use builder::{CurlBuilder, parse_header};
pub use executor::Executor;
pub use method::Method;

/// Program name used for PATH lookup and as the display-string prefix.
pub const CURL_PROGRAM: &str = "curl";
