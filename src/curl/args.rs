/*!
Splitting of positional arguments into the target URL and extra curl arguments.

The separator is a literal `--` token. It must sit directly after the URL;
anything else (including a second positional before it) is rejected rather
than guessed at.
*/

use crate::error::CurlyError;

/// Separator between the URL and arguments forwarded to curl.
pub const SEPARATOR: &str = "--";

/// Split `args` into `(url, passthrough)`.
///
/// - no separator: exactly one element (the URL)
/// - separator present: its first occurrence must be at index 1; everything
///   after it is passthrough (possibly empty)
pub fn split_url_and_curl_args(args: &[String]) -> Result<(String, Vec<String>), CurlyError> {
    match args.iter().position(|a| a == SEPARATOR) {
        None => match args {
            [] => Err(CurlyError::UrlRequired),
            [url] => Ok((url.clone(), Vec::new())),
            _ => Err(CurlyError::ExactlyOneUrl),
        },
        Some(1) => Ok((args[0].clone(), args[2..].to_vec())),
        Some(_) => Err(CurlyError::UrlBeforeSeparator),
    }
}

/// Rebuild the raw positional list from what the command-line parser handed
/// over: positionals before `--` and the tokens after it.
pub fn rejoin(positionals: &[String], trailing: &[String]) -> Vec<String> {
    let mut raw = positionals.to_vec();
    if !trailing.is_empty() {
        raw.push(SEPARATOR.to_string());
        raw.extend(trailing.iter().cloned());
    }
    raw
}
