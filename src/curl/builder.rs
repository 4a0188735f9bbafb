/*!
`builder.rs`

Accumulates everything a single curl invocation needs and renders it as an
ordered argument vector.

Output order of `CurlBuilder::build`:
  1. `--request <METHOD>` (only for methods other than GET / HEAD)
  2. flags, data, output and auth tokens in call order
  3. `--header <entry>` pairs in insertion order
  4. the URL
  5. extra curl arguments (passthrough), last so they can override defaults

`CurlBuilder::display_string` renders the same vector as a shell-quoted
line prefixed with `curl`. It is only ever printed, never executed.
*/

use std::borrow::Cow;

use anyhow::{Result, bail};

use super::CURL_PROGRAM;
use super::method::Method;

/// Characters that force single-quoting in the display string.
pub const DISPLAY_QUOTE_CHARS: &[char] = &[' ', '\t', '\n', '"', '\''];

/// Ordered accumulation of curl arguments for one request.
#[derive(Debug, Clone)]
pub struct CurlBuilder {
    method: Method,
    url: String,
    args: Vec<String>,
    headers: Vec<String>,
    curl_args: Vec<String>,
}

impl CurlBuilder {
    /// Start a request. Emits `--request <METHOD>` up front when the method needs it.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        let mut args = Vec::new();
        if method.needs_request_flag() {
            args.push("--request".to_string());
            args.push(method.as_str().to_string());
        }
        Self {
            method,
            url: url.into(),
            args,
            headers: Vec::new(),
            curl_args: Vec::new(),
        }
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Append a bare flag (e.g. `--silent`).
    pub fn add_flag(&mut self, flag: impl Into<String>) -> &mut Self {
        self.args.push(flag.into());
        self
    }

    /// Append a `key: value` header. Duplicate keys are all emitted.
    pub fn add_header(&mut self, key: &str, value: &str) -> &mut Self {
        self.headers.push(format!("{key}: {value}"));
        self
    }

    /// Append an already formatted header verbatim.
    pub fn add_raw_header(&mut self, header: impl Into<String>) -> &mut Self {
        self.headers.push(header.into());
        self
    }

    /// Inline request body (`--data <text>`).
    pub fn add_data(&mut self, data: impl Into<String>) -> &mut Self {
        self.push_pair("--data", data.into())
    }

    /// Request body read by curl from a file; `reference` keeps its leading `@`.
    pub fn add_data_file(&mut self, reference: impl Into<String>) -> &mut Self {
        self.push_pair("--data", reference.into())
    }

    pub fn add_output(&mut self, path: impl Into<String>) -> &mut Self {
        self.push_pair("--output", path.into())
    }

    /// Credentials in `user:pass` form. Not validated here.
    pub fn add_basic_auth(&mut self, user_pass: impl Into<String>) -> &mut Self {
        self.push_pair("--user", user_pass.into())
    }

    /// Raw tokens forwarded to curl after the URL.
    pub fn add_curl_args<I, S>(&mut self, extra: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.curl_args.extend(extra.into_iter().map(Into::into));
        self
    }

    fn push_pair(&mut self, flag: &str, value: String) -> &mut Self {
        self.args.push(flag.to_string());
        self.args.push(value);
        self
    }

    /// Final argument vector (without the program name).
    pub fn build(&self) -> Vec<String> {
        let mut out =
            Vec::with_capacity(self.args.len() + self.headers.len() * 2 + 1 + self.curl_args.len());
        out.extend(self.args.iter().cloned());
        for h in &self.headers {
            out.push("--header".to_string());
            out.push(h.clone());
        }
        out.push(self.url.clone());
        out.extend(self.curl_args.iter().cloned());
        out
    }

    /// Shell-quoted rendering of `build()`, prefixed with the curl program name.
    pub fn display_string(&self) -> String {
        render_command(CURL_PROGRAM, &self.build(), DISPLAY_QUOTE_CHARS)
    }
}

/// Join `program` and `args` into a single line, quoting every token that
/// contains one of `triggers`.
pub fn render_command(program: &str, args: &[String], triggers: &[char]) -> String {
    let mut line = String::from(program);
    for arg in args {
        line.push(' ');
        line.push_str(&quote_arg(arg, triggers));
    }
    line
}

/// Single-quote a token for display when it contains one of `triggers`.
/// Embedded single quotes become `'"'"'`.
pub fn quote_arg<'a>(arg: &'a str, triggers: &[char]) -> Cow<'a, str> {
    if arg.is_empty() {
        return Cow::Borrowed("''");
    }
    if !arg.contains(triggers) {
        return Cow::Borrowed(arg);
    }
    Cow::Owned(format!("'{}'", arg.replace('\'', r#"'"'"'"#)))
}

/// Split a `Key: Value` header at the first colon, trimming both halves.
pub fn parse_header(header: &str) -> Result<(String, String)> {
    let Some((key, value)) = header.split_once(':') else {
        bail!("invalid header format: {header}");
    };
    Ok((key.trim().to_string(), value.trim().to_string()))
}

/* -------------------------------------------------------------------------- */
/* Tests                                                                      */
/* -------------------------------------------------------------------------- */
#[cfg(test)]
mod tests {
    use super::*;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn get_has_no_request_flag() {
        let b = CurlBuilder::new(Method::Get, "https://e.com");
        assert_eq!(b.build(), strings(&["https://e.com"]));
    }

    #[test]
    fn head_has_no_request_flag() {
        let mut b = CurlBuilder::new(Method::Head, "https://e.com");
        b.add_flag("--head");
        assert_eq!(b.build(), strings(&["--head", "https://e.com"]));
    }

    #[test]
    fn other_methods_lead_with_request_flag() {
        for m in [Method::Post, Method::Put, Method::Patch, Method::Delete, Method::Options] {
            let b = CurlBuilder::new(m, "https://e.com");
            let args = b.build();
            assert_eq!(&args[..2], &["--request".to_string(), m.to_string()]);
            assert_eq!(args.iter().filter(|a| *a == "--request").count(), 1);
        }
    }

    #[test]
    fn full_ordering() {
        let mut b = CurlBuilder::new(Method::Post, "https://e.com/api");
        b.add_flag("--verbose")
            .add_header("User-Agent", "x")
            .add_raw_header("X-Trace: 1")
            .add_data("a=1")
            .add_curl_args(["--include", "--max-time", "30"])
            .add_output("out.txt")
            .add_basic_auth("admin:secret");
        assert_eq!(
            b.build(),
            strings(&[
                "--request",
                "POST",
                "--verbose",
                "--data",
                "a=1",
                "--output",
                "out.txt",
                "--user",
                "admin:secret",
                "--header",
                "User-Agent: x",
                "--header",
                "X-Trace: 1",
                "https://e.com/api",
                "--include",
                "--max-time",
                "30",
            ])
        );
    }

    #[test]
    fn user_agent_header_emitted_once_before_url() {
        let mut b = CurlBuilder::new(Method::Get, "https://e.com");
        b.add_flag("--silent").add_header("User-Agent", "x");
        let args = b.build();
        let positions: Vec<usize> = args
            .iter()
            .enumerate()
            .filter(|(_, a)| *a == "User-Agent: x")
            .map(|(i, _)| i)
            .collect();
        assert_eq!(positions.len(), 1);
        let idx = positions[0];
        assert_eq!(args[idx - 1], "--header");
        let url_idx = args.iter().position(|a| a == "https://e.com").unwrap();
        let silent_idx = args.iter().position(|a| a == "--silent").unwrap();
        assert!(silent_idx < idx - 1 && idx < url_idx);
    }

    #[test]
    fn duplicate_headers_keep_insertion_order() {
        let mut b = CurlBuilder::new(Method::Get, "u");
        b.add_header("Accept", "text/html")
            .add_header("Accept", "application/json");
        assert_eq!(
            b.build(),
            strings(&[
                "--header",
                "Accept: text/html",
                "--header",
                "Accept: application/json",
                "u",
            ])
        );
    }

    #[test]
    fn data_file_keeps_reference() {
        let mut b = CurlBuilder::new(Method::Post, "u");
        b.add_data_file("@body.json");
        assert_eq!(
            b.build(),
            strings(&["--request", "POST", "--data", "@body.json", "u"])
        );
    }

    #[test]
    fn passthrough_after_url_even_when_added_first() {
        let mut b = CurlBuilder::new(Method::Get, "u");
        b.add_curl_args(["--include"]).add_flag("--location");
        assert_eq!(b.build(), strings(&["--location", "u", "--include"]));
    }

    #[test]
    fn display_quotes_spaces() {
        let mut b = CurlBuilder::new(Method::Get, "https://e.com");
        b.add_raw_header("key: value with space");
        assert_eq!(
            b.display_string(),
            "curl --header 'key: value with space' https://e.com"
        );
    }

    #[test]
    fn display_escapes_single_quotes() {
        assert_eq!(quote_arg("it's", DISPLAY_QUOTE_CHARS), r#"'it'"'"'s'"#);
    }

    #[test]
    fn display_leaves_plain_tokens_alone() {
        assert_eq!(quote_arg("--silent", DISPLAY_QUOTE_CHARS), "--silent");
        assert_eq!(
            quote_arg("https://e.com/a?b=c&d=e", DISPLAY_QUOTE_CHARS),
            "https://e.com/a?b=c&d=e"
        );
    }

    #[test]
    fn display_leaves_globs_and_braces_alone() {
        let b = CurlBuilder::new(Method::Get, "https://e.com/[1-3]");
        assert_eq!(b.display_string(), "curl https://e.com/[1-3]");

        let mut b = CurlBuilder::new(Method::Post, "u");
        b.add_data("{a}");
        assert_eq!(b.display_string(), "curl --request POST --data {a} u");
    }

    #[test]
    fn display_quotes_json_with_quotes() {
        assert_eq!(
            quote_arg(r#"{"k":"v"}"#, DISPLAY_QUOTE_CHARS),
            r#"'{"k":"v"}'"#
        );
        assert_eq!(quote_arg("", DISPLAY_QUOTE_CHARS), "''");
    }

    #[test]
    fn wider_trigger_set_quotes_brackets() {
        let triggers = &['[', ']', ' '];
        assert_eq!(
            render_command("curl", &strings(&["https://e.com/[1-3]", "-s"]), triggers),
            "curl 'https://e.com/[1-3]' -s"
        );
    }

    #[test]
    fn display_round_trips_through_shell_split() {
        let mut b = CurlBuilder::new(Method::Post, "https://e.com");
        b.add_header("User-Agent", "my agent/1.0")
            .add_data(r#"{"name":"O'Brien"}"#)
            .add_curl_args(["--max-time", "5"]);
        let parsed = shell_words::split(&b.display_string()).unwrap();
        assert_eq!(parsed[0], "curl");
        assert_eq!(&parsed[1..], b.build().as_slice());
    }

    #[test]
    fn parse_header_trims() {
        let (k, v) = parse_header(" X-Api-Key :  abc ").unwrap();
        assert_eq!(k, "X-Api-Key");
        assert_eq!(v, "abc");
        let (k, v) = parse_header("Host: a:8080").unwrap();
        assert_eq!((k.as_str(), v.as_str()), ("Host", "a:8080"));
    }

    #[test]
    fn parse_header_requires_colon() {
        let err = parse_header("NoColonHere").unwrap_err();
        assert!(err.to_string().contains("invalid header format"));
    }
}
