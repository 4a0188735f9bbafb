/*!
`post.rs`

Implements the `post` subcommand. The body comes from exactly one of:
  --json <text>   sent with `Content-Type: application/json`
  --data <text>   sent as-is (form encoded by the caller)
  --file @<path>  read by curl from the file

The three are mutually exclusive; clap rejects combinations before any
request is assembled.
*/

use anyhow::Result;
use clap::Args;

use crate::cmd::shared::{GlobalOptions, TargetArgs, non_empty, run_request};
use crate::curl::{CurlBuilder, Method};
use crate::error::CurlyError;
use crate::log_warn;

pub const EXAMPLES: &str = "\
Examples:
  curly post https://api.example.com --json '{\"key\":\"value\"}'
  curly post https://api.example.com --data \"name=john&age=30\"
  curly post https://api.example.com --file @data.json";

#[derive(Args, Debug)]
pub struct PostArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// JSON data to send
    #[arg(long, value_name = "JSON", conflicts_with_all = ["data", "file"])]
    pub json: Option<String>,

    /// Form data to send
    #[arg(long, value_name = "DATA", conflicts_with = "file")]
    pub data: Option<String>,

    /// Read data from file (use @filename)
    #[arg(long, value_name = "@FILE")]
    pub file: Option<String>,
}

pub fn execute_post(args: PostArgs, global: &GlobalOptions) -> Result<()> {
    let builder = build_request(&args, global)?;
    run_request(&builder, global)
}

fn build_request(args: &PostArgs, global: &GlobalOptions) -> Result<CurlBuilder> {
    let (url, curl_args) = args.target.split()?;

    let file = non_empty(&args.file);
    if let Some(reference) = file
        && !reference.starts_with('@')
    {
        return Err(CurlyError::FileReferenceWithoutAt.into());
    }

    let mut builder = CurlBuilder::new(Method::Post, url);
    global.apply(&mut builder);

    if let Some(json) = non_empty(&args.json) {
        check_json(json);
        builder.add_header("Content-Type", "application/json");
        builder.add_data(json);
    } else if let Some(data) = non_empty(&args.data) {
        builder.add_data(data);
    } else if let Some(reference) = file {
        builder.add_data_file(reference);
    }

    builder.add_curl_args(curl_args);
    Ok(builder)
}

/// Warn about a `--json` payload that will not parse. It is still sent.
/// `@file` references are left to curl.
fn check_json(payload: &str) {
    if payload.starts_with('@') {
        return;
    }
    if let Err(e) = serde_json::from_str::<serde_json::Value>(payload) {
        log_warn!("--json payload is not valid JSON ({e}); sending it unchanged");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    fn post_args(json: Option<&str>, data: Option<&str>, file: Option<&str>) -> PostArgs {
        PostArgs {
            target: TargetArgs {
                urls: strings(&["https://api.e.com"]),
                curl_args: Vec::new(),
            },
            json: json.map(str::to_string),
            data: data.map(str::to_string),
            file: file.map(str::to_string),
        }
    }

    #[test]
    fn json_sets_content_type_after_custom_headers() {
        let global = GlobalOptions {
            headers: strings(&["X-Req: 7"]),
            ..Default::default()
        };
        let b = build_request(&post_args(Some(r#"{"k":"v"}"#), None, None), &global).unwrap();
        assert_eq!(
            b.build(),
            strings(&[
                "--request",
                "POST",
                "--data",
                r#"{"k":"v"}"#,
                "--header",
                "X-Req: 7",
                "--header",
                "Content-Type: application/json",
                "https://api.e.com",
            ])
        );
    }

    #[test]
    fn form_data() {
        let b = build_request(
            &post_args(None, Some("name=john&age=30"), None),
            &GlobalOptions::default(),
        )
        .unwrap();
        assert_eq!(
            b.build(),
            strings(&[
                "--request",
                "POST",
                "--data",
                "name=john&age=30",
                "https://api.e.com",
            ])
        );
    }

    #[test]
    fn file_reference() {
        let b = build_request(
            &post_args(None, None, Some("@data.json")),
            &GlobalOptions::default(),
        )
        .unwrap();
        assert_eq!(
            b.build(),
            strings(&["--request", "POST", "--data", "@data.json", "https://api.e.com"])
        );
    }

    #[test]
    fn file_without_at_rejected() {
        let err = build_request(
            &post_args(None, None, Some("data.json")),
            &GlobalOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "file parameter should start with @");
    }

    #[test]
    fn no_body_still_posts() {
        let b = build_request(&post_args(None, None, None), &GlobalOptions::default()).unwrap();
        assert_eq!(
            b.build(),
            strings(&["--request", "POST", "https://api.e.com"])
        );
    }

    #[test]
    fn empty_values_count_as_absent() {
        let b = build_request(
            &post_args(Some(""), Some("a=1"), None),
            &GlobalOptions::default(),
        )
        .unwrap();
        assert_eq!(
            b.build(),
            strings(&["--request", "POST", "--data", "a=1", "https://api.e.com"])
        );
    }

    #[test]
    fn invalid_json_is_still_sent() {
        let b = build_request(
            &post_args(Some("{not json"), None, None),
            &GlobalOptions::default(),
        )
        .unwrap();
        assert!(b.build().contains(&"{not json".to_string()));
    }
}
