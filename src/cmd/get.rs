/*!
`get.rs`

Implements the `get` subcommand: a plain GET request, optionally saving the
response body with `--output`. Extra curl options go after `--`.
*/

use anyhow::Result;
use clap::Args;

use crate::cmd::shared::{GlobalOptions, TargetArgs, non_empty, run_request};
use crate::curl::{CurlBuilder, Method};

pub const EXAMPLES: &str = "\
Examples:
  curly get https://example.com
  curly get https://example.com --output output.html
  curly get https://example.com/file.pdf --output file.pdf
  curly get https://example.com -- --include
  curly get https://example.com -- --include --location --max-time 30";

#[derive(Args, Debug)]
pub struct GetArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Save output to file
    #[arg(long, value_name = "PATH")]
    pub output: Option<String>,
}

pub fn execute_get(args: GetArgs, global: &GlobalOptions) -> Result<()> {
    let builder = build_request(&args, global)?;
    run_request(&builder, global)
}

fn build_request(args: &GetArgs, global: &GlobalOptions) -> Result<CurlBuilder> {
    let (url, curl_args) = args.target.split()?;

    let mut builder = CurlBuilder::new(Method::Get, url);
    global.apply(&mut builder);
    if let Some(path) = non_empty(&args.output) {
        builder.add_output(path);
    }
    builder.add_curl_args(curl_args);
    Ok(builder)
}
