/*!
`headers.rs`

Implements the `headers` subcommand: a HEAD request (`--head`) that prints
only the response headers. Extra curl options go after `--`.
*/

use anyhow::Result;
use clap::Args;

use crate::cmd::shared::{GlobalOptions, TargetArgs, run_request};
use crate::curl::{CurlBuilder, Method};

pub const EXAMPLES: &str = "\
Examples:
  curly headers https://example.com
  curly headers https://example.com --follow
  curly headers https://example.com -- --dump-header headers.txt";

#[derive(Args, Debug)]
pub struct HeadersArgs {
    #[command(flatten)]
    pub target: TargetArgs,
}

pub fn execute_headers(args: HeadersArgs, global: &GlobalOptions) -> Result<()> {
    let builder = build_request(&args, global)?;
    run_request(&builder, global)
}

fn build_request(args: &HeadersArgs, global: &GlobalOptions) -> Result<CurlBuilder> {
    let (url, curl_args) = args.target.split()?;

    let mut builder = CurlBuilder::new(Method::Head, url);
    builder.add_flag("--head");
    global.apply(&mut builder);
    builder.add_curl_args(curl_args);
    Ok(builder)
}
