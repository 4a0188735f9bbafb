/*!
`basic_auth.rs`

Implements the `basic-auth` subcommand: HTTP Basic Authentication via
`--user user:pass`. Supplying `--data` turns the request into a POST.
*/

use anyhow::Result;
use clap::Args;

use crate::cmd::shared::{GlobalOptions, TargetArgs, non_empty, run_request};
use crate::curl::{CurlBuilder, Method};
use crate::error::CurlyError;

pub const EXAMPLES: &str = "\
Examples:
  curly basic-auth https://api.example.com --user admin:password
  curly basic-auth https://api.example.com --user admin:password --data \"key=value\"";

#[derive(Args, Debug)]
pub struct BasicAuthArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Username and password (user:pass)
    #[arg(long, value_name = "USER:PASS")]
    pub user: String,

    /// Data to send (makes it a POST request)
    #[arg(long, value_name = "DATA")]
    pub data: Option<String>,
}

pub fn execute_basic_auth(args: BasicAuthArgs, global: &GlobalOptions) -> Result<()> {
    let builder = build_request(&args, global)?;
    run_request(&builder, global)
}

fn build_request(args: &BasicAuthArgs, global: &GlobalOptions) -> Result<CurlBuilder> {
    if args.user.is_empty() {
        return Err(CurlyError::MissingCredentials.into());
    }
    let (url, curl_args) = args.target.split()?;

    let data = non_empty(&args.data);
    let method = if data.is_some() {
        Method::Post
    } else {
        Method::Get
    };

    let mut builder = CurlBuilder::new(method, url);
    global.apply(&mut builder);
    builder.add_basic_auth(args.user.as_str());
    if let Some(data) = data {
        builder.add_data(data);
    }
    builder.add_curl_args(curl_args);
    Ok(builder)
}
