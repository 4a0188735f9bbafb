/*!
shared.rs - pieces every subcommand uses.

Focus:
  - GlobalOptions: flags accepted by every subcommand, parsed once and passed
    by reference into each handler
  - TargetArgs: `<URL> [-- <curl args>...]` positional layout
  - run_request: dry-run / show-command / execute
*/

use anyhow::Result;
use clap::Args;
use url::Url;

use crate::cmd::format::{StyleOptions, command_banner};
use crate::curl::{CurlBuilder, Executor, parse_header, rejoin, split_url_and_curl_args};
use crate::error::CurlyError;
use crate::{log_debug, log_warn};

/* ---- Global Options ---- */

/// Options shared by all subcommands.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Show curl command being executed
    #[arg(long = "show-command", global = true)]
    pub show_command: bool,

    /// Verbose output (curl --verbose)
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Silent mode (hide progress)
    #[arg(long, global = true)]
    pub silent: bool,

    /// Custom header (can be used multiple times)
    #[arg(long = "header", value_name = "HEADER", global = true)]
    pub headers: Vec<String>,

    /// User-Agent string
    #[arg(long = "user-agent", value_name = "AGENT", global = true)]
    pub user_agent: Option<String>,

    /// Follow redirects
    #[arg(long, global = true)]
    pub follow: bool,

    /// Print the curl command instead of running it
    #[arg(long = "dry-run", global = true)]
    pub dry_run: bool,
}

impl GlobalOptions {
    /// Add verbosity, redirect and header options to `builder`.
    ///
    /// User-Agent goes in before custom headers so a custom `User-Agent`
    /// header comes later on the command line.
    pub fn apply(&self, builder: &mut CurlBuilder) {
        if self.verbose {
            builder.add_flag("--verbose");
        }
        if self.silent {
            builder.add_flag("--silent");
        }
        if self.follow {
            builder.add_flag("--location");
        }
        if let Some(ua) = non_empty(&self.user_agent) {
            builder.add_header("User-Agent", ua);
        }
        for h in &self.headers {
            if let Err(e) = parse_header(h) {
                log_warn!("{e}; passing it to curl unchanged");
            }
            builder.add_raw_header(h.as_str());
        }
    }
}

/* ---- Positional Layout ---- */

/// `<URL> [-- <curl args>...]`
#[derive(Args, Debug, Clone, Default)]
pub struct TargetArgs {
    /// Target URL
    #[arg(value_name = "URL")]
    pub urls: Vec<String>,

    /// Extra arguments passed to curl after the URL
    #[arg(last = true, value_name = "CURL_ARGS")]
    pub curl_args: Vec<String>,
}

impl TargetArgs {
    /// Resolve `(url, passthrough)` with the `--` placement rules.
    pub fn split(&self) -> Result<(String, Vec<String>), CurlyError> {
        split_url_and_curl_args(&rejoin(&self.urls, &self.curl_args))
    }
}

/* ---- Execution ---- */

/// Print or run the finished request.
///
/// A real run writes nothing of its own to stderr apart from the optional
/// banner: curl owns that stream, including under `--verbose`.
pub fn run_request(builder: &CurlBuilder, global: &GlobalOptions) -> Result<()> {
    let executor = Executor::new();
    if global.dry_run {
        describe_request(builder);
        println!("{}", executor.dry_run(builder));
        return Ok(());
    }
    if global.show_command {
        let style = StyleOptions::detect();
        eprintln!("{}", command_banner(&builder.build(), &style));
    }
    executor.run(builder)
}

/// Debug notes for `--dry-run --verbose`. Never rejects a target: curl
/// accepts scheme-less hosts and guesses the protocol.
fn describe_request(builder: &CurlBuilder) {
    log_debug!(
        "{} request with {} curl arguments",
        builder.method(),
        builder.build().len()
    );
    let target = builder.url();
    match Url::parse(target) {
        Ok(url) => log_debug!(
            "target scheme={} host={}",
            url.scheme(),
            url.host_str().unwrap_or("-")
        ),
        Err(e) => log_debug!("target '{target}' is not an absolute URL ({e}); curl will guess"),
    }
}

/// Treat empty option values as absent.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/* ---- Tests ---- */
