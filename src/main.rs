use anyhow::Result;
use clap::{Parser, Subcommand};

mod cmd;
mod curl;
mod error;
mod utils;

use cmd::format::{StyleOptions, error_line};
use cmd::{BasicAuthArgs, GetArgs, GlobalOptions, HeadersArgs, PostArgs};
use error::CurlyError;

/// curly - a curl wrapper for common use cases
///
/// Command layout:
///   curly get        <url> [--output PATH]              [-- <curl args>...]
///   curly headers    <url>                              [-- <curl args>...]
///   curly post       <url> [--json T | --data T | --file @P] [-- <curl args>...]
///   curly basic-auth <url> --user USER:PASS [--data T]  [-- <curl args>...]
///
/// Global flags:
///   --show-command   Print the curl command (stderr) before running it
///   --dry-run        Print the curl command (stdout) and exit
///   --verbose / --silent / --follow / --user-agent / --header (repeatable)
///
/// Exit status is 0 on success and 1 on any failure, including curl's own.
#[derive(Parser, Debug)]
#[command(
    name = "curly",
    version,
    about = "A curl wrapper for common use cases",
    long_about = "curly is a curl wrapper that simplifies common HTTP operations.\n\
                  It provides an intuitive interface for sending requests, handling authentication,\n\
                  and managing responses.",
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(flatten)]
    global: GlobalOptions,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send GET request
    ///
    /// Send GET request and optionally save the response to a file.
    /// You can pass additional curl options after '--'.
    #[command(after_help = cmd::get::EXAMPLES)]
    Get(GetArgs),

    /// Get response headers only
    ///
    /// Send HEAD request to get response headers only.
    /// This is useful for checking server configuration, content type,
    /// or redirect locations without downloading the body.
    /// Additional curl options can be passed after '--'.
    #[command(after_help = cmd::headers::EXAMPLES)]
    Headers(HeadersArgs),

    /// Send POST request
    ///
    /// Send POST request with various data formats.
    /// You can send JSON data, form data, or data from a file.
    #[command(after_help = cmd::post::EXAMPLES)]
    Post(PostArgs),

    /// Send request with basic authentication
    ///
    /// Send request with HTTP Basic Authentication.
    /// The username and password should be provided in the format username:password.
    #[command(name = "basic-auth", after_help = cmd::basic_auth::EXAMPLES)]
    BasicAuth(BasicAuthArgs),
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help / --version print to stdout and succeed; every real
            // parse failure exits 1 like any other curly error.
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    let level = utils::derive_level(cli.global.verbose, cli.global.silent);
    utils::init_logging(level);

    if let Err(err) = run(cli) {
        report(&err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let global = &cli.global;
    match cli.command {
        Commands::Get(args) => cmd::execute_get(args, global),
        Commands::Headers(args) => cmd::execute_headers(args, global),
        Commands::Post(args) => cmd::execute_post(args, global),
        Commands::BasicAuth(args) => cmd::execute_basic_auth(args, global),
    }
}

/// curl failures were already reported by curl itself and add nothing, even
/// under `--verbose`; everything else gets an `Error:` line with its causes.
fn report(err: &anyhow::Error) {
    if err
        .downcast_ref::<CurlyError>()
        .is_some_and(CurlyError::is_silent)
    {
        return;
    }
    eprintln!("{}", error_line(&format!("{err:#}"), &StyleOptions::detect()));
}
