/*!
Subcommand dispatch.

Layout:
  src/cmd/
    mod.rs         (this file)
    shared.rs      (GlobalOptions, TargetArgs, run_request)
    format.rs      (terminal banner / error lines)
    get.rs         (GetArgs        + execute_get)
    headers.rs     (HeadersArgs    + execute_headers)
    post.rs        (PostArgs       + execute_post)
    basic_auth.rs  (BasicAuthArgs  + execute_basic_auth)

Conventions:
  - Each subcommand module exposes exactly one public `execute_*` function
    taking its args plus `&GlobalOptions` and returning `anyhow::Result<()>`.
  - Request assembly stays in a private `build_request` so it can be tested
    without launching curl.
*/

pub mod basic_auth;
pub mod format;
pub mod get;
pub mod headers;
pub mod post;
pub mod shared;

pub use basic_auth::{BasicAuthArgs, execute_basic_auth};
pub use get::{GetArgs, execute_get};
pub use headers::{HeadersArgs, execute_headers};
pub use post::{PostArgs, execute_post};
pub use shared::GlobalOptions;
