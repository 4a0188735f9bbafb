/*!
format.rs

Terminal formatting for the human-facing lines curly writes to stderr:
  - the `--show-command` banner ("Executing: curl ...")
  - `Error:` lines for the wrapper's own failures

Style decisions:
  - ANSI color unless NO_COLOR is set or stderr is not a terminal
  - separator width from COLUMNS (clamped 40..=220), default 80

Functions here return strings; callers decide where to print them.
*/

use std::io::IsTerminal;

use crate::curl::CURL_PROGRAM;
use crate::curl::builder::render_command;

/// The banner also quotes glob and brace characters so a pasted command
/// survives the shell.
const BANNER_QUOTE_CHARS: &[char] = &[' ', '\t', '\n', '"', '\'', '{', '}', '[', ']'];

/* -------------------------------------------------------------------------- */
/* Style Options                                                              */
/* -------------------------------------------------------------------------- */

#[derive(Debug, Clone)]
pub struct StyleOptions {
    pub use_color: bool,
    pub term_width: usize,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self::detect()
    }
}

impl StyleOptions {
    pub fn detect() -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some();
        let use_color = !no_color && std::io::stderr().is_terminal();

        let width = std::env::var("COLUMNS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .map(|w| w.clamp(40, 220))
            .unwrap_or(80);

        StyleOptions {
            use_color,
            term_width: width,
        }
    }

    /// Plain output, fixed width. Used where output must be stable.
    #[cfg(test)]
    pub fn plain() -> Self {
        StyleOptions {
            use_color: false,
            term_width: 80,
        }
    }
}

/* -------------------------------------------------------------------------- */
/* Color                                                                      */
/* -------------------------------------------------------------------------- */

#[derive(Debug, Clone, Copy)]
pub enum Role {
    Label,
    Command,
    Error,
}

pub fn color(role: Role, text: impl AsRef<str>, style: &StyleOptions) -> String {
    if !style.use_color {
        return text.as_ref().to_string();
    }
    let code = match role {
        Role::Label => "32",   // green
        Role::Command => "36", // cyan
        Role::Error => "31",   // red
    };
    format!("\x1b[{code}m{}\x1b[0m", text.as_ref())
}

/* -------------------------------------------------------------------------- */
/* Lines                                                                      */
/* -------------------------------------------------------------------------- */

/// Two-line banner shown before curl runs: the command, then a rule.
pub fn command_banner(args: &[String], style: &StyleOptions) -> String {
    let command = render_command(CURL_PROGRAM, args, BANNER_QUOTE_CHARS);
    format!(
        "{} {}\n{}",
        color(Role::Label, "Executing:", style),
        color(Role::Command, command, style),
        "-".repeat(style.term_width)
    )
}

pub fn error_line(msg: &str, style: &StyleOptions) -> String {
    format!("{} {msg}", color(Role::Error, "Error:", style))
}

/* -------------------------------------------------------------------------- */
/* Tests                                                                      */
/* -------------------------------------------------------------------------- */
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_plain() {
        let style = StyleOptions::plain();
        let b = command_banner(&["https://e.com".to_string()], &style);
        let mut lines = b.lines();
        assert_eq!(lines.next(), Some("Executing: curl https://e.com"));
        assert_eq!(lines.next(), Some("-".repeat(80).as_str()));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn banner_quotes_globs_and_braces() {
        let style = StyleOptions::plain();
        let args = vec![
            "--data".to_string(),
            "{a}".to_string(),
            "https://e.com/[1-3]".to_string(),
        ];
        let b = command_banner(&args, &style);
        assert_eq!(
            b.lines().next(),
            Some("Executing: curl --data '{a}' 'https://e.com/[1-3]'")
        );
    }

    #[test]
    fn colored_error_line() {
        let style = StyleOptions {
            use_color: true,
            term_width: 80,
        };
        let line = error_line("URL is required", &style);
        assert!(line.starts_with("\x1b[31mError:\x1b[0m"));
        assert!(line.ends_with("URL is required"));
    }
}
