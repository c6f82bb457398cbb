//! User-facing messages on stderr.
//!
//! Stdout is reserved for the computed version, so every note and
//! diagnostic goes to stderr.

use console::style;

/// Print an informational note.
pub fn display_info(message: &str) {
    eprintln!("{} {}", style("INFO:").for_stderr().cyan(), message);
}

/// Print a status line, e.g. a planned invocation.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").for_stderr().yellow(), message);
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").for_stderr().red(), message);
}

/// Print an error together with its chain of causes.
pub fn display_error_chain(err: &anyhow::Error) {
    display_error(&err.to_string());
    for cause in err.chain().skip(1) {
        eprintln!("  caused by: {}", cause);
    }
}
