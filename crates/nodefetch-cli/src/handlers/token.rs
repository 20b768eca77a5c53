//! The `token` subcommand.

use nodefetch_core::{TokenSource, resolve_token};

/// Resolve a token and print it to stdout.
///
/// An unset environment variable is not an error; it just prints nothing.
pub fn execute(value: &str, source: TokenSource) -> anyhow::Result<()> {
    match resolve_token(source, value)? {
        Some(token) => println!("{token}"),
        None => tracing::warn!(source = %source, value, "no token resolved"),
    }
    Ok(())
}
