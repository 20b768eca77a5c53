//! Main commands enum and subcommand arguments.
//!
//! This module defines the available commands for the CLI tool.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Subcommand;

use nodefetch_core::TokenSource;

/// Available commands for the nodefetch downloader tool.
#[derive(Subcommand)]
pub enum Commands {
    /// Download a file to a named location
    Download {
        /// Source URL to fetch
        url: String,
        /// Directory to write into (created if missing)
        #[arg(short, long)]
        dir: PathBuf,
        /// File name within the directory
        #[arg(long)]
        file_name: String,
        /// Delete any existing file first, forcing a fresh fetch
        #[arg(short, long)]
        force: bool,
        /// Bearer token to use directly (only sent to allow-listed origins)
        #[arg(
            long,
            env = "NODEFETCH_TOKEN",
            conflicts_with_all = ["token_source", "token_value"]
        )]
        token: Option<String>,
        /// Token source kind (plain, env, file)
        #[arg(long, value_parser = TokenSource::from_str, requires = "token_value")]
        token_source: Option<TokenSource>,
        /// Value interpreted according to --token-source
        #[arg(long, requires = "token_source")]
        token_value: Option<String>,
    },

    /// Resolve a token from one of the three source kinds and print it
    Token {
        /// Value interpreted according to --source
        value: String,
        /// Token source kind (plain, env, file)
        #[arg(short, long, value_parser = TokenSource::from_str)]
        source: TokenSource,
    },

    /// Print the node registration descriptors as JSON
    Nodes,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::parser::Cli;

    #[test]
    fn test_download_args_parse() {
        let cli = Cli::parse_from([
            "nodefetch",
            "download",
            "https://example.com/a.bin",
            "--dir",
            "/tmp/out",
            "--file-name",
            "a.bin",
            "--force",
            "--token-source",
            "env",
            "--token-value",
            "MY_TOKEN",
        ]);

        let Some(Commands::Download {
            url,
            dir,
            file_name,
            force,
            token,
            token_source,
            token_value,
        }) = cli.command
        else {
            panic!("Expected download command");
        };

        assert_eq!(url, "https://example.com/a.bin");
        assert_eq!(dir, PathBuf::from("/tmp/out"));
        assert_eq!(file_name, "a.bin");
        assert!(force);
        assert_eq!(token, None);
        assert_eq!(token_source, Some(TokenSource::EnvVar));
        assert_eq!(token_value.as_deref(), Some("MY_TOKEN"));
    }

    #[test]
    fn test_token_source_rejects_unknown_kind() {
        let result = Cli::try_parse_from([
            "nodefetch",
            "token",
            "whatever",
            "--source",
            "carrier-pigeon",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_token_value_requires_source() {
        let result = Cli::try_parse_from([
            "nodefetch",
            "download",
            "https://example.com/a.bin",
            "--dir",
            "/tmp/out",
            "--file-name",
            "a.bin",
            "--token-value",
            "MY_TOKEN",
        ]);
        assert!(result.is_err());
    }
}
