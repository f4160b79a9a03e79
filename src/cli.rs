//! Command-line interface definitions for Freedium.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Connection settings can be provided via flags, environment variables, or
//! a YAML file passed with `--config`.

use clap::{Parser, Subcommand, ValueEnum};
use freedium::config::SettingsOverrides;

/// Command-line arguments for Freedium.
///
/// # Examples
///
/// ```sh
/// # Extract one article as JSON
/// freedium extract https://medium.com/@someone/some-post-0123abcd
///
/// # Several articles, as Markdown files under ./out/<date>/
/// freedium extract -f markdown -o ./out URL1 URL2
///
/// # With a session cookie
/// MEDIUM_COOKIES='sid=...' freedium extract URL
///
/// # Pre-flight check only
/// freedium validate https://example.com
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to a YAML settings file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Session cookie sent with every fetch
    #[arg(long, env = "MEDIUM_COOKIES", global = true, hide_env_values = true)]
    pub cookies: Option<String>,

    /// Fetch timeout in seconds
    #[arg(long, env = "FETCH_TIMEOUT_SECS", global = true)]
    pub timeout_secs: Option<u64>,

    /// Upstash Redis REST URL (only used by `health`)
    #[arg(long, env = "REDIS_URL", global = true)]
    pub redis_url: Option<String>,

    /// Upstash Redis REST token (only used by `health`)
    #[arg(long, env = "REDIS_TOKEN", global = true, hide_env_values = true)]
    pub redis_token: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch articles and extract their fields
    Extract {
        /// Article URLs
        #[arg(required = true)]
        urls: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,

        /// Write one file per article here instead of printing to stdout
        #[arg(short, long)]
        output_dir: Option<String>,

        /// Maximum extractions in flight
        #[arg(long)]
        concurrency: Option<usize>,
    },
    /// Check whether a string is a well-formed http(s) URL
    Validate {
        url: String,
    },
    /// Report the cache connection status
    Health,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Markdown,
}

impl Format {
    pub fn extension(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Markdown => "md",
        }
    }
}

impl Cli {
    /// Settings given on the command line or in the environment.
    pub fn overrides(&self) -> SettingsOverrides {
        let concurrency = match &self.command {
            Command::Extract { concurrency, .. } => *concurrency,
            _ => None,
        };
        SettingsOverrides {
            session_cookie: self.cookies.clone(),
            fetch_timeout_secs: self.timeout_secs,
            concurrency,
            redis_url: self.redis_url.clone(),
            redis_token: self.redis_token.clone(),
        }
    }
}
