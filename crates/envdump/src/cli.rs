//! CLI definitions.

use std::fmt;

use clap::{Parser, ValueEnum};
use envdump_core::output::DEFAULT_OUTPUT_ROOT;

/// Export an environment's DynamoDB tables, S3 buckets and Cognito users.
#[derive(Debug, Parser)]
#[command(name = "envdump")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Environment name interpolated into every table, bucket and parameter name.
    pub environment: String,

    /// Which stores to export.
    #[arg(default_value = "all")]
    pub mode: Mode,

    /// Directory the dump is written to.
    #[arg(long, env = "ENVDUMP_OUTPUT", default_value = DEFAULT_OUTPUT_ROOT)]
    pub output: String,

    /// Shared config profile used for credentials and region.
    #[arg(long, env = "AWS_PROFILE", default_value = "ingenio-dev")]
    pub profile: String,

    /// AWS region, overriding the profile's.
    #[arg(long, env = "AWS_REGION")]
    pub region: Option<String>,

    /// Custom endpoint URL (e.g., LocalStack).
    #[arg(long, env = "AWS_ENDPOINT_URL")]
    pub endpoint_url: Option<String>,

    /// Follow pagination tokens instead of stopping after the first page.
    #[arg(long)]
    pub all_pages: bool,

    /// Enable debug logging.
    #[arg(long, conflicts_with = "silent")]
    pub verbose: bool,

    /// Only log warnings and errors.
    #[arg(long)]
    pub silent: bool,

    /// Emit logs as JSON lines.
    #[arg(long)]
    pub json_logs: bool,
}

impl Cli {
    /// Default log filter when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "envdump=debug,envdump_core=debug"
        } else if self.silent {
            "envdump=warn"
        } else {
            "envdump=info"
        }
    }
}

/// Export selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Tables, buckets and users.
    #[default]
    All,
    /// DynamoDB tables only.
    Dynamodb,
    /// S3 buckets only.
    S3,
    /// Cognito users only.
    Cognito,
}

impl Mode {
    pub fn includes_tables(self) -> bool {
        matches!(self, Self::All | Self::Dynamodb)
    }

    pub fn includes_buckets(self) -> bool {
        matches!(self, Self::All | Self::S3)
    }

    pub fn includes_users(self) -> bool {
        matches!(self, Self::All | Self::Cognito)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::All => "all",
            Self::Dynamodb => "dynamodb",
            Self::S3 => "s3",
            Self::Cognito => "cognito",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_defaults_to_all() {
        let cli = Cli::try_parse_from(["envdump", "dev"]).unwrap();
        assert_eq!(cli.environment, "dev");
        assert_eq!(cli.mode, Mode::All);
        assert!(!cli.all_pages);
    }

    #[test]
    fn test_mode_is_parsed() {
        let cli = Cli::try_parse_from(["envdump", "dev", "s3"]).unwrap();
        assert_eq!(cli.mode, Mode::S3);
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        assert!(Cli::try_parse_from(["envdump", "dev", "sqs"]).is_err());
    }

    #[test]
    fn test_environment_is_required() {
        assert!(Cli::try_parse_from(["envdump"]).is_err());
    }

    #[test]
    fn test_verbose_and_silent_conflict() {
        assert!(Cli::try_parse_from(["envdump", "dev", "--verbose", "--silent"]).is_err());
    }

    #[test]
    fn test_mode_selection() {
        assert!(Mode::All.includes_tables());
        assert!(Mode::All.includes_buckets());
        assert!(Mode::All.includes_users());

        assert!(Mode::Dynamodb.includes_tables());
        assert!(!Mode::Dynamodb.includes_buckets());
        assert!(!Mode::Dynamodb.includes_users());

        assert!(!Mode::S3.includes_tables());
        assert!(Mode::S3.includes_buckets());

        assert!(Mode::Cognito.includes_users());
        assert!(!Mode::Cognito.includes_tables());
    }

    #[test]
    fn test_mode_display_matches_cli_value() {
        for mode in Mode::value_variants() {
            let parsed = Mode::from_str(&mode.to_string(), false).unwrap();
            assert_eq!(parsed, *mode);
        }
    }
}
