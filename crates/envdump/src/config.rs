//! Run configuration, built once from the CLI and passed to every exporter.

use envdump_core::environment::Environment;
use envdump_core::output::OutputLayout;
use envdump_core::pagination::PagePolicy;

use crate::cli::{Cli, Mode};

/// What to export and where to write it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub environment: Environment,
    pub mode: Mode,
    pub layout: OutputLayout,
    pub page_policy: PagePolicy,
}

impl ExportConfig {
    /// Creates a configuration exporting everything to the default output root.
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            mode: Mode::default(),
            layout: OutputLayout::default(),
            page_policy: PagePolicy::default(),
        }
    }

    /// Sets the export mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the output root directory.
    pub fn with_output_root(mut self, root: impl Into<std::path::PathBuf>) -> Self {
        self.layout = OutputLayout::new(root);
        self
    }

    /// Sets the page policy.
    pub fn with_page_policy(mut self, page_policy: PagePolicy) -> Self {
        self.page_policy = page_policy;
        self
    }
}

impl From<&Cli> for ExportConfig {
    fn from(cli: &Cli) -> Self {
        Self::new(Environment::new(&cli.environment))
            .with_mode(cli.mode)
            .with_output_root(&cli.output)
            .with_page_policy(PagePolicy::from_all_pages(cli.all_pages))
    }
}

/// AWS client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwsConfig {
    /// Shared config profile.
    pub profile: String,
    /// AWS region. Falls back to the profile's region when unset.
    pub region: Option<String>,
    /// Custom endpoint URL (LocalStack, DynamoDB Local).
    pub endpoint_url: Option<String>,
}

/// Environment fallbacks (`AWS_PROFILE`, `AWS_REGION`, `AWS_ENDPOINT_URL`)
/// are resolved by clap before this conversion.
impl From<&Cli> for AwsConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            profile: cli.profile.clone(),
            region: cli.region.clone(),
            endpoint_url: cli.endpoint_url.clone(),
        }
    }
}

impl AwsConfig {
    /// Returns a display string for the target account.
    pub fn target_display(&self) -> String {
        let region = self.region.as_deref().unwrap_or("profile default");
        match &self.endpoint_url {
            Some(url) => format!(
                "Custom endpoint {} (profile: {}, region: {})",
                url, self.profile, region
            ),
            None => format!("AWS (profile: {}, region: {})", self.profile, region),
        }
    }
}
