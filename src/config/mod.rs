pub mod toml_config;

use crate::adapters::http::DEFAULT_BASE_URL;
use crate::adapters::terminal::RenderOptions;
use crate::core::ConfigProvider;
use crate::domain::ports::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use toml_config::{TomlConfig, MAX_WIDTH, MIN_WIDTH};

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "busca-cnpj")]
#[command(about = "Look up Brazilian companies by CNPJ on BrasilAPI")]
pub struct CliConfig {
    /// CNPJ to look up (punctuation allowed); starts an interactive prompt when omitted
    pub cnpj: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Registry base URL, overrides the configuration file
    #[arg(long)]
    pub base_url: Option<String>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Width of the two-column block
    #[arg(long)]
    pub width: Option<usize>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    pub log_json: bool,
}

/// Effective settings: defaults, then the config file, then command-line flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub base_url: String,
    pub format: OutputFormat,
    pub width: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            format: OutputFormat::Text,
            width: RenderOptions::default().width,
        }
    }
}

impl Settings {
    pub fn from_toml(file: &TomlConfig) -> Result<Self> {
        file.validate()?;

        let defaults = Self::default();
        Ok(Self {
            base_url: file.registry.base_url.clone().unwrap_or(defaults.base_url),
            format: file.output_format().unwrap_or(defaults.format),
            width: file.output.width.unwrap_or(defaults.width),
        })
    }

    #[cfg(feature = "cli")]
    pub fn apply_cli(mut self, cli: &CliConfig) -> Self {
        if let Some(base_url) = &cli.base_url {
            self.base_url = base_url.clone();
        }
        if cli.json {
            self.format = OutputFormat::Json;
        }
        if let Some(width) = cli.width {
            self.width = width;
        }
        self
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            format: self.format,
            width: self.width,
        }
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("base_url", &self.base_url)?;
        validation::validate_range("width", self.width, MIN_WIDTH, MAX_WIDTH)?;
        Ok(())
    }
}

impl ConfigProvider for Settings {
    fn registry_base_url(&self) -> &str {
        &self.base_url
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }

    fn column_width(&self) -> usize {
        self.width
    }
}
