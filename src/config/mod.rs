#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::{ConfigProvider, HeaderLayout};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::path::{Path, PathBuf};
use toml_config::GeneratorConfig;

pub const DEFAULT_OUTPUT_PATH: &str = "festival_config.h";

/// Resolved settings: CLI flag, then settings file, then built-in default.
#[derive(Debug, Clone)]
pub struct Settings {
    input: PathBuf,
    output: PathBuf,
    layout: HeaderLayout,
}

impl Settings {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            layout: HeaderLayout::default(),
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_layout(mut self, layout: HeaderLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn merge(
        input: impl Into<PathBuf>,
        output_override: Option<PathBuf>,
        file: Option<&GeneratorConfig>,
    ) -> Self {
        let mut settings = Self::new(input);

        if let Some(file) = file {
            if let Some(path) = &file.output.path {
                settings.output = path.clone();
            }
            if let Some(guard) = &file.header.guard {
                settings.layout.guard = guard.clone();
            }
        }
        if let Some(output) = output_override {
            settings.output = output;
        }

        settings
    }

    #[cfg(feature = "cli")]
    pub fn from_cli(cli: &cli::CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => {
                tracing::info!("📁 Loading settings from: {}", path.display());
                let file = GeneratorConfig::from_file(path)?;
                file.validate()?;
                Some(file)
            }
            None => None,
        };

        Ok(Self::merge(
            cli.input.clone(),
            cli.output.clone(),
            file.as_ref(),
        ))
    }
}

impl ConfigProvider for Settings {
    fn input_path(&self) -> &Path {
        &self.input
    }

    fn output_path(&self) -> &Path {
        &self.output
    }

    fn layout(&self) -> &HeaderLayout {
        &self.layout
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input", &self.input)?;
        validation::validate_path("output", &self.output)?;
        validation::validate_c_identifier("header.guard", &self.layout.guard)?;
        Ok(())
    }
}
