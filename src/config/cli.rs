use crate::core::Storage;
use crate::utils::error::{GeneratorError, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Parser)]
#[command(name = "festival-config")]
#[command(about = "Generate festival_config.h from PostGIS's postgis_config.h")]
pub struct CliConfig {
    /// Path to postgis_config.h
    #[arg(value_name = "POSTGIS_CONFIG_H")]
    pub input: PathBuf,

    /// Output header path [default: festival_config.h]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Optional TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the generated header instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Keeps clap's rendered message, which already carries the usage line.
impl From<clap::Error> for GeneratorError {
    fn from(e: clap::Error) -> Self {
        GeneratorError::Usage {
            message: e.render().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Storage rooted at the current working directory.
    pub fn current_dir() -> Self {
        Self::new(".")
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        let full_path = self.base_path.join(path);
        fs::read(&full_path).map_err(|e| GeneratorError::from_io(full_path, e))
    }

    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        let full_path = self.base_path.join(path);
        fs::write(&full_path, data).map_err(|source| GeneratorError::FileAccess {
            path: full_path,
            source,
        })
    }
}
