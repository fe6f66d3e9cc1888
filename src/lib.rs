pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalStorage, cli::CliConfig};

pub use config::Settings;
pub use core::{engine::GeneratorEngine, pipeline::HeaderPipeline, transform::HeaderTransformer};
pub use utils::error::{GeneratorError, Result};
