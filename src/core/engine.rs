use crate::core::{GenerationResult, Pipeline};
use crate::utils::error::Result;
use std::path::PathBuf;

pub struct GeneratorEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> GeneratorEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<PathBuf> {
        let result = self.render()?;

        tracing::info!("Writing header...");
        let output_path = self.pipeline.load(result)?;
        tracing::info!("Header saved to: {}", output_path.display());

        Ok(output_path)
    }

    /// Extract and transform only; nothing is written.
    pub fn render(&self) -> Result<GenerationResult> {
        tracing::info!("Reading source header...");
        let source = self.pipeline.extract()?;
        tracing::info!("Read {} lines", source.lines().count());

        tracing::info!("Transforming macros...");
        let result = self.pipeline.transform(source)?;
        tracing::info!("Recognized {} macros", result.entries.len());

        Ok(result)
    }
}
