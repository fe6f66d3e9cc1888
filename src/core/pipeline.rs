use crate::core::transform::HeaderTransformer;
use crate::core::{ConfigProvider, GenerationResult, Pipeline, Result, Storage};
use crate::utils::error::GeneratorError;
use std::io;
use std::path::PathBuf;

pub struct HeaderPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    transformer: HeaderTransformer,
}

impl<S: Storage, C: ConfigProvider> HeaderPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        let transformer = HeaderTransformer::new(config.layout().clone());
        Self {
            storage,
            config,
            transformer,
        }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for HeaderPipeline<S, C> {
    fn extract(&self) -> Result<String> {
        let input = self.config.input_path();
        tracing::debug!("Reading {}", input.display());

        let bytes = self.storage.read_file(input)?;
        // 無關行中的非 UTF-8 位元組不中斷處理；落在辨識值中的會在 transform 被拒絕
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn transform(&self, source: String) -> Result<GenerationResult> {
        let result = self.transformer.render(&source)?;

        for entry in &result.entries {
            if entry.value.contains(char::REPLACEMENT_CHARACTER) {
                return Err(GeneratorError::FileAccess {
                    path: self.config.input_path().to_path_buf(),
                    source: io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!("value of {} is not valid UTF-8", entry.name),
                    ),
                });
            }
            tracing::debug!("Recognized {} = {}", entry.name, entry.value);
        }
        Ok(result)
    }

    fn load(&self, result: GenerationResult) -> Result<PathBuf> {
        let output = self.config.output_path();
        self.storage.write_file(output, result.header.as_bytes())?;
        Ok(output.to_path_buf())
    }
}
