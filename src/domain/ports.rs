use crate::domain::model::{GenerationResult, HeaderLayout};
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

pub trait Storage {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>>;
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &Path;
    fn output_path(&self) -> &Path;
    fn layout(&self) -> &HeaderLayout;
}

pub trait Pipeline {
    fn extract(&self) -> Result<String>;
    fn transform(&self, source: String) -> Result<GenerationResult>;
    fn load(&self, result: GenerationResult) -> Result<PathBuf>;
}
