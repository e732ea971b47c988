pub mod input;
pub mod output;
pub mod writers;

pub use input::{load_input, parse_input, InputFormat, QuestionnaireInput};
pub use output::{create_writer, CatalogView, OutputFormat, OutputWriter};

use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}
