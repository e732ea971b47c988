use super::{load_context, with_writer};
use crate::core::Industry;
use crate::io::{CatalogView, OutputFormat};
use anyhow::Result;
use std::path::PathBuf;

pub struct CatalogConfig {
    pub config: Option<PathBuf>,
    pub industry: Option<Industry>,
    pub format: Option<OutputFormat>,
}

pub fn handle_catalog(config: CatalogConfig) -> Result<()> {
    let context = load_context(config.config.as_deref())?;
    let view = CatalogView::new(&context.catalog, config.industry);
    with_writer(config.format, None, &context.config, |writer| {
        writer.write_catalog(&view)
    })
}
