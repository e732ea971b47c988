use crate::io::output::{CatalogView, OutputWriter};
use crate::report::{AnalysisReport, ComparisonReport};
use serde::Serialize;
use std::io::Write;

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_value<T: Serialize>(&mut self, value: &T) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.writer.write_all(json.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_analysis(&mut self, report: &AnalysisReport<'_>) -> anyhow::Result<()> {
        self.write_value(report)
    }

    fn write_comparison(&mut self, report: &ComparisonReport) -> anyhow::Result<()> {
        self.write_value(report)
    }

    fn write_catalog(&mut self, catalog: &CatalogView<'_>) -> anyhow::Result<()> {
        self.write_value(catalog)
    }
}
