use super::writers::{CsvReportWriter, JsonReportWriter};
use crate::core::{Error, Labels, ReportRow, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Csv,
    Json,
}

/// Presentation choices shared by all report writers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportLayout {
    pub labels: Labels,
    pub include_line_numbers: bool,
}

impl Default for ReportLayout {
    fn default() -> Self {
        Self {
            labels: Labels::default(),
            include_line_numbers: true,
        }
    }
}

impl ReportLayout {
    pub fn headers(&self) -> Vec<&'static str> {
        let mut headers = match self.labels {
            Labels::Ru => vec![
                "№",
                "Относительный путь",
                "№ в классе",
                "Наименование",
                "Тип",
                "Описание",
            ],
            Labels::En => vec![
                "No.",
                "Relative path",
                "No. in class",
                "Name",
                "Type",
                "Description",
            ],
        };
        if self.include_line_numbers {
            headers.push(match self.labels {
                Labels::Ru => "Строка",
                Labels::En => "Line",
            });
        }
        headers
    }
}

pub trait ReportWriter {
    fn write_rows(&mut self, rows: &[ReportRow]) -> Result<()>;
}

pub fn create_writer<'a, W: Write + 'a>(
    writer: W,
    format: ReportFormat,
    layout: ReportLayout,
) -> Box<dyn ReportWriter + 'a> {
    match format {
        ReportFormat::Csv => Box::new(CsvReportWriter::new(writer, layout)),
        ReportFormat::Json => Box::new(JsonReportWriter::new(writer, layout)),
    }
}

/// Writes the report file, creating missing parent directories.
pub fn write_report(
    path: &Path,
    format: ReportFormat,
    layout: ReportLayout,
    rows: &[ReportRow],
) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| Error::file_system_io("Failed to create report directory", parent, e))?;
    }
    let file = File::create(path)
        .map_err(|e| Error::file_system_io("Failed to create report file", path, e))?;

    let mut buffered = BufWriter::new(file);
    create_writer(&mut buffered, format, layout).write_rows(rows)?;
    buffered.flush()?;
    Ok(())
}
