use crate::core::{ReportRow, Result};
use crate::io::output::{ReportLayout, ReportWriter};
use std::io::Write;

/// RFC 4180 CSV: a header row, then one record per report row.
pub struct CsvReportWriter<W: Write> {
    writer: csv::Writer<W>,
    layout: ReportLayout,
}

impl<W: Write> CsvReportWriter<W> {
    pub fn new(writer: W, layout: ReportLayout) -> Self {
        let writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::CRLF)
            .from_writer(writer);
        Self { writer, layout }
    }
}

impl<W: Write> ReportWriter for CsvReportWriter<W> {
    fn write_rows(&mut self, rows: &[ReportRow]) -> Result<()> {
        self.writer.write_record(self.layout.headers())?;

        for row in rows {
            let mut fields = vec![
                row.sequence_number.to_string(),
                row.relative_path.clone(),
                row.item_number.to_string(),
                row.display_name.clone(),
                row.element_type.label(self.layout.labels).to_string(),
                row.description.clone(),
            ];
            if self.layout.include_line_numbers {
                fields.push(row.source_line.to_string());
            }
            self.writer.write_record(&fields)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
