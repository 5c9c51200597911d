use crate::core::{ReportRow, Result};
use crate::io::output::{ReportLayout, ReportWriter};
use serde::Serialize;
use std::io::Write;

/// Row shape of the JSON report.
#[derive(Debug, Serialize)]
struct JsonRow<'a> {
    number: usize,
    path: &'a str,
    item_number: usize,
    name: &'a str,
    #[serde(rename = "type")]
    element_type: &'a str,
    type_label: &'a str,
    description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<usize>,
}

pub struct JsonReportWriter<W: Write> {
    writer: W,
    layout: ReportLayout,
}

impl<W: Write> JsonReportWriter<W> {
    pub fn new(writer: W, layout: ReportLayout) -> Self {
        Self { writer, layout }
    }
}

impl<W: Write> ReportWriter for JsonReportWriter<W> {
    fn write_rows(&mut self, rows: &[ReportRow]) -> Result<()> {
        let rows: Vec<JsonRow<'_>> = rows
            .iter()
            .map(|row| JsonRow {
                number: row.sequence_number,
                path: &row.relative_path,
                item_number: row.item_number,
                name: &row.display_name,
                element_type: row.element_type.as_str(),
                type_label: row.element_type.label(self.layout.labels),
                description: &row.description,
                line: self.layout.include_line_numbers.then_some(row.source_line),
            })
            .collect();

        let json = serde_json::to_string_pretty(&rows)?;
        self.writer.write_all(json.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ElementType, Labels};
    use serde_json::{json, Value};

    #[test]
    fn test_rows_serialize_with_labels() {
        let rows = vec![ReportRow {
            sequence_number: 1,
            relative_path: "index.php".into(),
            item_number: 1,
            display_name: "$config".into(),
            element_type: ElementType::Variable,
            description: "Глобальная настройка".into(),
            source_line: 4,
        }];
        let mut buffer = Vec::new();
        let layout = ReportLayout {
            labels: Labels::Ru,
            include_line_numbers: false,
        };
        JsonReportWriter::new(&mut buffer, layout)
            .write_rows(&rows)
            .unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("Глобальная настройка"));
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            value,
            json!([{
                "number": 1,
                "path": "index.php",
                "item_number": 1,
                "name": "$config",
                "type": "variable",
                "type_label": "Переменная",
                "description": "Глобальная настройка"
            }])
        );
    }

    #[test]
    fn test_empty_report_is_empty_array() {
        let mut buffer = Vec::new();
        JsonReportWriter::new(&mut buffer, ReportLayout::default())
            .write_rows(&[])
            .unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap().trim(), "[]");
    }
}
