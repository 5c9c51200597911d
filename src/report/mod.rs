//! Report row assembly.
//!
//! Items are collected in processing order and only numbered once the whole
//! tree has been scanned, so the global sequence follows the final
//! `(path, line)` ordering rather than discovery order.

use crate::core::{ElementType, ReportRow};

/// A report line before global numbering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportItem {
    pub relative_path: String,
    pub item_number: usize,
    pub display_name: String,
    pub element_type: ElementType,
    pub description: String,
    pub source_line: usize,
}

/// Short name when short display is requested and one exists.
pub fn display_name(name: &str, short_name: Option<&str>, full_names: bool) -> String {
    match short_name {
        Some(short) if !full_names && !short.is_empty() => short.to_string(),
        _ => name.to_string(),
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReportAssembler {
    items: Vec<ReportItem>,
}

impl ReportAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: ReportItem) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Orders items by path then line (ties keep first-seen order) and
    /// numbers them from 1.
    pub fn finish(self) -> Vec<ReportRow> {
        let mut items = self.items;
        items.sort_by(|a, b| {
            a.relative_path
                .cmp(&b.relative_path)
                .then(a.source_line.cmp(&b.source_line))
        });

        let mut sequence_number = 0;
        items
            .into_iter()
            .map(|item| {
                sequence_number += 1;
                ReportRow {
                    sequence_number,
                    relative_path: item.relative_path,
                    item_number: item.item_number,
                    display_name: item.display_name,
                    element_type: item.element_type,
                    description: item.description,
                    source_line: item.source_line,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn item(path: &str, line: usize, name: &str) -> ReportItem {
        ReportItem {
            relative_path: path.to_string(),
            item_number: 1,
            display_name: name.to_string(),
            element_type: ElementType::Function,
            description: String::new(),
            source_line: line,
        }
    }

    #[test]
    fn test_display_name_prefers_short_only_when_requested() {
        assert_eq!(display_name("Foo::bar", Some("bar"), true), "Foo::bar");
        assert_eq!(display_name("Foo::bar", Some("bar"), false), "bar");
        assert_eq!(display_name("Foo", None, false), "Foo");
        assert_eq!(display_name("Foo", Some(""), false), "Foo");
    }

    #[test]
    fn test_rows_are_sorted_and_numbered_at_emission() {
        let mut assembler = ReportAssembler::new();
        assembler.push(item("b.php", 3, "late"));
        assembler.push(item("a.php", 20, "second"));
        assembler.push(item("a.php", 5, "first"));
        assembler.push(item("a.php", 20, "tie"));

        let rows = assembler.finish();

        let order: Vec<_> = rows
            .iter()
            .map(|r| (r.sequence_number, r.display_name.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![(1, "first"), (2, "second"), (3, "tie"), (4, "late")]
        );
    }
}
