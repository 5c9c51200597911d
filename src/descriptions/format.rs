//! On-disk layouts of description files.
//!
//! Curators write description files in three shapes, all normalized to an
//! ordered list of [`DescriptionRecord`]s:
//!
//! ```json
//! [{"name": "Foo::bar", "desc": "Does X."}]      // records
//! [{"Foo::bar": "Does X."}]                       // single-key objects
//! {"Foo::bar": "Does X."}                         // one mapping
//! ```

use crate::core::{DescriptionRecord, Error, MatchCondition, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Normalizes any supported layout; `None` when the layout is not recognized.
pub fn normalize(data: Value) -> Option<Vec<DescriptionRecord>> {
    match data {
        Value::Null => Some(Vec::new()),
        Value::Array(items) if items.is_empty() => Some(Vec::new()),
        Value::Array(items) if items.iter().all(is_record) => {
            Some(items.into_iter().filter_map(record_from_object).collect())
        }
        Value::Array(items) if items.iter().all(is_single_entry) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::Object(map) => Some(records_from_mapping(map)),
                    _ => None,
                })
                .flatten()
                .collect(),
        ),
        Value::Object(map) => Some(records_from_mapping(map)),
        _ => None,
    }
}

fn is_record(item: &Value) -> bool {
    item.as_object().is_some_and(|obj| obj.contains_key("name"))
}

fn is_single_entry(item: &Value) -> bool {
    item.as_object().is_some_and(|obj| obj.len() == 1)
}

fn record_from_object(item: Value) -> Option<DescriptionRecord> {
    let Value::Object(mut obj) = item else {
        return None;
    };
    let name = obj.remove("name").map(value_to_text).unwrap_or_default();
    let desc = obj.remove("desc").map(value_to_text).unwrap_or_default();
    let cond = obj
        .remove("cond")
        .and_then(|c| c.as_str().map(str::to_ascii_lowercase))
        .and_then(|c| match c.as_str() {
            "like" => Some(MatchCondition::Like),
            "exact" => Some(MatchCondition::Exact),
            _ => None,
        });
    Some(DescriptionRecord { name, desc, cond })
}

fn records_from_mapping(map: Map<String, Value>) -> Vec<DescriptionRecord> {
    map.into_iter()
        .map(|(name, desc)| DescriptionRecord::new(name, value_to_text(desc)))
        .collect()
}

fn value_to_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Reads a description file in any layout; a missing file is empty.
pub fn read_description_file(path: &Path) -> Result<Vec<DescriptionRecord>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let contents = fs::read_to_string(path)
        .map_err(|e| Error::file_system_io("Failed to read description file", path, e))?;
    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }
    let data: Value = serde_json::from_str(&contents)?;
    normalize(data)
        .ok_or_else(|| Error::file_system("Unrecognized description file layout", path))
}

/// Writes records as a pretty-printed list of `{name, desc}` objects.
pub fn write_description_file(path: &Path, records: &[DescriptionRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)
        .map_err(|e| Error::file_system_io("Failed to write description file", path, e))
}

/// Adds records whose names the file does not hold yet.
///
/// Existing entries are kept in place; an unreadable file is left untouched
/// and reported as an error. Returns the number of records added.
pub fn merge_into_file(path: &Path, additions: Vec<DescriptionRecord>) -> Result<usize> {
    let mut records = read_description_file(path)?;
    let before = records.len();
    for addition in additions {
        if !records.iter().any(|r| r.name == addition.name) {
            records.push(addition);
        }
    }
    let added = records.len() - before;
    if added > 0 {
        write_description_file(path, &records)?;
    }
    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tempfile::TempDir;

    fn pairs(records: &[DescriptionRecord]) -> Vec<(&str, &str)> {
        records
            .iter()
            .map(|r| (r.name.as_str(), r.desc.as_str()))
            .collect()
    }

    #[test]
    fn test_all_layouts_normalize_identically() {
        let records = normalize(json!([
            {"name": "Foo::bar", "desc": "Does X."},
            {"name": "Foo::baz", "desc": "Does Y."}
        ]))
        .unwrap();
        let single_keys = normalize(json!([
            {"Foo::bar": "Does X."},
            {"Foo::baz": "Does Y."}
        ]))
        .unwrap();
        let mapping = normalize(json!({
            "Foo::bar": "Does X.",
            "Foo::baz": "Does Y."
        }))
        .unwrap();

        let expected = vec![("Foo::bar", "Does X."), ("Foo::baz", "Does Y.")];
        assert_eq!(pairs(&records), expected);
        assert_eq!(pairs(&single_keys), expected);
        assert_eq!(pairs(&mapping), expected);
    }

    #[test]
    fn test_mapping_preserves_file_order() {
        let records = normalize(json!({"zeta": "last letter", "alpha": "first letter"})).unwrap();
        assert_eq!(records[0].name, "zeta");
        assert_eq!(records[1].name, "alpha");
    }

    #[test]
    fn test_like_condition_is_kept() {
        let records = normalize(json!([{"name": "Repository", "desc": "Data access.", "cond": "like"}]))
            .unwrap();
        assert_eq!(records[0].condition(), MatchCondition::Like);
    }

    #[test]
    fn test_empty_and_unrecognized_layouts() {
        assert_eq!(normalize(json!([])), Some(vec![]));
        assert_eq!(normalize(json!({})), Some(vec![]));
        assert_eq!(normalize(json!(null)), Some(vec![]));
        assert_eq!(normalize(json!("text")), None);
        assert_eq!(normalize(json!([{"a": "1", "b": "2"}])), None);
    }

    #[test]
    fn test_read_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let records = read_description_file(&temp.path().join("methods.json")).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_read_malformed_file_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("methods.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(read_description_file(&path).is_err());
    }

    #[test]
    fn test_merge_keeps_existing_entries() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("empty_methods.json");
        fs::write(&path, r#"{"Foo::old": "Curated."}"#).unwrap();

        let added = merge_into_file(
            &path,
            vec![
                DescriptionRecord::new("Foo::old", ""),
                DescriptionRecord::new("Foo::new", ""),
            ],
        )
        .unwrap();

        assert_eq!(added, 1);
        let records = read_description_file(&path).unwrap();
        assert_eq!(pairs(&records), vec![("Foo::old", "Curated."), ("Foo::new", "")]);
    }

    #[test]
    fn test_written_file_keeps_non_ascii_literal() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("found_classes.json");
        write_description_file(&path, &[DescriptionRecord::new("Foo", "Класс отчёта.")]).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("Класс отчёта."));
        assert!(contents.contains("\n  {"));
    }
}
