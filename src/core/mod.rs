//! Core data types shared across the audit pipeline.
//!
//! - [`ElementType`]: the seven kinds of documentable PHP constructs
//! - [`ElementRecord`]: one construct as reported by the extractor
//! - [`DescriptionRecord`]: one curated `(name, desc)` reference entry
//! - [`ReportRow`]: one line of the final coverage report

pub mod errors;

pub use errors::{Error, Result};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix marking a PHP variable name.
pub const VARIABLE_SIGIL: char = '$';

/// Separator between a class name and a member name in qualified names.
pub const MEMBER_SEPARATOR: &str = "::";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    Class,
    Method,
    Property,
    ClassConstant,
    Function,
    Variable,
    Constant,
}

impl ElementType {
    /// All element types in report order.
    pub const ALL: [ElementType; 7] = [
        ElementType::Class,
        ElementType::Method,
        ElementType::Property,
        ElementType::Function,
        ElementType::Variable,
        ElementType::Constant,
        ElementType::ClassConstant,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Method => "method",
            Self::Property => "property",
            Self::ClassConstant => "class_constant",
            Self::Function => "function",
            Self::Variable => "variable",
            Self::Constant => "constant",
        }
    }

    /// Members live inside a class and are named `Class::member`.
    pub fn is_class_member(&self) -> bool {
        matches!(self, Self::Method | Self::Property | Self::ClassConstant)
    }

    /// Curated reference file holding descriptions for this type.
    pub fn reference_file(&self) -> &'static str {
        match self {
            Self::Class => "classes.json",
            Self::Method => "methods.json",
            Self::Property => "properties.json",
            Self::ClassConstant => "class_constants.json",
            Self::Function => "functions.json",
            Self::Variable => "variables.json",
            Self::Constant => "constants.json",
        }
    }

    /// Older stores spell the property file `propertys.json`.
    pub fn legacy_reference_file(&self) -> Option<&'static str> {
        match self {
            Self::Property => Some("propertys.json"),
            _ => None,
        }
    }

    /// File receiving descriptions discovered in doc comments.
    ///
    /// Class constants share the file with top-level constants.
    pub fn discovery_file(&self) -> &'static str {
        match self {
            Self::Class => "found_classes.json",
            Self::Method => "found_methods.json",
            Self::Property => "found_properties.json",
            Self::ClassConstant | Self::Constant => "found_constants.json",
            Self::Function => "found_functions.json",
            Self::Variable => "found_variables.json",
        }
    }

    /// File collecting names that still lack any description.
    ///
    /// Names append `s` to the type, except `empty_classes.json`.
    pub fn stub_file(&self) -> &'static str {
        match self {
            Self::Class => "empty_classes.json",
            Self::Method => "empty_methods.json",
            Self::Property => "empty_propertys.json",
            Self::ClassConstant => "empty_class_constants.json",
            Self::Function => "empty_functions.json",
            Self::Variable => "empty_variables.json",
            Self::Constant => "empty_constants.json",
        }
    }

    pub fn label(&self, labels: Labels) -> &'static str {
        match labels {
            Labels::Ru => match self {
                Self::Class => "Класс",
                Self::Method => "Метод",
                Self::Property => "Свойство",
                Self::ClassConstant => "Константа класса",
                Self::Function => "Функция",
                Self::Variable => "Переменная",
                Self::Constant => "Константа",
            },
            Labels::En => match self {
                Self::Class => "Class",
                Self::Method => "Method",
                Self::Property => "Property",
                Self::ClassConstant => "Class constant",
                Self::Function => "Function",
                Self::Variable => "Variable",
                Self::Constant => "Constant",
            },
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Language of type labels and report headers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Labels {
    #[default]
    Ru,
    En,
}

/// A documentable construct produced by the extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementRecord {
    #[serde(rename = "type")]
    pub element_type: ElementType,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    #[serde(default, rename = "doc", alias = "desc")]
    pub doc_text: String,
    #[serde(default, rename = "line", alias = "startLine")]
    pub source_line: usize,
}

impl ElementRecord {
    pub fn new(element_type: ElementType, name: impl Into<String>) -> Self {
        Self {
            element_type,
            name: name.into(),
            short_name: None,
            doc_text: String::new(),
            source_line: 0,
        }
    }

    pub fn with_short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = Some(short_name.into());
        self
    }

    pub fn with_doc(mut self, doc_text: impl Into<String>) -> Self {
        self.doc_text = doc_text.into();
        self
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.source_line = line;
        self
    }

    /// Short name, treating an empty string as absent.
    pub fn short_name(&self) -> Option<&str> {
        self.short_name.as_deref().filter(|s| !s.is_empty())
    }
}

/// How a reference entry's name is compared against an element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchCondition {
    #[default]
    Exact,
    Like,
}

/// A curated description in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionRecord {
    pub name: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cond: Option<MatchCondition>,
}

impl DescriptionRecord {
    pub fn new(name: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            desc: desc.into(),
            cond: None,
        }
    }

    pub fn like(name: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            cond: Some(MatchCondition::Like),
            ..Self::new(name, desc)
        }
    }

    pub fn condition(&self) -> MatchCondition {
        self.cond.unwrap_or_default()
    }
}

/// One line of the coverage report, numbered in final order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub sequence_number: usize,
    pub relative_path: String,
    pub item_number: usize,
    pub display_name: String,
    pub element_type: ElementType,
    pub description: String,
    pub source_line: usize,
}

/// Strips every leading sigil and re-adds exactly one.
///
/// An empty base name normalizes to the bare sigil.
pub fn normalize_variable_name(name: &str) -> String {
    let base = name.trim_start_matches(VARIABLE_SIGIL);
    format!("{VARIABLE_SIGIL}{base}")
}

/// Member part of a qualified `Class::member` name.
pub fn unqualified_name(name: &str) -> &str {
    name.rsplit(MEMBER_SEPARATOR).next().unwrap_or(name)
}
