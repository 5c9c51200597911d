pub mod csv;
pub mod json;
pub mod terminal;

pub use csv::CsvReportWriter;
pub use json::JsonReportWriter;
pub use terminal::{print_statistics, render_statistics};
