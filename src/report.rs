use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::InspectError;
use crate::models::{TableReport, format_row};

const SEPARATOR_WIDTH: usize = 30;

/// Receives the pass as it happens: a header once the catalog is read, one
/// call per reported table, then `finish`.
pub trait ReportWriter {
    fn begin(&mut self, path: &Path, table_count: usize) -> Result<(), InspectError>;
    fn table(&mut self, table: &TableReport) -> Result<(), InspectError>;
    fn finish(&mut self) -> Result<(), InspectError>;
}

/// Plain text, written as each table is described.
pub struct TextReport<W: Write> {
    out: W,
}

impl<W: Write> TextReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> ReportWriter for TextReport<W> {
    fn begin(&mut self, path: &Path, table_count: usize) -> Result<(), InspectError> {
        writeln!(self.out, "Database: {}", path.display())?;
        writeln!(self.out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        if table_count == 0 {
            writeln!(self.out, "No tables found.")?;
        }
        Ok(())
    }

    fn table(&mut self, table: &TableReport) -> Result<(), InspectError> {
        writeln!(self.out)?;
        writeln!(self.out, "Table: {}", table.name)?;
        writeln!(self.out, "Row count: {}", table.row_count)?;
        writeln!(self.out, "Columns: {}", table.column_names().join(", "))?;

        if table.sample_rows.is_empty() {
            writeln!(self.out, "  (Empty)")?;
        } else {
            writeln!(self.out, "Sample data:")?;
            for row in &table.sample_rows {
                writeln!(self.out, "  {}", format_row(row))?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<(), InspectError> {
        self.out.flush()?;
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct DatabaseReport {
    database: String,
    tables: Vec<TableReport>,
}

/// One JSON document, emitted on `finish`.
pub struct JsonReport<W: Write> {
    out: W,
    report: DatabaseReport,
}

impl<W: Write> JsonReport<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            report: DatabaseReport {
                database: String::new(),
                tables: Vec::new(),
            },
        }
    }
}

impl<W: Write> ReportWriter for JsonReport<W> {
    fn begin(&mut self, path: &Path, table_count: usize) -> Result<(), InspectError> {
        self.report.database = path.display().to_string();
        self.report.tables.reserve(table_count);
        Ok(())
    }

    fn table(&mut self, table: &TableReport) -> Result<(), InspectError> {
        self.report.tables.push(table.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<(), InspectError> {
        serde_json::to_writer_pretty(&mut self.out, &self.report)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CellValue, ColumnInfo};

    fn column(name: &str) -> ColumnInfo {
        ColumnInfo {
            name: name.to_string(),
            data_type: "TEXT".to_string(),
            not_null: false,
            default_value: None,
            primary_key: false,
        }
    }

    fn sample_table() -> TableReport {
        TableReport {
            name: "T".to_string(),
            row_count: 2,
            columns: vec![column("id"), column("name")],
            sample_rows: vec![
                vec![CellValue::Integer(1), CellValue::Text("a".into())],
                vec![CellValue::Integer(2), CellValue::Null],
            ],
        }
    }

    #[test]
    fn test_text_layout() {
        let mut buf = Vec::new();
        let mut report = TextReport::new(&mut buf);
        report.begin(Path::new("dev.db"), 1).unwrap();
        report.table(&sample_table()).unwrap();
        report.finish().unwrap();

        let expected = "Database: dev.db\n\
                        ------------------------------\n\
                        \n\
                        Table: T\n\
                        Row count: 2\n\
                        Columns: id, name\n\
                        Sample data:\n  (1, 'a')\n  (2, None)\n";
        assert_eq!(String::from_utf8(buf).unwrap(), expected);
    }

    #[test]
    fn test_text_empty_table_placeholder() {
        let mut buf = Vec::new();
        let mut report = TextReport::new(&mut buf);
        let table = TableReport {
            row_count: 0,
            sample_rows: Vec::new(),
            ..sample_table()
        };
        report.table(&table).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with("Columns: id, name\n  (Empty)\n"));
        assert!(!text.contains("Sample data:"));
    }

    #[test]
    fn test_text_no_tables() {
        let mut buf = Vec::new();
        let mut report = TextReport::new(&mut buf);
        report.begin(Path::new("empty.db"), 0).unwrap();
        report.finish().unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Database: empty.db\n------------------------------\nNo tables found.\n"
        );
    }

    #[test]
    fn test_json_document() {
        let mut buf = Vec::new();
        let mut report = JsonReport::new(&mut buf);
        report.begin(Path::new("dev.db"), 1).unwrap();
        report.table(&sample_table()).unwrap();
        report.finish().unwrap();

        let doc: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(doc["database"], "dev.db");
        assert_eq!(doc["tables"][0]["name"], "T");
        assert_eq!(doc["tables"][0]["row_count"], 2);
        assert_eq!(doc["tables"][0]["columns"][1]["name"], "name");
        assert_eq!(doc["tables"][0]["sample_rows"][1], serde_json::json!([2, null]));
    }
}
