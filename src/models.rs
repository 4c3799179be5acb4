use std::fmt;

use rusqlite::types::ValueRef;
use serde::{Serialize, Serializer};

/// One scalar read from a sample row, tagged with its SQLite storage class.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl From<ValueRef<'_>> for CellValue {
    fn from(value: ValueRef<'_>) -> Self {
        match value {
            ValueRef::Null => CellValue::Null,
            ValueRef::Integer(i) => CellValue::Integer(i),
            ValueRef::Real(f) => CellValue::Real(f),
            ValueRef::Text(t) => CellValue::Text(String::from_utf8_lossy(t).into_owned()),
            ValueRef::Blob(b) => CellValue::Blob(b.to_vec()),
        }
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Null => serializer.serialize_none(),
            CellValue::Integer(i) => serializer.serialize_i64(*i),
            CellValue::Real(f) => serializer.serialize_f64(*f),
            CellValue::Text(s) => serializer.serialize_str(s),
            CellValue::Blob(b) => serializer.serialize_str(&hex::encode(b)),
        }
    }
}

/// Literal rendering used in the text report.
impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => f.write_str("None"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Real(r) => write_real(f, *r),
            CellValue::Text(s) => write_quoted(f, s),
            CellValue::Blob(b) => write!(f, "x'{}'", hex::encode(b)),
        }
    }
}

/// Shortest round-trip digits, switching to `1e+16` / `1e-05` exponent form
/// outside `1e-4 <= |r| < 1e16`.
fn write_real(f: &mut fmt::Formatter<'_>, r: f64) -> fmt::Result {
    if r.is_nan() {
        return f.write_str("nan");
    }
    let scientific = format!("{r:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return write!(f, "{r:?}");
    };
    let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;
    if (-4..16).contains(&exponent) {
        write!(f, "{r:?}")
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        write!(f, "{mantissa}e{sign}{:02}", exponent.abs())
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    write!(f, "{quote}")?;
    for c in s.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c == quote => write!(f, "\\{c}")?,
            c if c.is_control() => write!(f, "\\x{:02x}", c as u32)?,
            c => write!(f, "{c}")?,
        }
    }
    write!(f, "{quote}")
}

/// Render a row as a tuple literal, e.g. `(1, 'Alice')` or `(1,)`.
pub fn format_row(row: &[CellValue]) -> String {
    let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
    if cells.len() == 1 {
        format!("({},)", cells[0])
    } else {
        format!("({})", cells.join(", "))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ColumnInfo {
    pub name: String,
    pub data_type: String,
    pub not_null: bool,
    pub default_value: Option<String>,
    pub primary_key: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableReport {
    pub name: String,
    pub row_count: i64,
    pub columns: Vec<ColumnInfo>,
    pub sample_rows: Vec<Vec<CellValue>>,
}

impl TableReport {
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}
