//! Read-only SQLite session backing a single inspection pass.

use rusqlite::{Connection, OpenFlags};

use crate::config::InspectorConfig;
use crate::error::InspectError;
use crate::models::{CellValue, ColumnInfo, TableReport};

/// Table SQLite maintains for AUTOINCREMENT counters.
pub const BOOKKEEPING_TABLE: &str = "sqlite_sequence";

pub fn is_bookkeeping_table(name: &str) -> bool {
    name == BOOKKEEPING_TABLE
}

/// Quote a table name for interpolation into SQL.
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Owns the connection for the lifetime of the pass. Dropping it closes the
/// connection, so every early return releases the handle.
#[derive(Debug)]
pub struct Inspector {
    conn: Connection,
    sample_limit: u32,
}

impl Inspector {
    pub fn open(config: &InspectorConfig) -> Result<Self, InspectError> {
        if !config.path.exists() {
            return Err(InspectError::MissingFile(config.path.clone()));
        }

        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(&config.path, flags)?;
        tracing::info!(path = %config.path.display(), "opened database");

        Ok(Self {
            conn,
            sample_limit: config.sample_limit,
        })
    }

    /// Every `table` entry in the catalog, in catalog order.
    pub fn table_names(&self) -> Result<Vec<String>, InspectError> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table'")?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(names)
    }

    pub fn row_count(&self, table: &str) -> Result<i64, InspectError> {
        let sql = format!("SELECT COUNT(*) FROM {}", quote_identifier(table));
        Ok(self.conn.query_row(&sql, [], |row| row.get(0))?)
    }

    pub fn columns(&self, table: &str) -> Result<Vec<ColumnInfo>, InspectError> {
        let mut stmt = self
            .conn
            .prepare(&format!("PRAGMA table_info({})", quote_identifier(table)))?;
        let columns = stmt
            .query_map([], |row| {
                Ok(ColumnInfo {
                    name: row.get(1)?,
                    data_type: row.get(2)?,
                    not_null: row.get::<_, i32>(3)? != 0,
                    default_value: row.get(4)?,
                    primary_key: row.get::<_, i32>(5)? != 0,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(columns)
    }

    /// Up to `limit` rows in whatever order an unordered scan returns them.
    pub fn sample_rows(
        &self,
        table: &str,
        limit: u32,
    ) -> Result<Vec<Vec<CellValue>>, InspectError> {
        let sql = format!("SELECT * FROM {} LIMIT ?1", quote_identifier(table));
        let mut stmt = self.conn.prepare(&sql)?;
        let column_count = stmt.column_count();

        let rows = stmt
            .query_map([limit], |row| {
                (0..column_count)
                    .map(|i| row.get_ref(i).map(CellValue::from))
                    .collect::<Result<Vec<_>, _>>()
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Count, schema and sample for one table.
    pub fn describe(&self, table: &str) -> Result<TableReport, InspectError> {
        let row_count = self.row_count(table)?;
        let columns = self.columns(table)?;
        let sample_rows = self.sample_rows(table, self.sample_limit)?;
        tracing::debug!(table, row_count, sampled = sample_rows.len(), "described table");

        Ok(TableReport {
            name: table.to_string(),
            row_count,
            columns,
            sample_rows,
        })
    }

    pub fn close(self) -> Result<(), InspectError> {
        self.conn.close().map_err(|(_, e)| InspectError::Database(e))?;
        tracing::debug!("closed database");
        Ok(())
    }
}
