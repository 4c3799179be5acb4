use std::io::{self, Write};

use crate::cli::OutputFormat;
use crate::config::InspectorConfig;
use crate::error::InspectError;
use crate::inspector::{Inspector, is_bookkeeping_table};
use crate::report::{JsonReport, ReportWriter, TextReport};

// Open, walk the catalog, describe each table, close.
pub fn run<W: Write>(config: &InspectorConfig, out: W) -> Result<(), InspectError> {
    match config.format {
        OutputFormat::Text => inspect(config, &mut TextReport::new(out)),
        OutputFormat::Json => inspect(config, &mut JsonReport::new(out)),
    }
}

fn inspect(config: &InspectorConfig, report: &mut impl ReportWriter) -> Result<(), InspectError> {
    let inspector = Inspector::open(config)?;
    let tables = inspector.table_names()?;

    report.begin(&config.path, tables.len())?;
    for name in tables.iter().filter(|name| !is_bookkeeping_table(name)) {
        let table = inspector.describe(name)?;
        report.table(&table)?;
    }

    inspector.close()?;
    report.finish()
}

/// Print the failure line for `err` and return the exit status to use.
pub fn report_failure(err: &InspectError, out: &mut impl Write) -> io::Result<i32> {
    match err {
        InspectError::MissingFile(_) => writeln!(out, "{err}")?,
        _ => writeln!(out, "Error: {err}")?,
    }
    out.flush()?;
    Ok(err.exit_code())
}
