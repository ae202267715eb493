//! CSV export of truck statements
//!
//! Writes one line per statement row followed by a TOTAL line. Amounts use
//! the Indonesian display notation so the file reads the same as the screen.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::{MuatanError, MuatanResult};
use crate::models::format_localized_amount;
use crate::services::TruckStatement;

/// Column headers of an exported statement
pub const STATEMENT_HEADERS: [&str; 10] = [
    "No",
    "Date",
    "Cargo",
    "Freight Cost",
    "Cargo Type",
    "Balen",
    "Balen Freight Cost",
    "Balen Cargo Type",
    "Total",
    "Notes",
];

fn export_error(err: impl std::fmt::Display) -> MuatanError {
    MuatanError::Export(err.to_string())
}

/// Export a statement to CSV
pub fn export_statement_csv<W: Write>(
    statement: &TruckStatement,
    writer: W,
) -> MuatanResult<()> {
    let mut out = csv::Writer::from_writer(writer);

    out.write_record(STATEMENT_HEADERS).map_err(export_error)?;

    for row in &statement.rows {
        let record = &row.record;
        let total = match record.total {
            Some(total) => format_localized_amount(Some(total)),
            None => "-".to_string(),
        };

        out.write_record([
            row.number.to_string(),
            record.date.format("%d/%m/%Y").to_string(),
            record.cargo.clone(),
            format_localized_amount(Some(record.freight_cost)),
            record.cargo_type.clone(),
            record.balen.clone(),
            format_localized_amount(Some(record.balen_freight_cost)),
            record.balen_cargo_type.clone(),
            total,
            record.notes.clone(),
        ])
        .map_err(export_error)?;
    }

    let mut footer = vec![String::new(); STATEMENT_HEADERS.len()];
    footer[0] = "TOTAL".to_string();
    footer[8] = format_localized_amount(Some(statement.total_all));
    out.write_record(&footer).map_err(export_error)?;

    out.flush().map_err(export_error)?;
    Ok(())
}

/// Export a statement to a CSV file, replacing it if it exists
pub fn export_statement_file(statement: &TruckStatement, path: &Path) -> MuatanResult<()> {
    let file = File::create(path)
        .map_err(|e| MuatanError::Export(format!("{}: {}", path.display(), e)))?;
    export_statement_csv(statement, file)?;

    info!(
        rows = statement.rows.len(),
        path = %path.display(),
        "exported statement"
    );
    Ok(())
}
