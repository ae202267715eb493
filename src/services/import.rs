//! CSV import of cargo records
//!
//! Reads cargo rows from a CSV file with a header row. Columns are matched by
//! name, so their order does not matter and unknown columns are ignored.
//! Amount cells accept Indonesian notation such as `Rp 1.500.000`.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use tracing::info;

use crate::error::{MuatanError, MuatanResult};
use crate::models::{CargoRecord, Rupiah};

/// Date formats tried in order
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%Y/%m/%d"];

/// Recognised column names and their aliases
const COLUMN_ALIASES: [(&str, &[&str]); 13] = [
    ("truck", &["truck", "nopol"]),
    ("date", &["date", "tanggal"]),
    ("cargo", &["cargo"]),
    ("freight_cost", &["freight_cost"]),
    ("cargo_type", &["cargo_type"]),
    ("balen", &["balen"]),
    ("balen_freight_cost", &["balen_freight_cost"]),
    ("balen_cargo_type", &["balen_cargo_type"]),
    ("fuel", &["fuel", "fuel_cost"]),
    ("operational_cost", &["operational_cost"]),
    ("other_cost", &["other_cost"]),
    ("total", &["total"]),
    ("notes", &["notes"]),
];

/// Maps canonical column names to their index in the file
#[derive(Debug, Clone, Default)]
pub struct ColumnMapping {
    columns: HashMap<&'static str, usize>,
}

impl ColumnMapping {
    /// Detect columns from a header row
    ///
    /// # Errors
    ///
    /// Returns an import error if there is no date column.
    pub fn from_headers(headers: &StringRecord) -> MuatanResult<Self> {
        let mut columns = HashMap::new();

        for (idx, header) in headers.iter().enumerate() {
            let header = header.trim().to_lowercase();
            if let Some((canonical, _)) = COLUMN_ALIASES
                .iter()
                .find(|(_, aliases)| aliases.contains(&header.as_str()))
            {
                columns.entry(*canonical).or_insert(idx);
            }
        }

        if !columns.contains_key("date") {
            return Err(MuatanError::Import(
                "CSV header has no 'date' column".to_string(),
            ));
        }

        Ok(Self { columns })
    }

    fn get<'r>(&self, record: &'r StringRecord, column: &str) -> &'r str {
        self.columns
            .get(column)
            .and_then(|&idx| record.get(idx))
            .map(str::trim)
            .unwrap_or("")
    }

    fn text(&self, record: &StringRecord, column: &str) -> String {
        self.get(record, column).to_string()
    }

    fn amount(&self, record: &StringRecord, column: &str) -> Rupiah {
        Rupiah::parse_localized(self.get(record, column))
    }

    fn optional_amount(&self, record: &StringRecord, column: &str) -> Option<Rupiah> {
        let cell = self.get(record, column);
        if cell.is_empty() || cell == "-" {
            None
        } else {
            Some(Rupiah::parse_localized(cell))
        }
    }
}

/// Parse cargo records from any reader
///
/// Row numbers in errors count the header as row 1.
pub fn import_cargo_csv<R: Read>(reader: R) -> MuatanResult<Vec<CargoRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mapping = ColumnMapping::from_headers(reader.headers()?)?;

    let mut records = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let row_number = idx + 2;
        let row = result
            .map_err(|e| MuatanError::Import(format!("row {}: {}", row_number, e)))?;

        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }

        let record = parse_row(&row, &mapping)
            .map_err(|e| MuatanError::Import(format!("row {}: {}", row_number, e)))?;
        records.push(record);
    }

    info!(count = records.len(), "imported cargo records");
    Ok(records)
}

/// Parse cargo records from a CSV file
pub fn import_cargo_file(path: &Path) -> MuatanResult<Vec<CargoRecord>> {
    let file = File::open(path).map_err(|e| {
        MuatanError::Io(format!("Failed to open {}: {}", path.display(), e))
    })?;
    import_cargo_csv(file)
}

fn parse_row(row: &StringRecord, mapping: &ColumnMapping) -> Result<CargoRecord, String> {
    let date = parse_date(mapping.get(row, "date"))?;

    let record = CargoRecord {
        truck: mapping.text(row, "truck"),
        date,
        cargo: mapping.text(row, "cargo"),
        freight_cost: mapping.amount(row, "freight_cost"),
        cargo_type: mapping.text(row, "cargo_type"),
        balen: mapping.text(row, "balen"),
        balen_freight_cost: mapping.amount(row, "balen_freight_cost"),
        balen_cargo_type: mapping.text(row, "balen_cargo_type"),
        fuel: mapping.amount(row, "fuel"),
        operational_cost: mapping.amount(row, "operational_cost"),
        other_cost: mapping.amount(row, "other_cost"),
        total: mapping.optional_amount(row, "total"),
        notes: mapping.text(row, "notes"),
    };

    record.job().validate().map_err(|e| e.to_string())?;

    Ok(record)
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
        .ok_or_else(|| format!("Could not parse date: '{}'", s))
}
