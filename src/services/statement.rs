//! Truck statements
//!
//! Lists the cargo records of a truck, newest first, with the grand total of
//! the totals that were saved. Rows that were never settled contribute
//! nothing to the grand total.

use crate::models::{CargoRecord, Rupiah};

use super::settlement::settle_record;

/// One numbered line of a statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementRow {
    /// 1-based position in the statement
    pub number: usize,
    pub record: CargoRecord,
}

/// The cargo statement of one truck (or of every truck when unfiltered)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruckStatement {
    /// Plate the statement was filtered on
    pub truck: Option<String>,
    pub rows: Vec<StatementRow>,
    /// Sum of saved totals
    pub total_all: Rupiah,
}

impl TruckStatement {
    /// Build a statement from records
    ///
    /// When `truck` is given only records of that plate are kept; plates are
    /// compared ignoring case and surrounding whitespace.
    pub fn build(truck: Option<&str>, records: impl IntoIterator<Item = CargoRecord>) -> Self {
        let wanted = truck.map(normalize_plate);

        let mut records: Vec<CargoRecord> = records
            .into_iter()
            .filter(|r| match &wanted {
                Some(plate) => normalize_plate(&r.truck) == *plate,
                None => true,
            })
            .collect();

        // Newest first; stable so same-day rows keep their input order
        records.sort_by(|a, b| b.date.cmp(&a.date));

        let total_all = records.iter().filter_map(|r| r.total).sum();

        let rows = records
            .into_iter()
            .enumerate()
            .map(|(i, record)| StatementRow {
                number: i + 1,
                record,
            })
            .collect();

        Self {
            truck: truck.map(|t| t.trim().to_string()),
            rows,
            total_all,
        }
    }

    /// Build a statement after settling every record without a saved total
    pub fn build_recomputed(
        truck: Option<&str>,
        records: impl IntoIterator<Item = CargoRecord>,
    ) -> Self {
        let settled = records.into_iter().map(|mut record| {
            if !record.is_settled() {
                settle_record(&mut record);
            }
            record
        });
        Self::build(truck, settled)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows without a saved total
    pub fn unsettled_count(&self) -> usize {
        self.rows.iter().filter(|r| !r.record.is_settled()).count()
    }
}

fn normalize_plate(plate: &str) -> String {
    plate.trim().to_uppercase()
}
