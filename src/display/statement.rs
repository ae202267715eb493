//! Truck statement display formatting

use crate::models::format_localized_amount;
use crate::services::{StatementRow, TruckStatement};

const HEADERS: [&str; 10] = [
    "No",
    "Date",
    "Cargo",
    "Freight",
    "Type",
    "Balen",
    "Balen Freight",
    "Balen Type",
    "Total",
    "Notes",
];

// Columns holding amounts are right-aligned
const MONEY_COLUMNS: [usize; 3] = [3, 6, 8];

fn row_cells(row: &StatementRow) -> [String; 10] {
    let record = &row.record;
    [
        row.number.to_string(),
        record.date.format("%d/%m/%Y").to_string(),
        dash_if_empty(&record.cargo),
        format_localized_amount(Some(record.freight_cost)),
        dash_if_empty(&record.cargo_type),
        dash_if_empty(&record.balen),
        format_localized_amount(Some(record.balen_freight_cost)),
        dash_if_empty(&record.balen_cargo_type),
        record
            .total
            .map(|total| total.to_string())
            .unwrap_or_else(|| "-".to_string()),
        record.notes.clone(),
    ]
}

fn dash_if_empty(value: &str) -> String {
    if value.trim().is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

fn format_line(cells: &[String], widths: &[usize]) -> String {
    let parts: Vec<String> = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, width))| {
            if MONEY_COLUMNS.contains(&i) {
                format!("{:>width$}", cell, width = *width)
            } else {
                format!("{:<width$}", cell, width = *width)
            }
        })
        .collect();
    format!("{}\n", parts.join("  ").trim_end())
}

/// Format a statement as a table
pub fn format_statement(statement: &TruckStatement) -> String {
    let title = match &statement.truck {
        Some(truck) => format!("Cargo statement for {}\n\n", truck),
        None => "Cargo statement\n\n".to_string(),
    };

    if statement.is_empty() {
        return format!("{}No cargo records found.\n", title);
    }

    let rows: Vec<[String; 10]> = statement.rows.iter().map(row_cells).collect();

    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.len()).collect();
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let total_text = format_localized_amount(Some(statement.total_all));
    widths[0] = widths[0].max("TOTAL".len());
    widths[8] = widths[8].max(total_text.len());

    let headers: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
    let line_width = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);

    let mut output = title;
    output.push_str(&format_line(&headers, &widths));
    output.push_str(&format!("{:-<width$}\n", "", width = line_width));

    for cells in &rows {
        output.push_str(&format_line(cells, &widths));
    }

    output.push_str(&format!("{:-<width$}\n", "", width = line_width));

    let mut footer = vec![String::new(); HEADERS.len()];
    footer[0] = "TOTAL".to_string();
    footer[8] = total_text;
    output.push_str(&format_line(&footer, &widths));

    let unsettled = statement.unsettled_count();
    if unsettled > 0 {
        output.push_str(&format!(
            "\n{} record(s) have no saved total and are not counted.\n",
            unsettled
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CargoRecord, Rupiah};
    use chrono::NaiveDate;

    fn record(day: u32, total: Option<i64>) -> CargoRecord {
        let mut r = CargoRecord::new(
            "B 1234 XY",
            NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
        );
        r.cargo = "Semen".into();
        r.freight_cost = Rupiah::from_whole(1_000_000);
        r.total = total.map(Rupiah::from_whole);
        r
    }

    #[test]
    fn test_format_statement() {
        let statement = TruckStatement::build(
            Some("B 1234 XY"),
            vec![record(1, Some(700_000)), record(5, Some(350_000))],
        );
        let output = format_statement(&statement);

        assert!(output.starts_with("Cargo statement for B 1234 XY"));
        assert!(output.contains("Balen Freight"));
        assert!(output.contains("05/03/2024"));
        assert!(output.contains("Rp 1.050.000"));
        assert!(output.contains("TOTAL"));

        // newest row printed first
        let newer = output.find("05/03/2024").unwrap();
        let older = output.find("01/03/2024").unwrap();
        assert!(newer < older);
    }

    #[test]
    fn test_unsettled_rows_are_reported() {
        let statement = TruckStatement::build(None, vec![record(1, None)]);
        let output = format_statement(&statement);

        assert!(output.contains("1 record(s) have no saved total"));
        assert!(output.contains("Rp 0"));
    }

    #[test]
    fn test_empty_statement() {
        let statement = TruckStatement::build(Some("D 1 AB"), Vec::new());
        let output = format_statement(&statement);
        assert!(output.contains("No cargo records found."));
    }
}
