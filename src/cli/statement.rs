//! Statement CLI command
//!
//! Imports cargo records from CSV and prints the statement of a truck,
//! optionally exporting it back to CSV.

use std::path::PathBuf;

use clap::Args;

use crate::display::format_statement;
use crate::error::MuatanResult;
use crate::export::export_statement_file;
use crate::services::{import_cargo_file, TruckStatement};

/// Arguments of the statement command
#[derive(Args, Debug)]
pub struct StatementArgs {
    /// CSV file of cargo records
    pub file: PathBuf,
    /// Only include records of this truck plate
    #[arg(short, long)]
    pub truck: Option<String>,
    /// Settle records that have no saved total
    #[arg(long)]
    pub recompute: bool,
    /// Also write the statement to this CSV file
    #[arg(short, long)]
    pub export: Option<PathBuf>,
}

/// Handle the statement command
pub fn handle_statement_command(args: StatementArgs) -> MuatanResult<()> {
    let records = import_cargo_file(&args.file)?;

    let statement = if args.recompute {
        TruckStatement::build_recomputed(args.truck.as_deref(), records)
    } else {
        TruckStatement::build(args.truck.as_deref(), records)
    };

    print!("{}", format_statement(&statement));

    if let Some(path) = args.export {
        export_statement_file(&statement, &path)?;
        println!();
        println!(
            "Exported {} row(s) to {}",
            statement.rows.len(),
            path.display()
        );
    }

    Ok(())
}
