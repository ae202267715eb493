//! Settle CLI command
//!
//! Computes the settlement of one cargo job from amounts typed on the
//! command line. Amounts accept Indonesian notation (`Rp 1.500.000`).

use clap::Args;
use serde::Serialize;

use crate::display::format_settlement;
use crate::error::{MuatanError, MuatanResult};
use crate::models::{parse_localized_amount, CargoJob, SettlementResult};
use crate::services::compute_settlement;

/// Arguments of the settle command
#[derive(Args, Debug)]
pub struct SettleArgs {
    /// Freight cost of the outbound cargo
    #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
    pub freight: String,
    /// Freight cost of the return (balen) cargo
    #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
    pub balen: String,
    /// Fuel cost
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub fuel: String,
    /// Operational cost
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub operational: String,
    /// Other cost
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub other: String,
    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct SettlementOutput<'a> {
    job: &'a CargoJob,
    settlement: &'a SettlementResult,
}

/// Handle the settle command
pub fn handle_settle_command(args: SettleArgs) -> MuatanResult<()> {
    let job = CargoJob::new()
        .with_freight_cost(parse_localized_amount(&args.freight))
        .with_balen_freight_cost(parse_localized_amount(&args.balen))
        .with_fuel_cost(parse_localized_amount(&args.fuel))
        .with_operational_cost(parse_localized_amount(&args.operational))
        .with_other_cost(parse_localized_amount(&args.other));

    job.validate()
        .map_err(|e| MuatanError::Validation(e.to_string()))?;

    let result = compute_settlement(&job);

    if args.json {
        let output = SettlementOutput {
            job: &job,
            settlement: &result,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", format_settlement(&job, &result));
    }

    Ok(())
}
