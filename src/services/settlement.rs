//! Cargo settlement
//!
//! Computes what is paid out for a cargo job:
//!
//! 1. `cargo_gross = freight + balen_freight`
//! 2. `cost_muatan = cargo_gross - fuel - operational - other`
//! 3. a non-positive `cost_muatan` pays nothing
//! 4. otherwise [`CUT_PAYMENT_RATE`] of it is withheld, rounded half-up to a
//!    whole Rupiah, and the remainder is the total
//!
//! The total is derived by subtraction after rounding the cut, so
//! `total + cut_payment == cost_muatan` always holds for payable jobs.

use rust_decimal::Decimal;

use crate::models::{CargoJob, CargoRecord, Rupiah, SettlementResult};

/// Share of a positive cost muatan withheld as cut payment (30%)
pub const CUT_PAYMENT_RATE: Decimal = Decimal::from_parts(30, 0, 0, false, 2);

/// Settle a cargo job
///
/// Never fails: missing components were already resolved to zero when the
/// job was built.
///
/// # Examples
/// ```
/// use muatan_cli::models::{CargoJob, Rupiah};
/// use muatan_cli::services::compute_settlement;
///
/// let result = compute_settlement(&CargoJob::new().with_freight_cost(Rupiah::from_whole(1000)));
/// assert_eq!(result.cut_payment, Rupiah::from_whole(300));
/// assert_eq!(result.total, Rupiah::from_whole(700));
/// ```
pub fn compute_settlement(job: &CargoJob) -> SettlementResult {
    let cargo_gross = job.cargo_gross();
    let cost_muatan = cargo_gross - job.deductions();

    if !cost_muatan.is_positive() {
        return SettlementResult {
            cargo_gross,
            cost_muatan,
            cut_payment: Rupiah::zero(),
            total: Rupiah::zero(),
        };
    }

    let cut_payment = cost_muatan.scaled(CUT_PAYMENT_RATE).round_whole();

    SettlementResult {
        cargo_gross,
        cost_muatan,
        cut_payment,
        total: cost_muatan - cut_payment,
    }
}

/// Settle a saved cargo record and store the resulting total on it
pub fn settle_record(record: &mut CargoRecord) -> SettlementResult {
    let result = compute_settlement(&record.job());
    record.total = Some(result.total);
    result
}
