//! Settlement result model

use serde::{Deserialize, Serialize};

use super::rupiah::Rupiah;

/// Outcome of settling one cargo job
///
/// `cost_muatan` may be zero or negative; `cut_payment` and `total` never are.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementResult {
    /// Freight plus balen freight, before deductions
    pub cargo_gross: Rupiah,

    /// Gross minus fuel, operational and other costs
    pub cost_muatan: Rupiah,

    /// Fixed-rate deduction withheld from a positive cost muatan
    pub cut_payment: Rupiah,

    /// Final payable amount
    pub total: Rupiah,
}

impl SettlementResult {
    /// Whether anything is paid out
    pub fn is_payable(&self) -> bool {
        self.total.is_positive()
    }
}
