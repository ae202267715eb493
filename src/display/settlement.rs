//! Settlement display formatting

use rust_decimal::Decimal;

use crate::models::{CargoJob, SettlementResult};
use crate::services::CUT_PAYMENT_RATE;

/// Format the breakdown of one settlement
pub fn format_settlement(job: &CargoJob, result: &SettlementResult) -> String {
    let rate = (CUT_PAYMENT_RATE * Decimal::ONE_HUNDRED).normalize();
    let cut_label = format!("Cut Payment ({}%)", rate);

    let lines = [
        ("Freight", job.freight_cost.to_string()),
        ("Balen Freight", job.balen_freight_cost.to_string()),
        ("Cargo Gross", result.cargo_gross.to_string()),
        ("Fuel", job.fuel_cost.to_string()),
        ("Operational", job.operational_cost.to_string()),
        ("Other", job.other_cost.to_string()),
        ("Cost Muatan", result.cost_muatan.to_string()),
        (cut_label.as_str(), result.cut_payment.to_string()),
        ("Total", result.total.to_string()),
    ];

    let label_width = lines.iter().map(|(label, _)| label.len()).max().unwrap_or(0) + 1;
    let value_width = lines.iter().map(|(_, value)| value.len()).max().unwrap_or(0);

    let mut output = String::from("Settlement\n");
    for (i, (label, value)) in lines.iter().enumerate() {
        // rule above the derived figures
        if i == 2 || i == 6 || i == 8 {
            output.push_str(&format!(
                "  {:<label_width$} {:->value_width$}\n",
                "",
                "",
                label_width = label_width,
                value_width = value_width,
            ));
        }
        output.push_str(&format!(
            "  {:<label_width$} {:>value_width$}\n",
            format!("{}:", label),
            value,
            label_width = label_width,
            value_width = value_width,
        ));
    }

    if !result.is_payable() {
        output.push('\n');
        output.push_str("  Nothing payable: cost muatan is not positive.\n");
    }

    output
}
