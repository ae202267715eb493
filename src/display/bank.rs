//! Bank account display formatting

use crate::models::{AccountNumberSource, BankAccountView};

/// Format bank accounts as a table with masked account numbers
pub fn format_bank_account_list(views: &[BankAccountView]) -> String {
    if views.is_empty() {
        return "No bank accounts found.\n".to_string();
    }

    let name_width = views.iter().map(|v| v.name.len()).max().unwrap_or(4).max(4);
    let holder_width = views
        .iter()
        .map(|v| v.account_name.len())
        .max()
        .unwrap_or(6)
        .max(6);
    let number_width = views
        .iter()
        .map(|v| v.account_number_masked.chars().count())
        .max()
        .unwrap_or(14)
        .max(14);

    let mut output = String::new();

    output.push_str(&format!(
        "{:<name_width$}  {:<holder_width$}  {:<number_width$}  {}\n",
        "Bank",
        "Holder",
        "Account Number",
        "Source",
        name_width = name_width,
        holder_width = holder_width,
        number_width = number_width,
    ));

    output.push_str(&format!(
        "{:-<width$}\n",
        "",
        width = name_width + holder_width + number_width + 6 + "unavailable".len()
    ));

    for view in views {
        output.push_str(&format!(
            "{:<name_width$}  {:<holder_width$}  {:<number_width$}  {}\n",
            view.name,
            view.account_name,
            view.account_number_masked,
            view.source,
            name_width = name_width,
            holder_width = holder_width,
            number_width = number_width,
        ));
    }

    let unavailable = views
        .iter()
        .filter(|v| v.source == AccountNumberSource::Unavailable)
        .count();
    if unavailable > 0 {
        output.push_str(&format!(
            "\n{} account number(s) could not be decrypted.\n",
            unavailable
        ));
    }

    output
}

/// Format a single bank account for detailed view
pub fn format_bank_account_details(view: &BankAccountView) -> String {
    let mut output = String::new();

    output.push_str(&format!("Bank:            {}\n", view.name));
    output.push_str(&format!("ID:              {}\n", view.id));
    output.push_str(&format!("Holder:          {}\n", view.account_name));
    output.push_str(&format!("Account Number:  {}\n", view.account_number_masked));
    output.push_str(&format!("Source:          {}\n", view.source));
    output.push_str(&format!(
        "Created:         {}\n",
        view.created_at.format("%Y-%m-%d %H:%M")
    ));

    output
}
