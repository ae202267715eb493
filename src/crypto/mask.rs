//! Display masking for account numbers

/// Mask shown in place of hidden characters
pub const MASK: &str = "****";

/// Number of trailing characters left visible
const VISIBLE_SUFFIX: usize = 4;

/// Mask an account number for display, keeping only the last 4 characters
///
/// Values of 4 characters or fewer are masked entirely.
///
/// # Examples
/// ```
/// use muatan_cli::crypto::mask_account_number;
/// assert_eq!(mask_account_number("1234567890"), "****7890");
/// assert_eq!(mask_account_number("1234"), "****");
/// ```
pub fn mask_account_number(full_number: &str) -> String {
    let len = full_number.chars().count();
    if len <= VISIBLE_SUFFIX {
        return MASK.to_string();
    }

    let suffix: String = full_number.chars().skip(len - VISIBLE_SUFFIX).collect();
    format!("{}{}", MASK, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_values_fully_masked() {
        assert_eq!(mask_account_number(""), "****");
        assert_eq!(mask_account_number("1"), "****");
        assert_eq!(mask_account_number("1234"), "****");
    }

    #[test]
    fn test_keeps_last_four() {
        assert_eq!(mask_account_number("12345"), "****2345");
        assert_eq!(mask_account_number("0012345678"), "****5678");
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        assert_eq!(mask_account_number("ééééé"), "****éééé");
        assert_eq!(mask_account_number("éééé"), "****");
    }
}
