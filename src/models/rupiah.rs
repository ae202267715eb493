//! Rupiah type for representing currency amounts
//!
//! Stores amounts as a `Decimal` of whole Rupiah so that arithmetic never goes
//! through floating point. Parsing and formatting follow the Indonesian
//! convention: `.` groups thousands and `,` separates decimals.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Currency marker printed before every formatted amount
const CURRENCY_MARKER: &str = "Rp";

/// Fraction digits kept when formatting (matches the id-ID number format)
const MAX_FRACTION_DIGITS: u32 = 3;

/// Largest magnitude accepted from text: one quintillion Rupiah (10^18)
///
/// Parsed amounts beyond it degrade to zero, which keeps sums of parsed
/// amounts far from the `Decimal` range limit.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_808_348_672, 232_830_643, 0, false, 0);

/// A monetary amount in Indonesian Rupiah
///
/// Rupiah has no subunit in practice, so most amounts are whole numbers, but
/// fractional values typed by users are preserved rather than truncated.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Rupiah(Decimal);

impl Rupiah {
    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Wrap a decimal amount
    pub const fn from_decimal(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create an amount from whole Rupiah
    ///
    /// # Examples
    /// ```
    /// use muatan_cli::models::Rupiah;
    /// let amount = Rupiah::from_whole(1_500_000);
    /// assert_eq!(amount.to_string(), "Rp 1.500.000");
    /// ```
    pub fn from_whole(rupiah: i64) -> Self {
        Self(Decimal::from(rupiah))
    }

    /// Get the underlying decimal amount
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Multiply by a rate, e.g. a percentage expressed as `0.30`
    pub fn scaled(&self, rate: Decimal) -> Self {
        Self(self.0.saturating_mul(rate))
    }

    /// Round to whole Rupiah, halves away from zero
    pub fn round_whole(&self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Parse an amount typed in Indonesian notation
    ///
    /// Accepts `"Rp 1.500.000"`, `"1.500.000,50"`, `"1 500 000"`,
    /// `"700000"`, `"1,500"` and the like. Whitespace and the letters of the
    /// `Rp` marker are dropped wherever they appear. Anything without a
    /// numeric prefix yields zero: this runs on every keystroke of a live
    /// input, where partial text is normal.
    ///
    /// Amounts whose magnitude exceeds [`MAX_AMOUNT`], including integer
    /// parts too long for a `Decimal`, also yield zero.
    ///
    /// # Examples
    /// ```
    /// use muatan_cli::models::Rupiah;
    /// assert_eq!(Rupiah::parse_localized("Rp 1.500.000"), Rupiah::from_whole(1_500_000));
    /// assert_eq!(Rupiah::parse_localized("abc"), Rupiah::zero());
    /// ```
    pub fn parse_localized(text: &str) -> Self {
        let cleaned = strip_currency_marker(text);
        let cleaned = cleaned.as_str();

        let normalized = if is_indonesian_grouped(cleaned) {
            cleaned.replace('.', "").replacen(',', ".", 1)
        } else {
            cleaned.replace(',', "")
        };

        let amount = parse_leading_decimal(&normalized)
            .filter(|amount| amount.abs() <= MAX_AMOUNT)
            .unwrap_or(Decimal::ZERO);
        Self(amount)
    }
}

/// Parse a localized amount string into Rupiah, degrading to zero
pub fn parse_localized_amount(text: &str) -> Rupiah {
    Rupiah::parse_localized(text)
}

/// Format an optional amount as `Rp 1.500.000`; a missing amount is `Rp 0`
pub fn format_localized_amount(amount: Option<Rupiah>) -> String {
    amount.unwrap_or_default().to_string()
}

/// Drop all whitespace and every `R`/`p` letter, in either case
///
/// `"Rp 1 500 000"` and `"1.500.000 Rp"` both become digits and separators.
fn strip_currency_marker(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, 'R' | 'r' | 'P' | 'p'))
        .collect()
}

/// Whether `s` looks like `1.500.000` or `1.500.000,50`
///
/// The first group holds 1-3 digits, every following `.` group exactly 3,
/// and an optional `,` introduces one or more decimal digits.
fn is_indonesian_grouped(s: &str) -> bool {
    let s = s.strip_prefix('-').unwrap_or(s);
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());

    let (integer, fraction) = match s.split_once(',') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (s, None),
    };

    if let Some(fraction) = fraction {
        if fraction.is_empty() || !all_digits(fraction) {
            return false;
        }
    }

    let mut groups = integer.split('.');
    let first_ok = groups
        .next()
        .is_some_and(|g| (1..=3).contains(&g.len()) && all_digits(g));

    first_ok && groups.all(|g| g.len() == 3 && all_digits(g))
}

/// Parse the longest numeric prefix of `s` (sign, digits, optional fraction)
///
/// Trailing garbage is ignored, so `"12abc"` is 12. Returns `None` when no
/// digit is found at the start.
fn parse_leading_decimal(s: &str) -> Option<Decimal> {
    let bytes = s.as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos = 1;
            true
        }
        Some(b'+') => {
            pos = 1;
            false
        }
        _ => false,
    };

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let integer = &s[int_start..pos];

    let mut fraction = "";
    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        fraction = &s[frac_start..frac_end];
    }

    if integer.is_empty() && fraction.is_empty() {
        return None;
    }

    let mut normalized = String::with_capacity(integer.len() + fraction.len() + 3);
    if negative {
        normalized.push('-');
    }
    normalized.push_str(if integer.is_empty() { "0" } else { integer });
    if !fraction.is_empty() {
        normalized.push('.');
        normalized.push_str(fraction);
    }

    Decimal::from_str(&normalized).ok()
}

/// Render digits the id-ID way: `1.500.000,5`
fn localized_digits(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(MAX_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize();

    if rounded.is_zero() {
        return "0".to_string();
    }

    let plain = rounded.abs().to_string();
    let (integer, fraction) = match plain.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (plain.as_str(), None),
    };

    let mut out = String::with_capacity(plain.len() + plain.len() / 3 + 2);
    if rounded.is_sign_negative() {
        out.push('-');
    }
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    if let Some(fraction) = fraction {
        out.push(',');
        out.push_str(fraction);
    }

    out
}

impl fmt::Display for Rupiah {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", CURRENCY_MARKER, localized_digits(self.0))
    }
}

impl From<Decimal> for Rupiah {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl From<i64> for Rupiah {
    fn from(rupiah: i64) -> Self {
        Self::from_whole(rupiah)
    }
}

// Arithmetic saturates at the `Decimal` range limits instead of panicking
impl Add for Rupiah {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Rupiah {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Rupiah {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Rupiah {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Rupiah {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Sum for Rupiah {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Rupiah::zero(), |acc, r| acc + r)
    }
}
