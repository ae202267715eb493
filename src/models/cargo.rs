//! Cargo models
//!
//! A `CargoJob` is the value object fed to the settlement calculator. A
//! `CargoRecord` is one saved cargo row of a truck, with its descriptive
//! fields and the total that was saved for it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::rupiah::Rupiah;

/// Cost components of a single cargo job
///
/// Every component defaults to zero when absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CargoJob {
    /// Freight paid for the outbound cargo
    pub freight_cost: Rupiah,

    /// Freight paid for the balen (return) cargo
    pub balen_freight_cost: Rupiah,

    #[serde(alias = "fuel")]
    pub fuel_cost: Rupiah,

    pub operational_cost: Rupiah,

    pub other_cost: Rupiah,
}

impl CargoJob {
    /// Create a job with every component zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a job from optional components, treating `None` as zero
    pub fn from_components(
        freight_cost: Option<Rupiah>,
        balen_freight_cost: Option<Rupiah>,
        fuel_cost: Option<Rupiah>,
        operational_cost: Option<Rupiah>,
        other_cost: Option<Rupiah>,
    ) -> Self {
        Self {
            freight_cost: freight_cost.unwrap_or_default(),
            balen_freight_cost: balen_freight_cost.unwrap_or_default(),
            fuel_cost: fuel_cost.unwrap_or_default(),
            operational_cost: operational_cost.unwrap_or_default(),
            other_cost: other_cost.unwrap_or_default(),
        }
    }

    pub fn with_freight_cost(mut self, amount: impl Into<Rupiah>) -> Self {
        self.freight_cost = amount.into();
        self
    }

    pub fn with_balen_freight_cost(mut self, amount: impl Into<Rupiah>) -> Self {
        self.balen_freight_cost = amount.into();
        self
    }

    pub fn with_fuel_cost(mut self, amount: impl Into<Rupiah>) -> Self {
        self.fuel_cost = amount.into();
        self
    }

    pub fn with_operational_cost(mut self, amount: impl Into<Rupiah>) -> Self {
        self.operational_cost = amount.into();
        self
    }

    pub fn with_other_cost(mut self, amount: impl Into<Rupiah>) -> Self {
        self.other_cost = amount.into();
        self
    }

    /// Freight plus balen freight
    pub fn cargo_gross(&self) -> Rupiah {
        self.freight_cost + self.balen_freight_cost
    }

    /// Fuel, operational and other costs combined
    pub fn deductions(&self) -> Rupiah {
        self.fuel_cost + self.operational_cost + self.other_cost
    }

    /// Validate that no component is negative
    pub fn validate(&self) -> Result<(), CargoValidationError> {
        let components = [
            ("freight_cost", self.freight_cost),
            ("balen_freight_cost", self.balen_freight_cost),
            ("fuel", self.fuel_cost),
            ("operational_cost", self.operational_cost),
            ("other_cost", self.other_cost),
        ];

        match components.iter().find(|(_, amount)| amount.is_negative()) {
            Some((field, _)) => Err(CargoValidationError::NegativeCost(*field)),
            None => Ok(()),
        }
    }
}

/// One saved cargo row of a truck
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CargoRecord {
    /// Licence plate (nopol) of the truck that carried the cargo
    #[serde(default)]
    pub truck: String,

    pub date: NaiveDate,

    #[serde(default)]
    pub cargo: String,

    #[serde(default)]
    pub freight_cost: Rupiah,

    #[serde(default)]
    pub cargo_type: String,

    /// Name of the balen (return) cargo, if any
    #[serde(default)]
    pub balen: String,

    #[serde(default)]
    pub balen_freight_cost: Rupiah,

    #[serde(default)]
    pub balen_cargo_type: String,

    #[serde(default)]
    pub fuel: Rupiah,

    #[serde(default)]
    pub operational_cost: Rupiah,

    #[serde(default)]
    pub other_cost: Rupiah,

    /// Total saved after settlement; `None` until the record is settled
    #[serde(default)]
    pub total: Option<Rupiah>,

    #[serde(default)]
    pub notes: String,
}

impl CargoRecord {
    /// Create an empty record for a truck on a date
    pub fn new(truck: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            truck: truck.into(),
            date,
            cargo: String::new(),
            freight_cost: Rupiah::zero(),
            cargo_type: String::new(),
            balen: String::new(),
            balen_freight_cost: Rupiah::zero(),
            balen_cargo_type: String::new(),
            fuel: Rupiah::zero(),
            operational_cost: Rupiah::zero(),
            other_cost: Rupiah::zero(),
            total: None,
            notes: String::new(),
        }
    }

    /// The cost components of this record
    pub fn job(&self) -> CargoJob {
        CargoJob {
            freight_cost: self.freight_cost,
            balen_freight_cost: self.balen_freight_cost,
            fuel_cost: self.fuel,
            operational_cost: self.operational_cost,
            other_cost: self.other_cost,
        }
    }

    /// Whether a total has been saved for this record
    pub fn is_settled(&self) -> bool {
        self.total.is_some()
    }
}

/// Validation errors for cargo jobs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CargoValidationError {
    NegativeCost(&'static str),
}

impl fmt::Display for CargoValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeCost(field) => write!(f, "{} cannot be negative", field),
        }
    }
}

impl std::error::Error for CargoValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_missing_components_are_zero() {
        let job = CargoJob::from_components(Some(Rupiah::from_whole(1000)), None, None, None, None);
        assert_eq!(job.freight_cost, Rupiah::from_whole(1000));
        assert_eq!(job.deductions(), Rupiah::zero());
    }

    #[test]
    fn test_gross_and_deductions() {
        let job = CargoJob::new()
            .with_freight_cost(Rupiah::from_whole(1000))
            .with_balen_freight_cost(Rupiah::from_whole(500))
            .with_fuel_cost(Rupiah::from_whole(200))
            .with_operational_cost(Rupiah::from_whole(100))
            .with_other_cost(Rupiah::from_whole(50));

        assert_eq!(job.cargo_gross(), Rupiah::from_whole(1500));
        assert_eq!(job.deductions(), Rupiah::from_whole(350));
    }

    #[test]
    fn test_deserialize_partial_job() {
        let job: CargoJob = serde_json::from_str(r#"{"freight_cost": 1000, "fuel": 200}"#).unwrap();
        assert_eq!(job.freight_cost, Rupiah::from_whole(1000));
        assert_eq!(job.fuel_cost, Rupiah::from_whole(200));
        assert_eq!(job.other_cost, Rupiah::zero());
    }

    #[test]
    fn test_validation() {
        assert!(CargoJob::new().with_freight_cost(Rupiah::from_whole(1000)).validate().is_ok());
        assert_eq!(
            CargoJob::new().with_fuel_cost(Rupiah::from_whole(-1)).validate(),
            Err(CargoValidationError::NegativeCost("fuel"))
        );
    }

    #[test]
    fn test_record_job() {
        let mut record = CargoRecord::new("B 1234 CD", date(2025, 1, 15));
        record.freight_cost = Rupiah::from_whole(2_000_000);
        record.fuel = Rupiah::from_whole(500_000);

        let job = record.job();
        assert_eq!(job.freight_cost, Rupiah::from_whole(2_000_000));
        assert_eq!(job.fuel_cost, Rupiah::from_whole(500_000));
        assert!(!record.is_settled());
    }
}
