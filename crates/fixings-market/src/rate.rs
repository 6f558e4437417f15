//! Interest-rate value objects and their conventions.
//!
//! These carry the conventions a downstream curve builder needs; they do not
//! compute year fractions or discount factors themselves.

use serde::{Deserialize, Serialize};

/// Day-count convention label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DayCount {
    #[default]
    Actual365Fixed,
    Actual360,
    ActualActual,
    Thirty360,
}

/// How interest compounds between payments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Compounding {
    Simple,
    #[default]
    Compounded,
    Continuous,
}

/// Compounding frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Frequency {
    #[default]
    Annual,
    Semiannual,
    Quarterly,
    Monthly,
    Daily,
}

impl Frequency {
    /// Compounding periods per year.
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Self::Annual => 1,
            Self::Semiannual => 2,
            Self::Quarterly => 4,
            Self::Monthly => 12,
            Self::Daily => 365,
        }
    }
}

/// Conventions attached to every rate built by the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RateConventions {
    pub day_count: DayCount,
    pub compounding: Compounding,
    pub frequency: Frequency,
}

/// A decimal rate together with its conventions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterestRate {
    pub rate: f64,
    pub day_count: DayCount,
    pub compounding: Compounding,
    pub frequency: Frequency,
}

impl InterestRate {
    pub fn new(rate: f64, conventions: RateConventions) -> Self {
        Self {
            rate,
            day_count: conventions.day_count,
            compounding: conventions.compounding,
            frequency: conventions.frequency,
        }
    }

    pub fn conventions(&self) -> RateConventions {
        RateConventions {
            day_count: self.day_count,
            compounding: self.compounding,
            frequency: self.frequency,
        }
    }
}
