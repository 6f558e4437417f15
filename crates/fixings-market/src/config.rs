//! Explicit configuration for the market adapter.

use serde::{Deserialize, Serialize};

use crate::calendar::{BusinessDayConvention, HolidayCalendar};
use crate::rate::RateConventions;

/// Calendar, adjustment rule and rate conventions used to interpret fixings.
///
/// Passed to every adapter call instead of relying on process-wide settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketConfig {
    pub calendar: HolidayCalendar,
    pub convention: BusinessDayConvention,
    pub rates: RateConventions,
}

impl MarketConfig {
    pub fn new(calendar: HolidayCalendar) -> Self {
        Self {
            calendar,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_convention(mut self, convention: BusinessDayConvention) -> Self {
        self.convention = convention;
        self
    }

    #[must_use]
    pub fn with_rates(mut self, rates: RateConventions) -> Self {
        self.rates = rates;
        self
    }
}
