//! Business-day calendars and date adjustment rules.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Something that can tell business days from non-business days.
pub trait BusinessCalendar {
    /// Human-readable calendar name (e.g. a jurisdiction).
    fn name(&self) -> &str;

    fn is_business_day(&self, date: NaiveDate) -> bool;

    /// First business day on or after `date`.
    fn next_business_day(&self, date: NaiveDate) -> NaiveDate {
        let mut current = date;
        while !self.is_business_day(current) {
            match current.succ_opt() {
                Some(next) => current = next,
                None => break,
            }
        }
        current
    }

    /// Last business day on or before `date`.
    fn prev_business_day(&self, date: NaiveDate) -> NaiveDate {
        let mut current = date;
        while !self.is_business_day(current) {
            match current.pred_opt() {
                Some(prev) => current = prev,
                None => break,
            }
        }
        current
    }
}

/// Weekend-aware calendar with an explicit holiday list.
///
/// Holiday rules for a jurisdiction are not generated here; callers supply
/// the dates they observe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayCalendar {
    name: String,
    holidays: BTreeSet<NaiveDate>,
}

impl HolidayCalendar {
    pub fn new(name: impl Into<String>, holidays: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            name: name.into(),
            holidays: holidays.into_iter().collect(),
        }
    }

    /// Calendar where only Saturdays and Sundays are closed.
    pub fn weekends_only(name: impl Into<String>) -> Self {
        Self::new(name, std::iter::empty())
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }

    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }
}

impl Default for HolidayCalendar {
    fn default() -> Self {
        Self::weekends_only("WeekendsOnly")
    }
}

impl BusinessCalendar for HolidayCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_business_day(&self, date: NaiveDate) -> bool {
        !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && !self.is_holiday(date)
    }
}

/// Rule for moving a non-business day onto a business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BusinessDayConvention {
    Unadjusted,
    Following,
    /// Following, unless that crosses into the next month; then preceding.
    #[default]
    ModifiedFollowing,
    Preceding,
    /// Preceding, unless that crosses into the previous month; then following.
    ModifiedPreceding,
}

impl BusinessDayConvention {
    pub fn adjust<C: BusinessCalendar + ?Sized>(&self, calendar: &C, date: NaiveDate) -> NaiveDate {
        match self {
            Self::Unadjusted => date,
            Self::Following => calendar.next_business_day(date),
            Self::Preceding => calendar.prev_business_day(date),
            Self::ModifiedFollowing => {
                let adjusted = calendar.next_business_day(date);
                if adjusted.month() == date.month() {
                    adjusted
                } else {
                    calendar.prev_business_day(date)
                }
            }
            Self::ModifiedPreceding => {
                let adjusted = calendar.prev_business_day(date);
                if adjusted.month() == date.month() {
                    adjusted
                } else {
                    calendar.next_business_day(date)
                }
            }
        }
    }
}
