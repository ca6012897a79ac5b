use crate::error::{GeneratorError, Result};
use crate::generator::facade::RandomValueGenerator;
use crate::sources::UniformSource;
use chrono::{DateTime, FixedOffset, TimeDelta, TimeZone, Utc};

/// Day offsets are drawn from `[MIN_DAY_OFFSET, MAX_DAY_OFFSET)`.
const MIN_DAY_OFFSET: i32 = 1;
const MAX_DAY_OFFSET: i32 = 100;

fn shift_days<Tz: TimeZone>(reference: DateTime<Tz>, days: i64) -> Result<DateTime<Tz>> {
    reference
        .checked_add_signed(TimeDelta::days(days))
        .ok_or_else(|| GeneratorError::invalid("The shifted date is out of range!"))
}

impl<S: UniformSource> RandomValueGenerator<S> {
    fn day_offset(&self) -> Result<i64> {
        self.get_int(MIN_DAY_OFFSET, MAX_DAY_OFFSET).map(i64::from)
    }

    pub fn get_past_utc_date_time(&self) -> Result<DateTime<Utc>> {
        self.get_past_utc_date_time_from(Utc::now())
    }

    /// `reference` minus 1 to 99 whole days.
    pub fn get_past_utc_date_time_from(&self, reference: DateTime<Utc>) -> Result<DateTime<Utc>> {
        shift_days(reference, -self.day_offset()?)
    }

    pub fn get_future_utc_date_time(&self) -> Result<DateTime<Utc>> {
        self.get_future_utc_date_time_from(Utc::now())
    }

    /// `reference` plus 1 to 99 whole days.
    pub fn get_future_utc_date_time_from(&self, reference: DateTime<Utc>) -> Result<DateTime<Utc>> {
        shift_days(reference, self.day_offset()?)
    }

    pub fn get_past_date_time_offset(&self) -> Result<DateTime<FixedOffset>> {
        self.get_past_date_time_offset_from(Utc::now().fixed_offset())
    }

    /// Like `get_past_utc_date_time_from`, keeping the offset of `reference`.
    pub fn get_past_date_time_offset_from(
        &self,
        reference: DateTime<FixedOffset>,
    ) -> Result<DateTime<FixedOffset>> {
        shift_days(reference, -self.day_offset()?)
    }

    pub fn get_future_date_time_offset(&self) -> Result<DateTime<FixedOffset>> {
        self.get_future_date_time_offset_from(Utc::now().fixed_offset())
    }

    pub fn get_future_date_time_offset_from(
        &self,
        reference: DateTime<FixedOffset>,
    ) -> Result<DateTime<FixedOffset>> {
        shift_days(reference, self.day_offset()?)
    }
}
