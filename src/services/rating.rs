// src/services/rating.rs
//! Call cost engine
//!
//! Computes the cost of a single call against the tariff. The call is
//! segmented across the primetime window of its calendar day (splitting at
//! midnight when it spans two days), every segment bills started minutes,
//! and calls longer than the overtime limit pay an additional per-minute
//! surcharge on top of the normal rates.

use chrono::{NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::TariffConfig;
use crate::error::BillingError;
use crate::models::CallRecord;
use crate::BillingResult;

const SECONDS_PER_MINUTE: i64 = 60;

/// Rates one call at a time against an immutable tariff.
///
/// Holds only read-only state, so a single engine can rate a whole batch.
pub struct RatingEngine<'a> {
    tariff: &'a TariffConfig,
    free_number: Option<i64>,
}

impl<'a> RatingEngine<'a> {
    pub fn new(tariff: &'a TariffConfig, free_number: Option<i64>) -> Self {
        Self {
            tariff,
            free_number,
        }
    }

    /// Cost of a single call.
    ///
    /// The promotional number is billed at zero without touching the
    /// timing logic. A call whose end is strictly earlier than its start
    /// fails with [`BillingError::InvalidInterval`]; an end equal to the
    /// start passes that check and resolves to a -1 second billing
    /// duration, which rounds to zero minutes.
    pub fn cost(&self, call: &CallRecord) -> BillingResult<Decimal> {
        if self.free_number == Some(call.phone_number) {
            return Ok(Decimal::ZERO);
        }

        if call.call_end < call.call_start {
            return Err(BillingError::InvalidInterval {
                start: call.call_start,
                end: call.call_end,
            });
        }

        let base = if call.call_start.date() == call.call_end.date() {
            self.cost_same_day(call.call_start, call.call_end)
        } else {
            self.cost_cross_day(call.call_start, call.call_end)
        };

        let overtime = self.overtime_surcharge(call.call_start, call.call_end);
        debug!(
            "Rated call from {}: base={}, overtime={}",
            call.phone_number, base, overtime
        );

        Ok(base + overtime)
    }

    /// Surcharge for the portion of the call beyond the overtime limit.
    ///
    /// Evaluated against the same billing duration as the time-of-day
    /// segmentation and added on top of it; the normal rates still apply
    /// to the overtime portion.
    fn overtime_surcharge(&self, start: NaiveDateTime, end: NaiveDateTime) -> Decimal {
        let overtime_seconds =
            (billing_seconds(start, end) - self.tariff.overtime_limit_seconds).max(0);

        Decimal::from(started_minutes(overtime_seconds)) * self.tariff.overtime_rate
    }

    /// Cost of a call contained in one calendar day.
    fn cost_same_day(&self, start: NaiveDateTime, end: NaiveDateTime) -> Decimal {
        let (window_start, window_end) = self.tariff.primetime_window(start.date());
        let billable = billing_seconds(start, end);

        if start < window_start {
            self.cost_started_before_window(start, end, billable, window_start, window_end)
        } else if start < window_end {
            self.cost_started_inside_window(start, end, billable, window_end)
        } else {
            // Entirely after the window.
            Decimal::from(started_minutes(billable)) * self.tariff.other_rate
        }
    }

    fn cost_started_before_window(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
        billable: i64,
        window_start: NaiveDateTime,
        window_end: NaiveDateTime,
    ) -> Decimal {
        if end < window_start {
            // Never reaches the window.
            return Decimal::from(started_minutes(billable)) * self.tariff.other_rate;
        }

        let pre_seconds = (window_start - start).num_seconds();
        let pre_minutes = started_minutes(pre_seconds);

        if end < window_end {
            let window_seconds = (end - window_start).num_seconds();
            let window_minutes = started_minutes(window_seconds - minute_remainder(pre_seconds));

            Decimal::from(pre_minutes) * self.tariff.other_rate
                + Decimal::from(window_minutes) * self.tariff.primetime_rate
        } else {
            let window_seconds = (window_end - window_start).num_seconds();
            let post_seconds = (end - window_end).num_seconds();

            let window_minutes = started_minutes(window_seconds - minute_remainder(pre_seconds));
            let post_minutes = started_minutes(post_seconds - minute_remainder(window_seconds));

            Decimal::from(pre_minutes) * self.tariff.other_rate
                + Decimal::from(window_minutes) * self.tariff.primetime_rate
                + Decimal::from(post_minutes) * self.tariff.other_rate
        }
    }

    fn cost_started_inside_window(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
        billable: i64,
        window_end: NaiveDateTime,
    ) -> Decimal {
        if end < window_end {
            return Decimal::from(started_minutes(billable)) * self.tariff.primetime_rate;
        }

        let window_seconds = (window_end - start).num_seconds();
        let post_seconds = (end - window_end).num_seconds();

        let window_minutes = started_minutes(window_seconds);
        let post_minutes = started_minutes(post_seconds - minute_remainder(window_seconds));

        Decimal::from(window_minutes) * self.tariff.primetime_rate
            + Decimal::from(post_minutes) * self.tariff.other_rate
    }

    /// Cost of a call spanning two calendar days.
    ///
    /// The call is split into two same-day sub-calls at the midnight
    /// boundary; days fully skipped by longer calls contribute nothing
    /// between the first and last day.
    fn cost_cross_day(&self, start: NaiveDateTime, end: NaiveDateTime) -> Decimal {
        let first_day_end = start
            .date()
            .and_hms_opt(23, 59, 59)
            .expect("23:59:59 is a valid wall-clock time");
        let second_day_start = end.date().and_time(NaiveTime::MIN);

        self.cost_same_day(start, first_day_end) + self.cost_same_day(second_day_start, end)
    }
}

/// Billing duration in seconds: the wall-clock length minus the final
/// started second, which is never billed.
fn billing_seconds(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (end - start).num_seconds() - 1
}

/// Started minutes for a span of billable seconds; zero or negative spans
/// bill nothing.
fn started_minutes(seconds: i64) -> i64 {
    if seconds <= 0 {
        0
    } else {
        (seconds + SECONDS_PER_MINUTE - 1) / SECONDS_PER_MINUTE
    }
}

/// Seconds left until the next minute boundary after a segment has been
/// billed in whole started minutes. The following segment drops this many
/// seconds before rounding, so a boundary minute is never billed twice.
fn minute_remainder(segment_seconds: i64) -> i64 {
    SECONDS_PER_MINUTE - segment_seconds % SECONDS_PER_MINUTE
}
