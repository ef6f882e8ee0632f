// src/services/batch.rs
//! Batch processor
//!
//! Rates a whole batch: the promotional free number is detected once over
//! the full batch, then every record is rated independently in input
//! order. The first invalid record aborts the batch with no partial
//! results.

use rust_decimal::Decimal;
use tracing::info;

use crate::config::TariffConfig;
use crate::models::CallRecord;
use crate::services::free_number::find_free_number;
use crate::services::rating::RatingEngine;
use crate::BillingResult;

pub struct BatchCalculator {
    tariff: TariffConfig,
}

impl BatchCalculator {
    pub fn new(tariff: TariffConfig) -> Self {
        Self { tariff }
    }

    /// Compute the cost of every call in the batch, in input order.
    pub fn calculate(&self, records: &[CallRecord]) -> BillingResult<Vec<Decimal>> {
        let free_number = find_free_number(records);
        let engine = RatingEngine::new(&self.tariff, free_number);

        let costs = records
            .iter()
            .map(|record| engine.cost(record))
            .collect::<BillingResult<Vec<_>>>()?;

        info!(
            "Rated {} calls (free number: {:?})",
            costs.len(),
            free_number
        );

        Ok(costs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use rust_decimal_macros::dec;

    use crate::error::BillingError;
    use crate::models::CALL_TIME_FORMAT;

    fn tariff() -> TariffConfig {
        TariffConfig {
            primetime_start: chrono::NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            primetime_end: chrono::NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
            primetime_rate: dec!(1.0),
            other_rate: dec!(0.5),
            overtime_rate: dec!(0.1),
            overtime_limit_seconds: 240,
        }
    }

    fn call(phone_number: i64, start: &str, end: &str) -> CallRecord {
        CallRecord {
            phone_number,
            call_start: NaiveDateTime::parse_from_str(start, CALL_TIME_FORMAT).unwrap(),
            call_end: NaiveDateTime::parse_from_str(end, CALL_TIME_FORMAT).unwrap(),
        }
    }

    #[test]
    fn test_costs_keep_input_order() {
        let calculator = BatchCalculator::new(tariff());
        let records = vec![
            call(11, "2022-01-23 16:00:00", "2022-01-23 16:06:00"),
            call(10, "2022-01-23 08:00:00", "2022-01-23 08:01:00"),
            call(11, "2022-01-23 16:00:00", "2022-01-23 16:01:02"),
        ];

        // 11 places the most calls and is free; only 10 is billed.
        let costs = calculator.calculate(&records).unwrap();
        assert_eq!(costs, vec![dec!(0), dec!(1.0), dec!(0)]);
    }

    #[test]
    fn test_invalid_record_aborts_batch() {
        let calculator = BatchCalculator::new(tariff());
        let records = vec![
            call(10, "2022-01-23 08:00:00", "2022-01-23 08:01:00"),
            call(11, "2022-01-23 08:00:00", "2022-01-23 07:00:48"),
            call(12, "2022-01-23 08:00:00", "2022-01-23 08:01:00"),
        ];

        assert!(matches!(
            calculator.calculate(&records),
            Err(BillingError::InvalidInterval { .. })
        ));
    }

    #[test]
    fn test_empty_batch_yields_no_costs() {
        let calculator = BatchCalculator::new(tariff());
        assert!(calculator.calculate(&[]).unwrap().is_empty());
    }
}
