// src/config.rs
//! Tariff configuration
//!
//! Loaded once per run from a JSON file and read-only afterwards. The
//! primetime window is date-agnostic in the file; `primetime_window` binds
//! it to a concrete calendar date for each computation.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::BillingError;
use crate::BillingResult;

/// Time-of-day format used for the window bounds in the tariff file
const WINDOW_TIME_FORMAT: &str = "%H:%M:%S";

/// Tariff parameters for one billing run
#[derive(Debug, Clone)]
pub struct TariffConfig {
    /// Start of the primetime window (time of day, second precision)
    pub primetime_start: NaiveTime,

    /// End of the primetime window, strictly after the start
    pub primetime_end: NaiveTime,

    /// Rate per started minute inside the primetime window
    pub primetime_rate: Decimal,

    /// Rate per started minute outside the primetime window
    pub other_rate: Decimal,

    /// Surcharge per started minute beyond the overtime limit
    pub overtime_rate: Decimal,

    /// Billing duration beyond which the overtime surcharge applies
    pub overtime_limit_seconds: i64,
}

/// Raw tariff file shape; the window bounds arrive as "HH:MM:SS" strings
#[derive(Debug, Deserialize)]
struct TariffFile {
    primetime_start: String,
    primetime_end: String,
    primetime_rate: Decimal,
    other_rate: Decimal,
    overtime_rate: Decimal,
    overtime_limit_seconds: i64,
}

impl TariffConfig {
    /// Load and validate a tariff from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> BillingResult<Self> {
        let raw = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&raw)
    }

    /// Parse and validate a tariff from JSON text.
    pub fn from_json_str(raw: &str) -> BillingResult<Self> {
        let file: TariffFile =
            serde_json::from_str(raw).map_err(|e| BillingError::Config(e.to_string()))?;

        let config = Self {
            primetime_start: parse_window_time(&file.primetime_start)?,
            primetime_end: parse_window_time(&file.primetime_end)?,
            primetime_rate: file.primetime_rate,
            other_rate: file.other_rate,
            overtime_rate: file.overtime_rate,
            overtime_limit_seconds: file.overtime_limit_seconds,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> BillingResult<()> {
        if self.primetime_start >= self.primetime_end {
            return Err(BillingError::Config(format!(
                "Primetime window start {} is not before end {}",
                self.primetime_start, self.primetime_end
            )));
        }

        for (name, rate) in [
            ("primetime_rate", self.primetime_rate),
            ("other_rate", self.other_rate),
            ("overtime_rate", self.overtime_rate),
        ] {
            if rate < Decimal::ZERO {
                return Err(BillingError::Config(format!(
                    "{} is negative: {}",
                    name, rate
                )));
            }
        }

        if self.overtime_limit_seconds < 0 {
            return Err(BillingError::Config(format!(
                "overtime_limit_seconds is negative: {}",
                self.overtime_limit_seconds
            )));
        }

        Ok(())
    }

    /// Bind the date-agnostic primetime window to a calendar date.
    ///
    /// Pure helper: the configuration itself is never rebound.
    pub fn primetime_window(&self, date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
        (
            date.and_time(self.primetime_start),
            date.and_time(self.primetime_end),
        )
    }
}

fn parse_window_time(raw: &str) -> BillingResult<NaiveTime> {
    NaiveTime::parse_from_str(raw, WINDOW_TIME_FORMAT)
        .map_err(|e| BillingError::Config(format!("Invalid window time {:?}: {}", raw, e)))
}
