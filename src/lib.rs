//! Batch call billing engine
//!
//! Rates batches of phone calls against a tariff that splits each day into
//! a primetime window and an off-window rate. It includes:
//!
//! - Tariff configuration with a date-bindable primetime window
//! - A per-call cost engine (time-of-day segmentation, minute round-up,
//!   overtime surcharge)
//! - Free-number detection over the batch
//! - CSV record parsing and cost output

pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod services;

pub use config::TariffConfig;
pub use error::BillingError;
pub use models::CallRecord;
pub use services::{BatchCalculator, RatingEngine};

/// Result type alias using BillingError
pub type BillingResult<T> = Result<T, BillingError>;
