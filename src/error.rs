// src/error.rs
use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BillingError {
    #[error("Call end {end} is earlier than call start {start}")]
    InvalidInterval {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
