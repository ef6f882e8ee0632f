// src/models/call.rs
//! Call record model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Timestamp format used by call records
pub const CALL_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single phone call to be billed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallRecord {
    /// Number that placed the call
    pub phone_number: i64,

    /// When the call started
    pub call_start: NaiveDateTime,

    /// When the call ended (must not be earlier than the start)
    pub call_end: NaiveDateTime,
}
