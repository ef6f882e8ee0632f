// src/models/mod.rs
pub mod call;

pub use call::{CallRecord, CALL_TIME_FORMAT};
