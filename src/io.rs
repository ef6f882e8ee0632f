// src/io.rs
//! Record source and result sink
//!
//! Calls arrive as headerless CSV lines `phone_number,call_start,call_end`
//! with `YYYY-MM-DD HH:MM:SS` timestamps; costs leave as the same columns
//! plus a trailing `costs` column. The format is fixed, so rows are split
//! and written by hand.

use std::fs;
use std::io::Write;
use std::path::Path;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::BillingError;
use crate::models::{CallRecord, CALL_TIME_FORMAT};
use crate::BillingResult;

/// Read call records from a headerless CSV file.
pub fn read_records(path: impl AsRef<Path>) -> BillingResult<Vec<CallRecord>> {
    let raw = fs::read_to_string(path.as_ref())?;
    parse_records(&raw)
}

/// Parse call records from headerless CSV text.
///
/// Blank lines and surrounding whitespace are tolerated.
pub fn parse_records(raw: &str) -> BillingResult<Vec<CallRecord>> {
    let mut records = Vec::new();

    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        records.push(parse_record(line)?);
    }

    debug!("Parsed {} call records", records.len());
    Ok(records)
}

fn parse_record(line: &str) -> BillingResult<CallRecord> {
    let mut fields = line.split(',').map(str::trim);

    let (number, start, end) = match (fields.next(), fields.next(), fields.next(), fields.next()) {
        (Some(number), Some(start), Some(end), None) => (number, start, end),
        _ => {
            return Err(BillingError::InvalidRecord(format!(
                "Expected `phone_number,call_start,call_end`, got: {}",
                line
            )))
        }
    };

    Ok(CallRecord {
        phone_number: number.parse().map_err(|_| {
            BillingError::InvalidRecord(format!("Invalid phone number: {}", number))
        })?,
        call_start: parse_timestamp(start)?,
        call_end: parse_timestamp(end)?,
    })
}

fn parse_timestamp(raw: &str) -> BillingResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, CALL_TIME_FORMAT)
        .map_err(|e| BillingError::InvalidRecord(format!("Invalid timestamp {:?}: {}", raw, e)))
}

/// Write records and their computed costs as CSV.
///
/// One output row per input record, in input order, under a
/// `phone_number,call_start,call_end,costs` header.
pub fn write_costs(
    path: impl AsRef<Path>,
    records: &[CallRecord],
    costs: &[Decimal],
) -> BillingResult<()> {
    fs::write(path.as_ref(), render_costs(records, costs)?)?;
    debug!("Wrote {} costed records", records.len());
    Ok(())
}

fn render_costs(records: &[CallRecord], costs: &[Decimal]) -> BillingResult<Vec<u8>> {
    let mut out = Vec::new();
    writeln!(&mut out, "phone_number,call_start,call_end,costs")?;

    for (record, cost) in records.iter().zip(costs) {
        writeln!(
            &mut out,
            "{},{},{},{}",
            record.phone_number,
            record.call_start.format(CALL_TIME_FORMAT),
            record.call_end.format(CALL_TIME_FORMAT),
            cost
        )?;
    }

    Ok(out)
}
