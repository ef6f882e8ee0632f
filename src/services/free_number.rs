// src/services/free_number.rs
//! Promotional free-number detection
//!
//! One number per batch is billed at zero cost: the number that placed the
//! most calls, with frequency ties resolved to the numerically largest
//! tied number.

use std::collections::HashMap;

use tracing::debug;

use crate::models::CallRecord;

/// Pick the promotional number for a batch.
///
/// Returns the most frequent `phone_number`; ties on frequency resolve to
/// the largest tied number. `None` when the batch is empty.
pub fn find_free_number(records: &[CallRecord]) -> Option<i64> {
    let mut counts: HashMap<i64, usize> = HashMap::new();
    for record in records {
        *counts.entry(record.phone_number).or_insert(0) += 1;
    }

    let free = counts
        .into_iter()
        .max_by_key(|&(number, count)| (count, number))
        .map(|(number, _)| number);

    if let Some(number) = free {
        debug!("Free number for batch: {}", number);
    }

    free
}
