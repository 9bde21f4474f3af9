use std::sync::atomic::{AtomicI64, Ordering};
use time::OffsetDateTime;

/// Current wall-clock time in Unix milliseconds.
pub fn unix_millis() -> i64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}

static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Allocate a time-based id.
///
/// Ids are the decimal form of a millisecond timestamp, bumped past the
/// previous allocation when two calls land in the same millisecond.
pub fn next_id() -> String {
    let now = unix_millis();
    let mut prev = LAST_ID.load(Ordering::Relaxed);
    loop {
        let candidate = now.max(prev + 1);
        match LAST_ID.compare_exchange_weak(prev, candidate, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return candidate.to_string(),
            Err(actual) => prev = actual,
        }
    }
}
