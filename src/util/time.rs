//! Timestamp conversion helpers.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

use alloy_primitives::U256;

/// Convert a contract timestamp in whole seconds to milliseconds since the
/// Unix epoch, saturating on overflow. Contract timestamps are `uint256`;
/// anything past `u64` range is garbage, so clamping beats wrapping.
#[must_use]
pub fn to_unix_millis(seconds: U256) -> u64 {
    match u64::try_from(seconds) {
        Ok(secs) => secs.saturating_mul(1_000),
        Err(_) => u64::MAX,
    }
}
