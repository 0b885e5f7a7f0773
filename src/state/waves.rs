//! Message-list state.

#[cfg(test)]
#[path = "waves_test.rs"]
mod waves_test;

use alloy_primitives::Address;

/// One displayed message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wave {
    /// Account that sent the message.
    pub waver: Address,
    /// Contract timestamp converted to milliseconds since the Unix epoch.
    pub timestamp_ms: u64,
    /// Message text as stored on-chain.
    pub message: String,
}

/// Every message known to the view, in display order.
///
/// Two sources feed this list: the bulk `getAllMsgs` read replaces it
/// wholesale, and each `NewWave` event appends one entry at the end. No
/// identity is tracked, so a message seen by both sources appears twice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WavesState {
    /// Messages, oldest first per the contract's storage order.
    pub waves: Vec<Wave>,
}

impl WavesState {
    /// Replace the entire list with a freshly fetched one.
    pub fn replace_all(&mut self, waves: Vec<Wave>) {
        self.waves = waves;
    }

    /// Append a single live-event message.
    pub fn append_one(&mut self, wave: Wave) {
        self.waves.push(wave);
    }
}
