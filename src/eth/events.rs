//! `NewWave` subscription over an `eth_newFilter` poll loop.
//!
//! DESIGN
//! ======
//! The contract's event stream reaches an injected wallet as a log filter
//! that must be polled; there is no push channel. `watch_new_waves` installs
//! the filter, polls it on the shared cadence, and appends each decoded
//! event to the list. Teardown rides an alive flag flipped by `on_cleanup`:
//! every append passes through `apply_if_alive`, so a poll that resolves
//! during unmount can never mutate state; the loop re-checks the flag after
//! each poll to exit promptly and uninstall the filter.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use alloy_primitives::U256;
use alloy_sol_types::SolEvent;
use leptos::prelude::*;

use crate::eth::portal::{NewWave, PORTAL_ADDRESS};
use crate::eth::provider::Provider;
use crate::eth::types::{FilterParams, LogEntry};
use crate::eth::{EthError, POLL_INTERVAL_MS};
use crate::state::waves::{Wave, WavesState};
use crate::util::time::to_unix_millis;

/// Watch the portal's `NewWave` stream for as long as `alive` stays true.
///
/// Without a provider this returns immediately; the subscription is tied to
/// the page, not to a connected account. Poll failures are logged and the
/// loop keeps going, so a flaky RPC drops events rather than the watcher.
pub async fn watch_new_waves(waves: RwSignal<WavesState>, alive: Arc<AtomicBool>) {
    let Some(provider) = Provider::detect() else {
        return;
    };

    let filter_id = match install_filter(&provider).await {
        Ok(id) => id,
        Err(e) => {
            leptos::logging::warn!("NewWave filter install failed: {e}");
            return;
        }
    };

    loop {
        gloo_timers::future::sleep(std::time::Duration::from_millis(POLL_INTERVAL_MS)).await;
        if !alive.load(Ordering::Relaxed) {
            break;
        }
        match poll_filter(&provider, filter_id).await {
            Ok(changes) => {
                if !changes.is_empty() {
                    waves.update(|w| {
                        apply_if_alive(&alive, w, &changes);
                    });
                }
                if !alive.load(Ordering::Relaxed) {
                    break;
                }
            }
            Err(e) => leptos::logging::warn!("NewWave poll failed: {e}"),
        }
    }

    if let Err(e) = uninstall_filter(&provider, filter_id).await {
        leptos::logging::warn!("NewWave filter uninstall failed: {e}");
    }
}

/// Append the batch only while `alive` is still true.
///
/// A poll may resolve after teardown began; the gate sits at the mutation
/// site itself, so a late batch never touches the list regardless of how
/// the awaits interleave with `on_cleanup`.
pub fn apply_if_alive(alive: &AtomicBool, state: &mut WavesState, changes: &[LogEntry]) -> usize {
    if !alive.load(Ordering::Relaxed) {
        return 0;
    }
    apply_filter_changes(state, changes)
}

/// Decode each filter change and append it to the list, in log order.
/// Returns how many entries were appended. Logs that do not decode as
/// `NewWave` are skipped with a warning; one bad log never drops the batch.
pub fn apply_filter_changes(state: &mut WavesState, changes: &[LogEntry]) -> usize {
    let mut appended = 0;
    for entry in changes {
        match NewWave::decode_raw_log(&entry.topics, &entry.data) {
            Ok(event) => {
                leptos::logging::log!(
                    "NewWave {} {} {}",
                    event.from,
                    event.timestamp,
                    event.message
                );
                state.append_one(Wave {
                    waver: event.from,
                    timestamp_ms: to_unix_millis(event.timestamp),
                    message: event.message,
                });
                appended += 1;
            }
            Err(e) => leptos::logging::warn!("skipping undecodable NewWave log: {e}"),
        }
    }
    appended
}

/// Install a log filter scoped to the portal address and the `NewWave` topic.
async fn install_filter(provider: &Provider) -> Result<U256, EthError> {
    let params = FilterParams {
        address: PORTAL_ADDRESS,
        topics: vec![NewWave::SIGNATURE_HASH],
    };
    provider.request("eth_newFilter", &(params,)).await
}

/// Fetch the logs accumulated since the last poll.
async fn poll_filter(provider: &Provider, filter_id: U256) -> Result<Vec<LogEntry>, EthError> {
    provider.request("eth_getFilterChanges", &(filter_id,)).await
}

/// Release the filter on the node; it would otherwise idle until expiry.
async fn uninstall_filter(provider: &Provider, filter_id: U256) -> Result<bool, EthError> {
    provider.request("eth_uninstallFilter", &(filter_id,)).await
}
