use super::*;
use alloy_primitives::address;

fn wave(message: &str, timestamp_ms: u64) -> Wave {
    Wave {
        waver: address!("d8dA6BF26964aF9D7eEd9e03E53415D37aA96045"),
        timestamp_ms,
        message: message.to_owned(),
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn waves_state_default_is_empty() {
    assert!(WavesState::default().waves.is_empty());
}

// =============================================================
// replace_all
// =============================================================

#[test]
fn replace_all_swaps_the_whole_list() {
    let mut state = WavesState::default();
    state.append_one(wave("stale", 1_000));

    state.replace_all(vec![wave("one", 2_000), wave("two", 3_000)]);

    assert_eq!(state.waves.len(), 2);
    assert_eq!(state.waves[0].message, "one");
    assert_eq!(state.waves[1].message, "two");
}

#[test]
fn replace_all_with_empty_fetch_clears_the_list() {
    let mut state = WavesState::default();
    state.append_one(wave("live", 1_000));

    state.replace_all(Vec::new());

    assert!(state.waves.is_empty());
}

// =============================================================
// append_one
// =============================================================

#[test]
fn append_one_grows_the_list_at_the_end() {
    let mut state = WavesState::default();
    state.replace_all(vec![wave("first", 1_000)]);

    state.append_one(wave("second", 2_000));

    assert_eq!(state.waves.len(), 2);
    assert_eq!(state.waves[1].message, "second");
}

#[test]
fn append_one_keeps_duplicates() {
    // A message delivered by both the bulk read and a replayed event is
    // shown twice; nothing deduplicates.
    let mut state = WavesState::default();
    state.replace_all(vec![wave("gm", 1_000)]);

    state.append_one(wave("gm", 1_000));

    assert_eq!(state.waves.len(), 2);
    assert_eq!(state.waves[0], state.waves[1]);
}
