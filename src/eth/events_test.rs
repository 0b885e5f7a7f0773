use super::*;
use alloy_primitives::{Address, address};

// =====================================================================
// Fixtures
// =====================================================================

fn log_entry(from: Address, seconds: u64, message: &str) -> LogEntry {
    let event = NewWave {
        from,
        timestamp: U256::from(seconds),
        message: message.to_owned(),
    };
    let encoded = event.encode_log_data();
    LogEntry { topics: encoded.topics().to_vec(), data: encoded.data }
}

fn waver_a() -> Address {
    address!("d8dA6BF26964aF9D7eEd9e03E53415D37aA96045")
}

fn waver_b() -> Address {
    address!("Ab5801a7D398351b8bE11C439e05C5B3259aeC9B")
}

// =====================================================================
// apply_filter_changes
// =====================================================================

#[test]
fn appends_decoded_events_in_log_order() {
    let mut state = WavesState::default();
    let changes = vec![
        log_entry(waver_a(), 1_650_549_408, "gm"),
        log_entry(waver_b(), 1_650_549_500, "👋 second"),
    ];

    let appended = apply_filter_changes(&mut state, &changes);

    assert_eq!(appended, 2);
    assert_eq!(state.waves.len(), 2);
    assert_eq!(state.waves[0].waver, waver_a());
    assert_eq!(state.waves[0].message, "gm");
    assert_eq!(state.waves[1].waver, waver_b());
    assert_eq!(state.waves[1].message, "👋 second");
}

#[test]
fn scales_event_timestamps_from_seconds_to_millis() {
    let mut state = WavesState::default();
    let changes = vec![log_entry(waver_a(), 1_650_549_408, "gm")];

    apply_filter_changes(&mut state, &changes);

    assert_eq!(state.waves[0].timestamp_ms, 1_650_549_408_000);
}

#[test]
fn keeps_duplicate_events_as_separate_rows() {
    let mut state = WavesState::default();
    let entry = log_entry(waver_a(), 1_650_549_408, "gm");
    let changes = vec![entry.clone(), entry];

    let appended = apply_filter_changes(&mut state, &changes);

    assert_eq!(appended, 2);
    assert_eq!(state.waves.len(), 2);
}

#[test]
fn skips_undecodable_logs_without_dropping_the_batch() {
    let mut state = WavesState::default();
    let mut broken = log_entry(waver_a(), 1_650_549_408, "lost");
    // Strip the indexed sender topic; the event no longer decodes.
    broken.topics.truncate(1);
    let changes = vec![
        log_entry(waver_a(), 1_650_549_408, "first"),
        broken,
        log_entry(waver_b(), 1_650_549_500, "third"),
    ];

    let appended = apply_filter_changes(&mut state, &changes);

    assert_eq!(appended, 2);
    assert_eq!(state.waves.len(), 2);
    assert_eq!(state.waves[0].message, "first");
    assert_eq!(state.waves[1].message, "third");
}

#[test]
fn an_empty_poll_appends_nothing() {
    let mut state = WavesState::default();

    let appended = apply_filter_changes(&mut state, &[]);

    assert_eq!(appended, 0);
    assert!(state.waves.is_empty());
}

// =====================================================================
// apply_if_alive
// =====================================================================

#[test]
fn appends_while_the_alive_flag_is_set() {
    let alive = AtomicBool::new(true);
    let mut state = WavesState::default();
    let changes = vec![log_entry(waver_a(), 1_650_549_408, "gm")];

    let appended = apply_if_alive(&alive, &mut state, &changes);

    assert_eq!(appended, 1);
    assert_eq!(state.waves.len(), 1);
}

#[test]
fn ignores_a_late_batch_after_the_alive_flag_clears() {
    let alive = AtomicBool::new(true);
    let mut state = WavesState::default();
    let first = vec![log_entry(waver_a(), 1_650_549_408, "gm")];
    apply_if_alive(&alive, &mut state, &first);

    alive.store(false, Ordering::Relaxed);
    let late = vec![log_entry(waver_b(), 1_650_549_500, "after unmount")];
    let appended = apply_if_alive(&alive, &mut state, &late);

    assert_eq!(appended, 0);
    assert_eq!(state.waves.len(), 1);
    assert_eq!(state.waves[0].message, "gm");
}
