//! Message wall: every recorded wave, in contract storage order.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::state::waves::{Wave, WavesState};

#[component]
pub fn WaveList() -> impl IntoView {
    let waves = expect_context::<RwSignal<WavesState>>();

    view! {
        <div class="wave-list">
            {move || {
                waves
                    .get()
                    .waves
                    .into_iter()
                    .map(|wave| view! { <WaveCard wave /> })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

/// One recorded wave: sender, local arrival time, message text.
#[component]
fn WaveCard(wave: Wave) -> impl IntoView {
    let Wave { waver, timestamp_ms, message } = wave;

    view! {
        <div class="wave-card">
            <div class="wave-card__row">"Address: " {waver.to_string()}</div>
            <div class="wave-card__row">"Time: " {format_time(timestamp_ms)}</div>
            <div class="wave-card__row">"Message: " {message}</div>
        </div>
    }
}

/// Render a unix-millisecond timestamp in the visitor's local time zone.
#[allow(clippy::cast_precision_loss)]
fn format_time(timestamp_ms: u64) -> String {
    js_sys::Date::new(&JsValue::from_f64(timestamp_ms as f64))
        .to_string()
        .into()
}
