//! Compose box plus the wallet controls.
//!
//! DESIGN
//! ======
//! The draft lives in a signal local to this component; nothing else reads
//! it. Submission is fire-and-forget onto the local task queue, and the
//! input stays enabled while a transaction mines, matching the wallet's own
//! behavior of queueing whatever the user signs. The connect button only
//! renders while the wallet is disconnected and is the one place that may
//! prompt the user.

use leptos::prelude::*;

use crate::eth::portal::submit_wave;
use crate::eth::provider::Provider;
use crate::state::compose::ComposeState;
use crate::state::wallet::WalletState;

#[component]
pub fn WaveForm() -> impl IntoView {
    let wallet = expect_context::<RwSignal<WalletState>>();
    let compose = RwSignal::new(ComposeState::default());

    view! {
        <input
            class="wave-form__input"
            type="text"
            placeholder="Your message"
            prop:value=move || compose.get().draft
            on:input=move |ev| compose.update(|c| c.edit(event_target_value(&ev)))
        />
        <button
            class="btn btn--wave"
            on:click=move |_| leptos::task::spawn_local(submit_message(wallet, compose))
        >
            "Send me a message"
        </button>
        <Show when=move || !wallet.get().is_connected()>
            <button
                class="btn btn--connect"
                on:click=move |_| leptos::task::spawn_local(request_connection(wallet))
            >
                "Connect Wallet"
            </button>
        </Show>
    }
}

/// Drive one submission end to end and settle the draft accordingly.
///
/// The draft clears only after the whole flow lands, follow-up count read
/// included; any failure leaves the text in the box for a retry.
async fn submit_message(wallet: RwSignal<WalletState>, compose: RwSignal<ComposeState>) {
    let Some(provider) = Provider::detect() else {
        leptos::logging::log!("Ethereum object doesn't exist!");
        return;
    };
    let Some(account) = wallet.get_untracked().account else {
        leptos::logging::warn!("no connected account; connect the wallet first");
        return;
    };
    let draft = compose.get_untracked().draft;
    match submit_wave(&provider, account, &draft).await {
        Ok(_) => compose.update(|c| c.resolve_submission(true)),
        Err(e) => {
            leptos::logging::warn!("message submission failed: {e}");
            compose.update(|c| c.resolve_submission(false));
        }
    }
}

/// Ask the wallet for account access and adopt the first one granted.
async fn request_connection(wallet: RwSignal<WalletState>) {
    let Some(provider) = Provider::detect() else {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message("Get MetaMask!") {
                leptos::logging::warn!("alert failed: {e:?}");
            }
        }
        return;
    };
    match provider.request_accounts().await {
        Ok(accounts) => match accounts.first().copied() {
            Some(account) => {
                leptos::logging::log!("Connected {account}");
                wallet.update(|w| w.connect(account));
            }
            None => leptos::logging::warn!("wallet returned no accounts"),
        },
        Err(e) => leptos::logging::warn!("connection request failed: {e}"),
    }
}
