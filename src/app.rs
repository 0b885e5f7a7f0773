//! Root component: shared state, startup tasks, and the single page.
//!
//! ARCHITECTURE
//! ============
//! Two pieces of state are provided as context for the whole tree: the
//! wallet connection and the message list. On mount, one task checks for an
//! already-authorized account (and hydrates the list if it finds one), and a
//! second task watches the contract's `NewWave` stream until unmount. Neither
//! task blocks rendering; the page comes up immediately in the disconnected
//! state and fills in as responses land.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::eth::events::watch_new_waves;
use crate::eth::portal::fetch_all_waves;
use crate::eth::provider::Provider;
use crate::pages::portal::PortalPage;
use crate::state::wallet::WalletState;
use crate::state::waves::WavesState;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let wallet = RwSignal::new(WalletState::default());
    let waves = RwSignal::new(WavesState::default());
    provide_context(wallet);
    provide_context(waves);

    leptos::task::spawn_local(detect_existing_connection(wallet, waves));

    let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
    let poll_alive_task = poll_alive.clone();
    leptos::task::spawn_local(watch_new_waves(waves, poll_alive_task));
    on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));

    view! {
        <Title text="Wave Portal" />
        <PortalPage />
    }
}

/// Look for an account the user already authorized and hydrate the list.
///
/// Runs once on mount and never prompts: `eth_accounts` only reports
/// accounts previously approved for this site. The message fetch happens
/// here and nowhere else on the silent path, so a visitor without a wallet
/// (or without a prior approval) just sees the empty page.
async fn detect_existing_connection(wallet: RwSignal<WalletState>, waves: RwSignal<WavesState>) {
    let Some(provider) = Provider::detect() else {
        leptos::logging::log!("Make sure you have metamask!");
        return;
    };
    leptos::logging::log!("We have the ethereum object");

    let accounts = match provider.accounts().await {
        Ok(accounts) => accounts,
        Err(e) => {
            leptos::logging::warn!("eth_accounts failed: {e}");
            return;
        }
    };
    let Some(account) = accounts.first().copied() else {
        leptos::logging::log!("No authorized account found");
        return;
    };
    leptos::logging::log!("Found an authorized account: {account}");
    wallet.update(|w| w.connect(account));

    match fetch_all_waves(&provider, Some(account)).await {
        Ok(all) => {
            leptos::logging::log!("Below are all messages ({})", all.len());
            waves.update(|w| w.replace_all(all));
        }
        Err(e) => leptos::logging::warn!("initial message fetch failed: {e}"),
    }
}
