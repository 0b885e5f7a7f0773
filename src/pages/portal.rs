//! The single page: greeting, compose form, and the message wall.

use leptos::prelude::*;

use crate::components::wave_form::WaveForm;
use crate::components::wave_list::WaveList;

#[component]
pub fn PortalPage() -> impl IntoView {
    view! {
        <div class="portal-page">
            <div class="portal-page__content">
                <h2 class="portal-page__header">"👋 Hey there!"</h2>
                <div class="portal-page__bio">
                    "Connect your Ethereum wallet and send me a message on-chain!"
                </div>
                <WaveForm />
                <WaveList />
            </div>
        </div>
    }
}
