//! Wallet connection state.

#[cfg(test)]
#[path = "wallet_test.rs"]
mod wallet_test;

use alloy_primitives::Address;

/// Connection state for the injected wallet.
///
/// `account` stays `None` until the user authorizes the app (or a prior
/// authorization is detected on load). There is no disconnect action: within
/// a session the state only ever moves from disconnected to connected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WalletState {
    /// The authorized account, once one is known.
    pub account: Option<Address>,
}

impl WalletState {
    /// Adopt an authorized account.
    pub fn connect(&mut self, account: Address) {
        self.account = Some(account);
    }

    /// Whether an account has been adopted this session.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.account.is_some()
    }
}
