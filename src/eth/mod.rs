//! Ethereum boundary: provider bridge, wire DTOs, contract calls, events.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything remote happens here. `provider` wraps the wallet-injected
//! EIP-1193 object, `types` declares the JSON-RPC object shapes that cross
//! it, `portal` owns the contract binding and call flows, and `events` runs
//! the `NewWave` log subscription. Encoding and decoding stay pure so they can
//! be tested natively; only the provider round trips touch the browser.

pub mod events;
pub mod portal;
pub mod provider;
pub mod types;

use alloy_primitives::B256;

/// Polling cadence for receipt waits and the `NewWave` log filter. Matches the
/// default injected-provider cadence of the common wallet libraries, which
/// is also what the portal contract's block times make reasonable.
pub const POLL_INTERVAL_MS: u64 = 4_000;

/// Errors crossing the provider/contract boundary.
///
/// Flows catch these at their outermost layer, log, and degrade silently;
/// nothing retries on the user's behalf.
#[derive(Debug, thiserror::Error)]
pub enum EthError {
    /// The provider returned a structured JSON-RPC error. Code 4001 is the
    /// EIP-1193 user rejection.
    #[error("provider rpc error {code}: {message}")]
    Rpc {
        /// EIP-1193 / JSON-RPC error code.
        code: i64,
        /// Human-readable provider message.
        message: String,
    },
    /// The provider rejected the call with something other than an RPC
    /// error object.
    #[error("provider error: {0}")]
    Js(String),
    /// A params or result payload failed (de)serialization at the JS
    /// boundary.
    #[error("payload error: {0}")]
    Payload(String),
    /// Returned call or event data failed ABI decoding.
    #[error("abi error: {0}")]
    Abi(#[from] alloy_sol_types::Error),
    /// The transaction was mined but reverted.
    #[error("transaction {0} reverted")]
    Reverted(B256),
}
