//! Portal contract binding and call flows.
//!
//! DESIGN
//! ======
//! The contract surface is declared once with `sol!` and every interaction
//! is plain JSON-RPC through the injected provider: `eth_call` for reads,
//! `eth_sendTransaction` for the message write, and a receipt poll for
//! confirmation. Encode/decode helpers stay pure so they test natively.

#[cfg(test)]
#[path = "portal_test.rs"]
mod portal_test;

use alloy_primitives::{Address, B256, Bytes, U64, U256, address};
use alloy_sol_types::{SolCall, sol};

use crate::eth::provider::Provider;
use crate::eth::types::{CallRequest, TransactionReceipt, TransactionRequest};
use crate::eth::{EthError, POLL_INTERVAL_MS};
use crate::state::waves::Wave;
use crate::util::time::to_unix_millis;

/// The deployed `WavePortal` contract this client talks to.
pub const PORTAL_ADDRESS: Address = address!("BfBdFF2FF012363c0378804a111306643c14514d");

/// Fixed gas ceiling for `sendMessage` transactions. Unused gas is refunded,
/// so the ceiling only has to be high enough to never starve the call.
pub const SEND_GAS_LIMIT: u64 = 300_000;

sol! {
    /// One stored message, as returned by `getAllMsgs`.
    struct PortalMessage {
        address waver;
        uint256 timestamp;
        string message;
    }

    function getAllMsgs() external view returns (PortalMessage[] memory);
    function getMessagesNumber() external view returns (uint256);
    function sendMessage(string message) external;

    /// Emitted by the contract once per accepted message.
    event NewWave(address indexed from, uint256 timestamp, string message);
}

/// Fetch every message stored in the portal contract, in storage order.
///
/// # Errors
///
/// Returns an error when the `eth_call` round trip or ABI decoding fails.
pub async fn fetch_all_waves(
    provider: &Provider,
    from: Option<Address>,
) -> Result<Vec<Wave>, EthError> {
    let call = CallRequest {
        from,
        to: PORTAL_ADDRESS,
        data: Bytes::from(getAllMsgsCall {}.abi_encode()),
    };
    let returned: Bytes = provider.request("eth_call", &(call, "latest")).await?;
    decode_all_waves(&returned)
}

/// Read the contract's message counter.
///
/// # Errors
///
/// Returns an error when the `eth_call` round trip or ABI decoding fails.
pub async fn read_wave_count(
    provider: &Provider,
    from: Option<Address>,
) -> Result<U256, EthError> {
    let call = CallRequest {
        from,
        to: PORTAL_ADDRESS,
        data: Bytes::from(getMessagesNumberCall {}.abi_encode()),
    };
    let returned: Bytes = provider.request("eth_call", &(call, "latest")).await?;
    Ok(getMessagesNumberCall::abi_decode_returns(&returned)?)
}

/// Submit a message transaction and wait until it is mined.
///
/// The message counter is read and logged before and after the send purely
/// as a diagnostic; the visible list is only ever updated by the `NewWave`
/// subscription. The draft text is passed through untouched, empty or not.
///
/// # Errors
///
/// Returns an error when the wallet rejects the transaction, an RPC round
/// trip fails, or the mined receipt reports a revert.
pub async fn submit_wave(
    provider: &Provider,
    account: Address,
    message: &str,
) -> Result<B256, EthError> {
    let count = read_wave_count(provider, Some(account)).await?;
    leptos::logging::log!("Retrieved total message count... {count}");

    let tx = TransactionRequest {
        from: account,
        to: PORTAL_ADDRESS,
        gas: U64::from(SEND_GAS_LIMIT),
        data: Bytes::from(sendMessageCall { message: message.to_owned() }.abi_encode()),
    };
    let hash: B256 = provider.request("eth_sendTransaction", &(tx,)).await?;
    leptos::logging::log!("Mining... {hash}");

    let receipt = await_receipt(provider, hash).await?;
    if receipt.status == Some(U64::ZERO) {
        return Err(EthError::Reverted(receipt.transaction_hash));
    }
    leptos::logging::log!("Mined -- {hash}");

    let count = read_wave_count(provider, Some(account)).await?;
    leptos::logging::log!("Retrieved total wave count... {count}");

    Ok(hash)
}

/// Poll for the transaction receipt until the network mines it. There is no
/// timeout: a slow confirmation keeps the submission pending, exactly like
/// an interactive wallet flow.
async fn await_receipt(provider: &Provider, hash: B256) -> Result<TransactionReceipt, EthError> {
    loop {
        let receipt: Option<TransactionReceipt> =
            provider.request("eth_getTransactionReceipt", &(hash,)).await?;
        if let Some(receipt) = receipt {
            return Ok(receipt);
        }
        gloo_timers::future::sleep(std::time::Duration::from_millis(POLL_INTERVAL_MS)).await;
    }
}

/// Decode a raw `getAllMsgs` return into display-ready waves.
fn decode_all_waves(data: &[u8]) -> Result<Vec<Wave>, EthError> {
    let records = getAllMsgsCall::abi_decode_returns(data)?;
    Ok(records.into_iter().map(wave_from_record).collect())
}

/// Convert one on-chain record to its view form (seconds to milliseconds).
fn wave_from_record(record: PortalMessage) -> Wave {
    Wave {
        waver: record.waver,
        timestamp_ms: to_unix_millis(record.timestamp),
        message: record.message,
    }
}
