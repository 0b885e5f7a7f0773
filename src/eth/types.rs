//! JSON-RPC wire DTOs for the provider boundary.
//!
//! DESIGN
//! ======
//! These mirror the request/response object shapes injected wallets speak:
//! `camelCase` keys, quantities as 0x-prefixed hex strings, binary fields as
//! hex strings. The alloy primitive serde impls produce exactly those
//! encodings, so the structs stay declarative.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use alloy_primitives::{Address, B256, Bytes, U64};
use serde::{Deserialize, Serialize};

/// `eth_call` request object.
#[derive(Clone, Debug, Serialize)]
pub struct CallRequest {
    /// Caller identity; wallets accept reads without one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Address>,
    /// Contract being called.
    pub to: Address,
    /// ABI-encoded calldata.
    pub data: Bytes,
}

/// `eth_sendTransaction` request object.
#[derive(Clone, Debug, Serialize)]
pub struct TransactionRequest {
    /// Account signing and funding the transaction.
    pub from: Address,
    /// Contract receiving the transaction.
    pub to: Address,
    /// Gas ceiling as a hex quantity.
    pub gas: U64,
    /// ABI-encoded calldata.
    pub data: Bytes,
}

/// The subset of an `eth_getTransactionReceipt` response this client reads.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    /// Hash of the mined transaction.
    pub transaction_hash: B256,
    /// `0x1` for success, `0x0` for revert. Absent on pre-Byzantium chains.
    #[serde(default)]
    pub status: Option<U64>,
}

/// `eth_newFilter` parameter object for the `NewWave` log filter.
#[derive(Clone, Debug, Serialize)]
pub struct FilterParams {
    /// Contract whose logs to watch.
    pub address: Address,
    /// Topic filter; a single entry matching on the event signature hash.
    pub topics: Vec<B256>,
}

/// One log object from an `eth_getFilterChanges` response, reduced to the
/// fields this client reads. The emitting address is already pinned by the
/// filter itself.
#[derive(Clone, Debug, Deserialize)]
pub struct LogEntry {
    /// Indexed topics; topic0 is the event signature hash.
    pub topics: Vec<B256>,
    /// ABI-encoded non-indexed event data.
    pub data: Bytes,
}
