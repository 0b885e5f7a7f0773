//! EIP-1193 provider bridge over `window.ethereum`.
//!
//! DESIGN
//! ======
//! The injected provider is the only transport this app has. Every JSON-RPC
//! interaction goes through the provider's single `request` method, reached
//! by reflection on the injected object; params and results cross the JS
//! boundary with `serde-wasm-bindgen` in JSON-compatible mode so maps become
//! plain objects, which is what injected wallets expect. Provider absence is
//! a first-class condition surfaced as `None` from [`Provider::detect`],
//! never an error.

use js_sys::{Function, Promise, Reflect};
use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use alloy_primitives::Address;

use crate::eth::EthError;

/// JSON-RPC payload for `ethereum.request`.
#[derive(Serialize)]
struct RequestArgs<'a, P: Serialize + ?Sized> {
    method: &'a str,
    params: &'a P,
}

/// EIP-1193 provider error object shape.
#[derive(serde::Deserialize)]
struct RpcErrorPayload {
    code: i64,
    message: String,
}

/// Empty params array for methods that take none.
const NO_PARAMS: &[&str] = &[];

/// Handle to the wallet-injected provider.
pub struct Provider {
    ethereum: js_sys::Object,
}

impl Provider {
    /// Locate `window.ethereum`. `None` means no wallet extension is
    /// installed or the page is running outside a browser.
    #[must_use]
    pub fn detect() -> Option<Self> {
        let ethereum = web_sys::window()?.get("ethereum")?;
        Some(Self { ethereum })
    }

    /// Issue a JSON-RPC request through the provider.
    ///
    /// # Errors
    ///
    /// Returns an error when parameter serialization fails, the provider
    /// rejects the call (including user rejections), or the result does not
    /// deserialize into `T`.
    pub async fn request<T, P>(&self, method: &str, params: &P) -> Result<T, EthError>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let args = RequestArgs { method, params };
        let js_args = args
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| EthError::Payload(e.to_string()))?;
        let result = self.raw_request(&js_args).await.map_err(classify_rejection)?;
        serde_wasm_bindgen::from_value(result).map_err(|e| EthError::Payload(e.to_string()))
    }

    /// Silent `eth_accounts` probe: the already-authorized accounts, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when the provider rejects the call.
    pub async fn accounts(&self) -> Result<Vec<Address>, EthError> {
        self.request("eth_accounts", NO_PARAMS).await
    }

    /// Interactive `eth_requestAccounts` prompt.
    ///
    /// # Errors
    ///
    /// Returns an error when the user dismisses the prompt or the provider
    /// fails the call.
    pub async fn request_accounts(&self) -> Result<Vec<Address>, EthError> {
        self.request("eth_requestAccounts", NO_PARAMS).await
    }

    /// `ethereum.request(args)`, awaited to the settled result.
    async fn raw_request(&self, args: &JsValue) -> Result<JsValue, JsValue> {
        let request = Reflect::get(&self.ethereum, &JsValue::from_str("request"))?;
        let request: Function = request.dyn_into()?;
        let promise: Promise = request.call1(&self.ethereum, args)?.dyn_into()?;
        JsFuture::from(promise).await
    }
}

/// Map a rejected `ethereum.request` promise into [`EthError`].
fn classify_rejection(error: JsValue) -> EthError {
    match serde_wasm_bindgen::from_value::<RpcErrorPayload>(error.clone()) {
        Ok(payload) => EthError::Rpc { code: payload.code, message: payload.message },
        Err(_) => EthError::Js(format!("{error:?}")),
    }
}
