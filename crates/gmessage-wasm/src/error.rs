//! error types for the gmessage bridge

use thiserror::Error;
use wasm_bindgen::{JsError, JsValue};

/// Load-time bridge failures. After a successful install the bridge
/// surfaces no further errors to the host.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("namespace assembly failed: {0}")]
    Assembly(String),

    #[error("publish rejected by host global: {0}")]
    Publish(String),
}

impl From<BridgeError> for JsValue {
    fn from(e: BridgeError) -> Self {
        JsError::new(&e.to_string()).into()
    }
}

pub type Result<T> = std::result::Result<T, BridgeError>;
