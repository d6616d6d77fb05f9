//! bridge registrar: builds the GMESSAGE namespace and publishes it on
//! the host global
//!
//! Wrapped callables are handed to the host for the lifetime of the
//! page, so the closure shims are leaked with `forget` rather than
//! dropped when registration returns.

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::error::{BridgeError, Result};
use crate::handlers;

/// global key the namespace is published under
pub const NAMESPACE_KEY: &str = "GMESSAGE";

/// native handler shape: receiver plus the materialized argument positions
pub(crate) type HostHandler = fn(&JsValue, &[JsValue]) -> JsValue;

/// exported names and their handlers; names must be unique
const EXPORTS: &[(&str, HostHandler)] = &[("add", handlers::add)];

/// Build the namespace record and publish it under `GMESSAGE`,
/// overwriting any prior binding.
///
/// On failure nothing usable is left behind: the half-built record is
/// dropped and the global keeps whatever binding it had.
pub fn install(global: &JsValue) -> Result<()> {
    let namespace = Object::new();

    for (name, handler) in EXPORTS {
        let wrapped = bind(*handler);
        set(namespace.as_ref(), name, wrapped.as_ref())
            .map_err(|detail| BridgeError::Assembly(format!("{}: {}", name, detail)))?;
    }

    set(global, NAMESPACE_KEY, namespace.as_ref()).map_err(BridgeError::Publish)?;

    Ok(())
}

/// Wrap a native handler into a host-callable function.
///
/// The shim materializes two argument positions; the host fills missing
/// ones with `undefined` and drops any excess. The receiver slot is not
/// forwarded by the shim, so handlers see `undefined` there.
fn bind(handler: HostHandler) -> Function {
    let shim = Closure::wrap(Box::new(move |a: JsValue, b: JsValue| {
        handler(&JsValue::UNDEFINED, &[a, b])
    }) as Box<dyn FnMut(JsValue, JsValue) -> JsValue>);

    let function: Function = shim.as_ref().clone().unchecked_into();
    // the host owns the callable from here on
    shim.forget();
    function
}

/// `Reflect::set` with the host's two failure modes folded into a message.
fn set(target: &JsValue, key: &str, value: &JsValue) -> std::result::Result<(), String> {
    match Reflect::set(target, &JsValue::from_str(key), value) {
        Ok(true) => Ok(()),
        Ok(false) => Err(format!("property {:?} is unwritable", key)),
        Err(e) => Err(format!("{:?}", e)),
    }
}
