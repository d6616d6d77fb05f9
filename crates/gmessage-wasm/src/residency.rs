//! indefinite residency after registration
//!
//! The exports must stay reachable for as long as the host can call
//! them. Parking the entry task on a promise nobody settles holds the
//! module resident until the host tears the page down.

use wasm_bindgen_futures::JsFuture;

/// Park until host teardown.
///
/// The executor captures neither resolver, so the promise is never
/// settled and the await never completes. No work runs while parked;
/// the task just yields to the host scheduler.
pub(crate) async fn hold_until_teardown() {
    let parked = js_sys::Promise::new(&mut |_resolve, _reject| {});
    let _ = JsFuture::from(parked).await;
}
