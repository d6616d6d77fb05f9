//! native handlers behind the GMESSAGE exports

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// host `String()` coercion, the toString projection for any value
    #[wasm_bindgen(catch, js_name = String)]
    fn coerce_to_string(value: &JsValue) -> Result<String, JsValue>;
}

/// Integer addition over the first two argument positions.
///
/// Each operand goes through the host's toString projection and a
/// signed decimal parse; malformed operands count as zero. The
/// receiver is unused.
pub(crate) fn add(_this: &JsValue, args: &[JsValue]) -> JsValue {
    let a = text_of(args.first());
    let b = text_of(args.get(1));

    let sum = gmessage_core::add_operands(&a, &b);
    JsValue::from_f64(sum as f64)
}

/// Textual projection of an argument position. Absent positions and
/// values the host refuses to stringify degrade like any failed parse.
fn text_of(position: Option<&JsValue>) -> String {
    position
        .and_then(|value| coerce_to_string(value).ok())
        .unwrap_or_default()
}
