//! Wasm bridge for the gmessage helper namespace
//!
//! Publishes `GMESSAGE` on the host global at load time and stays
//! resident until the host tears the module down. The only live export
//! is `GMESSAGE.add`: integer addition over textually coerced operands.
//!
//! Build with:
//! ```bash
//! wasm-pack build --target web crates/gmessage-wasm
//! ```

use wasm_bindgen::prelude::*;

mod bridge;
mod error;
mod handlers;
mod residency;

pub use bridge::{install, NAMESPACE_KEY};
pub use error::{BridgeError, Result};

/// Module entry: register the namespace, then park until teardown.
///
/// A failed install surfaces as a load error to the host and the
/// module does not go resident.
#[wasm_bindgen(start)]
pub fn init() -> std::result::Result<(), JsValue> {
    console_error_panic_hook::set_once();

    bridge::install(&js_sys::global())?;
    web_sys::console::log_1(&"gmessage bridge installed".into());

    wasm_bindgen_futures::spawn_local(residency::hold_until_teardown());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use js_sys::{Array, Function, Object, Reflect};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    fn installed_add() -> Function {
        install(&js_sys::global()).unwrap();
        let ns = Reflect::get(&js_sys::global(), &NAMESPACE_KEY.into()).unwrap();
        Reflect::get(&ns, &"add".into()).unwrap().dyn_into().unwrap()
    }

    fn call2(add: &Function, a: &JsValue, b: &JsValue) -> f64 {
        add.call2(&JsValue::UNDEFINED, a, b)
            .unwrap()
            .as_f64()
            .unwrap()
    }

    #[wasm_bindgen_test]
    fn test_install_publishes_namespace() {
        install(&js_sys::global()).unwrap();

        let ns = Reflect::get(&js_sys::global(), &NAMESPACE_KEY.into()).unwrap();
        assert!(ns.is_object());

        let add = Reflect::get(&ns, &"add".into()).unwrap();
        assert!(add.is_function());
    }

    #[wasm_bindgen_test]
    fn test_add_parses_text_operands() {
        let add = installed_add();
        assert_eq!(call2(&add, &"2".into(), &"3".into()), 5.0);
        assert_eq!(call2(&add, &"10".into(), &"-4".into()), 6.0);
        assert_eq!(call2(&add, &"".into(), &"7".into()), 7.0);
        assert_eq!(call2(&add, &"abc".into(), &"xyz".into()), 0.0);
    }

    #[wasm_bindgen_test]
    fn test_add_coerces_numeric_operands() {
        let add = installed_add();
        let sum = call2(&add, &JsValue::from_f64(3.0), &JsValue::from_f64(4.0));
        assert_eq!(sum, 7.0);
    }

    #[wasm_bindgen_test]
    fn test_add_ignores_excess_arguments() {
        let add = installed_add();
        let args = Array::of3(&"2".into(), &"3".into(), &"99".into());
        let sum = add.apply(&JsValue::UNDEFINED, &args).unwrap();
        assert_eq!(sum.as_f64(), Some(5.0));
    }

    #[wasm_bindgen_test]
    fn test_add_degrades_on_shortfall() {
        let add = installed_add();

        // missing positions arrive as undefined and parse to zero
        let one = add.call1(&JsValue::UNDEFINED, &"7".into()).unwrap();
        assert_eq!(one.as_f64(), Some(7.0));

        let none = add.call0(&JsValue::UNDEFINED).unwrap();
        assert_eq!(none.as_f64(), Some(0.0));
    }

    #[wasm_bindgen_test]
    fn test_reinstall_overwrites_namespace() {
        install(&js_sys::global()).unwrap();
        let first = Reflect::get(&js_sys::global(), &NAMESPACE_KEY.into()).unwrap();

        install(&js_sys::global()).unwrap();
        let second = Reflect::get(&js_sys::global(), &NAMESPACE_KEY.into()).unwrap();

        assert!(!Object::is(&first, &second));

        // the fresh binding still routes to the handler
        let add: Function = Reflect::get(&second, &"add".into())
            .unwrap()
            .dyn_into()
            .unwrap();
        assert_eq!(call2(&add, &"2".into(), &"3".into()), 5.0);
    }
}
