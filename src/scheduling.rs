use log::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Function, Object, Reflect};

/// Opens the Calendly popup widget for the given event URL.
///
/// The widget script is loaded from index.html and may not be there yet (or
/// at all, with an aggressive ad blocker). Scheduling is a nice-to-have on
/// top of the quiz flow, so every failure path here logs and returns instead
/// of propagating.
pub fn open_popup(url: &str) {
    let Some(window) = web_sys::window() else {
        warn!("no window object; cannot open scheduling popup");
        return;
    };

    let calendly = match Reflect::get(&window, &JsValue::from_str("Calendly")) {
        Ok(v) if !v.is_undefined() && !v.is_null() => v,
        _ => {
            warn!("Calendly widget not loaded yet; ignoring booking click");
            return;
        }
    };

    let init = match Reflect::get(&calendly, &JsValue::from_str("initPopupWidget")) {
        Ok(v) => match v.dyn_into::<Function>() {
            Ok(f) => f,
            Err(_) => {
                warn!("Calendly.initPopupWidget is not a function");
                return;
            }
        },
        Err(_) => {
            warn!("Calendly global has no initPopupWidget");
            return;
        }
    };

    let options = Object::new();
    if Reflect::set(&options, &JsValue::from_str("url"), &JsValue::from_str(url)).is_err() {
        warn!("failed to build Calendly options object");
        return;
    }

    if let Err(e) = init.call1(&calendly, &options) {
        warn!("Calendly popup failed to open: {:?}", e);
    }
}
