// ============================================================================
// BROWSER - thin wrappers over window APIs used by the views
// ============================================================================

use js_sys::Reflect;
use wasm_bindgen::JsValue;

/// Whether `navigator.mediaDevices.getDisplayMedia` exists
pub fn supports_screen_capture() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let navigator: JsValue = window.navigator().into();
    let media_devices = match Reflect::get(&navigator, &JsValue::from_str("mediaDevices")) {
        Ok(value) if !value.is_undefined() && !value.is_null() => value,
        _ => return false,
    };
    Reflect::get(&media_devices, &JsValue::from_str("getDisplayMedia"))
        .map(|f| f.is_function())
        .unwrap_or(false)
}

/// Blocking alert; no-op outside a browser
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Full navigation, which also reloads application state
pub fn hard_navigate(url: &str) {
    match web_sys::window() {
        Some(window) => {
            if let Err(e) = window.location().set_href(url) {
                log::error!("❌ Navigation to {} failed: {:?}", url, e);
            }
        }
        None => log::warn!("⚠️ No window, cannot navigate to {}", url),
    }
}

/// Opens `url` in a fixed-size popup window
pub fn open_popup(url: &str, name: &str, width: u32, height: u32) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let features = format!("width={},height={}", width, height);
    match window.open_with_url_and_target_and_features(url, name, &features) {
        Ok(Some(_)) => true,
        Ok(None) => {
            log::warn!("⚠️ Popup blocked for {}", url);
            false
        }
        Err(e) => {
            log::error!("❌ window.open failed: {:?}", e);
            false
        }
    }
}

pub fn current_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Body element class toggle, used to lock scrolling behind dialogs
pub fn set_body_class(class: &str, enabled: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let result = if enabled {
        body.class_list().add_1(class)
    } else {
        body.class_list().remove_1(class)
    };
    if let Err(e) = result {
        log::warn!("⚠️ Could not toggle body class {}: {:?}", class, e);
    }
}
