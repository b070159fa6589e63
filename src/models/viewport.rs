/// Inner window size in CSS pixels, sampled at mount
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Reads `window.innerWidth/innerHeight`; zero-sized outside a browser
    pub fn current() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let dimension = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
            value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0) as u32
        };
        Self {
            width: dimension(window.inner_width()),
            height: dimension(window.inner_height()),
        }
    }
}
