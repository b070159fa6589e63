use chitram_web::config::CONFIG;
use chitram_web::App;

fn main() {
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() {
        log::Level::Info
    } else {
        log::Level::Warn
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("🚀 Chitram starting ({})", CONFIG.environment);
    if !CONFIG.is_production() {
        log::info!("🔧 Backend: {}", CONFIG.backend_url);
    }

    yew::Renderer::<App>::new().render();
}
