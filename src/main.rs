use routed_anecdotes::{App, AppError, AppResult, CONFIG};
use web_sys::Element;

const MOUNT_POINT_ID: &str = "root";

fn mount_point() -> AppResult<Element> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| AppError::MountPoint("no document".to_string()))?;

    document
        .get_element_by_id(MOUNT_POINT_ID)
        .ok_or_else(|| AppError::MountPoint(format!("#{}", MOUNT_POINT_ID)))
}

fn main() {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    }
    log::info!("🚀 Software anecdotes starting ({})", CONFIG.environment);
    if !CONFIG.is_production() {
        log::debug!("🔧 {:?}", *CONFIG);
    }

    match mount_point() {
        Ok(root) => {
            yew::Renderer::<App>::with_root(root).render();
        }
        Err(e) => {
            log::error!("❌ {}, mounting on <body>", e);
            yew::Renderer::<App>::new().render();
        }
    }
}
