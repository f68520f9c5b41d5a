use frontend::{config, App};
use shared::constants::APP_ROOT_ID;
use yew::Renderer;

fn main() {
    // Initialize the logger for WebAssembly
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));

    match config::mount_root() {
        Some(root) => {
            Renderer::<App>::with_root(root).render();
        }
        None => {
            log::warn!("#{} not found, rendering into <body>", APP_ROOT_ID);
            Renderer::<App>::new().render();
        }
    }
}
