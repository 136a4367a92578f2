pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

fn init_logging() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    let _ = console_log::init_with_level(level);
}

pub fn start() {
    console_error_panic_hook::set_once();
    init_logging();
    log::info!("starting LIMS admin frontend");

    // Config resolves in the background; API calls await it on first use.
    leptos::spawn_local(async move {
        config::init().await;
    });

    router::mount_app();
}
