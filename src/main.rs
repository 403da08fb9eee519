#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
//! Shop Favorites Frontend Entry Point

mod api;
mod config;
mod controller;
mod error;
mod icon;
mod models;
mod page;

#[cfg(target_arch = "wasm32")]
mod browser;

#[cfg(test)]
mod testing;

fn main() {
    console_error_panic_hook::set_once();
    console_logger::init(log::LevelFilter::Info);
    run();
}

#[cfg(target_arch = "wasm32")]
fn run() {
    if let Err(e) = browser::start() {
        log::error!("Favorites controller failed to start: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn run() {
    log::warn!("Favorites controller only runs in a browser");
}
