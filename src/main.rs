#![allow(warnings)]
//! Portfolio Frontend Entry Point

mod models;
mod catalog;
mod chart;
mod config;
mod state;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init_logger("Portfolio", log::LevelFilter::Info) {
        web_sys::console::warn_1(&format!("[APP] logger not installed: {}", e).into());
    }
    mount_to_body(App);
}
