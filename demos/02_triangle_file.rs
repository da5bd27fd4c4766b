#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release
#![allow(rustdoc::missing_crate_level_docs)] // it's an example

mod common;

use glow_triangle::ShaderSource;

const DEFAULT_SHADER_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/shaders/basic.shader");

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SHADER_PATH.to_string());
    let source = match ShaderSource::from_file(&path) {
        Ok(source) => source,
        Err(e) => {
            log::error!("{e}; using the built-in copy of basic.shader");
            glow_triangle::basic_shader::embedded()
        }
    };
    common::run("Triangle (shader source from file)", source)
}
