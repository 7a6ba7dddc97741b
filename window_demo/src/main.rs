//! Window demo application
//!
//! Opens a window described by a TOML/RON file (or the defaults), walks it
//! through the wrapper's state changes and logs what the native side reports.
//!
//! ```text
//! window_demo [config.toml]
//! RUST_LOG=debug cargo run -p window_demo --features sdl2 -- window.toml
//! ```

use sdl_window::prelude::*;
use sdl_window::{logging, ConfigError};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
enum DemoError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Window(#[from] WindowError),
}

fn load_config() -> Result<WindowConfig, DemoError> {
    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading window configuration from {path}");
            WindowConfig::load_from_file(&path)?
        }
        None => WindowConfig::new("Window Demo").with_flags(WindowFlags::SHOWN | WindowFlags::RESIZABLE),
    };
    config.validate()?;
    Ok(config)
}

fn exercise<D: VideoDriver>(config: &WindowConfig, pause: Duration) -> Result<(), DemoError> {
    let mut window = Window::<D>::from_config(config)?;
    log::info!(
        "Opened window #{} \"{}\" at {} size {}",
        window.id(),
        window.title(),
        window.position(),
        window.size()
    );

    window.set_title(&format!("{} (resized)", config.title));
    window.set_size(window.size() + Point::new(160, 120));
    window.set_position((WINDOWPOS_CENTERED, WINDOWPOS_CENTERED));
    log::info!("Now \"{}\" at {} size {}", window.title(), window.position(), window.size());
    std::thread::sleep(pause);

    window.maximize();
    std::thread::sleep(pause);
    window.restore();

    match window.set_brightness(0.75) {
        Ok(()) => log::info!("Brightness now {}", window.brightness()),
        Err(e) => log::warn!("{e}"),
    }
    window.set_brightness(1.0).unwrap_or_else(|e| log::warn!("{e}"));

    window.set_grab(true);
    log::info!("Input grabbed: {}", window.grab());
    window.set_grab(false);

    window.set_fullscreen(FullscreenMode::Desktop)?;
    std::thread::sleep(pause);
    window.set_fullscreen(FullscreenMode::Windowed)?;

    log::info!("Final flags {:?}", window.flags());
    Ok(())
}

#[cfg(feature = "sdl2")]
fn run(config: &WindowConfig) -> Result<(), DemoError> {
    let _sdl = sdl_window::SdlContext::new()?;
    exercise::<sdl_window::Sdl2Driver>(config, Duration::from_secs(1))
}

#[cfg(not(feature = "sdl2"))]
fn run(config: &WindowConfig) -> Result<(), DemoError> {
    log::info!("Built without the sdl2 feature, using the headless driver");
    exercise::<sdl_window::HeadlessDriver>(config, Duration::ZERO)?;
    log::info!("Driver stats: {:?}", sdl_window::HeadlessDriver::stats());
    Ok(())
}

fn main() {
    logging::init();

    if let Err(e) = load_config().and_then(|config| run(&config)) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
