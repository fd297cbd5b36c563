#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use cpumon::components::settings::AppConfig;
use cpumon::CpuMonitorApp;

fn main() -> eframe::Result {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = AppConfig::default();
    let options = eframe::NativeOptions {
        viewport: config.viewport(),
        // Position is restored by the app itself, so it can check it is still on screen.
        persist_window: false,
        ..Default::default()
    };

    log::info!("Starting {}", config.title());
    eframe::run_native(
        config.app_name,
        options,
        Box::new(move |cc| Ok(Box::new(CpuMonitorApp::new(cc, config)?))),
    )
}
