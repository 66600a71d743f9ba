mod app;
mod config;
mod entry;
mod io;
mod layout;
mod state;
mod style;
mod view;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use eframe::egui;

use crate::app::Breve;
use crate::config::Config;

const ICON_PATH: &str = "resrc/images/icon.png";

fn main() -> Result<()> {
    let _logger = flexi_logger::Logger::try_with_env_or_str(
        "info, eframe=warn, wgpu_core=error, wgpu_hal=error",
    )?
    .start()?;

    let config = Config::load();
    if Config::config_path().is_some_and(|p| !p.exists()) {
        if let Err(e) = config.save() {
            log::warn!("could not write default config: {}", e);
        }
    }

    // Resource loading is fatal before any window is shown.
    let icon = load_icon(Path::new(ICON_PATH))
        .with_context(|| format!("failed to load application icon from {}", ICON_PATH))?;

    let start_path = start_path();
    log::info!("starting at {}", start_path.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([layout::WINDOW_WIDTH, layout::WINDOW_HEIGHT])
            .with_resizable(false)
            .with_icon(icon)
            .with_title("Breve"),
        ..Default::default()
    };

    eframe::run_native(
        "breve",
        options,
        Box::new(move |_cc| Ok(Box::new(Breve::new(&config, start_path)))),
    )
    .map_err(|e| anyhow::anyhow!("event loop failed: {e}"))?;

    log::info!("shutting down");
    Ok(())
}

/// Home directory, falling back to the current directory.
fn start_path() -> PathBuf {
    directories::UserDirs::new()
        .map(|ud| ud.home_dir().to_path_buf())
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/")))
}

fn load_icon(path: &Path) -> Result<egui::IconData> {
    let bytes = std::fs::read(path)?;
    let image = image::load_from_memory(&bytes)?.into_rgba8();
    let (width, height) = image.dimensions();
    Ok(egui::IconData {
        rgba: image.into_raw(),
        width,
        height,
    })
}
