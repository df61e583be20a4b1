// Hide console window in release builds (Windows GUI app)
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod assets;
mod cli;
mod config;
mod events;
mod i18n;
mod save;
mod splash;
mod stats;
mod task;
mod ui;

use anyhow::Result;
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::config::Config;
use crate::stats::{StatsClient, StatsSource};

/// Load the window icon from the assets directory
fn load_icon(assets_dir: &Path) -> Option<egui::IconData> {
    let bytes = std::fs::read(assets_dir.join("icon.png")).ok()?;
    let image = image::load_from_memory(&bytes).ok()?.into_rgba8();
    let (width, height) = image.dimensions();
    Some(egui::IconData {
        rgba: image.into_raw(),
        width,
        height,
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "titlescreen=debug,info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            Config::default()
        }
    };
    cli.apply_overrides(&mut config);

    if let Some(command) = cli.command {
        if let Err(e) = cli::run(command, config, &cli.output).await {
            cli::print_error(&e.to_string());
            std::process::exit(1);
        }
        return Ok(());
    }

    tracing::info!("Starting title screen");

    let stats: Arc<dyn StatsSource> = Arc::new(StatsClient::new(&config.title.api_base)?);

    // 320x180 canvas at 4x
    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([1280.0, 720.0])
        .with_min_inner_size([640.0, 360.0])
        .with_title("Titlescreen");

    let viewport = if let Some(icon) = load_icon(&config.assets_dir()) {
        viewport.with_icon(Arc::new(icon))
    } else {
        tracing::warn!("Failed to load application icon");
        viewport
    };

    let native_options = eframe::NativeOptions {
        viewport,
        persist_window: true,
        ..Default::default()
    };

    eframe::run_native(
        "Titlescreen",
        native_options,
        Box::new(move |cc| Ok(Box::new(app::TitleApp::new(cc, &config, stats)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))?;

    Ok(())
}
