mod backend_bridge;
mod controller;
mod ui;

use std::path::PathBuf;

use anyhow::{anyhow, Context};
use clap::Parser;
use client_core::ClientSettings;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::{AppPaths, FlexiUiApp};

#[derive(Parser, Debug)]
#[command(name = "flexiui-desktop", about = "FlexiUI AI Generator desktop client")]
struct Args {
    /// Settings file (defaults to ./flexiui.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Overrides the generation endpoint base URL
    #[arg(long)]
    api_url: Option<String>,
    /// Directory for the preview document
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let mut settings = match &args.config {
        Some(path) => ClientSettings::load_from(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => ClientSettings::load().context("failed to load settings")?,
    };
    if let Some(api_url) = args.api_url {
        settings.api_url = api_url;
        settings.validate().context("invalid --api-url")?;
    }
    let paths = AppPaths::resolve(args.data_dir.as_deref());
    tracing::info!(
        api_url = %settings.api_url,
        preview = %paths.preview_path.display(),
        downloads = %paths.download_dir.display(),
        "starting FlexiUI desktop"
    );

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(settings.clone(), cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("FlexiUI AI Generator")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "FlexiUI AI Generator",
        options,
        Box::new(move |_cc| Ok(Box::new(FlexiUiApp::new(cmd_tx, ui_rx, &settings, paths)))),
    )
    .map_err(|err| anyhow!("desktop app exited with error: {err}"))
}
