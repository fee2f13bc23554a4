// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Application entry point wiring logging, the submission endpoint and eframe.

use std::sync::Arc;

use anyhow::{Result, anyhow};
use eframe::egui;
use egui_phosphor::Variant;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;
use crate::logic::submit::SheetDbEndpoint;
use crate::ui::EventFormApp;

/// Install the global tracing subscriber. `RUST_LOG` wins over `default_level`.
pub fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Bootstrap the desktop application and run the main egui event loop.
pub fn run(config: AppConfig) -> Result<()> {
    let endpoint = Arc::new(SheetDbEndpoint::new(&config.endpoint)?);
    tracing::info!(
        event = %config.event,
        endpoint = %config.endpoint,
        "starting eventform v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Register Phosphor icon font.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 820.0])
            .with_min_inner_size([520.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Event Registration",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_fonts(fonts);
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(EventFormApp::new(
                &config.event,
                config.assets.clone(),
                endpoint,
                config.workers,
            )))
        }),
    )
    .map_err(|err| anyhow!("Failed to run the UI: {err}"))
}
