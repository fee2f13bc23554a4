// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

mod app;
mod config;
mod logic;
mod models;
mod mvu;
mod ui;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = config::AppConfig::parse();
    app::init_tracing(&config.log_level);
    app::run(config)
}
