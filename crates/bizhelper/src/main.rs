// SPDX-FileCopyrightText: 2026 Bizhelper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bizhelper - a Telegram helper bot.
//!
//! One binary, two services: the webhook gateway facing Telegram and the
//! backend that routes updates and persists them.

mod serve;
mod shutdown;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Bizhelper - a Telegram helper bot.
#[derive(Parser, Debug)]
#[command(name = "bizhelper", version, about, long_about = None)]
struct Cli {
    /// Config file to load instead of the standard search path.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the webhook gateway.
    Gateway,
    /// Run the backend RPC service.
    Backend,
    /// Register the webhook URL with Telegram and exit.
    SetWebhook {
        /// URL to register; defaults to `telegram.webhook_url`.
        url: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => bizhelper_config::load_and_validate_path(path),
        None => bizhelper_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            bizhelper_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    serve::init_tracing(&config.log.level);

    let result = match cli.command {
        Commands::Gateway => serve::run_gateway(config).await,
        Commands::Backend => serve::run_backend(config).await,
        Commands::SetWebhook { url } => serve::run_set_webhook(config, url).await,
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "bizhelper exited with error");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
