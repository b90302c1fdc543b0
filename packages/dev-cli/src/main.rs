//! Developer CLI for the phone onboarding core.
//!
//! `onboard flow` walks the full phone → OTP flow against the mocked
//! backend; the other subcommands are one-shot calls into the pure modules.

mod config;
mod flow;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use country_picker::{compute_menu_position, flag_for_dial, AnchorRect, MenuConfig, Viewport};
use phone_rules::{format_by_country, supported_countries, validate_by_country, DEFAULT_DIAL_CODE};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "onboard", about = "Exercise the phone onboarding core")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Walk the interactive phone → OTP flow against the mocked backend
    Flow,
    /// Check a phone number against its country rule
    Validate {
        phone: String,
        #[arg(long, default_value = DEFAULT_DIAL_CODE)]
        country: String,
    },
    /// Format a phone number for display
    Format {
        phone: String,
        #[arg(long, default_value = DEFAULT_DIAL_CODE)]
        country: String,
    },
    /// List the supported countries and their digit bounds
    Countries,
    /// Compute dropdown placement for an anchor inside a viewport
    Place {
        /// Anchor rectangle of the trigger control
        #[arg(long, num_args = 4, value_names = ["X", "Y", "W", "H"])]
        anchor: Vec<f64>,
        /// Viewport dimensions
        #[arg(long, num_args = 2, value_names = ["WIDTH", "HEIGHT"])]
        viewport: Vec<f64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Flow) {
        Command::Flow => flow::run(&config).await?,
        Command::Validate { phone, country } => {
            if validate_by_country(&phone, &country) {
                println!("valid");
            } else {
                println!("invalid");
            }
        }
        Command::Format { phone, country } => {
            println!("{}", format_by_country(&phone, &country));
        }
        Command::Countries => {
            for country in supported_countries() {
                println!(
                    "{} {:<5} {:<16} {}-{} digits",
                    flag_for_dial(&country.code, config.plus_one),
                    country.code,
                    country.name,
                    country.min_digits,
                    country.max_digits,
                );
            }
        }
        Command::Place { anchor, viewport } => {
            let anchor = AnchorRect {
                x: anchor[0],
                y: anchor[1],
                w: anchor[2],
                h: anchor[3],
            };
            let viewport = Viewport {
                width: viewport[0],
                height: viewport[1],
            };
            let position = compute_menu_position(anchor, viewport, &MenuConfig::default());
            println!("{}", serde_json::to_string_pretty(&position)?);
        }
    }

    Ok(())
}
