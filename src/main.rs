#![allow(non_snake_case)]

mod app;
mod context;
mod export;
mod theme;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use essentials_core::{DataTable, ExampleTopic};

/// Dioxus Essentials - core concepts page
#[derive(Parser, Debug)]
#[command(name = "essentials-desktop")]
#[command(about = "Dioxus Essentials - a static core concepts page")]
struct Args {
    /// Write the rendered HTML page to PATH ("-" for stdout) instead of opening a window
    #[arg(short, long, value_name = "PATH")]
    export: Option<PathBuf>,

    /// Print the page's data table as JSON and exit
    #[arg(long)]
    print_data: bool,

    /// Example topic selected on start (components, rsx, props, state)
    #[arg(short, long)]
    topic: Option<ExampleTopic>,

    /// Verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(args.verbose);

    if let Some(topic) = args.topic {
        context::set_initial_topic(topic);
    }

    if args.print_data {
        let json = serde_json::to_string_pretty(&DataTable::collect())
            .context("Failed to serialize data table")?;
        println!("{}", json);
        return Ok(());
    }

    if let Some(target) = args.export {
        return export::export_to(&target);
    }

    launch_desktop()
}

#[cfg(feature = "desktop")]
fn launch_desktop() -> Result<()> {
    use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

    let title = essentials_core::HEADER.title;
    tracing::info!(topic = ?context::initial_topic(), "Starting '{}'", title);

    let config = Config::new()
        .with_custom_head(format!("<style>{}</style>", theme::GLOBAL_STYLES))
        .with_window(
            WindowBuilder::new()
                .with_title(title)
                .with_inner_size(LogicalSize::new(960.0, 900.0))
                .with_resizable(true),
        );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}

#[cfg(not(feature = "desktop"))]
fn launch_desktop() -> Result<()> {
    anyhow::bail!("Built without the `desktop` feature; use --export or --print-data")
}
