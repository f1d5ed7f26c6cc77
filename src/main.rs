#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;
mod viewport;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Vitrine - single-page portfolio site shell
#[derive(Parser, Debug)]
#[command(name = "vitrine-desktop")]
#[command(about = "Vitrine - single-page portfolio site shell")]
struct Args {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 1100.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 800.0)]
    height: f64,

    /// Window title override
    #[arg(long)]
    title: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let title = args.title.unwrap_or_else(|| "Vitrine Studio".to_string());

    tracing::info!("Starting '{}' at {}x{}", title, args.width, args.height);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
