//! Shiftboard preview
//!
//! Renders conversation lists, message threads and shift cards from JSON
//! fixtures as plain text.

use chrono::Utc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod preview;
mod render;

use config::Config;
use error::Result;
use preview::Invocation;

fn run() -> Result<String> {
    let invocation = Invocation::from_args(std::env::args().skip(1))?;
    let config = Config::load()?;

    let now = Utc::now().with_timezone(&config.display.zone()?);
    let input = std::fs::read_to_string(&invocation.path)?;

    tracing::info!(command = ?invocation.command, path = %invocation.path, "Rendering preview");
    preview::run(invocation.command, &input, &config.display, &now)
}

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!("Failed to render preview: {}", e);
            std::process::exit(1);
        }
    }
}
