#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;

use args::{Args, Command};
use clap::Parser;
use faultline_config::Config;
use faultline_core::{Category, decode_remote};
use faultline_http::{BufferedResponse, Responder, json_encoder};
use strum::IntoEnumIterator;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = match args.config {
        Some(ref path) => Config::load(path)?,
        None => Config::default(),
    };

    // Initialize logging
    faultline_telemetry::init(&config.telemetry, args.log_filter.as_deref())?;

    match args.command {
        Command::Render { error } => render(&config, &error)?,
        Command::Statuses => print_statuses(),
    }

    Ok(())
}

/// Decode a remote error string and print the rendered response
fn render(config: &Config, raw: &str) -> anyhow::Result<()> {
    let err = decode_remote(raw)?;

    tracing::debug!(kind = %err.kind(), "decoded remote error");

    let mut sink = BufferedResponse::new();
    let rendered = Responder::new(&config.responder).respond(&err, &mut sink, json_encoder);

    println!("HTTP {}", rendered.status);
    println!("{}", String::from_utf8_lossy(sink.body()));

    Ok(())
}

fn print_statuses() {
    for kind in Category::iter() {
        let status = kind.status_code();
        println!("{:<20} {}", kind.as_str(), status.as_u16());
    }
}
