use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;

use anyhow::{Context, Result};
use clap::Parser;
use pressure_gauge::{AppArgs, Gauge, GaugeCommand};
use tracing::{debug, info, warn};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = AppArgs::parse();
    let gauge = Gauge::new(args.to_config());

    if !args.stdin {
        return gauge.show().context("gauge window failed");
    }

    // Each stdin line is submitted as if typed into the field and applied.
    let (sender, receiver) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    debug!(%line, "stdin submission");
                    if sender.send(GaugeCommand::Submit(line)).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    warn!(error = %err, "stopped reading stdin");
                    break;
                }
            }
        }
        info!("stdin closed");
    });

    gauge
        .show_with_commands(receiver)
        .context("gauge window failed")
}
