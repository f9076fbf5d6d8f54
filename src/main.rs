//! DashHub CLI entry point.
//!
//! A terminal front end over the same coordinator the console uses: browse
//! folders, run filtered listings, and perform structural mutations against
//! a live dashboards backend.

use clap::Parser;

mod commands;
mod output;

use commands::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.execute().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
