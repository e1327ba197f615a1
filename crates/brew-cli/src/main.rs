//! Brew CLI Application
//!
//! Command-line interface for the brew cafe reservation tool.

mod args;
mod cli;
mod clipboard;
mod plans;
mod renderer;

use anyhow::Result;
use args::{Args, Commands};
use brew_core::Session;
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { no_color, command } = Args::parse();

    let renderer = TerminalRenderer::new(!no_color);
    let mut cli = Cli::new(Session::new(), renderer);

    info!("brew started");

    match command {
        Some(Book(book_args)) => cli.book(&book_args).await,
        Some(Redeem(redeem_args)) => cli.redeem(&redeem_args),
        Some(Bookings) => {
            cli.show_bookings();
            Ok(())
        }
        Some(Plans) => {
            cli.show_plans();
            Ok(())
        }
        Some(Demo) => cli.demo().await,
        Some(Cafes) | None => {
            cli.show_cafes();
            Ok(())
        }
    }
}
