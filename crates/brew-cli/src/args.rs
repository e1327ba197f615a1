use std::path::PathBuf;

use brew_core::params::{BookTable, RedeemCode};
use clap::{Args as ClapArgs, Parser, Subcommand};

/// Main command-line interface for the brew cafe reservation tool
///
/// Brew is a cafe discovery and table reservation front end: browse a
/// curated catalog of cafes, book a table (receiving a scannable QR
/// proof), or redeem a time-limited one-time code. All state lives in
/// memory for the duration of one invocation.
#[derive(Parser)]
#[command(version, about, name = "brew")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the brew CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Browse the cafe catalog
    #[command(alias = "c")]
    Cafes,
    /// Book a table at a cafe
    #[command(alias = "b")]
    Book(BookArgs),
    /// Redeem a one-time code at a cafe
    #[command(alias = "r")]
    Redeem(RedeemArgs),
    /// Show the session's booking history
    Bookings,
    /// Show the subscription plans
    Plans,
    /// Run a scripted demo session
    Demo,
}

/// Book a table at a cafe
///
/// Drives a full booking flow: cafe selection, field-by-field form
/// entry, submission and the QR confirmation screen. The cafe can be
/// given by catalog id or name.
#[derive(ClapArgs)]
pub struct BookArgs {
    /// Catalog id or name of the cafe to book at
    pub cafe: String,
    /// Full name for the reservation
    #[arg(short, long)]
    pub name: String,
    /// Contact phone number
    #[arg(short, long)]
    pub phone: String,
    /// Contact email address
    #[arg(short, long)]
    pub email: String,
    /// Reservation date (YYYY-MM-DD, today or later)
    #[arg(short, long)]
    pub date: String,
    /// Reservation time (HH:MM on a half-hour slot, 08:00 through 21:30)
    #[arg(short, long)]
    pub time: String,
    /// Number of guests (1-8)
    #[arg(short, long, default_value = "2")]
    pub guests: String,
    /// Directory to save the QR image into (download export)
    #[arg(long)]
    pub save_dir: Option<PathBuf>,
}

impl From<&BookArgs> for BookTable {
    fn from(val: &BookArgs) -> Self {
        BookTable {
            cafe: val.cafe.clone(),
            full_name: val.name.clone(),
            phone: val.phone.clone(),
            email: val.email.clone(),
            date: val.date.clone(),
            time: val.time.clone(),
            guests: val.guests.clone(),
        }
    }
}

/// Redeem a one-time code at a cafe
///
/// Issues a six-digit code valid for ten minutes. No form input is
/// required beyond picking the cafe.
#[derive(ClapArgs)]
pub struct RedeemArgs {
    /// Catalog id or name of the cafe to redeem at
    pub cafe: String,
    /// Copy the code to the system clipboard
    #[arg(long)]
    pub copy: bool,
}

impl From<&RedeemArgs> for RedeemCode {
    fn from(val: &RedeemArgs) -> Self {
        RedeemCode {
            cafe: val.cafe.clone(),
        }
    }
}
