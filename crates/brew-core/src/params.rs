//! Parameter structures for session operations.
//!
//! Shared parameter structures usable across different interfaces (CLI
//! today, other shells tomorrow) without framework-specific derives.
//! Interface layers define their own wrapper structs with framework
//! derives (clap, etc.) and convert into these via `From`/`Into`, keeping
//! the core free of UI concerns.

use serde::{Deserialize, Serialize};

/// Parameters for booking a table at a cafe.
///
/// All fields arrive as raw form strings; the submission guard performs
/// typing and range checks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookTable {
    /// Catalog id or name of the cafe to book at
    pub cafe: String,
    /// Full name of the guest
    pub full_name: String,
    /// Contact phone number
    pub phone: String,
    /// Contact email address
    pub email: String,
    /// Reservation date (YYYY-MM-DD)
    pub date: String,
    /// Reservation time (HH:MM, half-hour slots)
    pub time: String,
    /// Party size (1-8)
    pub guests: String,
}

/// Parameters for redeeming a one-time code at a cafe.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RedeemCode {
    /// Catalog id or name of the cafe to redeem at
    pub cafe: String,
}
