//! Core library for the brew cafe-reservation application.
//!
//! This crate provides the business logic for discovering cafes, booking
//! tables and redeeming one-time codes: identifier generation, artifact
//! encoding (QR images and OTPs), expiry policies, per-flow lifecycle
//! state machines, the append-only session store, and top-level view
//! navigation. All state is held in memory for the duration of a session;
//! there is no persistence layer.
//!
//! # Architecture
//!
//! The [`Session`] facade owns the shared state (catalog, store, router,
//! subscribers). Each booking or redemption attempt runs in its own flow
//! ([`lifecycle::BookingFlow`] / [`lifecycle::RedemptionFlow`]), an
//! explicit state value plus transition methods, independent of any
//! rendering framework. Presentation shells subscribe to completed
//! records and render the display wrappers in [`display`].
//!
//! # Quick Start
//!
//! ```rust
//! use brew_core::{params::BookTable, Session};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = Session::new();
//!
//! // Book a table using session methods
//! let params = BookTable {
//!     cafe: "Nordic Brew".to_string(),
//!     full_name: "Asha Rao".to_string(),
//!     phone: "555-0100".to_string(),
//!     email: "asha@example.com".to_string(),
//!     date: "2026-08-07".to_string(),
//!     time: "18:00".to_string(),
//!     guests: "2".to_string(),
//! };
//! let (record, toast) = session.book(&params).await?;
//! println!("{toast}");
//! println!("Booked with ID: {}", record.id);
//!
//! // The history view partitions records at query time
//! let history = session.history(&jiff::Zoned::now());
//! println!("{history}");
//! # Ok(())
//! # }
//! ```

pub mod artifact;
pub mod catalog;
pub mod display;
pub mod error;
pub mod expiry;
pub mod exports;
pub mod ident;
pub mod lifecycle;
pub mod models;
pub mod params;
pub mod router;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use artifact::{QrEncoder, QrPayload};
pub use display::{BookingHistory, CafeList, ConfirmationView, RedemptionView, Toast};
pub use error::{BookingError, Result};
pub use exports::Clipboard;
pub use lifecycle::{BookingFlow, BookingStage, RedemptionFlow, RedemptionStage};
pub use models::{
    BookingClass, BookingIntent, BookingRecord, Cafe, IntentField, Record, RedemptionRecord,
    RedemptionState,
};
pub use router::{HomeAnchor, View, ViewRouter};
pub use session::Session;
pub use store::{BookingStore, Partition};
