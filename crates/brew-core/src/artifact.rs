//! Proof-of-booking artifact encoding.
//!
//! Two artifact kinds back the two product flows:
//!
//! - **QR**: the booking payload is serialized to JSON and rendered as a
//!   QR symbol into a PNG data URL. Encoding is best-effort: a failure is
//!   reported to the caller, who substitutes the empty sentinel and keeps
//!   the booking (losing the visual proof is recoverable, losing the
//!   booking is not).
//! - **OTP**: a six-digit decimal code drawn uniformly from
//!   [100000, 999999]. Cannot fail.
//!
//! QR rendering is CPU-bound, so [`QrEncoder::encode`] moves it onto the
//! blocking thread pool while the triggering event handler awaits the
//! result.

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::{DynamicImage, GrayImage, ImageFormat, Luma};
use qrcode::{Color, QrCode};
use serde::Serialize;
use tokio::task;

use crate::error::{BookingError, Result};
use crate::models::{Cafe, ValidatedBooking};

/// Requested edge length of the rendered symbol, in logical pixels.
pub const QR_TARGET_PX: u32 = 200;

/// Quiet-zone margin around the symbol, in modules.
pub const QUIET_ZONE_MODULES: u32 = 2;

const DARK: u8 = 0x1a;
const LIGHT: u8 = 0xff;

/// Structured payload carried inside the QR symbol.
///
/// Serialized with the wire field names scanners already expect
/// (`bookingId`, camelCase).
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QrPayload {
    pub booking_id: String,
    pub cafe: String,
    pub date: String,
    pub time: String,
    pub guests: String,
    pub name: String,
}

impl QrPayload {
    /// Assemble the payload for a submitted booking.
    pub fn new(booking_id: &str, cafe: &Cafe, booking: &ValidatedBooking) -> Self {
        Self {
            booking_id: booking_id.to_string(),
            cafe: cafe.name.clone(),
            date: booking.date.to_string(),
            time: format!("{:02}:{:02}", booking.time.hour(), booking.time.minute()),
            guests: booking.guests.to_string(),
            name: booking.full_name.clone(),
        }
    }
}

/// QR symbol renderer with the application's fixed presentation settings:
/// ~200px edge, two-module quiet zone, near-black on white.
#[derive(Debug, Clone, Copy, Default)]
pub struct QrEncoder;

impl QrEncoder {
    /// Create an encoder with the default rendering settings.
    pub fn new() -> Self {
        Self
    }

    /// Encode the payload into a PNG data URL.
    ///
    /// Runs the render on the blocking pool; the calling flow suspends
    /// until it completes, but the rest of the application stays
    /// responsive.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::ArtifactEncoding` when the payload exceeds
    /// QR capacity or the PNG encode fails, and
    /// `BookingError::Serialization` when the payload cannot be
    /// serialized. Callers in the booking lifecycle treat any error here
    /// as non-fatal.
    pub async fn encode(&self, payload: &QrPayload) -> Result<String> {
        let json = serde_json::to_string(payload)?;
        task::spawn_blocking(move || render_data_url(&json))
            .await
            .map_err(|e| BookingError::artifact(format!("encoder task join error: {e}")))?
    }
}

/// Render JSON data into a `data:image/png;base64,...` URL.
fn render_data_url(data: &str) -> Result<String> {
    let code = QrCode::new(data.as_bytes())
        .map_err(|e| BookingError::artifact(format!("symbol construction failed: {e}")))?;
    let img = paint_modules(&code);

    let mut png = Vec::new();
    DynamicImage::ImageLuma8(img)
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| BookingError::artifact(format!("PNG encode failed: {e}")))?;

    Ok(format!("data:image/png;base64,{}", STANDARD.encode(&png)))
}

/// Paint the module matrix into a grayscale image.
///
/// Modules are scaled up so the symbol plus quiet zone fills roughly
/// [`QR_TARGET_PX`]; the scale never drops below one pixel per module, so
/// very dense symbols come out larger rather than unreadable.
fn paint_modules(code: &QrCode) -> GrayImage {
    let width = code.width() as u32;
    let total_modules = width + 2 * QUIET_ZONE_MODULES;
    let scale = (QR_TARGET_PX / total_modules).max(1);
    let dim = total_modules * scale;

    let mut img = GrayImage::from_pixel(dim, dim, Luma([LIGHT]));
    let colors = code.to_colors();

    for (i, color) in colors.iter().enumerate() {
        if *color != Color::Dark {
            continue;
        }
        let mx = (i as u32 % width + QUIET_ZONE_MODULES) * scale;
        let my = (i as u32 / width + QUIET_ZONE_MODULES) * scale;
        for dy in 0..scale {
            for dx in 0..scale {
                img.put_pixel(mx + dx, my + dy, Luma([DARK]));
            }
        }
    }

    img
}

/// Draw a fresh six-digit one-time code.
pub fn generate_otp() -> String {
    otp_with(&mut rand::thread_rng())
}

fn otp_with(rng: &mut impl rand::Rng) -> String {
    rng.gen_range(100_000..=999_999).to_string()
}
