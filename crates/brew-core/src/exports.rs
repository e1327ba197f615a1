//! Artifact export actions.
//!
//! Two exports mirror the two artifact kinds: writing the QR image to a
//! named PNG file (the download action of the QR variant), and copying
//! the one-time code to the clipboard (the OTP variant). The clipboard
//! itself is platform territory, so it is abstracted behind a trait the
//! shell implements; a failed copy surfaces as
//! [`ClipboardUnavailable`](crate::BookingError::ClipboardUnavailable)
//! and changes no state.

use std::fs;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use log::info;

use crate::error::{BookingError, ExportResultExt, Result};
use crate::models::BookingRecord;

const DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Decode the record's QR data URL back into raw PNG bytes.
///
/// # Errors
///
/// Returns `InvalidInput` when the record carries no artifact or the data
/// URL is malformed.
pub fn qr_png_bytes(record: &BookingRecord) -> Result<Vec<u8>> {
    let body = record
        .qr_code
        .strip_prefix(DATA_URL_PREFIX)
        .ok_or_else(|| {
            BookingError::invalid_input("qr_code")
                .with_reason("no QR artifact attached to this booking")
        })?;
    STANDARD.decode(body).map_err(|e| {
        BookingError::invalid_input("qr_code").with_reason(format!("corrupt QR data URL: {e}"))
    })
}

/// Write the booking's QR image into `dir`, named after the cafe.
///
/// The filename follows the download convention
/// `brew-booking-<cafe>.png`.
///
/// # Errors
///
/// `InvalidInput` when the artifact is missing, `Export` on filesystem
/// failures.
pub fn write_qr_png(record: &BookingRecord, dir: &Path) -> Result<PathBuf> {
    let png = qr_png_bytes(record)?;
    let path = dir.join(format!("brew-booking-{}.png", record.cafe.name));
    fs::write(&path, png).export_context(&path)?;
    info!("wrote QR image for {} to {}", record.id, path.display());
    Ok(path)
}

/// Copy-to-clipboard seam implemented by the shell.
pub trait Clipboard {
    /// Place the text on the system clipboard.
    ///
    /// # Errors
    ///
    /// `ClipboardUnavailable` when no clipboard mechanism is usable.
    fn copy(&self, text: &str) -> Result<()>;
}
