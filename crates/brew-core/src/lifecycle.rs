//! Per-flow lifecycle state machines.
//!
//! Every cafe selection opens an independent flow: a [`BookingFlow`]
//! stepping `Form -> Confirmation`, or a [`RedemptionFlow`] stepping
//! `Info -> Redeemed`. Flows own their transient state and share nothing;
//! the session store is touched only by the session facade once a flow
//! hands back a completed record.
//!
//! Dismissal is modelled on the reference behavior: the closing
//! transition is allowed to finish before transient state is torn down,
//! so [`BookingFlow::dismiss`] waits out [`CLOSE_TRANSITION`] before the
//! flow is dropped. A [`CancelToken`] shared with any in-flight artifact
//! encode ensures a late-arriving artifact for an already-dismissed flow
//! is discarded rather than applied.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use jiff::{Timestamp, Zoned};
use log::{debug, warn};

use crate::artifact::{self, QrEncoder, QrPayload};
use crate::error::{BookingError, Result};
use crate::ident::{self, IdKind};
use crate::models::{BookingIntent, BookingRecord, Cafe, IntentField, RedemptionRecord};

/// How long the visual close transition takes; transient state is reset
/// only after this has elapsed.
pub const CLOSE_TRANSITION: Duration = Duration::from_millis(300);

/// Cancellation signal shared between a flow and its in-flight encode.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Mark the owning flow as dismissed.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Whether the owning flow has been dismissed.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// States of a booking flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStage {
    /// Collecting form input
    Form,
    /// Booking completed, confirmation on display
    Confirmation,
}

/// One booking attempt, from cafe selection to dismissal.
#[derive(Debug)]
pub struct BookingFlow {
    cafe: Cafe,
    intent: BookingIntent,
    stage: BookingStage,
    token: CancelToken,
    record: Option<BookingRecord>,
}

impl BookingFlow {
    /// Open a booking flow for the selected cafe, with an empty form.
    pub fn new(cafe: Cafe) -> Self {
        debug!("booking flow opened for cafe '{}'", cafe.name);
        Self {
            cafe,
            intent: BookingIntent::default(),
            stage: BookingStage::Form,
            token: CancelToken::default(),
            record: None,
        }
    }

    /// The cafe this flow was opened for.
    pub fn cafe(&self) -> &Cafe {
        &self.cafe
    }

    /// Current lifecycle stage.
    pub fn stage(&self) -> BookingStage {
        self.stage
    }

    /// The form state as entered so far.
    pub fn intent(&self) -> &BookingIntent {
        &self.intent
    }

    /// The completed record, present once the flow reached Confirmation.
    pub fn record(&self) -> Option<&BookingRecord> {
        self.record.as_ref()
    }

    /// The dismissal signal for this flow. An early close control can
    /// trigger it while an encode is still in flight.
    pub fn cancel_token(&self) -> CancelToken {
        self.token.clone()
    }

    /// Apply a single form field edit.
    pub fn update(&mut self, field: IntentField, value: &str) {
        self.intent.set(field, value);
    }

    /// Submit the form: validate, generate the identifier, encode the QR
    /// artifact and transition to Confirmation.
    ///
    /// Encoding is best-effort. If it fails the failure is logged and the
    /// record is created with an empty artifact; the booking itself never
    /// fails for that reason.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` when the submission guard rejects the form
    /// - `FlowClosed` when the flow is not at the Form stage, or was
    ///   dismissed while the encode was in flight
    pub async fn submit(&mut self, encoder: &QrEncoder) -> Result<BookingRecord> {
        if self.stage != BookingStage::Form || self.token.is_cancelled() {
            return Err(BookingError::FlowClosed);
        }

        let today = Zoned::now().date();
        let booking = self.intent.validate(today)?;

        let id = ident::generate(IdKind::Booking);
        let payload = QrPayload::new(&id, &self.cafe, &booking);
        let qr_code = match encoder.encode(&payload).await {
            Ok(data_url) => data_url,
            Err(e) => {
                warn!("failed to generate QR code for {id}: {e}");
                String::new()
            }
        };

        // A dismissal may have raced the encode; the late artifact is
        // discarded and no record is produced.
        if self.token.is_cancelled() {
            debug!("flow for '{}' dismissed during encode, discarding artifact", self.cafe.name);
            return Err(BookingError::FlowClosed);
        }

        let record = BookingRecord::from_submission(
            id,
            self.cafe.clone(),
            booking,
            Timestamp::now(),
            qr_code,
        );
        self.stage = BookingStage::Confirmation;
        self.record = Some(record.clone());
        Ok(record)
    }

    /// Dismiss the flow.
    ///
    /// Waits out the close transition before transient state is torn
    /// down, so the closing animation is never interrupted by the reset.
    pub async fn dismiss(self) {
        self.token.cancel();
        tokio::time::sleep(CLOSE_TRANSITION).await;
        debug!("booking flow for '{}' reset", self.cafe.name);
    }
}

/// States of a redemption flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedemptionStage {
    /// Cafe info on display, redeem action available
    Info,
    /// Code issued and on display
    Redeemed,
}

/// One redemption attempt at a cafe.
///
/// Redemption has no form: the redeem action is unconditional and
/// synchronous (integer formatting cannot fail), so this flow is the
/// slimmer sibling of [`BookingFlow`].
#[derive(Debug)]
pub struct RedemptionFlow {
    cafe: Cafe,
    stage: RedemptionStage,
    record: Option<RedemptionRecord>,
}

impl RedemptionFlow {
    /// Open a redemption flow for the selected cafe.
    pub fn new(cafe: Cafe) -> Self {
        debug!("redemption flow opened for cafe '{}'", cafe.name);
        Self {
            cafe,
            stage: RedemptionStage::Info,
            record: None,
        }
    }

    /// The cafe this flow was opened for.
    pub fn cafe(&self) -> &Cafe {
        &self.cafe
    }

    /// Current lifecycle stage.
    pub fn stage(&self) -> RedemptionStage {
        self.stage
    }

    /// The issued record, present once the flow reached Redeemed.
    pub fn record(&self) -> Option<&RedemptionRecord> {
        self.record.as_ref()
    }

    /// Issue a one-time code and transition to Redeemed.
    ///
    /// # Errors
    ///
    /// - `FlowClosed` when the flow already left the Info stage
    /// - `Time` if the expiry window cannot be represented
    pub fn redeem(&mut self) -> Result<RedemptionRecord> {
        if self.stage != RedemptionStage::Info {
            return Err(BookingError::FlowClosed);
        }

        let id = ident::generate(IdKind::Redemption);
        let code = artifact::generate_otp();
        let record = RedemptionRecord::issue(id, self.cafe.clone(), code, Timestamp::now())?;

        self.stage = RedemptionStage::Redeemed;
        self.record = Some(record.clone());
        Ok(record)
    }

    /// Dismiss the flow, waiting out the close transition first.
    pub async fn dismiss(self) {
        tokio::time::sleep(CLOSE_TRANSITION).await;
        debug!("redemption flow for '{}' reset", self.cafe.name);
    }
}
