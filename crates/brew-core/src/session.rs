//! The session facade owning all shared state.
//!
//! A [`Session`] is created when the application starts and discarded when
//! it exits; it owns the one [`BookingStore`], the [`ViewRouter`] and the
//! subscriber list, and hands out flows for individual booking and
//! redemption attempts. All shared-state mutation funnels through the
//! session, so flows themselves stay independent of each other.
//!
//! Subscribers registered via [`Session::subscribe`] are notified exactly
//! once per completed record, right after the store append; this is how an
//! outer shell keeps its own view of the session history current.

use jiff::Zoned;
use log::info;

use crate::artifact::QrEncoder;
use crate::catalog;
use crate::display::{BookingHistory, Toast};
use crate::error::Result;
use crate::lifecycle::{BookingFlow, RedemptionFlow};
use crate::models::{BookingRecord, Cafe, IntentField, Record, RedemptionRecord};
use crate::params::{BookTable, RedeemCode};
use crate::router::{HomeAnchor, View, ViewRouter};
use crate::store::BookingStore;

type Subscriber = Box<dyn Fn(&Record) + Send + Sync>;

/// One application session: catalog, store, router and subscribers.
pub struct Session {
    catalog: Vec<Cafe>,
    store: BookingStore,
    router: ViewRouter,
    encoder: QrEncoder,
    subscribers: Vec<Subscriber>,
}

impl Session {
    /// Create a session over the built-in catalog.
    pub fn new() -> Self {
        Self::with_catalog(catalog::default_catalog())
    }

    /// Create a session over a custom catalog.
    pub fn with_catalog(catalog: Vec<Cafe>) -> Self {
        Self {
            catalog,
            store: BookingStore::new(),
            router: ViewRouter::new(),
            encoder: QrEncoder::new(),
            subscribers: Vec::new(),
        }
    }

    /// The cafes available for selection.
    pub fn cafes(&self) -> &[Cafe] {
        &self.catalog
    }

    /// Resolve a cafe-selection event by id or name.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::CafeNotFound` when nothing matches.
    pub fn find_cafe(&self, key: &str) -> Result<&Cafe> {
        catalog::find(&self.catalog, key)
    }

    /// Register a callback fired once per completed record.
    pub fn subscribe(&mut self, subscriber: impl Fn(&Record) + Send + Sync + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Read access to the session store.
    pub fn store(&self) -> &BookingStore {
        &self.store
    }

    // === Flows ===

    /// Open a booking flow for the selected cafe.
    pub fn begin_booking(&self, cafe: &str) -> Result<BookingFlow> {
        Ok(BookingFlow::new(self.find_cafe(cafe)?.clone()))
    }

    /// Open a redemption flow for the selected cafe.
    pub fn begin_redemption(&self, cafe: &str) -> Result<RedemptionFlow> {
        Ok(RedemptionFlow::new(self.find_cafe(cafe)?.clone()))
    }

    /// Complete a booking flow: submit the form, append the record, notify
    /// subscribers and produce the success notification.
    pub async fn confirm(&mut self, flow: &mut BookingFlow) -> Result<(BookingRecord, Toast)> {
        let record = flow.submit(&self.encoder).await?;
        info!("booking {} completed at '{}'", record.id, record.cafe.name);

        self.complete(Record::Booking(record.clone()));
        let toast = Toast::success(
            "Booking Confirmed!",
            format!("Your table at {} has been reserved.", record.cafe.name),
        );
        Ok((record, toast))
    }

    /// Complete a redemption flow: issue the code, append the record,
    /// notify subscribers and produce the success notification.
    pub fn redeem(&mut self, flow: &mut RedemptionFlow) -> Result<(RedemptionRecord, Toast)> {
        let record = flow.redeem()?;
        info!("redemption {} issued at '{}'", record.id, record.cafe.name);

        self.complete(Record::Redemption(record.clone()));
        let toast = Toast::success(
            "Code Generated!",
            format!("Show your code at {} within 10 minutes.", record.cafe.name),
        );
        Ok((record, toast))
    }

    fn complete(&mut self, record: Record) {
        self.store.append(record);
        // The freshly appended record is the last one by construction
        if let Some(appended) = self.store.all().last() {
            for subscriber in &self.subscribers {
                subscriber(appended);
            }
        }
    }

    // === Handler-level operations ===

    /// Drive a whole booking attempt from parameters: open the flow, feed
    /// the form one field at a time, then confirm.
    ///
    /// # Errors
    ///
    /// Propagates `CafeNotFound` from selection and `InvalidInput` from
    /// the submission guard; nothing is appended in either case.
    pub async fn book(&mut self, params: &BookTable) -> Result<(BookingRecord, Toast)> {
        let mut flow = self.begin_booking(&params.cafe)?;
        flow.update(IntentField::FullName, &params.full_name);
        flow.update(IntentField::Phone, &params.phone);
        flow.update(IntentField::Email, &params.email);
        flow.update(IntentField::Date, &params.date);
        flow.update(IntentField::Time, &params.time);
        flow.update(IntentField::Guests, &params.guests);
        self.confirm(&mut flow).await
    }

    /// Drive a whole redemption attempt from parameters.
    pub fn redeem_at(&mut self, params: &RedeemCode) -> Result<(RedemptionRecord, Toast)> {
        let mut flow = self.begin_redemption(&params.cafe)?;
        self.redeem(&mut flow)
    }

    /// The partitioned history for the MyBookings view at the given
    /// instant.
    pub fn history(&self, now: &Zoned) -> BookingHistory {
        self.store.partition(now).into()
    }

    // === Navigation ===

    /// The view currently shown.
    pub fn view(&self) -> View {
        self.router.current()
    }

    /// Navigate to another top-level view.
    pub fn navigate(&mut self, view: View) {
        self.router.navigate(view);
    }

    /// Smooth-scroll within the Home view; not a view transition.
    pub fn scroll_to(&mut self, anchor: HomeAnchor) {
        self.router.scroll_to(anchor);
    }

    /// The active scroll anchor within the Home view.
    pub fn home_anchor(&self) -> HomeAnchor {
        self.router.home_anchor()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
