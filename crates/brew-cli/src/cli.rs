//! Command handlers driving the session facade.
//!
//! Each handler resolves CLI arguments into core parameter structs,
//! drives the session through its event contract, and renders the
//! resulting markdown views. The session lives for exactly one
//! invocation; the `demo` command strings several flows together to show
//! cross-flow accumulation inside a single session.

use anyhow::{Context, Result};
use brew_core::display::{CafeList, ConfirmationView, RedemptionView, Toast};
use brew_core::params::{BookTable, RedeemCode};
use brew_core::{exports, Clipboard, HomeAnchor, IntentField, Session, View};
use jiff::Zoned;
use log::info;

use crate::args::{BookArgs, RedeemArgs};
use crate::clipboard::SystemClipboard;
use crate::plans;
use crate::renderer::TerminalRenderer;

const HERO_MD: &str = "\
# Discover Cafes. Book Tables. Sip More.

A new way to explore cafes and reserve your spot instantly. Experience
the perfect blend of discovery and convenience.

";

/// Command dispatcher holding the session and renderer.
pub struct Cli {
    session: Session,
    renderer: TerminalRenderer,
}

impl Cli {
    /// Create a dispatcher over a fresh session.
    pub fn new(session: Session, renderer: TerminalRenderer) -> Self {
        Self { session, renderer }
    }

    /// Render the Home view: hero section plus the cafe grid.
    pub fn show_cafes(&mut self) {
        self.session.navigate(View::Home);
        self.session.scroll_to(HomeAnchor::Cafes);
        self.renderer.render(HERO_MD);
        let list = CafeList(self.session.cafes().to_vec());
        self.renderer.render(&list.to_string());
    }

    /// Run a booking flow and render the confirmation screen.
    pub async fn book(&mut self, args: &BookArgs) -> Result<()> {
        let params = BookTable::from(args);
        let (record, toast) = self
            .session
            .book(&params)
            .await
            .context("Booking failed")?;

        self.renderer.render(&toast.to_string());
        self.renderer.render("\n");
        self.renderer
            .render(&ConfirmationView::new(record.clone()).to_string());

        if let Some(dir) = &args.save_dir {
            let path =
                exports::write_qr_png(&record, dir).context("Failed to save the QR image")?;
            self.renderer
                .render(&format!("\nSaved QR image to {}\n", path.display()));
        }
        Ok(())
    }

    /// Run a redemption flow and render the issued code.
    pub fn redeem(&mut self, args: &RedeemArgs) -> Result<()> {
        let params = RedeemCode::from(args);
        let (record, toast) = self
            .session
            .redeem_at(&params)
            .context("Redemption failed")?;

        self.renderer.render(&toast.to_string());
        self.renderer.render("\n");
        self.renderer
            .render(&RedemptionView::new(record.clone()).to_string());

        if args.copy {
            // A failed copy is a notification, never an error: the code
            // stays on screen and the session is untouched
            let toast = match SystemClipboard.copy(&record.code) {
                Ok(()) => Toast::success("Copied!", "Your code is on the clipboard."),
                Err(e) => Toast::failure("Copy failed", e.to_string()),
            };
            self.renderer.render("\n");
            self.renderer.render(&toast.to_string());
        }
        Ok(())
    }

    /// Render the MyBookings view for the current session.
    pub fn show_bookings(&mut self) {
        self.session.navigate(View::MyBookings);
        let history = self.session.history(&Zoned::now());
        self.renderer.render(&history.to_string());
    }

    /// Render the Plans view.
    pub fn show_plans(&mut self) {
        self.session.navigate(View::Plans);
        self.renderer.render(plans::PLANS_MD);
    }

    /// Scripted single-session walkthrough: one booking, one redemption,
    /// then the partitioned history and the plans page.
    pub async fn demo(&mut self) -> Result<()> {
        self.session
            .subscribe(|record| info!("session history updated with {}", record.id()));

        self.show_cafes();

        // Booking flow, driven field by field as the form would
        let date = Zoned::now()
            .date()
            .tomorrow()
            .context("demo date out of range")?
            .to_string();
        let mut flow = self.session.begin_booking("Nordic Brew")?;
        flow.update(IntentField::FullName, "Asha Rao");
        flow.update(IntentField::Phone, "555-0100");
        flow.update(IntentField::Email, "asha@example.com");
        flow.update(IntentField::Date, &date);
        flow.update(IntentField::Time, "18:00");
        flow.update(IntentField::Guests, "2");
        let (record, toast) = self.session.confirm(&mut flow).await?;
        self.renderer.render(&toast.to_string());
        self.renderer.render("\n");
        self.renderer
            .render(&ConfirmationView::new(record).to_string());
        flow.dismiss().await;

        // Redemption flow at another cafe
        let (record, toast) = self.session.redeem_at(&RedeemCode {
            cafe: "The Industrial".to_string(),
        })?;
        self.renderer.render("\n");
        self.renderer.render(&toast.to_string());
        self.renderer.render("\n");
        self.renderer
            .render(&RedemptionView::new(record).to_string());

        // Both records show up in the same session history
        self.renderer.render("\n");
        self.show_bookings();
        self.renderer.render("\n");
        self.show_plans();

        self.session.navigate(View::Home);
        self.session.scroll_to(HomeAnchor::Hero);
        Ok(())
    }
}
