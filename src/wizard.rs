// Booking wizard state machine
// Drives the four-step flow select -> details -> confirm -> success. The
// wizard exclusively owns the draft for the lifetime of one dialog; closing
// it discards everything. Confirmation is the sole effectful transition and
// goes through the BookingApi seam, which in this crate is a simulated call
// with fixed latency rather than a real reservation endpoint.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::clock::Clock;
use crate::model::{Booking, BookingDraft, BookingSlot, BookingStatus, ContactForm, Restaurant};
use crate::notify::{Notification, NotificationSink};
use crate::validate::{self, ValidationErrors};

// Party size used when the caller supplies no initial guest count
pub const DEFAULT_GUESTS: u32 = 2;
// Latency of the simulated confirmation call
pub const SIMULATED_CONFIRM_DELAY: Duration = Duration::from_millis(1500);

const MSG_BOOKING_FAILED: &str = "Booking failed. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Select,
    Details,
    Confirm,
    Success,
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WizardStep::Select => "select",
            WizardStep::Details => "details",
            WizardStep::Confirm => "confirm",
            WizardStep::Success => "success",
        };
        f.write_str(name)
    }
}

// Events driving the step transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    SlotChosen { available: bool },
    ContactAccepted,
    Back,
    BookingConfirmed,
    Closed,
}

/// Pure transition table: `None` means the event does not move the wizard
/// from the given step (silent no-op, not an error).
pub fn transition(step: WizardStep, event: &WizardEvent) -> Option<WizardStep> {
    use WizardEvent::*;
    use WizardStep::*;

    match (step, event) {
        (Select, SlotChosen { available: true }) => Some(Details),
        (Select, SlotChosen { available: false }) => None,
        (Details, ContactAccepted) => Some(Confirm),
        (Details, Back) => Some(Select),
        (Confirm, Back) => Some(Details),
        (Confirm, BookingConfirmed) => Some(Success),
        (_, Closed) => Some(Select),
        _ => None,
    }
}

#[derive(Error, Debug)]
pub enum BookingApiError {
    #[error("booking service unavailable: {0}")]
    Unavailable(String),

    #[error("booking rejected: {0}")]
    Rejected(String),
}

// Payload handed to the booking backend on confirm
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub restaurant: String,
    pub guests: u32,
    pub date: NaiveDate,
    pub time: String,
    pub contact: ContactForm,
}

#[derive(Debug, Clone)]
pub struct BookingConfirmation {
    pub confirmation_code: String,
    pub status: BookingStatus,
}

// The seam where a real POST /bookings call would live
#[async_trait]
pub trait BookingApi: Send + Sync + 'static {
    async fn confirm_booking(
        &self,
        request: BookingRequest,
    ) -> Result<BookingConfirmation, BookingApiError>;
}

// Simulated backend: fixed latency, then an unconditional success carrying
// a locally generated confirmation code. Never checked against a server
// for collisions.
pub struct SimulatedBookingApi {
    clock: Arc<dyn Clock>,
    delay: Duration,
}

impl SimulatedBookingApi {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_delay(clock, SIMULATED_CONFIRM_DELAY)
    }

    pub fn with_delay(clock: Arc<dyn Clock>, delay: Duration) -> Self {
        Self { clock, delay }
    }
}

#[async_trait]
impl BookingApi for SimulatedBookingApi {
    async fn confirm_booking(
        &self,
        request: BookingRequest,
    ) -> Result<BookingConfirmation, BookingApiError> {
        debug!(restaurant = %request.restaurant, guests = request.guests, "simulating confirmation call");
        tokio::time::sleep(self.delay).await;

        Ok(BookingConfirmation {
            confirmation_code: confirmation_code(self.clock.now()),
            status: BookingStatus::Confirmed,
        })
    }
}

/// Confirmation code: "BK" followed by the current epoch milliseconds in
/// upper-case base 36. Practically unique within a session, nothing more.
pub fn confirmation_code(now: NaiveDateTime) -> String {
    let millis = u64::try_from(now.and_utc().timestamp_millis()).unwrap_or(0);
    format!("BK{}", to_base36(millis))
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    if value == 0 {
        return "0".to_string();
    }
    let mut buf = Vec::new();
    while value > 0 {
        buf.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    buf.iter().rev().map(|&b| b as char).collect()
}

#[derive(Error, Debug)]
pub enum WizardError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("{action} is not available on the {step} step")]
    WrongStep {
        action: &'static str,
        step: WizardStep,
    },

    #[error("a confirmation is already in progress")]
    ConfirmInFlight,

    #[error(transparent)]
    Api(#[from] BookingApiError),
}

// Caller-supplied setup for one wizard instance
#[derive(Debug, Clone)]
pub struct WizardConfig {
    pub restaurant: Restaurant,
    pub initial_guests: Option<u32>,
    pub initial_date: Option<NaiveDate>,
    pub initial_time: Option<String>,
}

impl WizardConfig {
    pub fn new(restaurant: Restaurant) -> Self {
        Self {
            restaurant,
            initial_guests: None,
            initial_date: None,
            initial_time: None,
        }
    }
}

pub struct Wizard {
    config: WizardConfig,
    clock: Arc<dyn Clock>,
    api: Arc<dyn BookingApi>,
    notifier: Arc<dyn NotificationSink>,
    step: WizardStep,
    draft: BookingDraft,
    booking: Option<Booking>,
    confirm_in_flight: bool,
}

impl Wizard {
    pub fn new(
        config: WizardConfig,
        clock: Arc<dyn Clock>,
        api: Arc<dyn BookingApi>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        let draft = initial_draft(&config, clock.as_ref());
        Self {
            config,
            clock,
            api,
            notifier,
            step: WizardStep::Select,
            draft,
            booking: None,
            confirm_in_flight: false,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn restaurant(&self) -> &Restaurant {
        &self.config.restaurant
    }

    // The confirmed booking, present only on the success step
    pub fn booking(&self) -> Option<&Booking> {
        self.booking.as_ref()
    }

    pub fn set_guests(&mut self, guests: u32) -> Result<(), WizardError> {
        validate::validate_guests(guests)?;
        self.draft.guests = guests;
        Ok(())
    }

    // Rejects past dates by calendar day; booking for later today is fine
    pub fn set_date(&mut self, date: NaiveDate) -> Result<(), WizardError> {
        validate::validate_date(Some(date), self.clock.today())?;
        self.draft.date = Some(date);
        Ok(())
    }

    /// Choose a time slot on the select step. An unavailable slot is a
    /// silent no-op; an available one records its time and moves to the
    /// details step. Returns whether the wizard advanced.
    pub fn choose_slot(&mut self, slot: &BookingSlot) -> bool {
        let event = WizardEvent::SlotChosen {
            available: slot.available,
        };
        match transition(self.step, &event) {
            Some(next) => {
                self.draft.time = Some(slot.time.clone());
                debug!(step = %next, time = %slot.time, "slot chosen");
                self.step = next;
                true
            }
            None => false,
        }
    }

    /// Step back from details or confirm. Selections and entered contact
    /// details are preserved. Returns whether the wizard moved.
    pub fn back(&mut self) -> bool {
        match transition(self.step, &WizardEvent::Back) {
            Some(previous) => {
                debug!(step = %previous, "back");
                self.step = previous;
                true
            }
            None => false,
        }
    }

    /// Submit the contact form on the details step. The entered details are
    /// kept even when validation fails, so the user can correct them.
    pub fn submit_contact(&mut self, contact: ContactForm) -> Result<(), WizardError> {
        if self.step != WizardStep::Details {
            return Err(WizardError::WrongStep {
                action: "submit_contact",
                step: self.step,
            });
        }

        self.draft.contact = contact;
        validate::validate_draft(&self.draft, self.clock.today())?;

        // Unwrap-free by construction: validate_draft just accepted the draft
        if let Some(next) = transition(self.step, &WizardEvent::ContactAccepted) {
            debug!(step = %next, "contact accepted");
            self.step = next;
        }
        Ok(())
    }

    /// Confirm the booking: the sole effectful transition. Awaits the
    /// booking backend, then either lands on the success step with the
    /// finalized booking or stays on confirm with a failure notification.
    /// Dropping the returned future cancels the in-flight call; `close`
    /// afterwards restores the wizard to a usable state.
    pub async fn confirm(&mut self) -> Result<Booking, WizardError> {
        if self.step != WizardStep::Confirm {
            return Err(WizardError::WrongStep {
                action: "confirm",
                step: self.step,
            });
        }
        if self.confirm_in_flight {
            return Err(WizardError::ConfirmInFlight);
        }

        let request = self.build_request()?;
        self.confirm_in_flight = true;
        let result = self.api.confirm_booking(request).await;
        self.confirm_in_flight = false;

        match result {
            Ok(confirmation) => {
                let booking = self.finalize(confirmation);
                info!(code = %booking.confirmation_code, "booking confirmed");
                self.notifier.publish(Notification::success(format!(
                    "Booking confirmed! Confirmation code: {}",
                    booking.confirmation_code
                )));
                if let Some(next) = transition(self.step, &WizardEvent::BookingConfirmed) {
                    self.step = next;
                }
                self.booking = Some(booking.clone());
                Ok(booking)
            }
            Err(err) => {
                warn!(error = %err, "booking confirmation failed");
                self.notifier.publish(Notification::error(MSG_BOOKING_FAILED));
                Err(err.into())
            }
        }
    }

    /// Close the dialog from any step: full reset to the caller-supplied
    /// initial defaults. Also clears the in-flight marker left behind when
    /// a confirm future was dropped mid-call.
    pub fn close(&mut self) {
        debug!(step = %self.step, "wizard closed");
        self.step = WizardStep::Select;
        self.draft = initial_draft(&self.config, self.clock.as_ref());
        self.booking = None;
        self.confirm_in_flight = false;
    }

    fn build_request(&self) -> Result<BookingRequest, WizardError> {
        // The confirm step is only reachable through submit_contact, which
        // validated the draft; missing fields here mean the caller bypassed
        // the flow and surface as the corresponding validation errors.
        validate::validate_draft(&self.draft, self.clock.today())?;
        let (Some(date), Some(time)) = (self.draft.date, self.draft.time.clone()) else {
            return Err(WizardError::WrongStep {
                action: "confirm",
                step: self.step,
            });
        };
        Ok(BookingRequest {
            restaurant: self.config.restaurant.name.clone(),
            guests: self.draft.guests,
            date,
            time,
            contact: self.draft.contact.clone(),
        })
    }

    fn finalize(&self, confirmation: BookingConfirmation) -> Booking {
        let requests = self.draft.contact.special_requests.trim();
        Booking {
            confirmation_code: confirmation.confirmation_code,
            restaurant: self.config.restaurant.name.clone(),
            guests: self.draft.guests,
            date: self.draft.date.unwrap_or_else(|| self.clock.today()),
            time: self.draft.time.clone().unwrap_or_default(),
            status: confirmation.status,
            special_requests: if requests.is_empty() {
                None
            } else {
                Some(requests.to_string())
            },
            created_at: self.clock.now(),
        }
    }
}

fn initial_draft(config: &WizardConfig, clock: &dyn Clock) -> BookingDraft {
    BookingDraft {
        guests: config.initial_guests.unwrap_or(DEFAULT_GUESTS),
        date: Some(config.initial_date.unwrap_or_else(|| clock.today())),
        time: config.initial_time.clone(),
        contact: ContactForm::default(),
    }
}
