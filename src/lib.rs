// Booking core for the Anfi restaurant app
// Everything behind the booking dialog UI: slot and quick-date generation,
// form validation, the wizard state machine, the simulated confirmation
// backend and the calendar export link.

pub mod calendar;
pub mod clock;
pub mod dates;
pub mod model;
pub mod notify;
pub mod slots;
pub mod validate;
pub mod wizard;

// Re-export key types for convenience
pub use calendar::{booking_window, calendar_export_url, parse_time_label, CalendarError};
pub use clock::{Clock, FixedClock, SystemClock};
pub use dates::{quick_dates, QUICK_DATE_COUNT};
pub use model::{
    Booking, BookingDraft, BookingSlot, BookingStatus, ContactForm, QuickDateOption, Restaurant,
    MAX_GUESTS, MIN_GUESTS,
};
pub use notify::{MemoryNotifier, Notification, NotificationSink, Severity, TracingNotifier};
pub use slots::{format_time_label, generate_slots};
pub use validate::{
    validate_contact, validate_date, validate_draft, validate_guests, Field, FieldError,
    ValidationErrors,
};
pub use wizard::{
    confirmation_code, transition, BookingApi, BookingApiError, BookingConfirmation,
    BookingRequest, SimulatedBookingApi, Wizard, WizardConfig, WizardError, WizardEvent,
    WizardStep, DEFAULT_GUESTS,
};
