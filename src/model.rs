// Core entities for the booking flow
// Everything here is transient: drafts live only while a wizard is open,
// and a confirmed Booking is handed to the caller rather than persisted.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Minimum bookable party size.
pub const MIN_GUESTS: u32 = 1;
/// Maximum bookable party size.
pub const MAX_GUESTS: u32 = 20;
/// Largest count offered as a one-tap guest choice; beyond it the UI shows "9+".
pub const QUICK_SELECT_MAX_GUESTS: u32 = 8;
/// Party size the "9+" quick choice maps to.
pub const NINE_PLUS_GUESTS: u32 = 10;

// Restaurant reference handed to the wizard by the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    pub address: String,
    pub rating: f64,
    pub image_url: String,
}

// One offered time option with availability and remaining-capacity metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingSlot {
    pub time: String,
    pub available: bool,
    pub tables_left: Option<u32>,
}

// One of the preset selectable dates shown as shortcuts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickDateOption {
    pub label: String,
    pub date: NaiveDate,
    pub is_today: bool,
}

// Contact details collected on the details step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub special_requests: String,
}

// In-progress, unsaved reservation selection owned by the wizard.
// Promotable to a Booking only once validation passes and an available
// slot has been chosen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingDraft {
    pub guests: u32,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub contact: ContactForm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

// Confirmed result, created in memory when the confirm step succeeds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub confirmation_code: String,
    pub restaurant: String,
    pub guests: u32,
    pub date: NaiveDate,
    pub time: String,
    pub status: BookingStatus,
    pub special_requests: Option<String>,
    pub created_at: NaiveDateTime,
}

// Guest counts offered as one-tap choices: 1 through 8, then "9+" -> 10
pub fn quick_guest_choices() -> Vec<u32> {
    let mut choices: Vec<u32> = (MIN_GUESTS..=QUICK_SELECT_MAX_GUESTS).collect();
    choices.push(NINE_PLUS_GUESTS);
    choices
}
