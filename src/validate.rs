// Form validator
// Field-scoped validation for the booking draft. Errors carry the exact
// user-facing messages and block step progression until resolved; validation
// itself has no side effects.

use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

use crate::model::{BookingDraft, ContactForm, MAX_GUESTS, MIN_GUESTS};

// Fields a validation error can attach to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Guests,
    Date,
    Time,
    ContactName,
    ContactPhone,
    ContactEmail,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Guests => "guests",
            Field::Date => "date",
            Field::Time => "time",
            Field::ContactName => "contact_name",
            Field::ContactPhone => "contact_phone",
            Field::ContactEmail => "contact_email",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

// Collected per-field errors for one validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("validation failed for {} field(s)", .0.len())]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    // Message for a field, if that field failed
    pub fn field(&self, field: Field) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    fn push(&mut self, field: Field, message: &str) {
        self.0.push(FieldError {
            field,
            message: message.to_string(),
        });
    }

    fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

pub const MSG_GUESTS_MIN: &str = "At least 1 guest required";
pub const MSG_GUESTS_MAX: &str = "Maximum 20 guests";
pub const MSG_DATE_MISSING: &str = "Please select a date";
pub const MSG_DATE_PAST: &str = "Please select a future date";
pub const MSG_TIME_MISSING: &str = "Please select a time";
pub const MSG_NAME_TOO_SHORT: &str = "Name must be at least 2 characters";
pub const MSG_PHONE_TOO_SHORT: &str = "Phone number must be at least 10 characters";
pub const MSG_EMAIL_INVALID: &str = "Please enter a valid email address";

pub fn validate_guests(guests: u32) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    if guests < MIN_GUESTS {
        errors.push(Field::Guests, MSG_GUESTS_MIN);
    } else if guests > MAX_GUESTS {
        errors.push(Field::Guests, MSG_GUESTS_MAX);
    }
    errors.into_result()
}

// Dates are compared by calendar day, not timestamp: booking for later
// today is allowed.
pub fn validate_date(date: Option<NaiveDate>, today: NaiveDate) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    match date {
        None => errors.push(Field::Date, MSG_DATE_MISSING),
        Some(d) if d < today => errors.push(Field::Date, MSG_DATE_PAST),
        Some(_) => {}
    }
    errors.into_result()
}

pub fn validate_contact(contact: &ContactForm) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    if contact.name.trim().chars().count() < 2 {
        errors.push(Field::ContactName, MSG_NAME_TOO_SHORT);
    }
    // Pure length predicate, no format or country-code rules
    if contact.phone.trim().chars().count() < 10 {
        errors.push(Field::ContactPhone, MSG_PHONE_TOO_SHORT);
    }
    if !is_valid_email(contact.email.trim()) {
        errors.push(Field::ContactEmail, MSG_EMAIL_INVALID);
    }
    // special_requests is optional and unconstrained
    errors.into_result()
}

// Validate the whole draft: selection fields plus contact details
pub fn validate_draft(draft: &BookingDraft, today: NaiveDate) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if let Err(e) = validate_guests(draft.guests) {
        errors.0.extend(e.0);
    }
    if let Err(e) = validate_date(draft.date, today) {
        errors.0.extend(e.0);
    }
    if draft.time.as_deref().map_or(true, |t| t.is_empty()) {
        errors.push(Field::Time, MSG_TIME_MISSING);
    }
    if let Err(e) = validate_contact(&draft.contact) {
        errors.0.extend(e.0);
    }

    errors.into_result()
}

// Syntax check equivalent to the usual something@something.something form
// check: no whitespace, non-empty local part, and a dot inside the domain.
fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((head, tld)) => !head.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn valid_contact() -> ContactForm {
        ContactForm {
            name: "Jane Doe".to_string(),
            phone: "01711222333".to_string(),
            email: "jane@example.com".to_string(),
            special_requests: String::new(),
        }
    }

    #[test_case(0, Some(MSG_GUESTS_MIN); "zero guests rejected")]
    #[test_case(1, None; "one guest accepted")]
    #[test_case(2, None; "two guests accepted")]
    #[test_case(20, None; "twenty guests accepted")]
    #[test_case(21, Some(MSG_GUESTS_MAX); "twenty one guests rejected")]
    fn test_guest_bounds(guests: u32, expected: Option<&str>) {
        let result = validate_guests(guests);
        match expected {
            None => assert!(result.is_ok()),
            Some(msg) => {
                let errors = result.unwrap_err();
                assert_eq!(errors.field(Field::Guests), Some(msg));
            }
        }
    }

    #[test]
    fn test_date_rules() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();

        let missing = validate_date(None, today).unwrap_err();
        assert_eq!(missing.field(Field::Date), Some(MSG_DATE_MISSING));

        let yesterday = today.pred_opt().unwrap();
        let past = validate_date(Some(yesterday), today).unwrap_err();
        assert_eq!(past.field(Field::Date), Some(MSG_DATE_PAST));

        assert!(validate_date(Some(today), today).is_ok());
        assert!(validate_date(Some(today.succ_opt().unwrap()), today).is_ok());
    }

    #[test_case("", false; "empty phone")]
    #[test_case("123456789", false; "nine characters")]
    #[test_case("1234567890", true; "ten digits")]
    #[test_case("01711222333", true; "bd mobile")]
    #[test_case("+880-171-12", true; "symbols count toward length")]
    fn test_phone_is_a_length_predicate(phone: &str, ok: bool) {
        let contact = ContactForm {
            phone: phone.to_string(),
            ..valid_contact()
        };
        let result = validate_contact(&contact);
        if ok {
            assert!(result.is_ok(), "expected {:?} to pass", phone);
        } else {
            assert_eq!(
                result.unwrap_err().field(Field::ContactPhone),
                Some(MSG_PHONE_TOO_SHORT)
            );
        }
    }

    #[test_case("jane@example.com", true; "plain address")]
    #[test_case("jane.doe@food.sylhet.bd", true; "subdomain")]
    #[test_case("jane", false; "no at sign")]
    #[test_case("jane@example", false; "no dot in domain")]
    #[test_case("@example.com", false; "empty local part")]
    #[test_case("jane@.com", false; "empty domain head")]
    #[test_case("jane doe@example.com", false; "whitespace")]
    fn test_email_syntax(email: &str, ok: bool) {
        let contact = ContactForm {
            email: email.to_string(),
            ..valid_contact()
        };
        let result = validate_contact(&contact);
        if ok {
            assert!(result.is_ok(), "expected {:?} to pass", email);
        } else {
            assert_eq!(
                result.unwrap_err().field(Field::ContactEmail),
                Some(MSG_EMAIL_INVALID)
            );
        }
    }

    #[test]
    fn test_name_minimum_length() {
        let contact = ContactForm {
            name: "J".to_string(),
            ..valid_contact()
        };
        let errors = validate_contact(&contact).unwrap_err();
        assert_eq!(errors.field(Field::ContactName), Some(MSG_NAME_TOO_SHORT));

        let contact = ContactForm {
            name: "Jo".to_string(),
            ..valid_contact()
        };
        assert!(validate_contact(&contact).is_ok());
    }

    #[test]
    fn test_draft_errors_are_field_scoped() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let draft = BookingDraft {
            guests: 0,
            date: None,
            time: None,
            contact: ContactForm::default(),
        };

        let errors = validate_draft(&draft, today).unwrap_err();
        assert_eq!(errors.len(), 6);
        assert_eq!(errors.field(Field::Guests), Some(MSG_GUESTS_MIN));
        assert_eq!(errors.field(Field::Date), Some(MSG_DATE_MISSING));
        assert_eq!(errors.field(Field::Time), Some(MSG_TIME_MISSING));
        assert_eq!(errors.field(Field::ContactName), Some(MSG_NAME_TOO_SHORT));
    }

    #[test]
    fn test_special_requests_unconstrained() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let draft = BookingDraft {
            guests: 2,
            date: Some(today),
            time: Some("7:00 PM".to_string()),
            contact: ContactForm {
                special_requests: "x".repeat(10_000),
                ..valid_contact()
            },
        };
        assert!(validate_draft(&draft, today).is_ok());
    }
}
