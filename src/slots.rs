// Slot generator
// Produces the time options offered on the wizard's select step. This is a
// stand-in for a real inventory query: availability is an independent random
// draw per slot, and the requested date does not influence the result. A
// production system would replace this with checkAvailability(restaurant,
// date) against a reservation store.

use chrono::{NaiveDate, NaiveTime, Timelike};
use rand::Rng;

use crate::model::BookingSlot;

// Service window: first bookable start at noon, last at 9:00 PM, in
// 30-minute increments. The 9:30 PM close of service is not itself a slot.
pub const FIRST_SLOT: NaiveTime = match NaiveTime::from_hms_opt(12, 0, 0) {
    Some(t) => t,
    None => unreachable!(),
};
pub const LAST_SLOT: NaiveTime = match NaiveTime::from_hms_opt(21, 0, 0) {
    Some(t) => t,
    None => unreachable!(),
};
pub const SLOT_INTERVAL_MINUTES: u32 = 30;

// Probability that any given slot comes back available
const AVAILABILITY_RATE: f64 = 0.8;
// Remaining-table count shown for an available slot
const MIN_TABLES_LEFT: u32 = 1;
const MAX_TABLES_LEFT: u32 = 5;

/// Render a time as the 12-hour label used throughout the booking flow,
/// e.g. "12:00 PM", "7:30 PM". [`crate::calendar::parse_time_label`] is the
/// exact inverse.
pub fn format_time_label(time: NaiveTime) -> String {
    let hour = time.hour();
    let (display_hour, meridiem) = match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    };
    format!("{}:{:02} {}", display_hour, time.minute(), meridiem)
}

/// Generate the ordered slot sequence for a date.
///
/// Every call produces a fresh, independent sequence: roughly 80% of slots
/// are available, each available slot carrying a remaining-table count in
/// [1, 5]. The `date` parameter is part of the contract but deliberately
/// unused — the mock inventory is date-independent.
pub fn generate_slots<R: Rng + ?Sized>(rng: &mut R, _date: NaiveDate) -> Vec<BookingSlot> {
    let mut slots = Vec::new();
    let mut current = FIRST_SLOT;

    loop {
        let available = rng.gen_bool(AVAILABILITY_RATE);
        let tables_left = if available {
            Some(rng.gen_range(MIN_TABLES_LEFT..=MAX_TABLES_LEFT))
        } else {
            None
        };

        slots.push(BookingSlot {
            time: format_time_label(current),
            available,
            tables_left,
        });

        if current == LAST_SLOT {
            break;
        }
        current = current + chrono::Duration::minutes(SLOT_INTERVAL_MINUTES as i64);
    }

    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn any_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn test_service_window_coverage() {
        let mut rng = StdRng::seed_from_u64(7);
        let slots = generate_slots(&mut rng, any_date());

        // Noon through 9:00 PM at 30-minute steps is 19 slots
        assert_eq!(slots.len(), 19);
        assert_eq!(slots.first().unwrap().time, "12:00 PM");
        assert_eq!(slots.last().unwrap().time, "9:00 PM");
        assert_eq!(slots[1].time, "12:30 PM");
        assert_eq!(slots[2].time, "1:00 PM");
    }

    #[test]
    fn test_tables_left_only_when_available() {
        let mut rng = StdRng::seed_from_u64(42);
        for slot in generate_slots(&mut rng, any_date()) {
            match slot.tables_left {
                Some(n) => {
                    assert!(slot.available);
                    assert!((1..=5).contains(&n), "tables_left out of range: {}", n);
                }
                None => assert!(!slot.available),
            }
        }
    }

    #[test]
    fn test_availability_rate_is_roughly_eighty_percent() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut available = 0usize;
        let mut total = 0usize;
        for _ in 0..200 {
            for slot in generate_slots(&mut rng, any_date()) {
                total += 1;
                if slot.available {
                    available += 1;
                }
            }
        }
        let rate = available as f64 / total as f64;
        assert!(
            (0.75..=0.85).contains(&rate),
            "availability rate drifted: {}",
            rate
        );
    }

    // Pins the observed behavior of the original: the date argument does not
    // feed the draw, so identical RNG state yields identical slots for
    // different dates.
    #[test]
    fn test_slots_are_date_independent() {
        let date_a = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let date_b = NaiveDate::from_ymd_opt(2025, 12, 24).unwrap();

        let slots_a = generate_slots(&mut StdRng::seed_from_u64(99), date_a);
        let slots_b = generate_slots(&mut StdRng::seed_from_u64(99), date_b);

        assert_eq!(slots_a, slots_b);
    }

    #[test]
    fn test_label_noon_and_midnight() {
        assert_eq!(
            format_time_label(NaiveTime::from_hms_opt(0, 0, 0).unwrap()),
            "12:00 AM"
        );
        assert_eq!(
            format_time_label(NaiveTime::from_hms_opt(12, 0, 0).unwrap()),
            "12:00 PM"
        );
        assert_eq!(
            format_time_label(NaiveTime::from_hms_opt(19, 0, 0).unwrap()),
            "7:00 PM"
        );
    }
}
