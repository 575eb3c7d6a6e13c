// Clock capability
// The slot generator, quick-date provider and wizard all depend on "now";
// reading it through a trait keeps every date rule testable with a pinned
// clock instead of the ambient system time.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

pub trait Clock: Send + Sync + 'static {
    // Current local wall-clock time
    fn now(&self) -> NaiveDateTime;

    // Current calendar day
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

// Production clock backed by the local system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

// Clock pinned to a fixed instant, for deterministic tests
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    pub fn at(date: NaiveDate, hour: u32, minute: u32) -> Self {
        let time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN);
        Self(date.and_time(time))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_fixed_clock_reports_pinned_day() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let clock = FixedClock::at(date, 18, 30);
        assert_eq!(clock.today(), date);
        assert_eq!(clock.now().time().hour(), 18);
    }
}
