// Quick date provider
// The select step offers four shortcut dates: today, tomorrow and the two
// days after, the latter labeled by weekday abbreviation. Pure function of
// the injected clock.

use chrono::Duration;

use crate::clock::Clock;
use crate::model::QuickDateOption;

// Number of shortcut dates shown
pub const QUICK_DATE_COUNT: usize = 4;

pub fn quick_dates(clock: &dyn Clock) -> Vec<QuickDateOption> {
    let today = clock.today();

    (0..QUICK_DATE_COUNT as i64)
        .map(|offset| {
            let date = today + Duration::days(offset);
            let label = match offset {
                0 => "Today".to_string(),
                1 => "Tomorrow".to_string(),
                _ => date.format("%a").to_string(),
            };
            QuickDateOption {
                label,
                date,
                is_today: offset == 0,
            }
        })
        .collect()
}
