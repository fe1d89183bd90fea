//! Fixed vocabularies shared read-only across the process.
//!
//! The driver validates free-form user input against the lowercase tables;
//! the `*_NAMES` tables carry the display-ready capitalized forms reported by
//! the computators.

/// Supported city keys.
pub const CITIES: [&str; 3] = ["chicago", "new york city", "washington"];

/// Month selections accepted from the driver, in calendar order.
pub const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Weekday selections accepted from the driver, Monday first.
pub const WEEKDAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Display names for months, indexed by month number minus one.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Display names for weekdays, indexed 0 = Monday through 6 = Sunday.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Display name for a 1-based month number.
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
        .unwrap_or("Unknown")
}

/// Display name for a weekday index (0 = Monday .. 6 = Sunday).
pub fn weekday_name(weekday: u32) -> &'static str {
    WEEKDAY_NAMES
        .get(weekday as usize)
        .copied()
        .unwrap_or("Unknown")
}

/// 1-based month number for a lowercase month name.
pub fn month_number(name: &str) -> Option<u32> {
    MONTHS.iter().position(|m| *m == name).map(|i| i as u32 + 1)
}

/// Weekday index (0 = Monday .. 6 = Sunday) for a lowercase weekday name.
pub fn weekday_number(name: &str) -> Option<u32> {
    WEEKDAYS.iter().position(|d| *d == name).map(|i| i as u32)
}
