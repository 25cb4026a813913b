//! Hour windows that guard the day's transitions
//!
//! The windows are fixed constants. Hours outside every window are legal input
//! and simply leave the machine where it is.

/// Hours spent asleep
pub const SLEEP_HOURS: [i32; 8] = [0, 1, 2, 3, 4, 5, 6, 7];

/// Hour the alarm clock rings
pub const WAKE_HOUR: i32 = 8;

/// Meal hours
pub const MEAL_HOURS: [i32; 3] = [9, 13, 18];

/// Study hours
pub const STUDY_HOURS: [i32; 6] = [10, 11, 12, 14, 15, 16];

/// Evening relax hours
pub const RELAX_HOURS: [i32; 6] = [17, 19, 20, 21, 22, 23];

/// End-of-day hour
pub const END_HOUR: i32 = 24;

/// Check if the hour falls in the sleep window
pub fn is_sleep_hour(hour: i32) -> bool {
    SLEEP_HOURS.contains(&hour)
}

/// Check if the hour is the wake-up hour
pub fn is_wake_hour(hour: i32) -> bool {
    hour == WAKE_HOUR
}

/// Check if the hour is a meal hour
pub fn is_meal_hour(hour: i32) -> bool {
    MEAL_HOURS.contains(&hour)
}

/// Check if the hour is a study hour
pub fn is_study_hour(hour: i32) -> bool {
    STUDY_HOURS.contains(&hour)
}

/// Check if the hour is a relax hour
pub fn is_relax_hour(hour: i32) -> bool {
    RELAX_HOURS.contains(&hour)
}

/// Check if the hour is the end-of-day hour
pub fn is_end_hour(hour: i32) -> bool {
    hour == END_HOUR
}
