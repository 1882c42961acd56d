//! Per-field validation rules shared by the create and update paths.
//!
//! Both flows call the same checks so the rule sets cannot drift: creation
//! requires every field to be present and valid, updates apply the checks
//! only to the fields present in the payload.

pub const NAME_MAX_CHARS: usize = 50;
pub const SPEED_MIN: f64 = 0.01;
pub const SPEED_MAX: f64 = 0.99;
pub const CREW_SIZE_MIN: i32 = 1;
pub const CREW_SIZE_MAX: i32 = 9999;

/// 2800-01-01T00:00:00Z as epoch milliseconds. Production dates must fall
/// strictly after this instant.
pub const PROD_WINDOW_START_MS: i64 = 26_192_246_400_000;
/// 3019-01-01T00:00:00Z as epoch milliseconds. Production dates must fall
/// strictly before this instant.
pub const PROD_WINDOW_END_MS: i64 = 33_103_209_600_000;

/// Ship names and home planets: non-empty, at most 50 characters.
pub fn check_name(value: &str) -> bool {
    !value.is_empty() && value.chars().count() <= NAME_MAX_CHARS
}

pub fn check_speed(value: f64) -> bool {
    (SPEED_MIN..=SPEED_MAX).contains(&value)
}

pub fn check_crew_size(value: i32) -> bool {
    (CREW_SIZE_MIN..=CREW_SIZE_MAX).contains(&value)
}

/// Production timestamps are exclusive on both window bounds. The window
/// start is far past the epoch, so positivity is implied.
pub fn check_prod_date(millis: i64) -> bool {
    millis > PROD_WINDOW_START_MS && millis < PROD_WINDOW_END_MS
}
