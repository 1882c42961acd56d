//! Derivation of the ship rating score.

use chrono::{DateTime, Datelike, Utc};

/// The registry's in-universe current year; ratings decay with distance from
/// the production year to this point.
const CURRENT_YEAR: i32 = 3019;

/// Compute the rating for a ship:
/// `80 * speed * k / (3019 - production_year + 1)`, where `k` is 0.5 for a
/// used ship and 1.0 otherwise, rounded half-up to 2 decimal places.
///
/// Pure function of its inputs; callers recompute it whenever `speed`,
/// `is_used`, or `prod_date` changes.
pub fn compute_rating(speed: f64, is_used: bool, prod_date: DateTime<Utc>) -> f64 {
    let k = if is_used { 0.5 } else { 1.0 };
    let span = (CURRENT_YEAR - prod_date.year() + 1) as f64;
    round2(80.0 * speed * k / span)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn year(y: i32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, 6, 15, 0, 0, 0).unwrap()
    }

    #[test]
    fn oldest_unused_ship_at_half_speed_rates_018() {
        // 80 * 0.5 * 1 / (3019 - 2800 + 1) = 40 / 220 = 0.1818... -> 0.18
        assert_eq!(compute_rating(0.5, false, year(2800)), 0.18);
    }

    #[test]
    fn used_flag_halves_the_rating() {
        let fresh = compute_rating(0.8, false, year(3018));
        let used = compute_rating(0.8, true, year(3018));
        assert_eq!(fresh, 32.0);
        assert_eq!(used, 16.0);
    }

    #[test]
    fn rounds_half_up_to_two_decimals() {
        // 80 * 0.99 / (3019 - 2875 + 1) = 79.2 / 145 = 0.54620... -> 0.55
        assert_eq!(compute_rating(0.99, false, year(2875)), 0.55);
    }

    #[test]
    fn rating_depends_only_on_the_calendar_year() {
        let jan = Utc.with_ymd_and_hms(2900, 1, 1, 0, 0, 1).unwrap();
        let dec = Utc.with_ymd_and_hms(2900, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(
            compute_rating(0.42, true, jan),
            compute_rating(0.42, true, dec)
        );
    }
}
