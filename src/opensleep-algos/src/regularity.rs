use chrono::{NaiveDateTime, Timelike};
use opensleep_types::SleepSession;

use crate::helpers::time_math::{round_float, std_dev};

/// Bed and wake times are normalized relative to 20:00 so a night that
/// crosses midnight stays contiguous on the minute axis.
pub const DEFAULT_REFERENCE_HOUR: u32 = 20;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Dispersion of sleep timing: population standard deviation of the
/// normalized bed times and wake times, in minutes. Smaller is more
/// regular.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RegularityMetrics {
    pub bedtime_std: f64,
    pub wake_time_std: f64,
}

/// Minutes since the reference hour, wrapped at 24h to absorb the
/// midnight crossing.
pub fn time_to_minutes(time: NaiveDateTime, reference_hour: u32) -> f64 {
    let total_minutes = (time.hour() * 60 + time.minute()) as i64;
    let reference_minutes = (reference_hour * 60) as i64;

    (total_minutes - reference_minutes).rem_euclid(MINUTES_PER_DAY) as f64
}

/// Uses the user-recorded bed and wake times; sessions missing one of
/// them contribute only the other. Fewer than two samples on either
/// axis yield a zero deviation for that axis.
pub fn sleep_regularity(sessions: &[SleepSession]) -> RegularityMetrics {
    let bedtimes: Vec<f64> = sessions
        .iter()
        .filter_map(|s| s.bedtime)
        .map(|t| time_to_minutes(t, DEFAULT_REFERENCE_HOUR))
        .collect();

    let wake_times: Vec<f64> = sessions
        .iter()
        .filter_map(|s| s.wake_up_time)
        .map(|t| time_to_minutes(t, DEFAULT_REFERENCE_HOUR))
        .collect();

    let axis_std = |values: &[f64]| {
        if values.len() < 2 {
            0.0
        } else {
            round_float(std_dev(values))
        }
    };

    RegularityMetrics {
        bedtime_std: axis_std(&bedtimes),
        wake_time_std: axis_std(&wake_times),
    }
}
