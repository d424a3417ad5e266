use chrono::NaiveDateTime;
use opensleep_types::{SleepSegment, SleepSession, UserProfile};

use crate::completed_cycles;
use crate::helpers::time_math::{mean, round_float, round_tenth};

/// Per-phase share of the night in percent. Each share is a fraction
/// of `duration + awake_duration`; the four values need not sum to
/// exactly 100 because of independent rounding upstream.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SleepPhases {
    pub deep: f64,
    pub light: f64,
    pub rem: f64,
    pub awake: f64,
}

/// Derived quality metrics for one session.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SessionStatistics {
    pub latency_minutes: f64,
    pub sleep_efficiency: f64,
    pub sleep_phases: SleepPhases,
    pub sleep_fragmentation_index: f64,
    pub sleep_calories_burned: f64,
    pub cycle_count: u32,
}

/// True bed time: the earlier of the device-recorded and the
/// user-recorded bed times.
pub fn effective_bedtime(session: &SleepSession) -> Option<NaiveDateTime> {
    match (session.device_bedtime, session.bedtime) {
        (Some(device), Some(user)) => Some(device.min(user)),
        (Some(device), None) => Some(device),
        (None, Some(user)) => Some(user),
        (None, None) => None,
    }
}

/// True wake time: the later of the device-recorded and the
/// user-recorded wake times.
pub fn effective_wake_time(session: &SleepSession) -> Option<NaiveDateTime> {
    match (session.device_wake_up_time, session.wake_up_time) {
        (Some(device), Some(user)) => Some(device.max(user)),
        (Some(device), None) => Some(device),
        (None, Some(user)) => Some(user),
        (None, None) => None,
    }
}

/// Calories attributed to sleep: Mifflin-St Jeor BMR scaled by the
/// fraction of a day slept, rounded to one decimal. Age arrives in
/// months and is divided by 12 inside the formula.
pub fn calories_burned(profile: &UserProfile, sleep_duration_minutes: f64) -> f64 {
    let bmr = 10.0 * profile.weight_kg + 6.25 * profile.height_cm - 5.0 * profile.age_months / 12.0
        + profile.sex.bmr_offset();

    round_tenth(bmr * (sleep_duration_minutes / 60.0) / 24.0)
}

/// Computes every per-session metric. Total over well-formed input:
/// missing optional fields are treated as zero rather than failing the
/// import.
pub fn calculate_session_statistics(
    session: &SleepSession,
    segments: &[SleepSegment],
    profile: &UserProfile,
) -> SessionStatistics {
    let duration = session.duration.unwrap_or(0) as f64;
    let awake_duration = session.sleep_awake_duration.unwrap_or(0) as f64;

    let latency_minutes = latency(session, segments);

    let sleep_efficiency = match (effective_bedtime(session), effective_wake_time(session)) {
        (Some(bed), Some(wake)) => {
            let time_in_bed = (wake - bed).num_seconds() as f64 / 60.0;
            if time_in_bed <= 0.0 {
                0.0
            } else {
                duration * 100.0 / time_in_bed
            }
        }
        _ => 0.0,
    };

    let sleep_phases = if duration == 0.0 {
        SleepPhases::default()
    } else {
        let total = duration + awake_duration;
        SleepPhases {
            deep: session.sleep_deep_duration.unwrap_or(0) as f64 / total * 100.0,
            light: session.sleep_light_duration.unwrap_or(0) as f64 / total * 100.0,
            rem: session.sleep_rem_duration.unwrap_or(0) as f64 / total * 100.0,
            awake: awake_duration / total * 100.0,
        }
    };

    let sleep_fragmentation_index = if duration == 0.0 {
        0.0
    } else {
        session.awake_count.unwrap_or(0) as f64 / (duration / 60.0)
    };

    SessionStatistics {
        latency_minutes,
        sleep_efficiency,
        sleep_phases,
        sleep_fragmentation_index,
        sleep_calories_burned: calories_burned(profile, duration),
        cycle_count: completed_cycles(segments),
    }
}

/// Minutes between the effective bed time and the start of the first
/// recorded segment.
fn latency(session: &SleepSession, segments: &[SleepSegment]) -> f64 {
    let Some(bedtime) = effective_bedtime(session) else {
        return 0.0;
    };
    let Some(first_start) = segments.iter().map(|s| s.start_time).min() else {
        return 0.0;
    };

    (first_start - bedtime).num_seconds() as f64 / 60.0
}

/// Mean of session durations in hours, two decimals. Sessions without
/// a recorded duration are skipped; 0 on empty input.
pub fn average_duration_hours(sessions: &[SleepSession]) -> f64 {
    let durations: Vec<f64> = sessions
        .iter()
        .filter_map(|s| s.duration)
        .filter(|&d| d > 0)
        .map(|d| d as f64)
        .collect();

    if durations.is_empty() {
        return 0.0;
    }

    round_float(mean(&durations) / 60.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use opensleep_types::{Sex, SleepStage};

    fn at(day: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, day)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn profile() -> UserProfile {
        UserProfile {
            age_months: 360.0, // 30 years
            sex: Sex::Male,
            weight_kg: 70.0,
            height_cm: 175.0,
        }
    }

    fn session() -> SleepSession {
        SleepSession {
            recorded_at: at(2, 6, 0),
            device_bedtime: Some(at(1, 22, 0)),
            device_wake_up_time: Some(at(2, 6, 0)),
            bedtime: Some(at(1, 22, 30)),
            wake_up_time: Some(at(2, 5, 30)),
            duration: Some(450),
            sleep_deep_duration: Some(120),
            sleep_light_duration: Some(300),
            sleep_rem_duration: Some(30),
            sleep_awake_duration: Some(30),
            awake_count: Some(2),
            has_rem: true,
            min_hr: Some(48),
            max_hr: Some(90),
            avg_hr: Some(60.0),
        }
    }

    #[test]
    fn effective_times_take_the_union() {
        let s = session();
        // Device bedtime is earlier, device wake time is later.
        assert_eq!(effective_bedtime(&s), Some(at(1, 22, 0)));
        assert_eq!(effective_wake_time(&s), Some(at(2, 6, 0)));

        let mut s = session();
        s.bedtime = Some(at(1, 21, 45));
        s.wake_up_time = Some(at(2, 6, 15));
        assert_eq!(effective_bedtime(&s), Some(at(1, 21, 45)));
        assert_eq!(effective_wake_time(&s), Some(at(2, 6, 15)));
    }

    #[test]
    fn calories_use_bmr_scaled_by_sleep_fraction() {
        // BMR = 700 + 1093.75 - 150 + 5 = 1648.75
        // calories = 1648.75 * 7.5 / 24 = 515.234375 -> 515.2
        assert_eq!(calories_burned(&profile(), 450.0), 515.2);

        let female = UserProfile {
            sex: Sex::Female,
            ..profile()
        };
        // BMR = 1643.75 - 161 = 1482.75; * 7.5 / 24 = 463.359375 -> 463.4
        assert_eq!(calories_burned(&female, 450.0), 463.4);
    }

    #[test]
    fn efficiency_is_100_when_asleep_for_the_whole_window() {
        let mut s = session();
        s.duration = Some(480); // exactly the 8h window
        let stats = calculate_session_statistics(&s, &[], &profile());
        assert_eq!(stats.sleep_efficiency, 100.0);
    }

    #[test]
    fn efficiency_zero_without_time_in_bed() {
        let mut s = session();
        s.device_wake_up_time = Some(at(1, 22, 0));
        s.wake_up_time = None;
        s.bedtime = None;
        let stats = calculate_session_statistics(&s, &[], &profile());
        assert_eq!(stats.sleep_efficiency, 0.0);
    }

    #[test]
    fn latency_measures_first_segment_offset() {
        let segments = [SleepSegment {
            start_time: at(1, 22, 20),
            end_time: at(1, 23, 50),
            stage: SleepStage::Light,
        }];
        let stats = calculate_session_statistics(&session(), &segments, &profile());
        assert_eq!(stats.latency_minutes, 20.0);
    }

    #[test]
    fn phases_divide_by_duration_plus_awake() {
        let stats = calculate_session_statistics(&session(), &[], &profile());
        // Denominator 450 + 30 = 480.
        assert_eq!(stats.sleep_phases.deep, 120.0 / 480.0 * 100.0);
        assert_eq!(stats.sleep_phases.light, 300.0 / 480.0 * 100.0);
        assert_eq!(stats.sleep_phases.rem, 30.0 / 480.0 * 100.0);
        assert_eq!(stats.sleep_phases.awake, 30.0 / 480.0 * 100.0);
    }

    #[test]
    fn zero_duration_degrades_to_zero_metrics() {
        let mut s = session();
        s.duration = Some(0);
        let stats = calculate_session_statistics(&s, &[], &profile());
        assert_eq!(stats.sleep_phases, SleepPhases::default());
        assert_eq!(stats.sleep_fragmentation_index, 0.0);
        assert_eq!(stats.sleep_calories_burned, 0.0);
    }

    #[test]
    fn fragmentation_is_awakenings_per_hour() {
        let stats = calculate_session_statistics(&session(), &[], &profile());
        // 2 awakenings over 7.5 hours of sleep.
        assert!((stats.sleep_fragmentation_index - 2.0 / 7.5).abs() < 1e-12);
    }

    #[test]
    fn missing_optional_fields_are_treated_as_zero() {
        let s = SleepSession {
            recorded_at: at(2, 6, 0),
            device_bedtime: Some(at(1, 22, 0)),
            device_wake_up_time: Some(at(2, 6, 0)),
            bedtime: None,
            wake_up_time: None,
            duration: None,
            sleep_deep_duration: None,
            sleep_light_duration: None,
            sleep_rem_duration: None,
            sleep_awake_duration: None,
            awake_count: None,
            has_rem: false,
            min_hr: None,
            max_hr: None,
            avg_hr: None,
        };
        let stats = calculate_session_statistics(&s, &[], &profile());
        assert_eq!(stats.sleep_efficiency, 0.0);
        assert_eq!(stats.sleep_fragmentation_index, 0.0);
        assert_eq!(stats.sleep_calories_burned, 0.0);
    }

    #[test]
    fn average_duration_skips_missing() {
        let mut a = session();
        a.duration = Some(420);
        let mut b = session();
        b.duration = Some(480);
        let mut c = session();
        c.duration = None;

        // (7.0 + 8.0) / 2 = 7.5
        assert_eq!(average_duration_hours(&[a, b, c]), 7.5);
        assert_eq!(average_duration_hours(&[]), 0.0);
    }
}
