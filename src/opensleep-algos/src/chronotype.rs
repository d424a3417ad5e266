use chrono::{Datelike, TimeDelta, Timelike};
use opensleep_types::{Chronotype, SleepSession};

use crate::effective_bedtime;
use crate::helpers::time_math::mean;

/// Circadian estimate from the corrected mid-sleep point on free days.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChronotypeEstimate {
    pub chronotype: Chronotype,
    /// MSF_sc as an hour of day in `[0, 24)`.
    pub corrected_midpoint: f64,
}

/// Estimates the chronotype over a set of sessions.
///
/// Each session's midpoint is its effective bed time plus half the
/// sleep duration, taken as an hour-of-day fraction. Weekend bed dates
/// stand in for free days (a documented proxy; shift workers may be
/// misclassified and that is accepted). MSF is the mean free-day
/// midpoint, corrected by half the free-vs-week duration difference:
/// `MSF_sc = MSF - 0.5 * (SDfree - SDweek)`.
///
/// Returns `None` when no session falls on a free day, or when the
/// corrected midpoint lands exactly on the 05:00 boundary that the
/// classification table leaves unassigned.
pub fn estimate_chronotype(sessions: &[SleepSession]) -> Option<ChronotypeEstimate> {
    let mut free_midpoints = Vec::new();
    let mut free_durations = Vec::new();
    let mut all_durations = Vec::new();

    for session in sessions {
        let Some(bedtime) = effective_bedtime(session) else {
            continue;
        };

        let duration_minutes = session.duration.unwrap_or(0) as f64;
        let midpoint = bedtime + TimeDelta::seconds((duration_minutes * 30.0).round() as i64);
        let midpoint_hour = midpoint.hour() as f64
            + midpoint.minute() as f64 / 60.0
            + midpoint.second() as f64 / 3600.0;

        all_durations.push(duration_minutes / 60.0);
        if bedtime.weekday().num_days_from_monday() >= 5 {
            free_midpoints.push(midpoint_hour);
            free_durations.push(duration_minutes / 60.0);
        }
    }

    if free_midpoints.is_empty() {
        return None;
    }

    let msf = mean(&free_midpoints);
    let sd_free = mean(&free_durations);
    let sd_week = mean(&all_durations);

    let msf_sc = (msf - 0.5 * (sd_free - sd_week)).rem_euclid(24.0);

    classify(msf_sc).map(|chronotype| ChronotypeEstimate {
        chronotype,
        corrected_midpoint: msf_sc,
    })
}

/// Classification truncates to whole-minute precision, so the minute
/// starting at 05:00 stays unassigned: it is neither in
/// `[03:00, 05:00)` nor strictly after 05:00.
fn classify(msf_sc: f64) -> Option<Chronotype> {
    let total_minutes = (msf_sc * 60.0) as u32;
    let hour = total_minutes / 60;
    let minute = total_minutes % 60;

    if hour < 3 {
        Some(Chronotype::Skylark)
    } else if hour < 5 {
        Some(Chronotype::Pigeon)
    } else if hour > 5 || minute > 0 {
        Some(Chronotype::Owl)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn bare_session(bedtime: NaiveDateTime, duration_minutes: i64) -> SleepSession {
        SleepSession {
            recorded_at: bedtime,
            device_bedtime: Some(bedtime),
            device_wake_up_time: Some(bedtime + TimeDelta::minutes(duration_minutes)),
            bedtime: None,
            wake_up_time: None,
            duration: Some(duration_minutes),
            sleep_deep_duration: None,
            sleep_light_duration: None,
            sleep_rem_duration: None,
            sleep_awake_duration: None,
            awake_count: None,
            has_rem: false,
            min_hr: None,
            max_hr: None,
            avg_hr: None,
        }
    }

    fn at(date: NaiveDate, h: u32, m: u32) -> NaiveDateTime {
        date.and_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn weekday_only_sessions_yield_no_estimate() {
        // 2025-03-03 is a Monday.
        let monday = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        let sessions = vec![bare_session(at(monday, 23, 0), 480)];
        assert_eq!(estimate_chronotype(&sessions), None);
    }

    #[test]
    fn early_midpoint_classifies_as_skylark() {
        // Saturday bedtime 22:00, 8h sleep: midpoint 02:00. One
        // session, so the duration correction vanishes.
        let saturday = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let sessions = vec![bare_session(at(saturday, 22, 0), 480)];

        let estimate = estimate_chronotype(&sessions).unwrap();
        assert_eq!(estimate.chronotype, Chronotype::Skylark);
        assert_eq!(estimate.corrected_midpoint, 2.0);
    }

    #[test]
    fn typical_midpoint_classifies_as_pigeon() {
        // Saturday bedtime 23:30, 8h sleep: midpoint 03:30.
        let saturday = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let sessions = vec![bare_session(at(saturday, 23, 30), 480)];

        let estimate = estimate_chronotype(&sessions).unwrap();
        assert_eq!(estimate.chronotype, Chronotype::Pigeon);
    }

    #[test]
    fn late_midpoint_classifies_as_owl() {
        // Sunday bedtime 02:00, 8h sleep: midpoint 06:00.
        let sunday = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
        let sessions = vec![bare_session(at(sunday, 2, 0), 480)];

        let estimate = estimate_chronotype(&sessions).unwrap();
        assert_eq!(estimate.chronotype, Chronotype::Owl);
    }

    #[test]
    fn duration_correction_shifts_the_midpoint() {
        // Free day: Saturday 23:00 + 9h -> midpoint 03:30, SDfree 9.
        // Weekday: Monday 23:00 + 7h, only widens SDweek to 8.
        // MSF_sc = 3.5 - 0.5 * (9 - 8) = 3.0 -> pigeon.
        let saturday = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let monday = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        let sessions = vec![
            bare_session(at(saturday, 23, 0), 540),
            bare_session(at(monday, 23, 0), 420),
        ];

        let estimate = estimate_chronotype(&sessions).unwrap();
        assert_eq!(estimate.corrected_midpoint, 3.0);
        assert_eq!(estimate.chronotype, Chronotype::Pigeon);
    }

    #[test]
    fn exact_five_oclock_midpoint_is_unclassified() {
        // Sunday bedtime 01:00, 8h sleep: midpoint exactly 05:00.
        let sunday = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
        let sessions = vec![bare_session(at(sunday, 1, 0), 480)];
        assert_eq!(estimate_chronotype(&sessions), None);
    }

    #[test]
    fn past_five_oclock_classifies_as_owl() {
        // Sunday bedtime 01:30, 8h sleep: midpoint 05:30.
        let sunday = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
        let sessions = vec![bare_session(at(sunday, 1, 30), 480)];
        let estimate = estimate_chronotype(&sessions).unwrap();
        assert_eq!(estimate.chronotype, Chronotype::Owl);
    }

    #[test]
    fn boundary_seconds_truncate_toward_the_earlier_type() {
        // Saturday bedtime 22:59, 481min sleep: midpoint 02:59:30,
        // which truncates to 02:59 and stays a skylark.
        let saturday = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let sessions = vec![bare_session(at(saturday, 22, 59), 481)];
        let estimate = estimate_chronotype(&sessions).unwrap();
        assert_eq!(estimate.chronotype, Chronotype::Skylark);
    }
}
