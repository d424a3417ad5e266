use chrono::NaiveDateTime;

use crate::SleepStage;

/// One device-recorded sleep period, normalized from a `"sleep"`-kind
/// export row. All timestamps are UTC. Optional numeric fields mirror
/// the export payload: absent values stay absent here and are
/// substituted with zero inside the calculators, never at parse time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SleepSession {
    /// Timestamp of the export row itself, the natural key of the
    /// session together with the owning user.
    pub recorded_at: NaiveDateTime,
    pub device_bedtime: Option<NaiveDateTime>,
    pub device_wake_up_time: Option<NaiveDateTime>,
    /// User-recorded bed time, may differ from the device's.
    pub bedtime: Option<NaiveDateTime>,
    /// User-recorded wake time, may differ from the device's.
    pub wake_up_time: Option<NaiveDateTime>,
    /// Total sleep duration in minutes, all asleep phases combined.
    pub duration: Option<i64>,
    pub sleep_deep_duration: Option<i64>,
    pub sleep_light_duration: Option<i64>,
    pub sleep_rem_duration: Option<i64>,
    pub sleep_awake_duration: Option<i64>,
    pub awake_count: Option<i64>,
    pub has_rem: bool,
    pub min_hr: Option<i16>,
    pub max_hr: Option<i16>,
    pub avg_hr: Option<f64>,
}

/// A contiguous interval within one session tagged with a single stage.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SleepSegment {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub stage: SleepStage,
}

impl SleepSegment {
    pub fn duration_minutes(&self) -> f64 {
        (self.end_time - self.start_time).num_seconds() as f64 / 60.0
    }
}

/// One heart-rate reading inside a session's night window.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeartRateSample {
    pub time: NaiveDateTime,
    pub bpm: i16,
}
