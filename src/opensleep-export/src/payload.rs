/// JSON payload of a `"sleep"`-kind row. Every field except the schema
/// signature is optional; absent values flow through as `None` and are
/// zero-substituted by the calculators, not here.
#[derive(Debug, Deserialize)]
pub(crate) struct SleepPayload {
    pub version: Option<i64>,
    pub has_stage: Option<bool>,
    pub items: Option<Vec<StageItem>>,
    pub device_bedtime: Option<i64>,
    pub device_wake_up_time: Option<i64>,
    pub bedtime: Option<i64>,
    pub wake_up_time: Option<i64>,
    pub duration: Option<i64>,
    pub sleep_deep_duration: Option<i64>,
    pub sleep_light_duration: Option<i64>,
    pub sleep_rem_duration: Option<i64>,
    pub sleep_awake_duration: Option<i64>,
    pub awake_count: Option<i64>,
    pub has_rem: Option<bool>,
    pub min_hr: Option<i16>,
    pub max_hr: Option<i16>,
    pub avg_hr: Option<f64>,
}

impl SleepPayload {
    /// Minimum signature of a supported export format version.
    pub fn is_supported(&self) -> bool {
        self.version == Some(2) && self.has_stage == Some(true) && self.items.is_some()
    }
}

/// One stage segment inside a sleep payload's `items` array.
#[derive(Debug, Deserialize)]
pub(crate) struct StageItem {
    pub start_time: i64,
    pub end_time: i64,
    pub state: i64,
}

/// JSON payload of a `"heart_rate"`-kind row. The embedded `time` is
/// authoritative, not the row's own timestamp.
#[derive(Debug, Deserialize)]
pub(crate) struct HeartRatePayload {
    pub time: i64,
    pub bpm: i64,
}
