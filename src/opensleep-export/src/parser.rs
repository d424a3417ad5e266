use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDateTime};
use opensleep_types::{HeartRateSample, ProgressSink, SleepSegment, SleepSession, SleepStage};

use crate::payload::{HeartRatePayload, SleepPayload};
use crate::{ExportError, RawExportRow, night_window};

/// Total number of advisory progress steps reported by [`parse_export`].
pub const PARSE_STEPS: u64 = 9;

/// Only the first rows are probed for the schema signature; a single
/// match is enough to accept the file.
const SIGNATURE_PROBE_ROWS: usize = 5;

const SLEEP_KEY: &str = "sleep";
const HEART_RATE_KEY: &str = "heart_rate";

/// The three normalized tables produced from one raw export.
#[derive(Debug, Default, PartialEq)]
pub struct ParsedExport {
    pub sessions: Vec<SleepSession>,
    /// Stage segments, each indexed by its owning session's timestamp.
    pub segments: Vec<SessionSegment>,
    /// Union of per-session night windows over the heart-rate series,
    /// ordered by time.
    pub night_heart_rate: Vec<HeartRateSample>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionSegment {
    pub session_time: NaiveDateTime,
    pub segment: SleepSegment,
}

/// Decodes the raw export into normalized session, segment and
/// night-heart-rate tables. Rejects the file wholesale when the schema
/// signature does not match; there is no per-row salvage.
///
/// Progress reports are advisory only and never affect the result.
pub fn parse_export(
    rows: &[RawExportRow],
    progress: &dyn ProgressSink,
) -> Result<ParsedExport, ExportError> {
    let sleep_rows: Vec<&RawExportRow> = rows.iter().filter(|r| r.key == SLEEP_KEY).collect();
    let hr_rows: Vec<&RawExportRow> = rows.iter().filter(|r| r.key == HEART_RATE_KEY).collect();

    if sleep_rows.is_empty() {
        return Err(ExportError::NoSleepRows);
    }
    progress.report(1, PARSE_STEPS, "split sleep and heart-rate rows");

    let supported = sleep_rows
        .iter()
        .take(SIGNATURE_PROBE_ROWS)
        .any(|row| match serde_json::from_str::<SleepPayload>(&row.value) {
            Ok(payload) => payload.is_supported(),
            Err(_) => false,
        });

    if !supported {
        return Err(ExportError::UnsupportedSchema);
    }
    progress.report(2, PARSE_STEPS, "validated schema signature");

    // Rows that fail to decode or carry another schema version are
    // filtered out here; the file as a whole is already accepted.
    let mut decoded: Vec<(NaiveDateTime, SleepPayload)> = Vec::new();
    for row in &sleep_rows {
        let Ok(payload) = serde_json::from_str::<SleepPayload>(&row.value) else {
            continue;
        };
        if !payload.is_supported() {
            continue;
        }
        decoded.push((from_unix(row.time)?, payload));
    }
    progress.report(3, PARSE_STEPS, "decoded sleep payloads");

    let mut sessions = Vec::with_capacity(decoded.len());
    for (recorded_at, payload) in &decoded {
        sessions.push(session_meta(*recorded_at, payload)?);
    }
    progress.report(4, PARSE_STEPS, "normalized session metadata");

    let mut segments = Vec::new();
    for (recorded_at, payload) in &decoded {
        for item in payload.items.as_deref().unwrap_or_default() {
            let Some(stage) = SleepStage::from_code(item.state) else {
                continue;
            };

            segments.push(SessionSegment {
                session_time: *recorded_at,
                segment: SleepSegment {
                    start_time: from_unix(item.start_time)?,
                    end_time: from_unix(item.end_time)?,
                    stage,
                },
            });
        }
    }
    progress.report(5, PARSE_STEPS, "exploded stage segments");

    let mut samples = Vec::new();
    for row in &hr_rows {
        let Ok(payload) = serde_json::from_str::<HeartRatePayload>(&row.value) else {
            continue;
        };
        samples.push(HeartRateSample {
            time: from_unix(payload.time)?,
            bpm: payload.bpm.try_into().unwrap_or(i16::MAX),
        });
    }
    samples.sort_by_key(|sample| sample.time);
    progress.report(6, PARSE_STEPS, "decoded heart-rate samples");

    let windows: Vec<(NaiveDateTime, NaiveDateTime)> = sessions
        .iter()
        .filter_map(|s| Some((s.device_bedtime?, s.device_wake_up_time?)))
        .collect();
    progress.report(7, PARSE_STEPS, "derived night windows");

    let times: Vec<NaiveDateTime> = samples.iter().map(|sample| sample.time).collect();
    let mut night_indices = BTreeSet::new();
    for (start, end) in windows {
        night_indices.extend(night_window(&times, start, end));
    }
    let night_heart_rate = night_indices.into_iter().map(|i| samples[i]).collect();
    progress.report(8, PARSE_STEPS, "masked night heart rate");

    progress.report(9, PARSE_STEPS, "export parsed");
    Ok(ParsedExport {
        sessions,
        segments,
        night_heart_rate,
    })
}

fn session_meta(
    recorded_at: NaiveDateTime,
    payload: &SleepPayload,
) -> Result<SleepSession, ExportError> {
    Ok(SleepSession {
        recorded_at,
        device_bedtime: opt_time(payload.device_bedtime)?,
        device_wake_up_time: opt_time(payload.device_wake_up_time)?,
        bedtime: opt_time(payload.bedtime)?,
        wake_up_time: opt_time(payload.wake_up_time)?,
        duration: payload.duration,
        sleep_deep_duration: payload.sleep_deep_duration,
        sleep_light_duration: payload.sleep_light_duration,
        sleep_rem_duration: payload.sleep_rem_duration,
        sleep_awake_duration: payload.sleep_awake_duration,
        awake_count: payload.awake_count,
        has_rem: payload.has_rem.unwrap_or(false),
        min_hr: payload.min_hr,
        max_hr: payload.max_hr,
        avg_hr: payload.avg_hr,
    })
}

fn from_unix(unix: i64) -> Result<NaiveDateTime, ExportError> {
    DateTime::from_timestamp(unix, 0)
        .map(|dt| dt.naive_utc())
        .ok_or(ExportError::TimestampOutOfRange(unix))
}

fn opt_time(unix: Option<i64>) -> Result<Option<NaiveDateTime>, ExportError> {
    unix.map(from_unix).transpose()
}
