use std::collections::HashMap;
use std::path::Path;

use chrono::NaiveDateTime;
use opensleep_algos::calculate_session_statistics;
use opensleep_entities::{night_heart_rate, sleep_segments, sleep_sessions, sleep_statistics};
use opensleep_export::{ExportError, ParsedExport, night_window, parse_export, read_export_path};
use opensleep_migration::OnConflict;
use opensleep_types::{ProgressSink, SleepSegment, SleepSession, UserProfile};
use sea_orm::{
    ActiveValue::{NotSet, Set},
    ColumnTrait, DatabaseTransaction, EntityTrait, QueryFilter, TransactionTrait,
};

use crate::DatabaseHandler;

// SQLite limits a statement to 999 bound variables; batch sizes keep
// insert_many under it.
const SEGMENT_BATCH: usize = 150; // 4 Set columns
const HEART_RATE_BATCH: usize = 200; // 3 Set columns
const STATISTICS_BATCH: usize = 90; // 8 Set columns

/// Caller-visible result of one import invocation. There is no
/// partial-success state: either the file was rejected before any
/// write, or every session landed together with its recomputed
/// statistics.
#[derive(Debug)]
pub enum ImportOutcome {
    /// The export failed format validation; nothing was written.
    InvalidFile { reason: ExportError },
    Completed { imported: usize },
}

impl DatabaseHandler {
    /// Imports one raw export file for one user. The temporary file is
    /// removed on both acceptance and format rejection; a write
    /// failure leaves it in place so the import can be retried.
    pub async fn import_file(
        &self,
        user_id: i64,
        profile: &UserProfile,
        path: &Path,
        progress: &dyn ProgressSink,
    ) -> anyhow::Result<ImportOutcome> {
        let parsed = match read_export_path(path).and_then(|rows| parse_export(&rows, progress)) {
            Ok(parsed) => parsed,
            Err(reason) => {
                std::fs::remove_file(path)?;
                return Ok(ImportOutcome::InvalidFile { reason });
            }
        };

        let outcome = self.import_export(user_id, profile, &parsed, progress).await?;
        std::fs::remove_file(path)?;
        Ok(outcome)
    }

    /// Replace-and-recompute for one user's sleep data, all inside a
    /// single transaction: upsert sessions by natural key, drop every
    /// segment, night sample and statistics row the user owns, then
    /// rebuild them from the parsed tables. Dropping the transaction
    /// on error rolls the whole sequence back.
    pub async fn import_export(
        &self,
        user_id: i64,
        profile: &UserProfile,
        parsed: &ParsedExport,
        progress: &dyn ProgressSink,
    ) -> anyhow::Result<ImportOutcome> {
        let txn = self.db.begin().await?;

        let imported = replace_user_sleep_data(&txn, user_id, profile, parsed, progress).await?;

        txn.commit().await?;
        Ok(ImportOutcome::Completed { imported })
    }
}

async fn replace_user_sleep_data(
    txn: &DatabaseTransaction,
    user_id: i64,
    profile: &UserProfile,
    parsed: &ParsedExport,
    progress: &dyn ProgressSink,
) -> anyhow::Result<usize> {
    let total = parsed.sessions.len();

    for (processed, session) in parsed.sessions.iter().enumerate() {
        upsert_session(txn, user_id, session).await?;
        progress.report(
            (processed + 1) as u64,
            total as u64,
            &format!("imported session {}/{}", processed + 1, total),
        );
    }

    // Timestamp -> id lookup over everything the user now owns, also
    // covering sessions from earlier imports.
    let models = sleep_sessions::Entity::find()
        .filter(sleep_sessions::Column::UserId.eq(user_id))
        .all(txn)
        .await?;
    let session_ids: HashMap<NaiveDateTime, i32> =
        models.iter().map(|m| (m.recorded_at, m.id)).collect();
    let owned_ids: Vec<i32> = models.iter().map(|m| m.id).collect();

    // Wholesale replacement: every child row and every statistics row
    // of this user goes, not just the reimported ones. Statistics are
    // user-scoped and must never outlive the data they were computed
    // from.
    sleep_segments::Entity::delete_many()
        .filter(sleep_segments::Column::SessionId.is_in(owned_ids.clone()))
        .exec(txn)
        .await?;
    night_heart_rate::Entity::delete_many()
        .filter(night_heart_rate::Column::SessionId.is_in(owned_ids))
        .exec(txn)
        .await?;
    sleep_statistics::Entity::delete_many()
        .filter(sleep_statistics::Column::UserId.eq(user_id))
        .exec(txn)
        .await?;

    let mut segments_by_session: HashMap<NaiveDateTime, Vec<SleepSegment>> = HashMap::new();
    for session_segment in &parsed.segments {
        segments_by_session
            .entry(session_segment.session_time)
            .or_default()
            .push(session_segment.segment);
    }

    let mut segment_rows = Vec::new();
    for (session_time, segments) in &segments_by_session {
        let Some(&session_id) = session_ids.get(session_time) else {
            continue;
        };
        for segment in segments {
            segment_rows.push(sleep_segments::ActiveModel {
                id: NotSet,
                session_id: Set(session_id),
                start_time: Set(segment.start_time),
                end_time: Set(segment.end_time),
                stage: Set(segment.stage.code()),
            });
        }
    }
    insert_batched::<sleep_segments::Entity, _>(txn, segment_rows, SEGMENT_BATCH).await?;

    let sample_times: Vec<NaiveDateTime> =
        parsed.night_heart_rate.iter().map(|s| s.time).collect();

    let mut sample_rows = Vec::new();
    for session in &parsed.sessions {
        let Some(&session_id) = session_ids.get(&session.recorded_at) else {
            continue;
        };
        let (Some(start), Some(end)) = (session.device_bedtime, session.device_wake_up_time)
        else {
            continue;
        };

        for index in night_window(&sample_times, start, end) {
            let sample = parsed.night_heart_rate[index];
            sample_rows.push(night_heart_rate::ActiveModel {
                id: NotSet,
                session_id: Set(session_id),
                time: Set(sample.time),
                bpm: Set(sample.bpm),
            });
        }
    }
    insert_batched::<night_heart_rate::Entity, _>(txn, sample_rows, HEART_RATE_BATCH).await?;

    let mut statistics_rows = Vec::new();
    for session in &parsed.sessions {
        let segments = segments_by_session
            .get(&session.recorded_at)
            .map(Vec::as_slice)
            .unwrap_or_default();
        let stats = calculate_session_statistics(session, segments, profile);

        statistics_rows.push(sleep_statistics::ActiveModel {
            id: NotSet,
            user_id: Set(user_id),
            date: Set(session.recorded_at.date()),
            latency_minutes: Set(stats.latency_minutes),
            sleep_efficiency: Set(stats.sleep_efficiency),
            sleep_phases: Set(serde_json::json!({
                "deep": stats.sleep_phases.deep,
                "light": stats.sleep_phases.light,
                "rem": stats.sleep_phases.rem,
                "awake": stats.sleep_phases.awake,
            })),
            sleep_fragmentation_index: Set(stats.sleep_fragmentation_index),
            sleep_calories_burned: Set(stats.sleep_calories_burned),
            cycle_count: Set(stats.cycle_count as i32),
            recommendation: NotSet,
        });
    }
    insert_batched::<sleep_statistics::Entity, _>(txn, statistics_rows, STATISTICS_BATCH).await?;

    Ok(total)
}

async fn upsert_session(
    txn: &DatabaseTransaction,
    user_id: i64,
    session: &SleepSession,
) -> anyhow::Result<()> {
    let model = sleep_sessions::ActiveModel {
        id: NotSet,
        user_id: Set(user_id),
        recorded_at: Set(session.recorded_at),
        device_bedtime: Set(session.device_bedtime),
        device_wake_up_time: Set(session.device_wake_up_time),
        bedtime: Set(session.bedtime),
        wake_up_time: Set(session.wake_up_time),
        duration: Set(session.duration.map(|v| v as i32)),
        sleep_deep_duration: Set(session.sleep_deep_duration.map(|v| v as i32)),
        sleep_light_duration: Set(session.sleep_light_duration.map(|v| v as i32)),
        sleep_rem_duration: Set(session.sleep_rem_duration.map(|v| v as i32)),
        sleep_awake_duration: Set(session.sleep_awake_duration.map(|v| v as i32)),
        awake_count: Set(session.awake_count.map(|v| v as i32)),
        has_rem: Set(session.has_rem),
        min_hr: Set(session.min_hr),
        max_hr: Set(session.max_hr),
        avg_hr: Set(session.avg_hr),
    };

    sleep_sessions::Entity::insert(model)
        .on_conflict(
            OnConflict::columns([
                sleep_sessions::Column::UserId,
                sleep_sessions::Column::RecordedAt,
            ])
            .update_columns([
                sleep_sessions::Column::DeviceBedtime,
                sleep_sessions::Column::DeviceWakeUpTime,
                sleep_sessions::Column::Bedtime,
                sleep_sessions::Column::WakeUpTime,
                sleep_sessions::Column::Duration,
                sleep_sessions::Column::SleepDeepDuration,
                sleep_sessions::Column::SleepLightDuration,
                sleep_sessions::Column::SleepRemDuration,
                sleep_sessions::Column::SleepAwakeDuration,
                sleep_sessions::Column::AwakeCount,
                sleep_sessions::Column::HasRem,
                sleep_sessions::Column::MinHr,
                sleep_sessions::Column::MaxHr,
                sleep_sessions::Column::AvgHr,
            ])
            .to_owned(),
        )
        .exec(txn)
        .await?;

    Ok(())
}

async fn insert_batched<E, A>(
    txn: &DatabaseTransaction,
    rows: Vec<A>,
    batch_size: usize,
) -> anyhow::Result<()>
where
    E: EntityTrait,
    A: sea_orm::ActiveModelTrait<Entity = E> + Clone,
{
    for batch in rows.chunks(batch_size) {
        E::insert_many(batch.to_vec()).exec(txn).await?;
    }

    Ok(())
}
