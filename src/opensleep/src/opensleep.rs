use std::fmt;
use std::path::Path;

use opensleep_algos::{
    ChronotypeEstimate, RegularityMetrics, average_duration_hours, estimate_chronotype,
    sleep_regularity,
};
use opensleep_db::{DatabaseHandler, ImportOutcome};
use opensleep_entities::sleep_statistics;
use opensleep_types::{Language, ProgressSink, UserProfile};

use crate::helpers::FormatHM;

pub struct OpenSleep {
    pub database: DatabaseHandler,
}

impl OpenSleep {
    pub fn new(database: DatabaseHandler) -> Self {
        Self { database }
    }

    pub async fn import(
        &self,
        user_id: i64,
        profile: &UserProfile,
        path: &Path,
        progress: &dyn ProgressSink,
    ) -> anyhow::Result<ImportOutcome> {
        let outcome = self
            .database
            .import_file(user_id, profile, path, progress)
            .await?;

        match &outcome {
            ImportOutcome::Completed { imported } => {
                info!("imported {imported} sessions for user {user_id}");
            }
            ImportOutcome::InvalidFile { reason } => {
                warn!("rejected export for user {user_id}: {reason}");
            }
        }

        Ok(outcome)
    }

    /// Aggregate view over everything the user has imported so far.
    pub async fn sleep_report(
        &self,
        user_id: i64,
        language: Language,
    ) -> anyhow::Result<SleepReport> {
        let sessions = self.database.get_sleep_sessions(user_id).await?;
        let latest = self.database.latest_statistics(user_id).await?;

        Ok(SleepReport {
            chronotype: estimate_chronotype(&sessions),
            regularity: sleep_regularity(&sessions),
            average_duration_hours: average_duration_hours(&sessions),
            latest,
            language,
        })
    }
}

pub struct SleepReport {
    pub chronotype: Option<ChronotypeEstimate>,
    pub regularity: RegularityMetrics,
    pub average_duration_hours: f64,
    pub latest: Option<sleep_statistics::Model>,
    pub language: Language,
}

impl fmt::Display for SleepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.chronotype {
            Some(estimate) => {
                writeln!(
                    f,
                    "chronotype: {} (midpoint {})",
                    estimate.chronotype,
                    estimate.corrected_midpoint.format_hm()
                )?;
                writeln!(f, "  {}", estimate.chronotype.description(self.language))?;
            }
            None => writeln!(f, "chronotype: not enough data")?,
        }

        writeln!(f, "bedtime regularity: ±{:.1} min", self.regularity.bedtime_std)?;
        writeln!(
            f,
            "wake-up regularity: ±{:.1} min",
            self.regularity.wake_time_std
        )?;
        writeln!(f, "average duration: {:.2} h", self.average_duration_hours)?;

        if let Some(stats) = &self.latest {
            writeln!(f, "latest night ({}):", stats.date)?;
            writeln!(
                f,
                "  efficiency {:.1}%, latency {:.1} min, {} cycles",
                stats.sleep_efficiency, stats.latency_minutes, stats.cycle_count
            )?;
            writeln!(
                f,
                "  fragmentation {:.2}, {:.1} kcal burned",
                stats.sleep_fragmentation_index, stats.sleep_calories_burned
            )?;
            if let Some(recommendation) = &stats.recommendation {
                writeln!(f, "  recommendation: {recommendation}")?;
            }
        }

        Ok(())
    }
}
