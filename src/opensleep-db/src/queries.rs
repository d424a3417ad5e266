use opensleep_entities::{sleep_sessions, sleep_statistics};
use opensleep_types::SleepSession;
use sea_orm::{ActiveValue::Set, ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::DatabaseHandler;

impl DatabaseHandler {
    /// All of a user's sessions, most recent first.
    pub async fn get_sleep_sessions(&self, user_id: i64) -> anyhow::Result<Vec<SleepSession>> {
        let sessions = sleep_sessions::Entity::find()
            .filter(sleep_sessions::Column::UserId.eq(user_id))
            .order_by_desc(sleep_sessions::Column::RecordedAt)
            .all(&self.db)
            .await?
            .into_iter()
            .map(map_sleep_session)
            .collect();

        Ok(sessions)
    }

    /// All of a user's statistics rows, most recent date first.
    pub async fn get_statistics(
        &self,
        user_id: i64,
    ) -> anyhow::Result<Vec<sleep_statistics::Model>> {
        Ok(sleep_statistics::Entity::find()
            .filter(sleep_statistics::Column::UserId.eq(user_id))
            .order_by_desc(sleep_statistics::Column::Date)
            .all(&self.db)
            .await?)
    }

    pub async fn latest_statistics(
        &self,
        user_id: i64,
    ) -> anyhow::Result<Option<sleep_statistics::Model>> {
        Ok(sleep_statistics::Entity::find()
            .filter(sleep_statistics::Column::UserId.eq(user_id))
            .order_by_desc(sleep_statistics::Column::Date)
            .order_by_desc(sleep_statistics::Column::Id)
            .one(&self.db)
            .await?)
    }

    pub async fn set_recommendation(
        &self,
        statistics_id: i32,
        recommendation: String,
    ) -> anyhow::Result<()> {
        let model = sleep_statistics::ActiveModel {
            id: Set(statistics_id),
            recommendation: Set(Some(recommendation)),
            ..Default::default()
        };

        sleep_statistics::Entity::update(model).exec(&self.db).await?;

        Ok(())
    }
}

fn map_sleep_session(model: sleep_sessions::Model) -> SleepSession {
    SleepSession {
        recorded_at: model.recorded_at,
        device_bedtime: model.device_bedtime,
        device_wake_up_time: model.device_wake_up_time,
        bedtime: model.bedtime,
        wake_up_time: model.wake_up_time,
        duration: model.duration.map(i64::from),
        sleep_deep_duration: model.sleep_deep_duration.map(i64::from),
        sleep_light_duration: model.sleep_light_duration.map(i64::from),
        sleep_rem_duration: model.sleep_rem_duration.map(i64::from),
        sleep_awake_duration: model.sleep_awake_duration.map(i64::from),
        awake_count: model.awake_count.map(i64::from),
        has_rem: model.has_rem,
        min_hr: model.min_hr,
        max_hr: model.max_hr,
        avg_hr: model.avg_hr,
    }
}
