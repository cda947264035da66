use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct PlatformSettingsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlatformSettingsRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// The most recent active settings row.
    pub async fn active(&self) -> Result<Option<entity::platform_settings::Model>, DbErr> {
        entity::prelude::PlatformSettings::find()
            .filter(entity::platform_settings::Column::IsActive.eq(true))
            .order_by_desc(entity::platform_settings::Column::Id)
            .one(self.db)
            .await
    }

    pub async fn create(
        &self,
        percentage: f64,
        minimum: i64,
        maximum: Option<i64>,
    ) -> Result<entity::platform_settings::Model, DbErr> {
        let now = Utc::now();
        entity::platform_settings::ActiveModel {
            platform_fee_percentage: ActiveValue::Set(percentage),
            minimum_platform_fee: ActiveValue::Set(minimum),
            maximum_platform_fee: ActiveValue::Set(maximum),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
