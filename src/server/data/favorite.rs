use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// The user's favorites, most recently added first.
    pub async fn list_by_user(&self, user_id: &str) -> Result<Vec<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .order_by_desc(entity::favorite::Column::CreatedAt)
            .order_by_desc(entity::favorite::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find(
        &self,
        user_id: &str,
        vehicle_id: i32,
    ) -> Result<Option<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::VehicleId.eq(vehicle_id))
            .one(self.db)
            .await
    }

    pub async fn create(
        &self,
        user_id: &str,
        vehicle_id: i32,
    ) -> Result<entity::favorite::Model, DbErr> {
        entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id.to_string()),
            vehicle_id: ActiveValue::Set(vehicle_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Favorite::delete_by_id(id).exec(self.db).await?;
        Ok(())
    }

    pub async fn count_by_user(&self, user_id: &str) -> Result<u64, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .count(self.db)
            .await
    }
}
