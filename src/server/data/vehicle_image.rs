//! Vehicle photo rows. `position` orders images for display.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

pub struct VehicleImageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VehicleImageRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        vehicle_id: i32,
        image_url: String,
        is_primary: bool,
        position: i32,
    ) -> Result<entity::vehicle_image::Model, DbErr> {
        entity::vehicle_image::ActiveModel {
            vehicle_id: ActiveValue::Set(vehicle_id),
            image_url: ActiveValue::Set(image_url),
            is_primary: ActiveValue::Set(is_primary),
            position: ActiveValue::Set(position),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn list_by_vehicle(
        &self,
        vehicle_id: i32,
    ) -> Result<Vec<entity::vehicle_image::Model>, DbErr> {
        entity::prelude::VehicleImage::find()
            .filter(entity::vehicle_image::Column::VehicleId.eq(vehicle_id))
            .order_by_asc(entity::vehicle_image::Column::Position)
            .all(self.db)
            .await
    }

    pub async fn count_by_vehicle(&self, vehicle_id: i32) -> Result<u64, DbErr> {
        entity::prelude::VehicleImage::find()
            .filter(entity::vehicle_image::Column::VehicleId.eq(vehicle_id))
            .count(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::vehicle_image::Model>, DbErr> {
        entity::prelude::VehicleImage::find_by_id(id).one(self.db).await
    }

    /// Clears the primary flag on every image of the vehicle.
    pub async fn unset_primary(&self, vehicle_id: i32) -> Result<(), DbErr> {
        entity::prelude::VehicleImage::update_many()
            .filter(entity::vehicle_image::Column::VehicleId.eq(vehicle_id))
            .col_expr(
                entity::vehicle_image::Column::IsPrimary,
                sea_orm::sea_query::Expr::value(false),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::VehicleImage::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Primary image URL of each vehicle that has one.
    pub async fn primary_urls(&self, vehicle_ids: Vec<i32>) -> Result<HashMap<i32, String>, DbErr> {
        if vehicle_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let images = entity::prelude::VehicleImage::find()
            .filter(entity::vehicle_image::Column::VehicleId.is_in(vehicle_ids))
            .filter(entity::vehicle_image::Column::IsPrimary.eq(true))
            .all(self.db)
            .await?;

        Ok(images
            .into_iter()
            .map(|image| (image.vehicle_id, image.image_url))
            .collect())
    }
}
