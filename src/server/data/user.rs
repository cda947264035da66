//! User data repository.
//!
//! Users are keyed by the identity provider's subject (`external_id`); every other table
//! references them through that string.

use chrono::Utc;
use entity::sea_orm_active_enums::UserType;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter,
};

use crate::server::model::user::UpsertUserParam;

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a user or refreshes an existing user's profile fields.
    ///
    /// The admin column is only part of the conflict update when `param.is_admin` is `Some`,
    /// so a regular login never revokes admin.
    ///
    /// # Returns
    /// - `Ok(user)` - The created or updated row
    /// - `Err(DbErr)` - Database error
    pub async fn upsert(&self, param: UpsertUserParam) -> Result<entity::user::Model, DbErr> {
        let mut update_columns = vec![
            entity::user::Column::Name,
            entity::user::Column::Email,
            entity::user::Column::Phone,
            entity::user::Column::ProfileImage,
            entity::user::Column::UpdatedAt,
        ];

        if param.is_admin.is_some() {
            update_columns.push(entity::user::Column::Admin);
        }

        let now = Utc::now();
        entity::prelude::User::insert(entity::user::ActiveModel {
            external_id: ActiveValue::Set(param.external_id),
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            phone: ActiveValue::Set(param.phone),
            profile_image: ActiveValue::Set(param.profile_image),
            rating: ActiveValue::Set(None),
            total_rentals: ActiveValue::Set(0),
            user_type: ActiveValue::Set(None),
            admin: ActiveValue::Set(param.is_admin.unwrap_or(false)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::ExternalId)
                .update_columns(update_columns)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    pub async fn find_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::ExternalId.eq(external_id))
            .one(self.db)
            .await
    }

    /// Users for a set of external ids, in no particular order.
    pub async fn find_many_by_external_ids(
        &self,
        external_ids: Vec<String>,
    ) -> Result<Vec<entity::user::Model>, DbErr> {
        if external_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::User::find()
            .filter(entity::user::Column::ExternalId.is_in(external_ids))
            .all(self.db)
            .await
    }

    /// Returns `true` when at least one user holds the admin flag.
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Admin.eq(true))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Applies a partial profile update. `None` fields keep their current value.
    pub async fn update_profile(
        &self,
        user: entity::user::Model,
        name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
    ) -> Result<entity::user::Model, DbErr> {
        let mut active = user.into_active_model();
        if let Some(name) = name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(email) = email {
            active.email = ActiveValue::Set(Some(email));
        }
        if let Some(phone) = phone {
            active.phone = ActiveValue::Set(Some(phone));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }

    pub async fn update_profile_image(
        &self,
        user: entity::user::Model,
        image_url: String,
    ) -> Result<entity::user::Model, DbErr> {
        let mut active = user.into_active_model();
        active.profile_image = ActiveValue::Set(Some(image_url));
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }

    pub async fn set_user_type(
        &self,
        user: entity::user::Model,
        user_type: UserType,
    ) -> Result<entity::user::Model, DbErr> {
        let mut active = user.into_active_model();
        active.user_type = ActiveValue::Set(Some(user_type));
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }

    /// Stores the user's average rating. No-op when the user does not exist.
    pub async fn set_rating(&self, external_id: &str, rating: Option<f64>) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::ExternalId.eq(external_id))
            .col_expr(
                entity::user::Column::Rating,
                sea_orm::sea_query::Expr::value(rating),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Deletes the user. Returns `false` when no row matched.
    pub async fn delete_by_external_id(&self, external_id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_many()
            .filter(entity::user::Column::ExternalId.eq(external_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
