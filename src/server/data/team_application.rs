use chrono::Utc;
use entity::{json::StringList, sea_orm_active_enums::ApplicationStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::team_application::ApplyToTeamDto;

pub struct TeamApplicationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamApplicationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a `pending` application.
    pub async fn create(
        &self,
        driver_id: &str,
        application: ApplyToTeamDto,
    ) -> Result<entity::team_application::Model, DbErr> {
        let now = Utc::now();
        entity::team_application::ActiveModel {
            team_id: ActiveValue::Set(application.team_id),
            driver_id: ActiveValue::Set(driver_id.to_string()),
            status: ActiveValue::Set(ApplicationStatus::Pending),
            message: ActiveValue::Set(application.message),
            driver_experience: ActiveValue::Set(application.driver_experience),
            preferred_dates: ActiveValue::Set(StringList(application.preferred_dates)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::team_application::Model>, DbErr> {
        entity::prelude::TeamApplication::find_by_id(id)
            .one(self.db)
            .await
    }

    /// The driver's pending application to the team, if any.
    pub async fn find_pending(
        &self,
        driver_id: &str,
        team_id: i32,
    ) -> Result<Option<entity::team_application::Model>, DbErr> {
        entity::prelude::TeamApplication::find()
            .filter(entity::team_application::Column::DriverId.eq(driver_id))
            .filter(entity::team_application::Column::TeamId.eq(team_id))
            .filter(entity::team_application::Column::Status.eq(ApplicationStatus::Pending))
            .one(self.db)
            .await
    }

    pub async fn list_by_team(
        &self,
        team_id: i32,
    ) -> Result<Vec<entity::team_application::Model>, DbErr> {
        entity::prelude::TeamApplication::find()
            .filter(entity::team_application::Column::TeamId.eq(team_id))
            .order_by_desc(entity::team_application::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn list_by_driver(
        &self,
        driver_id: &str,
    ) -> Result<Vec<entity::team_application::Model>, DbErr> {
        entity::prelude::TeamApplication::find()
            .filter(entity::team_application::Column::DriverId.eq(driver_id))
            .order_by_desc(entity::team_application::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn list_by_status(
        &self,
        status: ApplicationStatus,
    ) -> Result<Vec<entity::team_application::Model>, DbErr> {
        entity::prelude::TeamApplication::find()
            .filter(entity::team_application::Column::Status.eq(status))
            .order_by_desc(entity::team_application::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn update_status(
        &self,
        application: entity::team_application::Model,
        status: ApplicationStatus,
    ) -> Result<entity::team_application::Model, DbErr> {
        let mut active = application.into_active_model();
        active.status = ActiveValue::Set(status);
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }
}
