use entity::sea_orm_active_enums::UserType;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::team::{CreateTeamDto, UpdateTeamDto},
    server::{
        data::team::{TeamFilter, TeamRepository},
        error::AppError,
        service::user::UserService,
    },
};

pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a team owned by the caller and marks the caller as a team user.
    pub async fn create(
        &self,
        owner_id: &str,
        team: CreateTeamDto,
    ) -> Result<entity::team::Model, AppError> {
        if team.name.trim().is_empty() {
            return Err(AppError::BadRequest("Team name is required".to_string()));
        }
        if team.available_seats < 0 {
            return Err(AppError::BadRequest(
                "Available seats cannot be negative".to_string(),
            ));
        }

        let created = TeamRepository::new(self.db).create(owner_id, team).await?;
        UserService::new(self.db)
            .take_role(owner_id, UserType::Team)
            .await?;

        tracing::info!("Team {} created by {}", created.id, owner_id);

        Ok(created)
    }

    pub async fn list(&self, filter: TeamFilter) -> Result<Vec<entity::team::Model>, AppError> {
        Ok(TeamRepository::new(self.db).list_active(filter).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<entity::team::Model, AppError> {
        TeamRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))
    }

    pub async fn list_by_owner(
        &self,
        owner_id: &str,
    ) -> Result<Vec<entity::team::Model>, AppError> {
        Ok(TeamRepository::new(self.db).list_by_owner(owner_id).await?)
    }

    pub async fn update(
        &self,
        owner_id: &str,
        id: i32,
        update: UpdateTeamDto,
    ) -> Result<entity::team::Model, AppError> {
        let team = self.owned(owner_id, id).await?;
        if update.available_seats.is_some_and(|seats| seats < 0) {
            return Err(AppError::BadRequest(
                "Available seats cannot be negative".to_string(),
            ));
        }

        Ok(TeamRepository::new(self.db).update(team, update).await?)
    }

    /// Deletes the team together with its applications.
    pub async fn delete(&self, owner_id: &str, id: i32) -> Result<(), AppError> {
        let team = self.owned(owner_id, id).await?;

        let txn = self.db.begin().await?;
        TeamRepository::new(&txn).delete(team.id).await?;
        txn.commit().await?;

        Ok(())
    }

    async fn owned(&self, owner_id: &str, id: i32) -> Result<entity::team::Model, AppError> {
        let team = self.get_by_id(id).await?;
        if team.owner_id != owner_id {
            return Err(AppError::Forbidden(
                "Not authorized to modify this team".to_string(),
            ));
        }
        Ok(team)
    }
}
