//! Driver applications for seats on a team.

use entity::sea_orm_active_enums::ApplicationStatus;
use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::{
    model::team_application::ApplyToTeamDto,
    server::{
        data::{team::TeamRepository, team_application::TeamApplicationRepository},
        error::AppError,
        model::team_application::{may_set_status, ApplicationActor},
    },
};

pub struct TeamApplicationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamApplicationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Files a pending application from the caller to an active team.
    ///
    /// # Returns
    /// - `Ok(application)` - The pending application
    /// - `Err(AppError::NotFound)` - Team missing or inactive
    /// - `Err(AppError::BadRequest)` - Caller owns the team
    /// - `Err(AppError::Conflict)` - Caller already has a pending application to the team
    pub async fn apply(
        &self,
        driver_id: &str,
        application: ApplyToTeamDto,
    ) -> Result<entity::team_application::Model, AppError> {
        let team = self.find_team(application.team_id).await?;
        if !team.is_active {
            return Err(AppError::NotFound("Team not found".to_string()));
        }
        if team.owner_id == driver_id {
            return Err(AppError::BadRequest(
                "Cannot apply to your own team".to_string(),
            ));
        }

        let repo = TeamApplicationRepository::new(self.db);
        if repo.find_pending(driver_id, team.id).await?.is_some() {
            return Err(AppError::Conflict(
                "You already have a pending application to this team".to_string(),
            ));
        }

        Ok(repo.create(driver_id, application).await?)
    }

    /// Moves a pending application on.
    ///
    /// The applying driver may withdraw; the team owner may accept or decline.
    pub async fn update_status(
        &self,
        user_id: &str,
        id: i32,
        status: ApplicationStatus,
    ) -> Result<entity::team_application::Model, AppError> {
        let repo = TeamApplicationRepository::new(self.db);
        let application = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Application not found".to_string()))?;
        let team = self.find_team(application.team_id).await?;

        let actor = if application.driver_id == user_id {
            ApplicationActor::Driver
        } else if team.owner_id == user_id {
            ApplicationActor::TeamOwner
        } else {
            return Err(AppError::Forbidden(
                "Not authorized to update this application".to_string(),
            ));
        };

        if !may_set_status(actor, status) {
            return Err(AppError::Forbidden(format!(
                "Not allowed to set application status to {}",
                status.to_value()
            )));
        }
        if application.status != ApplicationStatus::Pending {
            return Err(AppError::BadRequest(format!(
                "Application is already {}",
                application.status.to_value()
            )));
        }

        let updated = repo.update_status(application, status).await?;

        tracing::info!(
            "Application {} to team {} is now {}",
            updated.id,
            updated.team_id,
            status.to_value()
        );

        Ok(updated)
    }

    /// Full applications to a team, visible to its owner.
    pub async fn list_by_team(
        &self,
        owner_id: &str,
        team_id: i32,
    ) -> Result<Vec<entity::team_application::Model>, AppError> {
        let team = self.find_team(team_id).await?;
        if team.owner_id != owner_id {
            return Err(AppError::Forbidden(
                "Not authorized to view applications for this team".to_string(),
            ));
        }

        Ok(TeamApplicationRepository::new(self.db)
            .list_by_team(team.id)
            .await?)
    }

    /// Applications to a team for public display. Callers expose only the public fields.
    pub async fn list_public_by_team(
        &self,
        team_id: i32,
    ) -> Result<Vec<entity::team_application::Model>, AppError> {
        let team = self.find_team(team_id).await?;

        Ok(TeamApplicationRepository::new(self.db)
            .list_by_team(team.id)
            .await?)
    }

    pub async fn list_by_driver(
        &self,
        driver_id: &str,
    ) -> Result<Vec<entity::team_application::Model>, AppError> {
        Ok(TeamApplicationRepository::new(self.db)
            .list_by_driver(driver_id)
            .await?)
    }

    pub async fn list_by_status(
        &self,
        status: ApplicationStatus,
    ) -> Result<Vec<entity::team_application::Model>, AppError> {
        Ok(TeamApplicationRepository::new(self.db)
            .list_by_status(status)
            .await?)
    }

    async fn find_team(&self, id: i32) -> Result<entity::team::Model, AppError> {
        TeamRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))
    }
}
