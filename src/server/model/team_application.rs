use entity::sea_orm_active_enums::ApplicationStatus;

use crate::model::team_application::{PublicTeamApplicationDto, TeamApplicationDto};

/// Who is asking to change an application's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationActor {
    Driver,
    TeamOwner,
}

/// Whether `actor` may move a pending application to `to`.
///
/// Drivers only withdraw; team owners only accept or decline.
pub fn may_set_status(actor: ApplicationActor, to: ApplicationStatus) -> bool {
    matches!(
        (actor, to),
        (ApplicationActor::Driver, ApplicationStatus::Withdrawn)
            | (ApplicationActor::TeamOwner, ApplicationStatus::Accepted)
            | (ApplicationActor::TeamOwner, ApplicationStatus::Declined)
    )
}

impl From<entity::team_application::Model> for TeamApplicationDto {
    fn from(a: entity::team_application::Model) -> Self {
        Self {
            id: a.id,
            team_id: a.team_id,
            driver_id: a.driver_id,
            status: a.status,
            message: a.message,
            driver_experience: a.driver_experience,
            preferred_dates: a.preferred_dates.0,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}

impl From<entity::team_application::Model> for PublicTeamApplicationDto {
    fn from(a: entity::team_application::Model) -> Self {
        Self {
            id: a.id,
            status: a.status,
            message: a.message,
            created_at: a.created_at,
        }
    }
}
