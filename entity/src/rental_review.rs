use sea_orm::entity::prelude::*;

use crate::{
    json::{ReviewResponse, StringList},
    sea_orm_active_enums::ReviewType,
};

/// Review left by one party of a completed rental about the other.
///
/// `rating` and the optional category scores are whole stars from 1 to 5.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "rental_review")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub rental_completion_id: i32,
    pub reservation_id: i32,
    pub vehicle_id: i32,
    pub reviewer_id: String,
    pub reviewed_id: String,
    pub review_type: ReviewType,
    pub rating: i32,
    pub communication: Option<i32>,
    pub vehicle_condition: Option<i32>,
    pub professionalism: Option<i32>,
    pub overall_experience: Option<i32>,
    pub title: String,
    pub content: String,
    pub photos: StringList,
    pub response: Option<ReviewResponse>,
    pub is_public: bool,
    pub is_moderated: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::rental_completion::Entity",
        from = "Column::RentalCompletionId",
        to = "super::rental_completion::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    RentalCompletion,
}

impl Related<super::rental_completion::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RentalCompletion.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
