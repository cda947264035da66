use crate::{
    model::review::SubmitReviewDto,
    server::{data::review::ReviewRepository, model::review::ReviewRole},
};
use entity::sea_orm_active_enums::{CompletionStatus, ReservationStatus, ReviewType};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod list_public_for_user;
mod page_for_vehicle;

fn review(rating: i32) -> SubmitReviewDto {
    SubmitReviewDto {
        rating,
        communication: Some(rating),
        vehicle_condition: None,
        professionalism: None,
        overall_experience: None,
        title: "Great day at the track".to_string(),
        content: "Car was prepared perfectly.".to_string(),
        photos: Vec::new(),
    }
}
