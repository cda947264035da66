use crate::{
    model::{
        rental_completion::{OwnerReviewDto, RenterReturnDto},
        review::SubmitReviewDto,
    },
    server::{
        data::{reservation::ReservationRepository, user::UserRepository},
        error::AppError,
        service::rental_completion::RentalCompletionService,
    },
};
use chrono::NaiveDate;
use entity::sea_orm_active_enums::{
    CompletionStatus, FuelLevel, ReservationStatus, ReviewType, VehicleCondition,
};
use test_utils::{builder::TestBuilder, factory};

mod submit_review;
mod workflow;

fn renter_return() -> RenterReturnDto {
    RenterReturnDto {
        return_date: NaiveDate::from_ymd_opt(2030, 6, 3).unwrap(),
        vehicle_condition: VehicleCondition::Good,
        fuel_level: FuelLevel::Half,
        mileage: 12_450,
        notes: None,
        photos: Vec::new(),
    }
}

fn owner_review() -> OwnerReviewDto {
    OwnerReviewDto {
        vehicle_received: true,
        condition_matches: true,
        fuel_level_matches: true,
        mileage_matches: true,
        damage_reported: None,
        photos: Vec::new(),
        notes: None,
        completion_notes: Some("Clean return".to_string()),
    }
}

fn review(rating: i32) -> SubmitReviewDto {
    SubmitReviewDto {
        rating,
        communication: Some(rating),
        vehicle_condition: None,
        professionalism: None,
        overall_experience: None,
        title: "Track day".to_string(),
        content: "Great weekend".to_string(),
        photos: Vec::new(),
    }
}
