use crate::server::{
    data::{payment::PaymentRepository, reservation::ReservationRepository},
    error::AppError,
    service::payment::{gateway::fake::FakeGateway, PaymentService},
};
use entity::sea_orm_active_enums::{PaymentStatus, ReservationPaymentStatus, ReservationStatus};
use test_utils::{builder::TestBuilder, factory};

mod intent;
mod refund;
