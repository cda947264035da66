//! Structured values persisted in JSON columns.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

use crate::sea_orm_active_enums::{FuelLevel, VehicleCondition};

/// Ordered list of free-form strings (amenities, specialties, licenses, photo URLs).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct StringList(pub Vec<String>);

impl From<Vec<String>> for StringList {
    fn from(value: Vec<String>) -> Self {
        Self(value)
    }
}

/// Optional extra offered with a vehicle, priced in cents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOn {
    pub name: String,
    pub price: i64,
    pub description: Option<String>,
    #[serde(default)]
    pub is_required: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct AddOnList(pub Vec<AddOn>);

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct ContactInfo {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct SocialLinks {
    pub instagram: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub website: Option<String>,
}

/// Renter's attestation of the vehicle state at return.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct RenterReturnForm {
    pub return_date: NaiveDate,
    pub vehicle_condition: VehicleCondition,
    pub fuel_level: FuelLevel,
    pub mileage: i32,
    pub notes: Option<String>,
    pub photos: Vec<String>,
    pub submitted_at: DateTime<Utc>,
}

/// Owner's confirmation of the renter's return form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct OwnerReturnReview {
    pub vehicle_received: bool,
    pub condition_matches: bool,
    pub fuel_level_matches: bool,
    pub mileage_matches: bool,
    pub damage_reported: Option<String>,
    pub photos: Vec<String>,
    pub notes: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

/// Tire pressures in PSI.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct TirePressure {
    pub front_left: Option<f64>,
    pub front_right: Option<f64>,
    pub rear_left: Option<f64>,
    pub rear_right: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct ReviewResponse {
    pub text: String,
    pub responded_at: DateTime<Utc>,
}

/// Booking snapshot stored alongside a payment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct PaymentMetadata {
    pub vehicle_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_days: i32,
}
