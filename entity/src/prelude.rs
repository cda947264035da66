pub use super::availability::Entity as Availability;
pub use super::conversation::Entity as Conversation;
pub use super::driver_profile::Entity as DriverProfile;
pub use super::favorite::Entity as Favorite;
pub use super::message::Entity as Message;
pub use super::payment::Entity as Payment;
pub use super::platform_settings::Entity as PlatformSettings;
pub use super::rental_completion::Entity as RentalCompletion;
pub use super::rental_review::Entity as RentalReview;
pub use super::reservation::Entity as Reservation;
pub use super::team::Entity as Team;
pub use super::team_application::Entity as TeamApplication;
pub use super::track::Entity as Track;
pub use super::user::Entity as User;
pub use super::vehicle::Entity as Vehicle;
pub use super::vehicle_image::Entity as VehicleImage;
pub use super::vehicle_vitals::Entity as VehicleVitals;
