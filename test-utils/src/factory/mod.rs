//! Factories that insert test rows with sensible defaults.
//!
//! Each module exposes a `*Factory` builder for customised rows and a `create_*`
//! shortcut for the defaults. Unique values (external ids, names) come from a shared
//! counter so factories can be called repeatedly in one test.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let owner = factory::user::create_user(db).await?;
//! let track = factory::track::create_track(db).await?;
//! let vehicle = factory::vehicle::VehicleFactory::new(db, &owner.external_id, track.id)
//!     .daily_rate(45_000)
//!     .build()
//!     .await?;
//! ```
//!
//! `helpers` bundles the common dependency chains (owner + track + vehicle, a confirmed
//! reservation with its parties, and so on).

pub mod availability;
pub mod conversation;
pub mod driver_profile;
pub mod helpers;
pub mod message;
pub mod payment;
pub mod rental_completion;
pub mod reservation;
pub mod team;
pub mod track;
pub mod user;
pub mod vehicle;

pub use conversation::create_conversation;
pub use reservation::create_reservation;
pub use track::create_track;
pub use user::create_user;
pub use vehicle::create_vehicle;
