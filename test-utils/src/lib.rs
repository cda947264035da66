//! Trackside Test Utils
//!
//! Shared helpers for the marketplace's database-backed tests. Every test gets its own
//! in-memory SQLite database with only the tables it asks for, plus factories that
//! insert rows with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: picks the tables a test needs
//! - **TestContext**: owns the in-memory connection and an optional session
//! - **TestError**: failures while setting the environment up
//! - **factory**: one module per entity with a builder and `create_*` shortcuts
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn books_a_vehicle() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (owner, _track, vehicle) = factory::helpers::create_vehicle_with_dependencies(db).await?;
//!     // ...
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
