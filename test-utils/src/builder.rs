use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Collects the tables a test needs and builds a [`TestContext`] around them.
///
/// Tables are created from the SeaORM entities with SQLite syntax, in the order they were
/// added, so referenced tables must be added before the tables that point at them. The
/// `with_*_tables` helpers already respect that order.
///
/// # Example
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Track)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed by `build()`, in insertion order.
    tables: Vec<TableCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds the table for a single entity.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to generate the table from
    ///
    /// # Returns
    /// - `Self` - Builder for chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds users, tracks, vehicles and vehicle images.
    ///
    /// Enough for listing, favorites and image tests.
    pub fn with_vehicle_tables(self) -> Self {
        self.with_table(User)
            .with_table(Track)
            .with_table(Vehicle)
            .with_table(VehicleImage)
            .with_table(Favorite)
    }

    /// Adds everything needed to book a vehicle: the vehicle tables plus availability,
    /// reservations and payments.
    pub fn with_booking_tables(self) -> Self {
        self.with_vehicle_tables()
            .with_table(Availability)
            .with_table(Reservation)
            .with_table(Payment)
            .with_table(PlatformSettings)
    }

    /// Adds the booking tables plus the rental completion workflow tables.
    pub fn with_completion_tables(self) -> Self {
        self.with_booking_tables()
            .with_table(RentalCompletion)
            .with_table(VehicleVitals)
            .with_table(RentalReview)
    }

    /// Adds the vehicle tables plus conversations and messages.
    pub fn with_messaging_tables(self) -> Self {
        self.with_vehicle_tables()
            .with_table(Conversation)
            .with_table(Message)
    }

    /// Adds users, teams, driver profiles and team applications.
    pub fn with_motorsports_tables(self) -> Self {
        self.with_table(User)
            .with_table(Team)
            .with_table(DriverProfile)
            .with_table(TeamApplication)
    }

    /// Connects to a fresh in-memory database and creates the configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with every table created
    /// - `Err(TestError::Database)` - Connection or table creation failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();

        context.with_tables(self.tables).await?;

        Ok(context)
    }
}
