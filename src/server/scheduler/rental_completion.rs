use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::rental_completion::RentalCompletionService};

/// Top of every hour.
const SCHEDULE: &str = "0 0 * * * *";

/// Starts the rental completion scheduler.
///
/// Every hour, confirmed reservations whose end date has passed get a rental completion
/// so the renter is prompted for the return form without opening it by hand.
///
/// # Arguments
/// - `db`: Database connection
pub async fn start_scheduler(db: DatabaseConnection) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(SCHEDULE, move |_uuid, _lock| {
        let db = db.clone();

        Box::pin(async move {
            if let Err(e) = open_completions(&db).await {
                tracing::error!("Error opening rental completions: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Rental completion scheduler started");

    Ok(scheduler)
}

async fn open_completions(db: &DatabaseConnection) -> Result<(), AppError> {
    let opened = RentalCompletionService::new(db)
        .open_for_ended_reservations(Utc::now().date_naive())
        .await?;

    if opened > 0 {
        tracing::info!("Opened {} rental completions for ended reservations", opened);
    }

    Ok(())
}
