//! Background jobs run on cron schedules.

pub mod rental_completion;
