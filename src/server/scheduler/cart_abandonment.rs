//! Abandoned-cart sweeper.
//!
//! The cart service itself never sets the `abandoned` status; this background
//! job is the only writer. Abandoning a cart releases its owner key, so the
//! owner's next cart access starts a fresh active cart.

use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{data::cart::CartRepository, error::AppError};

/// Starts the abandoned-cart scheduler.
///
/// Runs hourly and marks active carts untouched for longer than
/// `abandon_after_days` as abandoned.
///
/// # Arguments
/// - `db` - Database connection
/// - `abandon_after_days` - Age at which an untouched active cart is swept
pub async fn start_scheduler(
    db: DatabaseConnection,
    abandon_after_days: i64,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();

    let job = Job::new_async("0 0 * * * *", move |_uuid, _lock| {
        let db = job_db.clone();

        Box::pin(async move {
            if let Err(e) = sweep_abandoned_carts(&db, abandon_after_days).await {
                tracing::error!("Error sweeping abandoned carts: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Cart abandonment scheduler started");

    Ok(())
}

/// Marks active carts untouched since the cutoff as abandoned.
pub async fn sweep_abandoned_carts(
    db: &DatabaseConnection,
    abandon_after_days: i64,
) -> Result<u64, AppError> {
    let cutoff = Utc::now() - Duration::days(abandon_after_days);

    let swept = CartRepository::new(db).abandon_older_than(cutoff).await?;

    if swept > 0 {
        tracing::info!("Marked {} carts abandoned", swept);
    }

    Ok(swept)
}
