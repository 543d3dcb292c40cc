//! Cron jobs for automated background tasks.

pub mod cart_abandonment;
