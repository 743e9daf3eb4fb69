//! Deployment-level schema switches applied at startup.

use sqlx::PgPool;

/// Name of the optional unique index on `shorten.url`.
pub const URL_UNIQUE_INDEX: &str = "shorten_url_key";

/// Creates or drops the unique index on `shorten.url`.
///
/// With the index in place, creating a second link for an already shortened
/// URL fails with a constraint violation. Without it, the same URL may be
/// shortened any number of times, each under its own code.
///
/// # Errors
///
/// Returns the driver error if the DDL fails, e.g. when enabling uniqueness
/// on a table that already holds duplicate URLs.
pub async fn configure_url_uniqueness(pool: &PgPool, enforce: bool) -> Result<(), sqlx::Error> {
    let statement = if enforce {
        format!("CREATE UNIQUE INDEX IF NOT EXISTS {URL_UNIQUE_INDEX} ON shorten (url)")
    } else {
        format!("DROP INDEX IF EXISTS {URL_UNIQUE_INDEX}")
    };

    sqlx::query(&statement).execute(pool).await?;

    tracing::info!(enforce, "Original URL uniqueness configured");
    Ok(())
}
