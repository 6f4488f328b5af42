//! Connection establishment with bounded retries.

use crate::config::RetryPolicy;
use crate::error::SeederError;
use crate::store::StoreConnector;

/// Connect with retries.
///
/// Makes up to `policy.max_attempts` attempts, sleeping `policy.delay`
/// between them. This covers the window where the database container is
/// still starting up. When every attempt fails the last error is returned
/// inside [`SeederError::ConnectRetriesExhausted`].
pub async fn connect_with_retries<C: StoreConnector>(
    connector: &C,
    policy: &RetryPolicy,
) -> Result<C::Store, SeederError> {
    let target = connector.target();
    tracing::info!("Connecting to database at {}", target);

    let mut last_error = None;

    for attempt in 1..=policy.max_attempts {
        match connector.connect().await {
            Ok(store) => {
                if attempt > 1 {
                    tracing::info!(
                        "Successfully connected to {} after {} attempts",
                        target,
                        attempt
                    );
                }
                return Ok(store);
            }
            Err(e) => {
                if attempt < policy.max_attempts {
                    tracing::warn!(
                        "Database at '{}' not ready (attempt {}/{}): {}. Retrying in {:?}...",
                        target,
                        attempt,
                        policy.max_attempts,
                        e,
                        policy.delay
                    );
                    tokio::time::sleep(policy.delay).await;
                }
                last_error = Some(e);
            }
        }
    }

    // All retries exhausted
    match last_error {
        Some(source) => {
            tracing::error!(
                "Could not connect to {} after {} attempts",
                target,
                policy.max_attempts
            );
            Err(SeederError::ConnectRetriesExhausted {
                target,
                attempts: policy.max_attempts,
                source: Box::new(source),
            })
        }
        None => Err(SeederError::Config(
            "at least one connection attempt is required".to_string(),
        )),
    }
}
