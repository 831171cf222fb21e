//! Caller-level retry for transient failures.
//!
//! Nothing in this crate retries on its own; wrap a call in
//! [`retry_transient`] when re-sending the same input is acceptable.

use std::{fmt::Display, future::Future};

use ::retry::delay::Exponential;
use tracing::warn;

use crate::{
    constants::{RETRY_ATTEMPTS, RETRY_BASE_MILLIS, RETRY_FACTOR},
    error::{Error, LedgerError, PublishError},
    setup::SetupError,
};

pub trait Transient {
    fn is_transient(&self) -> bool;
}

impl Transient for Error {
    fn is_transient(&self) -> bool {
        Error::is_transient(self)
    }
}

impl Transient for PublishError {
    fn is_transient(&self) -> bool {
        PublishError::is_transient(self)
    }
}

impl Transient for LedgerError {
    fn is_transient(&self) -> bool {
        LedgerError::is_transient(self)
    }
}

impl Transient for SetupError {
    fn is_transient(&self) -> bool {
        SetupError::is_transient(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    pub base_millis: u64,
    pub factor: f64,
    /// Retries after the first attempt.
    pub max_retries: usize,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            base_millis: RETRY_BASE_MILLIS,
            factor: RETRY_FACTOR,
            max_retries: RETRY_ATTEMPTS,
        }
    }
}

/// Runs `op` until it succeeds, fails permanently, or the policy runs out.
pub async fn retry_transient<T, E, F, Fut>(policy: RetryPolicy, mut op: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Transient + Display,
{
    let mut delays = Exponential::from_millis_with_factor(policy.base_millis, policy.factor)
        .take(policy.max_retries);
    let mut attempt = 1;

    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) if err.is_transient() => match delays.next() {
                Some(delay) => {
                    warn!(attempt, ?delay, "transient failure, retrying: {err}");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                None => return Err(err),
            },
            Err(err) => return Err(err),
        }
    }
}
