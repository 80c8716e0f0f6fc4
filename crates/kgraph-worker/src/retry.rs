//! Bounded retry for calls to unreliable collaborators

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// How the delay grows between attempts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backoff {
    /// Same delay after every failure
    #[default]
    Fixed,
    /// Delay doubles after every failure: d, 2d, 4d, ...
    Exponential,
}

/// Retry policy: at most `max_attempts` calls, sleeping between failures
///
/// Every error is treated the same; there is no notion of a permanent fault.
/// No sleep follows the final attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    delay: Duration,
    backoff: Backoff,
}

/// The operation never succeeded
#[derive(Error, Debug)]
pub enum RetryError<E> {
    /// All attempts failed; `last` is the final fault
    #[error("gave up after {attempts} attempts: {last}")]
    Exhausted {
        /// Attempts made
        attempts: u32,
        /// Error from the last attempt
        last: E,
    },
}

impl<E> RetryError<E> {
    /// The error from the last attempt
    pub fn into_last(self) -> E {
        match self {
            RetryError::Exhausted { last, .. } => last,
        }
    }
}

impl RetryPolicy {
    /// Policy with an explicit backoff; `max_attempts` is raised to at least 1
    pub fn new(max_attempts: u32, delay: Duration, backoff: Backoff) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
            backoff,
        }
    }

    /// Fixed delay between attempts
    pub fn fixed(max_attempts: u32, delay: Duration) -> Self {
        Self::new(max_attempts, delay, Backoff::Fixed)
    }

    /// Doubling delay between attempts
    pub fn exponential(max_attempts: u32, initial_delay: Duration) -> Self {
        Self::new(max_attempts, initial_delay, Backoff::Exponential)
    }

    /// Maximum number of calls
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Delay slept after failed attempt number `attempt` (1-based)
    pub fn delay_after(&self, attempt: u32) -> Duration {
        match self.backoff {
            Backoff::Fixed => self.delay,
            Backoff::Exponential => {
                let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
                self.delay.saturating_mul(factor)
            }
        }
    }

    /// Call `op` until it succeeds or the attempts run out
    ///
    /// `op` receives the 1-based attempt number. The sleep between attempts
    /// blocks only the calling task.
    pub async fn run<T, E, F, Fut>(&self, mut op: F) -> Result<T, RetryError<E>>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        let mut attempt = 1;
        loop {
            match op(attempt).await {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!("Attempt {}/{} failed: {}", attempt, self.max_attempts, e);
                    if attempt >= self.max_attempts {
                        return Err(RetryError::Exhausted { attempts: attempt, last: e });
                    }
                    tokio::time::sleep(self.delay_after(attempt)).await;
                    attempt += 1;
                }
            }
        }
    }
}
