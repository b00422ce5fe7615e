use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;
use futures_timer::Delay;
use serde::Serialize;

use super::controller::{FormController, FormResult, SubmitAttempt, SubmitOutcome};
use super::validation::ValidationError;

/// Acknowledgment returned by a successful submission effect.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SubmissionReceipt {
    payload: String,
}

impl SubmissionReceipt {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }

    /// The serialized values that were submitted.
    pub fn payload(&self) -> &str {
        &self.payload
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("failed to serialize form values: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("submission rejected: {0}")]
    Rejected(String),
}

/// The external action run for a valid submit.
///
/// Implementations receive their own copy of the values so the returned
/// future can outlive the form borrow.
pub trait SubmissionEffect<T>: 'static {
    fn submit(&self, values: T) -> BoxFuture<'static, Result<SubmissionReceipt, SubmitError>>;
}

impl<T, F> SubmissionEffect<T> for F
where
    F: Fn(T) -> BoxFuture<'static, Result<SubmissionReceipt, SubmitError>> + 'static,
{
    fn submit(&self, values: T) -> BoxFuture<'static, Result<SubmissionReceipt, SubmitError>> {
        (self)(values)
    }
}

/// Waits a fixed delay, then acknowledges with the values as pretty JSON.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DelayedEcho {
    delay: Duration,
}

impl DelayedEcho {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(400);

    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for DelayedEcho {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

impl<T> SubmissionEffect<T> for DelayedEcho
where
    T: Serialize + Send + 'static,
{
    fn submit(&self, values: T) -> BoxFuture<'static, Result<SubmissionReceipt, SubmitError>> {
        let delay = self.delay;
        async move {
            if !delay.is_zero() {
                Delay::new(delay).await;
            }
            let payload = serde_json::to_string_pretty(&values)?;
            Ok(SubmissionReceipt::new(payload))
        }
        .boxed()
    }
}

impl<T, E> FormController<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: ValidationError,
{
    /// Runs a whole submit: validation, the effect, and the return to idle.
    ///
    /// Returns `None` when validation rejected the attempt.
    pub async fn submit_async<S>(&mut self, effect: &S) -> FormResult<Option<SubmitOutcome>>
    where
        S: SubmissionEffect<T>,
    {
        let values = match self.begin_submit()? {
            SubmitAttempt::Rejected { .. } => return Ok(None),
            SubmitAttempt::Accepted(values) => values,
        };
        let result = effect.submit(values).await;
        Ok(Some(self.finish_submit(result)?.clone()))
    }
}
