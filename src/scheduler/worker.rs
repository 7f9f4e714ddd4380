use std::time::Duration;

use super::{Job, Subscription};

/// A sequential execution context created by a [`Scheduler`](super::Scheduler)
pub trait Worker {
    /// Failure raised when the job cannot be accepted
    type Error;

    /// Token returned for every accepted job
    type Subscription: Subscription;

    /// Submits ``job`` for immediate execution
    fn schedule(&self, job: Job) -> Result<Self::Subscription, Self::Error>;

    /// Submits ``job`` to run once ``delay`` has elapsed
    fn schedule_after(&self, job: Job, delay: Duration) -> Result<Self::Subscription, Self::Error>;
}
