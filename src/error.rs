use std::time::Duration;

use thiserror::Error;

/// Returned by a [`Continuation`](crate::Continuation) that was cancelled before it resumed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("continuation was cancelled before it resumed")]
pub struct Cancelled;

/// Failure of a [`Timeout`](crate::Timeout)
#[derive(Debug, PartialEq, Eq, Error)]
pub enum TimeoutError<E> {
    /// The deadline passed before the future finished
    #[error("deadline of {0:?} elapsed")]
    Elapsed(Duration),

    /// The scheduler refused to arm the deadline
    #[error("scheduler refused to arm the deadline")]
    Scheduler(E),
}
