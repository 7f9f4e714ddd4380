mod subscription;
mod worker;

pub use subscription::Subscription;
pub use worker::Worker;

/// A unit of work handed to a [`Worker`]
pub type Job = Box<dyn FnOnce() + Send + 'static>;

/// An external scheduler that hands out sequential execution contexts.
///
/// This crate never implements a scheduler of its own, it only drives one.
/// Any failure the scheduler reports through ``Error`` reaches the caller of the
/// [`Dispatcher`](crate::Dispatcher) unchanged.
pub trait Scheduler: Send + Sync {
    /// Failure raised when the scheduler cannot accept work, e.g. after shutdown
    type Error;

    /// The execution context created for each submission
    type Worker: Worker<Error = Self::Error>;

    /// Creates a fresh worker
    fn create_worker(&self) -> Result<Self::Worker, Self::Error>;
}
