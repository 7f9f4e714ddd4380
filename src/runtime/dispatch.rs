use crate::scheduler::Job;

/// Task dispatch capability required by a cooperative runtime
pub trait Dispatch {
    /// Failure reported when the task could not be handed off
    type Error;

    /// Hands ``task`` off for execution without waiting for it to run.
    ///
    /// The task may run on any thread.
    fn dispatch(&self, task: Job) -> Result<(), Self::Error>;
}
