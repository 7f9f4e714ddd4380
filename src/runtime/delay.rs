use std::time::Duration;

use crate::scheduler::Job;

use super::{DisposableHandle, SuspendedTask};

/// Timer capability required by a cooperative runtime
pub trait Delay {
    /// Failure reported when the timer could not be armed
    type Error;

    /// Resumes ``task`` once ``delay`` has elapsed.
    ///
    /// If ``task`` is cancelled before the delay elapses the pending resumption is
    /// cancelled as well, so it never fires into a dead task.
    fn schedule_resume_after<T>(&self, delay: Duration, task: T) -> Result<(), Self::Error>
    where
        T: SuspendedTask + Clone;

    /// Runs ``callback`` once ``delay`` has elapsed.
    ///
    /// Disposing the returned handle before the delay elapses keeps the callback
    /// from ever running. Disposing it afterwards does nothing.
    fn invoke_on_timeout(
        &self,
        delay: Duration,
        callback: Job,
    ) -> Result<Box<dyn DisposableHandle>, Self::Error>;
}
