mod sleep;

use std::time::Duration;

pub use self::sleep::Sleep;

use crate::{scheduler::Scheduler, Dispatcher};

impl<S: Scheduler> Dispatcher<S> {
    /// Sleeps for the specified amount of time on the wrapped scheduler.
    ///
    /// The returned future suspends on a [`Continuation`](crate::Continuation) that the
    /// scheduler resumes once ``duration`` has elapsed. Dropping the future early cancels
    /// the pending scheduler job.
    ///
    /// This function might sleep for slightly longer than the specified duration but never less.
    ///
    /// Example
    ///
    /// ```rust
    /// use sched_bridge::{block_on, wrap, Job, Scheduler, Subscription, Worker};
    /// use std::{convert::Infallible, sync::Arc, thread, time::{Duration, Instant}};
    ///
    /// struct Threads;
    /// struct Detached;
    ///
    /// impl Subscription for Detached {
    ///     fn cancel(&self) {}
    /// }
    ///
    /// impl Worker for Threads {
    ///     type Error = Infallible;
    ///     type Subscription = Detached;
    ///
    ///     fn schedule(&self, job: Job) -> Result<Detached, Infallible> {
    ///         thread::spawn(job);
    ///         Ok(Detached)
    ///     }
    ///
    ///     fn schedule_after(&self, job: Job, delay: Duration) -> Result<Detached, Infallible> {
    ///         thread::spawn(move || {
    ///             thread::sleep(delay);
    ///             job()
    ///         });
    ///         Ok(Detached)
    ///     }
    /// }
    ///
    /// impl Scheduler for Threads {
    ///     type Error = Infallible;
    ///     type Worker = Threads;
    ///
    ///     fn create_worker(&self) -> Result<Threads, Infallible> {
    ///         Ok(Threads)
    ///     }
    /// }
    ///
    /// let dispatcher = wrap(Arc::new(Threads));
    /// let start = Instant::now();
    /// block_on(dispatcher.sleep(Duration::from_millis(20))).unwrap();
    /// assert!(start.elapsed() >= Duration::from_millis(20));
    /// ```
    pub fn sleep(&self, duration: Duration) -> Sleep<S> {
        Sleep::new(self.clone(), duration)
    }
}
