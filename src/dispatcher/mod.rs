mod delay;
mod handle;
mod identity;

pub use handle::SubscriptionHandle;

use std::sync::Arc;

use log::{debug, trace};

use crate::{
    runtime::Dispatch,
    scheduler::{Job, Scheduler, Worker},
};

/// Dispatcher
///
/// Runs the tasks of a cooperative runtime on top of an external [`Scheduler`].
///
/// Every submission gets a freshly created worker which is dropped right after the
/// job was handed to it, so there is no ordering between separate submissions beyond
/// whatever the scheduler itself provides for independent workers.
///
/// The dispatcher holds nothing except a shared reference to the scheduler. Two
/// dispatchers compare equal and hash the same exactly when they wrap the same
/// scheduler instance.
pub struct Dispatcher<S> {
    scheduler: Arc<S>,
}

/// Wraps ``scheduler`` into a [`Dispatcher`]
///
/// # Example
///
/// ```rust
/// use sched_bridge::{wrap, Job, Scheduler, Subscription, Worker};
/// use std::{convert::Infallible, sync::{mpsc, Arc}, time::Duration};
///
/// struct Inline;
/// struct InlineWorker;
/// struct Done;
///
/// impl Subscription for Done {
///     fn cancel(&self) {}
/// }
///
/// impl Worker for InlineWorker {
///     type Error = Infallible;
///     type Subscription = Done;
///
///     fn schedule(&self, job: Job) -> Result<Done, Infallible> {
///         job();
///         Ok(Done)
///     }
///
///     fn schedule_after(&self, job: Job, delay: Duration) -> Result<Done, Infallible> {
///         std::thread::sleep(delay);
///         job();
///         Ok(Done)
///     }
/// }
///
/// impl Scheduler for Inline {
///     type Error = Infallible;
///     type Worker = InlineWorker;
///
///     fn create_worker(&self) -> Result<InlineWorker, Infallible> {
///         Ok(InlineWorker)
///     }
/// }
///
/// let scheduler = Arc::new(Inline);
/// let dispatcher = wrap(scheduler.clone());
/// assert_eq!(dispatcher, wrap(scheduler));
///
/// let (sender, receiver) = mpsc::channel();
/// dispatcher.submit(move || sender.send(7).unwrap()).unwrap();
/// assert_eq!(receiver.recv().unwrap(), 7);
/// ```
pub fn wrap<S: Scheduler>(scheduler: Arc<S>) -> Dispatcher<S> {
    Dispatcher::new(scheduler)
}

impl<S> Dispatcher<S> {
    /// Creates a dispatcher backed by ``scheduler``
    pub fn new(scheduler: Arc<S>) -> Self {
        Self { scheduler }
    }

    /// The wrapped scheduler
    pub fn scheduler(&self) -> &Arc<S> {
        &self.scheduler
    }
}

impl<S: Scheduler> Dispatcher<S> {
    /// Submits ``task`` for immediate execution on a new worker.
    ///
    /// Returns as soon as the task was handed off. Whatever the scheduler reports when
    /// it cannot take the task is returned as is.
    pub fn submit<F>(&self, task: F) -> Result<(), S::Error>
    where
        F: FnOnce() + Send + 'static,
    {
        self.dispatch(Box::new(task))
    }

    pub(crate) fn create_worker(&self) -> Result<S::Worker, S::Error> {
        trace!("creating worker");
        self.scheduler
            .create_worker()
            .inspect_err(|_| debug!("scheduler refused to create a worker"))
    }
}

impl<S> Clone for Dispatcher<S> {
    fn clone(&self) -> Self {
        Self {
            scheduler: self.scheduler.clone(),
        }
    }
}

impl<S: Scheduler> Dispatch for Dispatcher<S> {
    type Error = S::Error;

    fn dispatch(&self, task: Job) -> Result<(), Self::Error> {
        // the subscription is dropped, nothing ever cancels a dispatched task
        self.create_worker()?
            .schedule(task)
            .inspect_err(|_| debug!("scheduler rejected a dispatched task"))?;
        trace!("task dispatched");
        Ok(())
    }
}
