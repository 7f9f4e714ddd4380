//! An adapter that runs a cooperative runtime's tasks, delays and timeouts on top of an
//! arbitrary external work scheduler.
//!
//! The scheduler only has to be able to create a sequential execution context (a
//! [`Worker`]) and accept a job on it, right away or after a delay, handing back a
//! cancellation token (a [`Subscription`]). [`wrap`] turns such a [`Scheduler`] into a
//! [`Dispatcher`] implementing the two capabilities a cooperative runtime needs:
//!
//! * [`Dispatch`] submits a task for execution. See [`Dispatcher::submit`]
//! * [`Delay`] resumes a suspended task after a delay, or runs a callback after a delay
//!   and returns a [`DisposableHandle`] to call it off
//!
//! # Usage
//!
//! * ``wrap`` for the creation of a dispatcher out of any scheduler. See [`wrap`](self::wrap)
//! for more information
//!
//! * ``Dispatcher::sleep`` for suspending the current task for some time on the scheduler.
//! See [`Dispatcher::sleep`](self::Dispatcher::sleep) for more information
//!
//! * ``Dispatcher::timeout`` for racing a future against a deadline armed on the scheduler.
//! See [`Dispatcher::timeout`](self::Dispatcher::timeout) for more information
//!
//! * ``block_on`` polls future to finish. See [`block_on`](self::block_on)
//! for more information
//!
//! # Workers
//!
//! Every call creates a fresh worker and drops it right after submitting. Separate calls
//! therefore never share an execution context and no ordering between them is implied.
//!
//! # Cancellation
//!
//! [`Delay::schedule_resume_after`] registers the scheduler's subscription as a cancellation
//! handler of the suspended task. Cancelling the task before the delay elapses cancels the
//! pending job, and a resume that loses the race against cancellation is ignored by the
//! task, so a resumption never reaches a task that already finished.
//!
//! # Errors
//!
//! The dispatcher adds no error kinds of its own. Whatever the scheduler returns when it
//! refuses to create a worker or accept a job is handed back unchanged.
//!
//! # Identity
//!
//! Dispatchers wrapping the same scheduler instance compare equal and hash the same, no
//! matter how many times the scheduler was wrapped.

mod continuation;
mod dispatcher;
mod error;
mod executors;
mod runtime;
mod scheduler;
mod sleeper;
mod timeout;

pub use continuation::{Continuation, ContinuationHandle};
pub use dispatcher::{wrap, Dispatcher, SubscriptionHandle};
pub use error::{Cancelled, TimeoutError};
pub use executors::block_on;
pub use runtime::{Delay, Dispatch, DisposableHandle, SuspendedTask};
pub use scheduler::{Job, Scheduler, Subscription, Worker};
pub use sleeper::Sleep;
pub use timeout::Timeout;
