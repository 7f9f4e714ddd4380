mod state;

use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};

use crate::{error::Cancelled, runtime::SuspendedTask};

use self::state::Slot;

/// Continuation
///
/// A one-shot slot a task suspends on until someone either resumes it with a value or
/// cancels it. Exactly one of the two wins; whichever comes second is ignored.
///
/// The continuation itself is the only thing that can be awaited, and it yields the value
/// or [`Cancelled`]. Resuming and cancelling go through [`ContinuationHandle`]s, which can
/// be cloned and handed to whoever is supposed to wake the task.
///
/// # Example
///
/// ```rust
/// use sched_bridge::{block_on, Cancelled, Continuation};
///
/// let continuation = Continuation::new();
/// let handle = continuation.handle();
/// assert!(handle.resume(3));
/// assert!(!handle.cancel());
/// assert_eq!(block_on(continuation), Ok(3));
///
/// let continuation = Continuation::<u8>::new();
/// let handle = continuation.handle();
/// assert!(continuation.cancel());
/// assert!(!handle.resume(3));
/// assert_eq!(block_on(continuation), Err(Cancelled));
/// ```
pub struct Continuation<T> {
    slot: Arc<Slot<T>>,
}

impl<T> Continuation<T> {
    /// Creates a suspended continuation
    pub fn new() -> Self {
        Self {
            slot: Arc::new(Slot::new()),
        }
    }

    /// A handle that resumes or cancels this continuation
    pub fn handle(&self) -> ContinuationHandle<T> {
        ContinuationHandle {
            slot: self.slot.clone(),
        }
    }

    /// Cancels the continuation and runs its cancellation handlers.
    ///
    /// Returns ``false`` if it was already resumed or cancelled.
    pub fn cancel(&self) -> bool {
        self.slot.cancel()
    }

    /// Whether the continuation is still waiting
    pub fn is_suspended(&self) -> bool {
        self.slot.is_suspended()
    }
}

impl<T> Default for Continuation<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Future for Continuation<T> {
    type Output = Result<T, Cancelled>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.slot.poll(cx)
    }
}

/// Resumes or cancels a [`Continuation`] from anywhere
pub struct ContinuationHandle<T> {
    slot: Arc<Slot<T>>,
}

impl<T> ContinuationHandle<T> {
    /// Resumes with ``value``.
    ///
    /// Returns ``false`` and drops ``value`` if the continuation was already resumed
    /// or cancelled.
    pub fn resume(&self, value: T) -> bool {
        self.slot.resume(value)
    }

    /// Cancels the continuation and runs its cancellation handlers.
    ///
    /// Returns ``false`` if it was already resumed or cancelled.
    pub fn cancel(&self) -> bool {
        self.slot.cancel()
    }

    /// Registers ``handler`` to run if the continuation gets cancelled.
    ///
    /// Runs it right away when the continuation is already cancelled and drops it when
    /// the continuation already resumed.
    pub fn invoke_on_cancellation<F>(&self, handler: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.slot.register(Box::new(handler));
    }

    /// Whether the continuation is still waiting
    pub fn is_suspended(&self) -> bool {
        self.slot.is_suspended()
    }

    /// Whether the continuation ended up cancelled
    pub fn is_cancelled(&self) -> bool {
        self.slot.is_cancelled()
    }
}

impl<T> Clone for ContinuationHandle<T> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

impl SuspendedTask for ContinuationHandle<()> {
    fn resume_undispatched(&self) {
        self.resume(());
    }

    fn on_cancellation(&self, callback: Box<dyn FnOnce() + Send>) {
        self.slot.register(callback);
    }
}
