mod signal;

use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
    time::Duration,
};

use crate::{
    error::TimeoutError,
    runtime::{Delay, DisposableHandle},
    scheduler::Scheduler,
    Dispatcher,
};

use self::signal::Signal;

impl<S: Scheduler> Dispatcher<S> {
    /// Runs ``future`` against a deadline of ``duration``.
    ///
    /// The deadline is a callback registered through
    /// [`invoke_on_timeout`](crate::Delay::invoke_on_timeout). When ``future`` finishes
    /// first, or the returned [`Timeout`] is dropped, the callback's handle is disposed.
    pub fn timeout<F: Future>(&self, duration: Duration, future: F) -> Timeout<S, F> {
        Timeout {
            dispatcher: self.clone(),
            duration,
            future: Box::pin(future),
            deadline: None,
        }
    }
}

struct Deadline {
    signal: Arc<Signal>,
    handle: Box<dyn DisposableHandle>,
}

/// Future returned by [`Dispatcher::timeout`]
#[must_use = "futures do nothing unless you `.await` or poll them"]
pub struct Timeout<S: Scheduler, F> {
    dispatcher: Dispatcher<S>,
    duration: Duration,
    future: Pin<Box<F>>,
    deadline: Option<Deadline>,
}

impl<S: Scheduler, F> Timeout<S, F> {
    fn arm(&mut self) -> Result<(), S::Error> {
        if self.deadline.is_some() {
            return Ok(());
        }
        let signal = Arc::new(Signal::default());
        let fired = signal.clone();
        let handle = self
            .dispatcher
            .invoke_on_timeout(self.duration, Box::new(move || fired.fire()))?;
        self.deadline = Some(Deadline { signal, handle });
        Ok(())
    }

    fn disarm(&mut self) {
        if let Some(deadline) = self.deadline.take() {
            deadline.handle.dispose();
        }
    }
}

impl<S: Scheduler, F: Future> Future for Timeout<S, F> {
    type Output = Result<F::Output, TimeoutError<S::Error>>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        this.arm().map_err(TimeoutError::Scheduler)?;

        if let Poll::Ready(output) = this.future.as_mut().poll(cx) {
            this.disarm();
            return Poll::Ready(Ok(output));
        }

        let elapsed = this.deadline.as_ref().is_some_and(|deadline| {
            deadline.signal.register(cx.waker());
            deadline.signal.has_fired()
        });
        if elapsed {
            this.deadline = None;
            return Poll::Ready(Err(TimeoutError::Elapsed(this.duration)));
        }
        Poll::Pending
    }
}

impl<S: Scheduler, F> Drop for Timeout<S, F> {
    fn drop(&mut self) {
        self.disarm();
    }
}
