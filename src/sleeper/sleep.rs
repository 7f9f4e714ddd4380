use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
    time::Duration,
};

use crate::{continuation::Continuation, runtime::Delay, scheduler::Scheduler, Dispatcher};

/// Future returned by [`Dispatcher::sleep`]
#[must_use = "futures do nothing unless you `.await` or poll them"]
pub struct Sleep<S: Scheduler> {
    dispatcher: Dispatcher<S>,
    duration: Duration,
    continuation: Option<Continuation<()>>,
}

impl<S: Scheduler> Sleep<S> {
    pub(crate) fn new(dispatcher: Dispatcher<S>, duration: Duration) -> Self {
        Sleep {
            dispatcher,
            duration,
            continuation: None,
        }
    }

    /// The requested sleep duration
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl<S: Scheduler> Future for Sleep<S> {
    type Output = Result<(), S::Error>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        // armed on first poll, so an unpolled sleep never touches the scheduler
        let mut continuation = match this.continuation.take() {
            Some(continuation) => continuation,
            None => {
                let continuation = Continuation::new();
                this.dispatcher
                    .schedule_resume_after(this.duration, continuation.handle())?;
                continuation
            }
        };
        let poll = Pin::new(&mut continuation).poll(cx);
        this.continuation = Some(continuation);
        // only our own drop cancels the continuation
        poll.map(|_| Ok(()))
    }
}

impl<S: Scheduler> Drop for Sleep<S> {
    fn drop(&mut self) {
        if let Some(continuation) = &self.continuation {
            continuation.cancel();
        }
    }
}
