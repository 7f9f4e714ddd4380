use std::task::{Context, Poll, Waker};

use log::trace;
use parking_lot::Mutex;

use crate::error::Cancelled;

pub(crate) type CancelHandler = Box<dyn FnOnce() + Send>;

enum State<T> {
    Suspended {
        waker: Option<Waker>,
        handlers: Vec<CancelHandler>,
    },
    Resumed(T),
    Cancelled,
    // value already handed to the awaiting task
    Completed,
}

/// State shared by a continuation and its handles
pub(crate) struct Slot<T> {
    state: Mutex<State<T>>,
}

impl<T> Slot<T> {
    pub(crate) fn new() -> Self {
        Slot {
            state: Mutex::new(State::Suspended {
                waker: None,
                handlers: Vec::new(),
            }),
        }
    }

    pub(crate) fn resume(&self, value: T) -> bool {
        let waker = {
            let mut state = self.state.lock();
            let State::Suspended { waker, .. } = &mut *state else {
                trace!("continuation already finished, dropping resume");
                return false;
            };
            let waker = waker.take();
            *state = State::Resumed(value);
            waker
        };
        if let Some(waker) = waker {
            waker.wake();
        }
        true
    }

    pub(crate) fn cancel(&self) -> bool {
        let (waker, handlers) = {
            let mut state = self.state.lock();
            let State::Suspended { waker, handlers } = &mut *state else {
                return false;
            };
            let taken = (waker.take(), std::mem::take(handlers));
            *state = State::Cancelled;
            taken
        };
        trace!("continuation cancelled, running {} handler(s)", handlers.len());
        handlers.into_iter().for_each(|handler| handler());
        if let Some(waker) = waker {
            waker.wake();
        }
        true
    }

    pub(crate) fn register(&self, handler: CancelHandler) {
        let mut state = self.state.lock();
        if let State::Suspended { handlers, .. } = &mut *state {
            handlers.push(handler);
            return;
        }
        let cancelled = matches!(*state, State::Cancelled);
        drop(state);
        if cancelled {
            handler();
        }
    }

    pub(crate) fn is_suspended(&self) -> bool {
        matches!(*self.state.lock(), State::Suspended { .. })
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        matches!(*self.state.lock(), State::Cancelled)
    }

    pub(crate) fn poll(&self, cx: &mut Context<'_>) -> Poll<Result<T, Cancelled>> {
        let mut state = self.state.lock();
        match std::mem::replace(&mut *state, State::Completed) {
            State::Suspended { waker, handlers } => {
                let waker = match waker {
                    Some(waker) if waker.will_wake(cx.waker()) => waker,
                    _ => cx.waker().clone(),
                };
                *state = State::Suspended {
                    waker: Some(waker),
                    handlers,
                };
                Poll::Pending
            }
            State::Resumed(value) => Poll::Ready(Ok(value)),
            State::Cancelled => {
                *state = State::Cancelled;
                Poll::Ready(Err(Cancelled))
            }
            State::Completed => panic!("`Continuation` polled after completion"),
        }
    }
}
