use std::{
    future::Future,
    pin::pin,
    sync::Arc,
    task::{Context, Poll, Waker},
};

use cooked_waker::IntoWaker;

use super::notifier::Notifier;

thread_local! {
    pub(crate) static WAKER_PAIR: (Arc<Notifier>, Waker) = {
        let notifier = Arc::new(Notifier::default());
        (notifier.clone(), notifier.into_waker())
    };
}

pub(crate) fn block_future<Fut: Future>(
    future: Fut,
    notifier: &Notifier,
    waker: &Waker,
) -> Fut::Output {
    let mut future = pin!(future);
    let mut context = Context::from_waker(waker);
    loop {
        match future.as_mut().poll(&mut context) {
            Poll::Ready(output) => return output,
            Poll::Pending => notifier.wait(),
        }
    }
}
