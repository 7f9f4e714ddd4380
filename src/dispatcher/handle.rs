use crate::{runtime::DisposableHandle, scheduler::Subscription};

/// Exposes a scheduler [`Subscription`] as a [`DisposableHandle`].
///
/// Disposing forwards to [`Subscription::cancel`], so it is as idempotent as the
/// subscription itself.
pub struct SubscriptionHandle<T> {
    subscription: T,
}

impl<T: Subscription> SubscriptionHandle<T> {
    pub fn new(subscription: T) -> Self {
        Self { subscription }
    }

    pub fn into_inner(self) -> T {
        self.subscription
    }
}

impl<T: Subscription> DisposableHandle for SubscriptionHandle<T> {
    fn dispose(&self) {
        self.subscription.cancel();
    }
}
