use std::time::Duration;

use log::{debug, trace};

use crate::{
    runtime::{Delay, DisposableHandle, SuspendedTask},
    scheduler::{Job, Scheduler, Subscription, Worker},
};

use super::{handle::SubscriptionHandle, Dispatcher};

impl<S: Scheduler> Delay for Dispatcher<S> {
    type Error = S::Error;

    fn schedule_resume_after<T>(&self, delay: Duration, task: T) -> Result<(), Self::Error>
    where
        T: SuspendedTask + Clone,
    {
        let resumed = task.clone();
        let subscription = self
            .create_worker()?
            .schedule_after(Box::new(move || resumed.resume_undispatched()), delay)
            .inspect_err(|_| debug!("scheduler rejected a delayed resume"))?;
        trace!("resume scheduled after {delay:?}");

        // the task may already be cancelled, in which case this runs right away
        task.on_cancellation(Box::new(move || subscription.cancel()));
        Ok(())
    }

    fn invoke_on_timeout(
        &self,
        delay: Duration,
        callback: Job,
    ) -> Result<Box<dyn DisposableHandle>, Self::Error> {
        let subscription = self
            .create_worker()?
            .schedule_after(callback, delay)
            .inspect_err(|_| debug!("scheduler rejected a timeout callback"))?;
        trace!("timeout callback scheduled after {delay:?}");
        Ok(Box::new(SubscriptionHandle::new(subscription)))
    }
}
