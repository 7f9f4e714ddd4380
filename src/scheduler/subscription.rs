/// Cancellation token handed out by a [`Worker`](super::Worker) for each submitted job.
///
/// Cancelling must be idempotent. Once a job has started running, cancelling its
/// subscription has no effect on it.
pub trait Subscription: Send + Sync + 'static {
    /// Cancels the job if it has not run yet
    fn cancel(&self);
}
