/// A paused unit of cooperative work
pub trait SuspendedTask: Send + Sync + 'static {
    /// Resumes the task directly on the calling thread.
    ///
    /// Resuming a task that already completed or was cancelled must be a no-op.
    fn resume_undispatched(&self);

    /// Registers ``callback`` to run exactly once if the task is cancelled while
    /// it is still suspended.
    fn on_cancellation(&self, callback: Box<dyn FnOnce() + Send>);
}
