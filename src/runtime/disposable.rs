/// Handle used to release a pending resource early
pub trait DisposableHandle: Send + Sync {
    /// Releases the resource. Calling it more than once, or after the resource
    /// has already been used, does nothing.
    fn dispose(&self);
}
