use std::future::Future;

mod local_executor;
mod notifier;

/// Blocks the current thread until the future is polled to finish.
///
/// Useful to await a [`Sleep`](crate::Sleep) or a [`Timeout`](crate::Timeout) without
/// bringing in another async runtime.
///
/// Example
/// ```rust
/// let result = sched_bridge::block_on(async {
///     println!("This is an async executor");
///     1
/// });
/// assert_eq!(result, 1);
/// ```
///
pub fn block_on<Fut: Future>(future: Fut) -> Fut::Output {
    local_executor::WAKER_PAIR.with(|(notifier, waker)| {
        local_executor::block_future(future, notifier, waker)
    })
}
