mod delay;
mod dispatch;
mod disposable;
mod suspended;

pub use delay::Delay;
pub use dispatch::Dispatch;
pub use disposable::DisposableHandle;
pub use suspended::SuspendedTask;
