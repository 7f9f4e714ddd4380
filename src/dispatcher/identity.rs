use std::{
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

use super::Dispatcher;

// Identity is the address of the wrapped scheduler, never the dispatcher's own state.
impl<S> Dispatcher<S> {
    fn identity(&self) -> *const () {
        Arc::as_ptr(&self.scheduler) as *const ()
    }
}

impl<S, T> PartialEq<Dispatcher<T>> for Dispatcher<S> {
    fn eq(&self, other: &Dispatcher<T>) -> bool {
        std::ptr::eq(self.identity(), other.identity())
    }
}

impl<S> Eq for Dispatcher<S> {}

impl<S> Hash for Dispatcher<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(self.identity(), state);
    }
}

impl<S: fmt::Display> fmt::Display for Dispatcher<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.scheduler, f)
    }
}

impl<S> fmt::Debug for Dispatcher<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("scheduler", &self.identity())
            .finish()
    }
}
