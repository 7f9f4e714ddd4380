use cooked_waker::WakeRef;
use parking_lot::{Condvar, Mutex};

#[derive(Default)]
pub(crate) struct Notifier {
    was_notified: Mutex<bool>,
    cv: Condvar,
}

impl WakeRef for Notifier {
    fn wake_by_ref(&self) {
        let was_notified: bool = std::mem::replace(&mut *self.was_notified.lock(), true);
        if !was_notified {
            self.cv.notify_one();
        }
    }
}

impl Notifier {
    pub(crate) fn wait(&self) {
        let mut was_notified = self.was_notified.lock();
        while !*was_notified {
            self.cv.wait(&mut was_notified);
        }
        *was_notified = false;
    }
}
