#![allow(dead_code)]

use std::{
    collections::BTreeMap,
    convert::Infallible,
    fmt,
    sync::{
        atomic::{AtomicBool, AtomicU8, AtomicUsize, Ordering},
        Arc, Weak,
    },
    thread,
    time::Duration,
};

use parking_lot::Mutex;
use sched_bridge::{Continuation, ContinuationHandle, Job, Scheduler, Subscription, SuspendedTask, Worker};
use threadpool::ThreadPool;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejected {
    NoWorkers,
    ShutDown,
}

/// Scheduler with a manually advanced clock.
#[derive(Default)]
pub struct VirtualScheduler {
    timeline: Arc<Mutex<Timeline>>,
    workers: AtomicUsize,
    shut_down: Arc<AtomicBool>,
}

#[derive(Default)]
struct Timeline {
    now: Duration,
    sequence: u64,
    jobs: BTreeMap<(Duration, u64), Job>,
}

impl VirtualScheduler {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn workers_created(&self) -> usize {
        self.workers.load(Ordering::SeqCst)
    }

    pub fn pending(&self) -> usize {
        self.timeline.lock().jobs.len()
    }

    pub fn now(&self) -> Duration {
        self.timeline.lock().now
    }

    pub fn shut_down(&self) {
        self.shut_down.store(true, Ordering::SeqCst);
    }

    /// Runs every job that is due without moving the clock.
    pub fn run_pending(&self) {
        self.advance_by(Duration::ZERO);
    }

    /// Moves the clock forward, running due jobs in order of their deadline.
    pub fn advance_by(&self, by: Duration) {
        let target = self.now() + by;
        loop {
            let job = {
                let mut timeline = self.timeline.lock();
                let due = timeline
                    .jobs
                    .first_key_value()
                    .map(|(&(at, _), _)| at)
                    .filter(|at| *at <= target);
                match due {
                    Some(at) => {
                        timeline.now = at;
                        timeline.jobs.pop_first().map(|(_, job)| job)
                    }
                    None => None,
                }
            };
            match job {
                Some(job) => job(),
                None => break,
            }
        }
        self.timeline.lock().now = target;
    }
}

impl fmt::Display for VirtualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VirtualScheduler@{:?}", self.now())
    }
}

impl Scheduler for VirtualScheduler {
    type Error = Rejected;
    type Worker = VirtualWorker;

    fn create_worker(&self) -> Result<VirtualWorker, Rejected> {
        self.workers.fetch_add(1, Ordering::SeqCst);
        Ok(VirtualWorker {
            timeline: self.timeline.clone(),
            shut_down: self.shut_down.clone(),
        })
    }
}

pub struct VirtualWorker {
    timeline: Arc<Mutex<Timeline>>,
    shut_down: Arc<AtomicBool>,
}

impl Worker for VirtualWorker {
    type Error = Rejected;
    type Subscription = VirtualSubscription;

    fn schedule(&self, job: Job) -> Result<VirtualSubscription, Rejected> {
        self.schedule_after(job, Duration::ZERO)
    }

    fn schedule_after(&self, job: Job, delay: Duration) -> Result<VirtualSubscription, Rejected> {
        if self.shut_down.load(Ordering::SeqCst) {
            return Err(Rejected::ShutDown);
        }
        let mut timeline = self.timeline.lock();
        timeline.sequence += 1;
        let key = (timeline.now + delay, timeline.sequence);
        timeline.jobs.insert(key, job);
        Ok(VirtualSubscription {
            key,
            timeline: Arc::downgrade(&self.timeline),
        })
    }
}

pub struct VirtualSubscription {
    key: (Duration, u64),
    timeline: Weak<Mutex<Timeline>>,
}

impl Subscription for VirtualSubscription {
    fn cancel(&self) {
        if let Some(timeline) = self.timeline.upgrade() {
            let job = timeline.lock().jobs.remove(&self.key);
            drop(job);
        }
    }
}

/// Scheduler running jobs on a real thread pool.
pub struct ThreadScheduler {
    pool: Mutex<ThreadPool>,
}

impl ThreadScheduler {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            pool: Mutex::new(ThreadPool::new(num_cpus::get().max(4) * 2)),
        })
    }

    /// Waits until every submitted job has finished.
    pub fn join(&self) {
        let pool = self.pool.lock().clone();
        pool.join();
    }
}

impl Scheduler for ThreadScheduler {
    type Error = Infallible;
    type Worker = ThreadWorker;

    fn create_worker(&self) -> Result<ThreadWorker, Infallible> {
        Ok(ThreadWorker {
            pool: self.pool.lock().clone(),
        })
    }
}

pub struct ThreadWorker {
    pool: ThreadPool,
}

const PENDING: u8 = 0;
const RUNNING: u8 = 1;
const CANCELLED: u8 = 2;

impl Worker for ThreadWorker {
    type Error = Infallible;
    type Subscription = ThreadSubscription;

    fn schedule(&self, job: Job) -> Result<ThreadSubscription, Infallible> {
        self.schedule_after(job, Duration::ZERO)
    }

    fn schedule_after(&self, job: Job, delay: Duration) -> Result<ThreadSubscription, Infallible> {
        let state = Arc::new(AtomicU8::new(PENDING));
        let job_state = state.clone();
        self.pool.execute(move || {
            if !delay.is_zero() {
                thread::sleep(delay);
            }
            if job_state
                .compare_exchange(PENDING, RUNNING, Ordering::AcqRel, Ordering::Acquire)
                .is_ok()
            {
                job();
            }
        });
        Ok(ThreadSubscription { state })
    }
}

pub struct ThreadSubscription {
    state: Arc<AtomicU8>,
}

impl Subscription for ThreadSubscription {
    fn cancel(&self) {
        _ = self
            .state
            .compare_exchange(PENDING, CANCELLED, Ordering::AcqRel, Ordering::Acquire);
    }
}

/// Scheduler that refuses to create workers.
pub struct RejectingScheduler;

impl Scheduler for RejectingScheduler {
    type Error = Rejected;
    type Worker = VirtualWorker;

    fn create_worker(&self) -> Result<VirtualWorker, Rejected> {
        Err(Rejected::NoWorkers)
    }
}

/// Suspended task counting the resumes that actually reached it.
#[derive(Clone)]
pub struct Probe {
    pub handle: ContinuationHandle<()>,
    resumes: Arc<AtomicUsize>,
}

impl Probe {
    /// A task paired with the continuation it resumes.
    pub fn new() -> (Self, Continuation<()>) {
        let continuation = Continuation::new();
        let probe = Self {
            handle: continuation.handle(),
            resumes: Arc::default(),
        };
        (probe, continuation)
    }

    pub fn resumes(&self) -> usize {
        self.resumes.load(Ordering::SeqCst)
    }
}

impl SuspendedTask for Probe {
    fn resume_undispatched(&self) {
        if self.handle.resume(()) {
            self.resumes.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn on_cancellation(&self, callback: Box<dyn FnOnce() + Send>) {
        self.handle.on_cancellation(callback);
    }
}

pub fn counter() -> (Arc<AtomicUsize>, impl FnOnce() + Send + 'static) {
    let count = Arc::new(AtomicUsize::new(0));
    let handle = count.clone();
    (count, move || {
        handle.fetch_add(1, Ordering::SeqCst);
    })
}

pub fn millis(value: u64) -> Duration {
    Duration::from_millis(value)
}
