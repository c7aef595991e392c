use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;

/// A callback deferred onto the event loop.
pub type Deferred = Box<dyn FnOnce()>;

/// Runs deferred callbacks on a single-threaded event loop.
pub trait Scheduler {
    /// Run `callback` once, no earlier than `delay` from now.
    ///
    /// The returned handle can cancel the callback until it fires. Dropping the
    /// handle leaves the callback scheduled.
    fn schedule(&self, delay: Duration, callback: Deferred) -> TimerHandle;
}

impl<S: Scheduler + ?Sized> Scheduler for Rc<S> {
    fn schedule(&self, delay: Duration, callback: Deferred) -> TimerHandle {
        (**self).schedule(delay, callback)
    }
}

/// Lifecycle of a scheduled callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// Waiting for its deadline.
    Pending,

    /// The callback ran.
    Fired,

    /// The callback was cancelled and will never run.
    Cancelled,
}

/// State shared between a [`TimerHandle`] and the callback its scheduler holds.
///
/// Schedulers wrap their callback with [`TimerSlot::arm`], which makes cancellation
/// authoritative even if the backend can't retract work it already queued.
#[derive(Debug, Clone)]
pub struct TimerSlot(Rc<Cell<TimerState>>);

impl TimerSlot {
    /// A fresh, pending slot.
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(TimerState::Pending)))
    }

    /// Current state.
    pub fn state(&self) -> TimerState {
        self.0.get()
    }

    /// Wrap `callback` so it runs at most once, and only while the slot is pending.
    pub fn arm(&self, callback: Deferred) -> Deferred {
        let slot = self.clone();
        Box::new(move || {
            if slot.state() != TimerState::Pending {
                tracing::trace!("skipping timer in state {:?}", slot.state());
                return;
            }
            slot.0.set(TimerState::Fired);
            callback();
        })
    }

    fn cancel(&self) -> bool {
        if self.state() != TimerState::Pending {
            return false;
        }
        self.0.set(TimerState::Cancelled);
        true
    }
}

impl Default for TimerSlot {
    fn default() -> Self {
        Self::new()
    }
}

/// A cancellable reference to a scheduled callback.
pub struct TimerHandle {
    slot: TimerSlot,
    on_cancel: Option<Deferred>,
}

impl TimerHandle {
    /// Tie `slot` to the backend-specific `on_cancel` hook (abort a task, drop a queue entry).
    pub fn new(slot: TimerSlot, on_cancel: impl FnOnce() + 'static) -> Self {
        Self {
            slot,
            on_cancel: Some(Box::new(on_cancel)),
        }
    }

    /// Cancel the callback. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self) -> bool {
        if !self.slot.cancel() {
            return false;
        }

        if let Some(on_cancel) = self.on_cancel.take() {
            on_cancel();
        }

        tracing::trace!("timer cancelled");
        true
    }

    /// Current state.
    pub fn state(&self) -> TimerState {
        self.slot.state()
    }

    /// Whether the callback is still waiting to run.
    pub fn is_pending(&self) -> bool {
        self.state() == TimerState::Pending
    }
}

impl fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerHandle")
            .field("state", &self.state())
            .finish()
    }
}

/// A virtual clock that only moves when told to.
///
/// Callbacks fire from [`ManualScheduler::advance`] in deadline order, ties broken by
/// scheduling order. A callback may schedule further timers; those fire in the same
/// `advance` call if they fall due before it ends.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<ManualClock>>,
}

#[derive(Default)]
struct ManualClock {
    now: Duration,
    next_seq: u64,
    queue: BTreeMap<(Duration, u64), Deferred>,
}

impl ManualScheduler {
    /// A clock starting at zero with nothing scheduled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the clock was created.
    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    /// Number of callbacks that have neither fired nor been cancelled.
    pub fn pending(&self) -> usize {
        self.clock.borrow().queue.len()
    }

    /// Move the clock forward by `by`, running everything that falls due.
    ///
    /// Returns the number of callbacks run.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now() + by;
        let mut fired = 0;

        loop {
            let due = {
                let mut clock = self.clock.borrow_mut();
                let entry = clock
                    .queue
                    .first_entry()
                    .filter(|entry| entry.key().0 <= target)
                    .map(|entry| entry.remove_entry());

                match entry {
                    Some(((at, _), callback)) => {
                        clock.now = at;
                        callback
                    }
                    None => {
                        clock.now = target;
                        break;
                    }
                }
            };

            due();
            fired += 1;
        }

        fired
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, callback: Deferred) -> TimerHandle {
        let slot = TimerSlot::new();

        let key = {
            let mut clock = self.clock.borrow_mut();
            let key = (clock.now + delay, clock.next_seq);
            clock.next_seq += 1;
            clock.queue.insert(key, slot.arm(callback));
            key
        };

        let clock: Weak<RefCell<ManualClock>> = Rc::downgrade(&self.clock);
        TimerHandle::new(slot, move || {
            if let Some(clock) = clock.upgrade() {
                clock.borrow_mut().queue.remove(&key);
            }
        })
    }
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualScheduler")
            .field("now", &self.now())
            .field("pending", &self.pending())
            .finish()
    }
}

/// Runs timers as tasks on the current tokio `LocalSet`.
///
/// # Panics
///
/// [`Scheduler::schedule`] panics when called outside of a `LocalSet`, like
/// [`tokio::task::spawn_local`].
#[cfg(feature = "tokio")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

#[cfg(feature = "tokio")]
impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, callback: Deferred) -> TimerHandle {
        let slot = TimerSlot::new();
        let fire = slot.arm(callback);

        let task = tokio::task::spawn_local(async move {
            tokio::time::sleep(delay).await;
            fire();
        });

        TimerHandle::new(slot, move || task.abort())
    }
}
