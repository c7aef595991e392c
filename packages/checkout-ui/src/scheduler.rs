use dioxus::prelude::spawn;
use std::time::Duration;
use submit_guard::{Deferred, Scheduler, TimerHandle, TimerSlot};

/// Runs deferred callbacks as tasks on the Dioxus runtime.
///
/// Tasks belong to the scope that is current when [`Scheduler::schedule`] is called, so
/// they're dropped along with it. Must be used from inside a running `VirtualDom`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskScheduler;

impl Scheduler for TaskScheduler {
    fn schedule(&self, delay: Duration, callback: Deferred) -> TimerHandle {
        let slot = TimerSlot::new();
        let fire = slot.arm(callback);

        let task = spawn(async move {
            sleep(delay).await;
            fire();
        });

        TimerHandle::new(slot, move || task.cancel())
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(delay: Duration) {
    gloo_timers::future::sleep(delay).await
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(delay: Duration) {
    tokio::time::sleep(delay).await
}
