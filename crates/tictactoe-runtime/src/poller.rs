use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::driver::RuntimeEvent;

/// Fixed refresh period while a game is in progress.
pub const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Interval timer that posts [`RuntimeEvent::Tick`] while running.
///
/// The poller only produces ticks; whether a tick turns into a request is the
/// controller's decision. Aborting the task clears the interval. Requests
/// already on the wire are not affected.
pub struct Poller {
    handle: Handle,
    tx: UnboundedSender<RuntimeEvent>,
    period: Duration,
    task: Option<JoinHandle<()>>,
}

impl Poller {
    pub fn new(handle: Handle, tx: UnboundedSender<RuntimeEvent>) -> Self {
        Self::with_period(handle, tx, POLL_INTERVAL)
    }

    pub fn with_period(
        handle: Handle,
        tx: UnboundedSender<RuntimeEvent>,
        period: Duration,
    ) -> Self {
        Self {
            handle,
            tx,
            period,
            task: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Start or stop to match `should_poll`.
    pub fn sync(&mut self, should_poll: bool) {
        match (should_poll, self.is_running()) {
            (true, false) => self.start(),
            (false, true) => self.stop(),
            _ => {}
        }
    }

    pub fn start(&mut self) {
        self.stop();
        let tx = self.tx.clone();
        let period = self.period;
        let first = Instant::now() + period;
        tracing::debug!(period_ms = period.as_millis() as u64, "polling started");
        self.task = Some(self.handle.spawn(async move {
            let mut interval = tokio::time::interval_at(first, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(RuntimeEvent::Tick).is_err() {
                    break;
                }
            }
        }));
    }

    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::debug!("polling stopped");
        }
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.stop();
    }
}
