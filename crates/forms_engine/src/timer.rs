use std::collections::HashMap;
use std::time::Duration;

use forms_core::TimerToken;
use forms_logging::{forms_debug, forms_trace};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Elapsed { token: TimerToken },
}

/// Executes the one-shot re-enable timers requested by the core.
pub trait TimerScheduler {
    fn schedule(&mut self, token: TimerToken, delay: Duration);
    fn cancel(&mut self, token: TimerToken);
}

/// Runs each timer as a task on a tokio runtime and reports elapsed timers
/// on an unbounded channel.
pub struct TokioTimerScheduler {
    handle: Handle,
    event_tx: mpsc::UnboundedSender<TimerEvent>,
    pending: HashMap<TimerToken, CancellationToken>,
}

impl TokioTimerScheduler {
    pub fn new(handle: Handle) -> (Self, mpsc::UnboundedReceiver<TimerEvent>) {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let scheduler = Self {
            handle,
            event_tx,
            pending: HashMap::new(),
        };
        (scheduler, event_rx)
    }

    /// Timers that have neither fired nor been cancelled.
    pub fn pending_count(&self) -> usize {
        self.pending
            .values()
            .filter(|cancel| !cancel.is_cancelled())
            .count()
    }
}

impl TimerScheduler for TokioTimerScheduler {
    fn schedule(&mut self, token: TimerToken, delay: Duration) {
        // Fired timers mark their own entry cancelled; drop those.
        self.pending.retain(|_, cancel| !cancel.is_cancelled());

        let cancel = CancellationToken::new();
        let task_cancel = cancel.clone();
        let event_tx = self.event_tx.clone();
        forms_debug!("scheduling {} in {:?}", token, delay);
        self.handle.spawn(async move {
            tokio::select! {
                _ = task_cancel.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    task_cancel.cancel();
                    let _ = event_tx.send(TimerEvent::Elapsed { token });
                }
            }
        });
        if let Some(previous) = self.pending.insert(token, cancel) {
            previous.cancel();
        }
    }

    fn cancel(&mut self, token: TimerToken) {
        match self.pending.remove(&token) {
            Some(cancel) => {
                forms_debug!("cancelling {}", token);
                cancel.cancel();
            }
            None => forms_trace!("cancel for unknown {}", token),
        }
    }
}

impl Drop for TokioTimerScheduler {
    fn drop(&mut self) {
        for cancel in self.pending.values() {
            cancel.cancel();
        }
    }
}
