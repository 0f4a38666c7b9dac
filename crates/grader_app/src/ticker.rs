use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use grader_core::{Msg, Operation};

/// One percent per tick at this period reaches the hold threshold in roughly
/// twelve seconds, matching the typical evaluation latency.
pub(crate) const TICK_PERIOD: Duration = Duration::from_millis(120);

/// Cancellable background tick source for one operation's progress bar.
///
/// The thread stops at the next period boundary after `cancel`; dropping the
/// ticker cancels it, so a ticker cannot outlive the slot that owns it.
pub(crate) struct ProgressTicker {
    stop: Arc<AtomicBool>,
}

impl ProgressTicker {
    pub(crate) fn start(
        operation: Operation,
        msg_tx: mpsc::Sender<Msg>,
        period: Duration,
    ) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = stop.clone();
        thread::spawn(move || loop {
            thread::sleep(period);
            if flag.load(Ordering::Relaxed) {
                break;
            }
            if msg_tx.send(Msg::ProgressTicked(operation)).is_err() {
                break;
            }
        });
        Self { stop }
    }

    pub(crate) fn cancel(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}

impl Drop for ProgressTicker {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticker_emits_ticks_for_its_operation() {
        let (tx, rx) = mpsc::channel();
        let ticker = ProgressTicker::start(Operation::Evaluation, tx, Duration::from_millis(5));
        thread::sleep(Duration::from_millis(60));
        ticker.cancel();

        let ticks: Vec<Msg> = rx.try_iter().collect();
        assert!(!ticks.is_empty());
        assert!(ticks
            .iter()
            .all(|msg| *msg == Msg::ProgressTicked(Operation::Evaluation)));
    }

    #[test]
    fn no_ticks_arrive_after_cancellation() {
        let (tx, rx) = mpsc::channel();
        let ticker = ProgressTicker::start(Operation::Evaluation, tx, Duration::from_millis(5));
        thread::sleep(Duration::from_millis(30));
        ticker.cancel();

        // Let any tick that was already in flight land, then drain.
        thread::sleep(Duration::from_millis(20));
        let _ = rx.try_iter().count();

        thread::sleep(Duration::from_millis(50));
        assert_eq!(rx.try_iter().count(), 0);
    }

    #[test]
    fn dropping_the_ticker_cancels_it() {
        let (tx, rx) = mpsc::channel();
        {
            let _ticker =
                ProgressTicker::start(Operation::Share, tx, Duration::from_millis(5));
            thread::sleep(Duration::from_millis(20));
        }

        thread::sleep(Duration::from_millis(20));
        let _ = rx.try_iter().count();
        thread::sleep(Duration::from_millis(50));
        assert_eq!(rx.try_iter().count(), 0);
    }
}
