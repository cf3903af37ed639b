//! Trailing-edge debounce for bursty input
//!
//! The scheduler owns a background task. Each `schedule` replaces the pending
//! value and restarts the quiet period; when the period runs out with no new
//! value, the last one is handed to the callback. There is no leading-edge
//! call. Dropping the scheduler aborts the task, so nothing fires after its
//! owner is gone.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

enum Command<T> {
    Schedule(T),
    Cancel,
}

pub struct DebounceScheduler<T> {
    commands: mpsc::UnboundedSender<Command<T>>,
    task: JoinHandle<()>,
    quiet_period: Duration,
}

impl<T: Send + 'static> DebounceScheduler<T> {
    /// Start the scheduler; must be called inside a tokio runtime
    pub fn new<F>(quiet_period: Duration, on_settle: F) -> Self
    where
        F: Fn(T) + Send + 'static,
    {
        let (commands, rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(run(quiet_period, rx, on_settle));

        Self {
            commands,
            task,
            quiet_period,
        }
    }

    /// Replace the pending value and restart the quiet period
    pub fn schedule(&self, value: T) {
        // only fails once the task is gone, and then there is nobody to notify
        let _ = self.commands.send(Command::Schedule(value));
    }

    /// Forget the pending value, if any
    pub fn cancel(&self) {
        let _ = self.commands.send(Command::Cancel);
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet_period
    }
}

impl<T> Drop for DebounceScheduler<T> {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run<T, F>(quiet_period: Duration, mut commands: mpsc::UnboundedReceiver<Command<T>>, on_settle: F)
where
    F: Fn(T),
{
    let mut pending: Option<T> = None;
    let timer = time::sleep(quiet_period);
    tokio::pin!(timer);

    loop {
        tokio::select! {
            command = commands.recv() => match command {
                Some(Command::Schedule(value)) => {
                    pending = Some(value);
                    timer.as_mut().reset(Instant::now() + quiet_period);
                }
                Some(Command::Cancel) => pending = None,
                None => break,
            },
            () = &mut timer, if pending.is_some() => {
                if let Some(value) = pending.take() {
                    on_settle(value);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::UnboundedReceiver;

    const QUIET: Duration = Duration::from_millis(400);

    fn scheduler() -> (DebounceScheduler<String>, UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let scheduler = DebounceScheduler::new(QUIET, move |value| {
            let _ = tx.send(value);
        });
        (scheduler, rx)
    }

    async fn pause(ms: u64) {
        time::sleep(Duration::from_millis(ms)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_emits_last_value_once() {
        let (debounce, mut settled) = scheduler();

        debounce.schedule("c".into());
        pause(100).await;
        debounce.schedule("ca".into());
        pause(100).await;
        debounce.schedule("cat".into());

        // just short of the quiet period after the last keystroke
        pause(399).await;
        assert!(settled.try_recv().is_err());

        pause(2).await;
        assert_eq!(settled.try_recv().unwrap(), "cat");

        pause(1_000).await;
        assert!(settled.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_windows_emit_separately() {
        let (debounce, mut settled) = scheduler();

        debounce.schedule("dog".into());
        pause(500).await;
        debounce.schedule("dogs".into());
        pause(500).await;

        assert_eq!(settled.try_recv().unwrap(), "dog");
        assert_eq!(settled.try_recv().unwrap(), "dogs");
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending_value() {
        let (debounce, mut settled) = scheduler();

        debounce.schedule("bird".into());
        pause(100).await;
        debounce.cancel();
        pause(1_000).await;

        assert!(settled.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_pending_emission() {
        let (debounce, mut settled) = scheduler();

        debounce.schedule("fish".into());
        pause(100).await;
        drop(debounce);
        pause(1_000).await;

        assert!(settled.try_recv().is_err());
    }
}
