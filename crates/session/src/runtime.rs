//! Session runtime.
//!
//! One tokio task owns the [`Controller`]. Player commands arrive over an
//! mpsc channel and timer ticks come from a `tokio::time::Interval` polled in
//! the same `select!`, so the two never touch game state concurrently.

use anyhow::{Context, Result};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, Interval, MissedTickBehavior};

use crate::core::{Controller, Renderer, ScoreDisplay, TickTimer};
use crate::types::GameAction;

/// Capacity of the command channel.
const COMMAND_BUFFER: usize = 64;

/// Message delivered to the session task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Action(GameAction),
    Shutdown,
}

/// Running session: the game task plus the sending end of its command channel.
pub struct Session<V> {
    cmd_tx: mpsc::Sender<Command>,
    task: JoinHandle<Controller<V>>,
}

impl<V> Session<V>
where
    V: Renderer + ScoreDisplay + Send + 'static,
{
    /// Spawn the session onto the current tokio runtime.
    ///
    /// # Panics
    ///
    /// If called outside a tokio runtime.
    pub fn spawn(controller: Controller<V>) -> Self {
        Self::spawn_on(&Handle::current(), controller)
    }

    /// Spawn the session onto `handle`. Usable from non-async code.
    pub fn spawn_on(handle: &Handle, controller: Controller<V>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel(COMMAND_BUFFER);
        let task = handle.spawn(run(controller, cmd_rx));
        Self { cmd_tx, task }
    }

    pub async fn send(&self, action: GameAction) -> Result<()> {
        self.cmd_tx
            .send(Command::Action(action))
            .await
            .context("session has stopped")
    }

    /// Send from a thread that is not driving a runtime (e.g. the input loop).
    pub fn blocking_send(&self, action: GameAction) -> Result<()> {
        self.cmd_tx
            .blocking_send(Command::Action(action))
            .context("session has stopped")
    }

    /// Stop the session and hand back the controller.
    pub async fn shutdown(self) -> Result<Controller<V>> {
        // The task may already be gone; the join below reports why.
        let _ = self.cmd_tx.send(Command::Shutdown).await;
        self.task.await.context("session task failed")
    }
}

async fn run<V>(mut controller: Controller<V>, mut cmd_rx: mpsc::Receiver<Command>) -> Controller<V>
where
    V: Renderer + ScoreDisplay,
{
    let mut ticker = Ticker::default();
    ticker.sync(controller.tick_timer());

    loop {
        tokio::select! {
            cmd = cmd_rx.recv() => match cmd {
                Some(Command::Action(action)) => {
                    controller.apply_action(action);
                }
                Some(Command::Shutdown) | None => break,
            },
            _ = ticker.next() => {
                controller.tick();
            }
        }
        ticker.sync(controller.tick_timer());
    }

    tracing::info!(score = controller.score(), "session stopped");
    controller
}

/// Runtime side of the controller's [`TickTimer`].
#[derive(Default)]
struct Ticker {
    interval: Option<Interval>,
    generation: u64,
}

impl Ticker {
    /// Follow the controller's timer: build a fresh interval on every new
    /// arming and drop it when disarmed.
    fn sync(&mut self, timer: &TickTimer) {
        if !timer.is_armed() {
            if self.interval.take().is_some() {
                tracing::debug!("tick timer stopped");
            }
            return;
        }
        if self.interval.is_some() && self.generation == timer.generation() {
            return;
        }

        let period = timer.period();
        let mut interval = time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.interval = Some(interval);
        self.generation = timer.generation();
        tracing::debug!(
            period_ms = period.as_millis() as u64,
            generation = self.generation,
            "tick timer armed"
        );
    }

    async fn next(&mut self) {
        match &mut self.interval {
            Some(interval) => {
                interval.tick().await;
            }
            None => std::future::pending().await,
        }
    }
}
