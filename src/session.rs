#![cfg(feature = "std")]

//! Async wrapper around [`GameController`] that paces the computer's reply.
//!
//! The controller and RNG live behind one `tokio::sync::Mutex`, so only one
//! mutation is ever in flight. After a resolved human shot the computer's
//! move is scheduled as a task that sleeps for the configured delay; `reset`
//! aborts that task, and the controller's generation check rejects it even if
//! it was already past the sleep.

use std::sync::Arc;
use std::time::Duration;

use rand::{rngs::SmallRng, SeedableRng};
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;

use crate::{
    common::{AttackResult, GameError},
    config::GameConfig,
    game::GameController,
    player::Side,
    ship::{Orientation, ShipId},
    view::GameSnapshot,
};

/// Things that happen without the caller asking for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The computer fired at the human board.
    OpponentFired {
        x: usize,
        y: usize,
        result: AttackResult,
    },
    /// The match is over.
    MatchFinished { winner: Side },
}

struct Shared {
    controller: GameController,
    rng: SmallRng,
}

pub struct Session {
    shared: Arc<Mutex<Shared>>,
    events: mpsc::UnboundedSender<SessionEvent>,
    pending: Option<JoinHandle<()>>,
    delay: Duration,
}

/// `SmallRng` seeded from `seed`, or from the thread RNG when unset.
pub fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

impl Session {
    /// New session in setup, plus the receiving end of its event stream.
    pub fn new(config: &GameConfig) -> (Self, mpsc::UnboundedReceiver<SessionEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let session = Self {
            shared: Arc::new(Mutex::new(Shared {
                controller: GameController::new(),
                rng: seeded_rng(config.seed),
            })),
            events: tx,
            pending: None,
            delay: config.opponent_delay,
        };
        (session, rx)
    }

    pub async fn place_ship(
        &self,
        slot: usize,
        x: usize,
        y: usize,
        orientation: Orientation,
    ) -> Result<ShipId, GameError> {
        let mut shared = self.shared.lock().await;
        shared.controller.place_ship(slot, x, y, orientation)
    }

    pub async fn randomize_fleet(&self) -> Result<(), GameError> {
        let mut guard = self.shared.lock().await;
        let Shared { controller, rng } = &mut *guard;
        controller.randomize_fleet(rng)
    }

    pub async fn start(&self) -> Result<(), GameError> {
        let mut guard = self.shared.lock().await;
        let Shared { controller, rng } = &mut *guard;
        controller.start(rng)
    }

    /// Fire at `(x, y)`. `None` means the shot was ignored. A resolved shot
    /// that leaves the match running schedules the computer's reply.
    pub async fn attack(&mut self, x: usize, y: usize) -> Option<AttackResult> {
        let (result, generation, computer_next, winner) = {
            let mut shared = self.shared.lock().await;
            let result = shared.controller.attack(x, y)?;
            let controller = &shared.controller;
            (
                result,
                controller.generation(),
                controller.is_active() && controller.turn() == Side::Computer,
                controller.winner(),
            )
        };
        if let Some(winner) = winner {
            let _ = self.events.send(SessionEvent::MatchFinished { winner });
        }
        if computer_next {
            self.schedule_computer(generation);
        }
        Some(result)
    }

    fn schedule_computer(&mut self, generation: u64) {
        let shared = Arc::clone(&self.shared);
        let events = self.events.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut guard = shared.lock().await;
            let Shared { controller, rng } = &mut *guard;
            if let Some(((x, y), result)) = controller.computer_turn(rng, generation) {
                let _ = events.send(SessionEvent::OpponentFired { x, y, result });
                if let Some(winner) = controller.winner() {
                    let _ = events.send(SessionEvent::MatchFinished { winner });
                }
            }
        }));
    }

    /// Wait until a scheduled computer move has run (or was cancelled).
    pub async fn wait_for_opponent(&mut self) -> anyhow::Result<()> {
        if let Some(handle) = self.pending.take() {
            match handle.await {
                Ok(()) => {}
                Err(e) if e.is_cancelled() => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    /// Whether a computer move is scheduled and has not run yet.
    pub fn opponent_pending(&self) -> bool {
        self.pending.as_ref().map_or(false, |h| !h.is_finished())
    }

    /// Cancel any scheduled computer move and return to setup.
    pub async fn reset(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        self.shared.lock().await.controller.reset();
    }

    pub async fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::new(&self.shared.lock().await.controller)
    }

    /// Run `f` against the controller under the session lock.
    pub async fn with_controller<T, F>(&self, f: F) -> T
    where
        F: FnOnce(&GameController) -> T,
    {
        f(&self.shared.lock().await.controller)
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
