//! Async game session.
//!
//! Bridges a [`MatchEngine`] to async callers. The engine lives inside a
//! single tokio task; callers send requests over an mpsc channel and get the
//! resulting snapshot back on a oneshot. Every change (taps, deals, and
//! delayed transitions firing) is also published on a watch channel.
//!
//! The task sleeps until the next scheduled transition, then advances the
//! engine clock by the wall time that actually passed.

use std::fmt;

use log::{debug, info};
use tokio::sync::{mpsc, oneshot, watch};
use tokio::time::{sleep_until, Duration, Instant};

use memory_match_core::{DeckSnapshot, GameError, MatchEngine};

/// Pending requests beyond this apply backpressure to callers.
const REQUEST_QUEUE: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// The engine rejected the request.
    Game(GameError),
    /// The session task has stopped.
    Closed,
}

impl SessionError {
    pub fn code(self) -> &'static str {
        match self {
            SessionError::Game(err) => err.code(),
            SessionError::Closed => "session_closed",
        }
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Game(err) => write!(f, "{}", err),
            SessionError::Closed => f.write_str("game session is closed"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Game(err) => Some(err),
            SessionError::Closed => None,
        }
    }
}

impl From<GameError> for SessionError {
    fn from(err: GameError) -> Self {
        SessionError::Game(err)
    }
}

type Reply = oneshot::Sender<Result<DeckSnapshot, GameError>>;

#[derive(Debug)]
enum Request {
    Tap { index: usize, reply: Reply },
    Reset { reply: Reply },
    NewGame { pair_count: usize, reply: Reply },
    Shutdown { reply: oneshot::Sender<()> },
}

/// Handle to a running session task.
#[derive(Debug)]
pub struct GameSession {
    tx: mpsc::Sender<Request>,
    snapshots: watch::Receiver<DeckSnapshot>,
}

impl GameSession {
    /// Move `engine` into a new task on the current tokio runtime.
    pub fn spawn(engine: MatchEngine) -> Self {
        let (tx, rx) = mpsc::channel(REQUEST_QUEUE);
        let (snap_tx, snapshots) = watch::channel(engine.snapshot());
        tokio::spawn(run_session(engine, rx, snap_tx));
        Self { tx, snapshots }
    }

    pub async fn tap(&self, index: usize) -> Result<DeckSnapshot, SessionError> {
        self.request(|reply| Request::Tap { index, reply }).await
    }

    pub async fn reset(&self) -> Result<DeckSnapshot, SessionError> {
        self.request(|reply| Request::Reset { reply }).await
    }

    pub async fn new_game(&self, pair_count: usize) -> Result<DeckSnapshot, SessionError> {
        self.request(|reply| Request::NewGame { pair_count, reply }).await
    }

    /// Receiver that sees every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<DeckSnapshot> {
        self.snapshots.clone()
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> DeckSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Stop the session task. Later requests fail with [`SessionError::Closed`].
    pub async fn shutdown(&self) {
        let (reply, done) = oneshot::channel();
        if self.tx.send(Request::Shutdown { reply }).await.is_ok() {
            let _ = done.await;
        }
    }

    async fn request(
        &self,
        make: impl FnOnce(Reply) -> Request,
    ) -> Result<DeckSnapshot, SessionError> {
        let (reply, response) = oneshot::channel();
        self.tx
            .send(make(reply))
            .await
            .map_err(|_| SessionError::Closed)?;
        let result = response.await.map_err(|_| SessionError::Closed)?;
        Ok(result?)
    }
}

async fn run_session(
    mut engine: MatchEngine,
    mut rx: mpsc::Receiver<Request>,
    snap_tx: watch::Sender<DeckSnapshot>,
) {
    // Wall instant matching the engine clock's current value.
    let mut synced_at = Instant::now();
    info!("session started with {} cards", engine.len());

    loop {
        let deadline = engine
            .ms_until_next_transition()
            .map(|ms| synced_at + Duration::from_millis(ms));

        tokio::select! {
            request = rx.recv() => {
                if catch_up(&mut engine, &mut synced_at) {
                    snap_tx.send_replace(engine.snapshot());
                }
                let Some(request) = request else {
                    debug!("all session handles dropped");
                    break;
                };
                if !handle(&mut engine, request, &snap_tx) {
                    break;
                }
            }
            _ = wait_for(deadline) => {
                if catch_up(&mut engine, &mut synced_at) {
                    snap_tx.send_replace(engine.snapshot());
                }
            }
        }
    }

    info!("session stopped");
}

/// Returns false once the session should stop.
fn handle(
    engine: &mut MatchEngine,
    request: Request,
    snap_tx: &watch::Sender<DeckSnapshot>,
) -> bool {
    let (result, reply) = match request {
        Request::Tap { index, reply } => {
            let result = engine.tap(index).map(|outcome| {
                debug!("tap {} -> {:?}", index, outcome);
                outcome.changed()
            });
            (result, reply)
        }
        Request::Reset { reply } => {
            engine.reset();
            (Ok(true), reply)
        }
        Request::NewGame { pair_count, reply } => {
            (engine.new_game(pair_count).map(|_| true), reply)
        }
        Request::Shutdown { reply } => {
            let _ = reply.send(());
            return false;
        }
    };

    let response = result.map(|changed| {
        let snapshot = engine.snapshot();
        if changed {
            snap_tx.send_replace(snapshot.clone());
        }
        snapshot
    });
    // The caller may have given up waiting; the change still stands.
    let _ = reply.send(response);
    true
}

/// Advance the engine by the whole milliseconds elapsed since `synced_at`.
fn catch_up(engine: &mut MatchEngine, synced_at: &mut Instant) -> bool {
    let elapsed = Instant::now().saturating_duration_since(*synced_at);
    let ms = elapsed.as_millis().min(u32::MAX as u128) as u32;
    if ms == 0 {
        return false;
    }
    *synced_at += Duration::from_millis(ms as u64);
    engine.tick(ms)
}

async fn wait_for(deadline: Option<Instant>) {
    match deadline {
        Some(at) => sleep_until(at).await,
        None => std::future::pending().await,
    }
}
