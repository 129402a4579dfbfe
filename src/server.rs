//! WebSocket transport and state broadcaster.
//!
//! One `AppState` backs every connection: the single game session behind
//! a mutex, a broadcast channel for fan-out, the chat log, and the replay
//! store. Each inbound message is dispatched under one lock acquisition
//! and never awaits while holding it, so no two moves can interleave.
//! Accepted mutations broadcast the full state to every participant;
//! rejections go back only to the requester.

use crate::game::{GameError, GameSession, Side};
use crate::protocol::{ClientMessage, ServerMessage};
use crate::replay::ReplayStore;
use axum::Router;
use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use axum::routing::get;
use futures::{SinkExt, StreamExt};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tokio::sync::{broadcast, mpsc};
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, instrument, warn};

/// Broadcast channel capacity; slow spectators lag rather than block.
const BROADCAST_CAPACITY: usize = 64;

/// Shared server state behind every connection.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Mutex<Shared>>,
    broadcaster: broadcast::Sender<String>,
}

struct Shared {
    session: GameSession,
    chat_messages: Vec<String>,
    replays: ReplayStore,
}

impl AppState {
    /// Creates state holding a fresh game session.
    #[instrument]
    pub fn new() -> Self {
        info!("creating server state");
        let (broadcaster, _) = broadcast::channel(BROADCAST_CAPACITY);
        Self {
            inner: Arc::new(Mutex::new(Shared {
                session: GameSession::new(),
                chat_messages: Vec::new(),
                replays: ReplayStore::new(),
            })),
            broadcaster,
        }
    }

    /// Subscribes a new connection to state broadcasts.
    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.broadcaster.subscribe()
    }

    /// Routes one client message. Returns the direct reply for the
    /// requester, if any; broadcasts to all participants happen inside.
    #[instrument(skip(self, msg))]
    pub fn handle(&self, msg: ClientMessage) -> Option<ServerMessage> {
        let mut shared = self.inner.lock().unwrap();
        match msg {
            ClientMessage::Init { player, characters } => {
                let side: Side = match player.parse() {
                    Ok(side) => side,
                    Err(err) => {
                        warn!(%player, "init with invalid side");
                        return Some(ServerMessage::rejection(err));
                    }
                };
                shared.session.initialize(side, &characters);
                self.broadcast_state(&shared.session);
                None
            }
            ClientMessage::Move {
                player,
                character,
                direction,
            } => {
                // A label naming neither side can never hold the turn.
                let side = match player.parse::<Side>() {
                    Ok(side) => side,
                    Err(_) => return Some(ServerMessage::rejection(GameError::OutOfTurn)),
                };
                match shared.session.submit_move(side, &character, &direction) {
                    Ok(()) => {
                        self.broadcast_state(&shared.session);
                        None
                    }
                    Err(err) => Some(ServerMessage::rejection(err)),
                }
            }
            ClientMessage::Chat { message } => {
                shared.chat_messages.push(message);
                self.broadcast(&ServerMessage::Chat {
                    chat_messages: shared.chat_messages.clone(),
                });
                None
            }
            ClientMessage::Spectate => {
                debug!("spectator joined");
                Some(ServerMessage::State {
                    game_state: shared.session.snapshot(),
                })
            }
            ClientMessage::Replay { game_id } => match shared.replays.get(&game_id) {
                Some(replay) => Some(ServerMessage::Replay {
                    replay: replay.to_vec(),
                }),
                None => Some(ServerMessage::Error {
                    kind: "REPLAY_NOT_FOUND".to_string(),
                    message: "Replay not found!".to_string(),
                }),
            },
            ClientMessage::SaveReplay { game_id } => {
                let history = shared.session.history().clone();
                shared.replays.save(&game_id, &history);
                None
            }
        }
    }

    /// Broadcasts the current state to every subscribed connection.
    fn broadcast_state(&self, session: &GameSession) {
        self.broadcast(&ServerMessage::State {
            game_state: session.snapshot(),
        });
    }

    /// Serializes and fans a message out; a send error only means no
    /// connection is currently subscribed.
    fn broadcast(&self, msg: &ServerMessage) {
        match serde_json::to_string(msg) {
            Ok(json) => {
                let _ = self.broadcaster.send(json);
            }
            Err(err) => warn!(error = %err, "failed to serialize broadcast"),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the router: WebSocket endpoint plus static client files.
pub fn router(state: AppState, static_dir: PathBuf) -> Router {
    Router::new()
        .route("/ws", get(ws_handler))
        .fallback_service(ServeDir::new(static_dir))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

/// Binds the listener and serves until shutdown.
pub async fn serve(host: &str, port: u16, static_dir: PathBuf) -> anyhow::Result<()> {
    let state = AppState::new();
    let app = router(state, static_dir);

    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    info!(host, port, "server listening");
    axum::serve(listener, app).await?;

    Ok(())
}

async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Drives one connection: forwards broadcasts out, reads client messages
/// in. Direct replies share the sink with broadcasts via a per-connection
/// channel.
#[instrument(skip_all)]
async fn handle_socket(socket: WebSocket, state: AppState) {
    info!("new connection");

    let (mut sink, mut stream) = socket.split();
    let mut broadcasts = state.subscribe();
    let (reply_tx, mut reply_rx) = mpsc::unbounded_channel::<String>();

    let mut send_task = tokio::spawn(async move {
        loop {
            let text = tokio::select! {
                reply = reply_rx.recv() => match reply {
                    Some(text) => text,
                    None => break,
                },
                update = broadcasts.recv() => match update {
                    Ok(text) => text,
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        warn!(skipped, "connection lagged behind broadcasts");
                        continue;
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                },
            };
            if sink.send(Message::Text(text.into())).await.is_err() {
                break;
            }
        }
    });

    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(msg)) = stream.next().await {
            let Message::Text(text) = msg else { continue };
            let reply = match serde_json::from_str::<ClientMessage>(&text) {
                Ok(client_msg) => state.handle(client_msg),
                Err(err) => {
                    warn!(error = %err, "unparseable client message");
                    Some(ServerMessage::Error {
                        kind: "MALFORMED".to_string(),
                        message: format!("Unparseable message: {err}"),
                    })
                }
            };
            if let Some(reply) = reply {
                match serde_json::to_string(&reply) {
                    Ok(json) => {
                        if reply_tx.send(json).is_err() {
                            break;
                        }
                    }
                    Err(err) => warn!(error = %err, "failed to serialize reply"),
                }
            }
        }
    });

    // Either half finishing tears the connection down.
    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }

    info!("connection closed");
}
