//! Tests for message dispatch through the shared server state.

use grid_skirmish::{AppState, ClientMessage, Phase, ServerMessage};

fn init(player: &str, characters: &[&str]) -> ClientMessage {
    ClientMessage::Init {
        player: player.to_string(),
        characters: characters.iter().map(|s| s.to_string()).collect(),
    }
}

#[test]
fn test_spectate_returns_current_state() {
    let state = AppState::new();

    match state.handle(ClientMessage::Spectate) {
        Some(ServerMessage::State { game_state }) => {
            assert_eq!(game_state.phase(), &Phase::AwaitingInit);
        }
        other => panic!("expected State, got {other:?}"),
    }
}

#[test]
fn test_init_with_invalid_side_is_rejected() {
    let state = AppState::new();

    match state.handle(init("C", &["P"])) {
        Some(ServerMessage::Error { kind, .. }) => assert_eq!(kind, "INVALID_SIDE"),
        other => panic!("expected Error, got {other:?}"),
    }
}

#[test]
fn test_move_with_unparseable_side_is_out_of_turn() {
    let state = AppState::new();
    assert!(state.handle(init("A", &["P"])).is_none());
    assert!(state.handle(init("B", &["P"])).is_none());

    let msg = ClientMessage::Move {
        player: "Z".to_string(),
        character: "P".to_string(),
        direction: "RIGHT".to_string(),
    };
    match state.handle(msg) {
        Some(ServerMessage::Error { kind, .. }) => assert_eq!(kind, "OUT_OF_TURN"),
        other => panic!("expected Error, got {other:?}"),
    }
}

#[test]
fn test_accepted_move_replies_nothing_to_requester() {
    let state = AppState::new();
    state.handle(init("A", &["P"]));
    state.handle(init("B", &["P"]));

    let msg = ClientMessage::Move {
        player: "A".to_string(),
        character: "P".to_string(),
        direction: "RIGHT".to_string(),
    };
    // Accepted moves reach everyone via broadcast, not a direct reply.
    assert!(state.handle(msg).is_none());
}

#[test]
fn test_rejected_move_replies_only_to_requester() {
    let state = AppState::new();
    state.handle(init("A", &["P"]));
    state.handle(init("B", &["P"]));

    let msg = ClientMessage::Move {
        player: "B".to_string(),
        character: "P".to_string(),
        direction: "LEFT".to_string(),
    };
    match state.handle(msg) {
        Some(ServerMessage::Error { kind, .. }) => assert_eq!(kind, "OUT_OF_TURN"),
        other => panic!("expected Error, got {other:?}"),
    }
}

#[test]
fn test_save_and_fetch_replay() {
    let state = AppState::new();
    state.handle(init("A", &["P"]));
    state.handle(init("B", &["P"]));
    state.handle(ClientMessage::Move {
        player: "A".to_string(),
        character: "P".to_string(),
        direction: "RIGHT".to_string(),
    });

    let saved = state.handle(ClientMessage::SaveReplay {
        game_id: "game-1".to_string(),
    });
    assert!(saved.is_none());

    match state.handle(ClientMessage::Replay {
        game_id: "game-1".to_string(),
    }) {
        Some(ServerMessage::Replay { replay }) => {
            assert_eq!(replay.len(), 1);
            assert_eq!(replay[0].character, "P");
        }
        other => panic!("expected Replay, got {other:?}"),
    }
}

#[test]
fn test_missing_replay_is_a_typed_miss() {
    let state = AppState::new();

    match state.handle(ClientMessage::Replay {
        game_id: "nope".to_string(),
    }) {
        Some(ServerMessage::Error { kind, .. }) => assert_eq!(kind, "REPLAY_NOT_FOUND"),
        other => panic!("expected Error, got {other:?}"),
    }
}

#[test]
fn test_chat_broadcasts_full_log() {
    let state = AppState::new();
    let mut rx = state.subscribe();

    assert!(
        state
            .handle(ClientMessage::Chat {
                message: "gg".to_string()
            })
            .is_none()
    );

    let json = rx.try_recv().expect("chat broadcast");
    let msg: ServerMessage = serde_json::from_str(&json).expect("valid reply");
    assert_eq!(
        msg,
        ServerMessage::Chat {
            chat_messages: vec!["gg".to_string()]
        }
    );
}
