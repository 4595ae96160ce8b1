//! Translation from simulation events to wire notes

use pong_core::{GameState, ObjectKind, Session, Side, SoundCue, Transition};
use proto::{Note, ObjectTag, PlayerSide, SoundKind, StateKind};

pub fn player_side(side: Side) -> PlayerSide {
    match side {
        Side::Left => PlayerSide::Left,
        Side::Right => PlayerSide::Right,
    }
}

pub fn object_tag(kind: ObjectKind) -> ObjectTag {
    match kind {
        ObjectKind::LeftPaddle => ObjectTag::LeftPaddle,
        ObjectKind::RightPaddle => ObjectTag::RightPaddle,
        ObjectKind::Ball => ObjectTag::Ball,
    }
}

pub fn sound_kind(cue: SoundCue) -> SoundKind {
    match cue {
        SoundCue::Ping => SoundKind::Ping,
        SoundCue::Pong => SoundKind::Pong,
        SoundCue::GameOver => SoundKind::GameOver,
        SoundCue::Start => SoundKind::Start,
    }
}

pub fn state_kind(state: GameState) -> StateKind {
    match state {
        GameState::Play => StateKind::Play,
        GameState::Pause => StateKind::Pause,
        GameState::Miss => StateKind::Miss,
        GameState::Stop => StateKind::Stop,
    }
}

/// Append everything the last frame produced to the tape
pub fn record_frame(session: &mut Session, tape: &mut Vec<Note>) {
    let events = session.events().clone();
    for kind in &events.moved {
        let (x, y) = match kind {
            ObjectKind::Ball => match session.ball() {
                Some(ball) => (ball.pos.x, ball.pos.y),
                None => continue,
            },
            ObjectKind::LeftPaddle => match session.paddle(Side::Left) {
                Some(p) => (p.x, p.y),
                None => continue,
            },
            ObjectKind::RightPaddle => match session.paddle(Side::Right) {
                Some(p) => (p.x, p.y),
                None => continue,
            },
        };
        tape.push(Note::Position {
            object: object_tag(*kind),
            x,
            y,
        });
    }
    if events.resized {
        let field = session.field();
        tape.push(Note::FieldResized {
            width: field.width,
            height: field.height,
        });
    }
    for update in &events.counters {
        tape.push(Note::Counter {
            count: update.count,
            side: update.side.map(player_side),
        });
    }
    if let Some(side) = events.missed {
        tape.push(Note::Missed {
            side: player_side(side),
        });
    }
    if let Some(side) = events.loser {
        tape.push(Note::Loser {
            side: player_side(side),
        });
    }
    for cue in session.drain_sounds() {
        tape.push(Note::Sound {
            kind: sound_kind(cue),
        });
    }
}

pub fn record_transition(transition: Option<Transition>, tape: &mut Vec<Note>) {
    if let Some(t) = transition {
        tape.push(Note::StateChanged {
            old: state_kind(t.from),
            new: state_kind(t.to),
        });
    }
}
