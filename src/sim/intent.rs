//! Discrete movement intents fed into each tick
//!
//! The host maps key presses/releases to these; the simulation never polls
//! input itself.

use serde::{Deserialize, Serialize};

/// One input event for a tick, applied in the order received
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Left key pressed
    MoveLeft,
    /// Right key pressed
    MoveRight,
    /// Left key released
    StopLeft,
    /// Right key released
    StopRight,
    /// Jump key pressed (opens the jump buffer)
    Jump,
    /// End the session
    Quit,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::MoveLeft => "move_left",
            Intent::MoveRight => "move_right",
            Intent::StopLeft => "stop_left",
            Intent::StopRight => "stop_right",
            Intent::Jump => "jump",
            Intent::Quit => "quit",
        }
    }

    /// Parse an intent token; unknown tokens yield `None`
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "move_left" | "left" => Some(Intent::MoveLeft),
            "move_right" | "right" => Some(Intent::MoveRight),
            "stop_left" => Some(Intent::StopLeft),
            "stop_right" => Some(Intent::StopRight),
            "jump" | "up" => Some(Intent::Jump),
            "quit" => Some(Intent::Quit),
            _ => None,
        }
    }

    /// Horizontal velocity contribution in units of the move step
    pub(crate) fn horizontal_sign(&self) -> f32 {
        match self {
            Intent::MoveLeft | Intent::StopRight => -1.0,
            Intent::MoveRight | Intent::StopLeft => 1.0,
            Intent::Jump | Intent::Quit => 0.0,
        }
    }
}

/// Parse a batch of tokens, dropping (and logging) the ones we don't know
pub fn parse_intents<S: AsRef<str>>(tokens: &[S]) -> Vec<Intent> {
    tokens
        .iter()
        .filter_map(|token| {
            let token = token.as_ref();
            let intent = Intent::parse(token);
            if intent.is_none() {
                log::warn!("Ignoring unknown intent {:?}", token);
            }
            intent
        })
        .collect()
}
