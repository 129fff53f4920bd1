use serde::Deserialize;

/// Move submission body, shared by solo and multiplayer play.
/// `player` is the wire id (1..=5) of the chosen move.
#[derive(Deserialize)]
pub struct PlayRequest {
    pub player: u8,
}
