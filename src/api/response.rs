use crate::arcade::SessionView;
use crate::game::Choice;
use crate::game::Outcome;
use crate::game::Seat;
use serde::Serialize;

#[derive(Serialize)]
pub struct ChoiceResponse {
    pub id: u8,
    pub name: String,
}

impl From<Choice> for ChoiceResponse {
    fn from(choice: Choice) -> Self {
        Self {
            id: u8::from(choice),
            name: choice.to_string(),
        }
    }
}

/// Solo and scoreboard shape: the opponent is "the computer".
#[derive(Serialize)]
pub struct PlayResponse {
    pub results: String,
    pub player: u8,
    pub computer: u8,
}

impl From<&Outcome> for PlayResponse {
    fn from(outcome: &Outcome) -> Self {
        Self {
            results: outcome.verdict().to_string(),
            player: u8::from(outcome.player_1()),
            computer: u8::from(outcome.player_2()),
        }
    }
}

/// Multiplayer history shape: both sides are named players.
/// `results` stays from player 1's perspective.
#[derive(Serialize)]
pub struct RoundResponse {
    pub results: String,
    pub player_1: u8,
    pub player_2: u8,
}

impl From<&Outcome> for RoundResponse {
    fn from(outcome: &Outcome) -> Self {
        Self {
            results: outcome.verdict().to_string(),
            player_1: u8::from(outcome.player_1()),
            player_2: u8::from(outcome.player_2()),
        }
    }
}

#[derive(Serialize)]
pub struct PlayerResponse {
    pub player_uuid: uuid::Uuid,
}

#[derive(Serialize)]
pub struct GameResponse {
    pub player_1_uuid: uuid::Uuid,
    pub player_2_uuid: uuid::Uuid,
    pub outcomes: Vec<RoundResponse>,
}

impl From<&SessionView> for GameResponse {
    fn from(view: &SessionView) -> Self {
        Self {
            player_1_uuid: view.session().token(Seat::One).inner(),
            player_2_uuid: view.session().token(Seat::Two).inner(),
            outcomes: view.outcomes().iter().map(RoundResponse::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Verdict;
    #[test]
    fn choices_serialize_with_wire_ids() {
        let response = ChoiceResponse::from(Choice::Spock);
        assert_eq!(response.id, 4);
        assert_eq!(response.name, "spock");
    }
    #[test]
    fn play_response_carries_the_original_field_names() {
        let outcome = Outcome::solo(Choice::Paper, Choice::Rock);
        let json = serde_json::to_value(PlayResponse::from(&outcome)).unwrap();
        assert_eq!(json["results"], "win");
        assert_eq!(json["player"], 2);
        assert_eq!(json["computer"], 1);
    }
    #[test]
    fn round_response_is_from_player_1_perspective() {
        let outcome = Outcome::solo(Choice::Rock, Choice::Paper);
        let response = RoundResponse::from(&outcome);
        assert_eq!(response.results, Verdict::Lose.to_string());
    }
}
