use super::Arcade;
use crate::game::Choice;
use crate::game::Outcome;
use crate::game::Seat;
use crate::game::Session;
use crate::game::Submission;
use crate::game::Token;
use crate::store::PgErr;
use crate::util::Unique;

const RECORD: &'static str = r#"
    INSERT INTO outcomes (id, session_id, move_1, move_2, verdict)
    VALUES ($1, $2, $3, $4, $5)
"#;

impl Arcade {
    /// Accept a player's move for their session's current round.
    ///
    /// The whole operation is one transaction holding a `FOR UPDATE`
    /// lock on the session row, so concurrent submissions for the same
    /// session are serialized and only one caller can be the round's
    /// second mover. The state transition itself is computed by
    /// [`Session::submit`]; this method mirrors it into the store:
    /// nothing on `Rejected`, one column on `Accepted`, and on
    /// `Resolved` the outcome insert plus both columns cleared in the
    /// same commit.
    pub async fn submit(&self, token: Token, choice: Choice) -> Result<Submission, PgErr> {
        const FIND: &'static str = r#"
            SELECT id, player_1, player_2, open, move_1, move_2
            FROM sessions
            WHERE player_1 = $1 OR player_2 = $1
            FOR UPDATE
        "#;
        const SAVE_1: &'static str = "UPDATE sessions SET move_1 = $2 WHERE id = $1";
        const SAVE_2: &'static str = "UPDATE sessions SET move_2 = $2 WHERE id = $1";
        const RESET: &'static str = "UPDATE sessions SET move_1 = NULL, move_2 = NULL WHERE id = $1";
        let mut client = self.client.lock().await;
        let tx = client.transaction().await?;
        let uuid = token.inner();
        let Some(row) = tx.query_opt(FIND, &[&uuid]).await? else {
            return Ok(Submission::NotFound);
        };
        let mut session = Session::from(row);
        let seat = session.seat(token).expect("row matched by token");
        let id = session.id().inner();
        match session.submit(seat, choice) {
            Submission::Accepted => {
                let save = match seat {
                    Seat::One => SAVE_1,
                    Seat::Two => SAVE_2,
                };
                let played = i16::from(choice);
                tx.execute(save, &[&id, &played]).await?;
                tx.commit().await?;
                log::debug!("{} is waiting on {} in session {}", seat, seat.other(), id);
                Ok(Submission::Accepted)
            }
            Submission::Rejected => {
                log::debug!("{} already played this round in session {}", seat, id);
                Ok(Submission::Rejected)
            }
            Submission::Resolved(outcome) => {
                let record = outcome.id().inner();
                let player_1 = i16::from(outcome.player_1());
                let player_2 = i16::from(outcome.player_2());
                let verdict = outcome.verdict().to_string();
                tx.execute(RECORD, &[&record, &id, &player_1, &player_2, &verdict])
                    .await?;
                tx.execute(RESET, &[&id]).await?;
                tx.commit().await?;
                log::info!("session {} resolved a round: {}", id, outcome.verdict());
                Ok(Submission::Resolved(outcome))
            }
            Submission::NotFound => unreachable!("lookup precedes submission"),
        }
    }

    /// Resolve a solo round against the computer.
    ///
    /// No shared mutable state is touched, so a plain insert suffices.
    pub async fn solo(&self, player: Choice, computer: Choice) -> Result<Outcome, PgErr> {
        let outcome = Outcome::solo(player, computer);
        let record = outcome.id().inner();
        let session = None::<uuid::Uuid>;
        let player_1 = i16::from(outcome.player_1());
        let player_2 = i16::from(outcome.player_2());
        let verdict = outcome.verdict().to_string();
        let client = self.client.lock().await;
        client
            .execute(RECORD, &[&record, &session, &player_1, &player_2, &verdict])
            .await?;
        Ok(outcome)
    }
}
