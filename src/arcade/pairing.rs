use super::Arcade;
use crate::game::Seat;
use crate::game::Session;
use crate::game::Token;
use crate::store::PgErr;
use crate::util::Unique;

impl Arcade {
    /// Pair an anonymous caller into a session and hand back their token.
    ///
    /// Exactly one session may be open at a time, and the `FOR UPDATE`
    /// lock on it serializes concurrent callers: the second of two
    /// simultaneous requests blocks on the row instead of also reading
    /// `open = true`, so tokens for one session go to exactly two
    /// callers and the session closes exactly once. Odd callers beyond
    /// pairs open fresh sessions.
    pub async fn pair(&self) -> Result<Token, PgErr> {
        const FIND: &'static str = r#"
            SELECT id, player_1, player_2, open, move_1, move_2
            FROM sessions
            WHERE open
            LIMIT 1
            FOR UPDATE
        "#;
        const CLOSE: &'static str = "UPDATE sessions SET open = FALSE WHERE id = $1";
        const OPEN: &'static str = r#"
            INSERT INTO sessions (id, player_1, player_2, open)
            VALUES ($1, $2, $3, TRUE)
        "#;
        let mut client = self.client.lock().await;
        let tx = client.transaction().await?;
        match tx.query_opt(FIND, &[]).await? {
            Some(row) => {
                let mut session = Session::from(row);
                let token = session.join();
                let id = session.id().inner();
                tx.execute(CLOSE, &[&id]).await?;
                tx.commit().await?;
                log::info!("paired second player into session {}", id);
                Ok(token)
            }
            None => {
                let session = Session::new();
                let id = session.id().inner();
                let player_1 = session.token(Seat::One).inner();
                let player_2 = session.token(Seat::Two).inner();
                tx.execute(OPEN, &[&id, &player_1, &player_2]).await?;
                tx.commit().await?;
                log::info!("opened session {} awaiting second player", id);
                Ok(session.token(Seat::One))
            }
        }
    }
}
