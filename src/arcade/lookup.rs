use super::Arcade;
use crate::game::Outcome;
use crate::game::Session;
use crate::game::Token;
use crate::store::PgErr;
use crate::util::Unique;

/// Read-only projection of a session and its full outcome history,
/// identical regardless of which of the two tokens queried it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    session: Session,
    outcomes: Vec<Outcome>,
}

impl SessionView {
    pub fn session(&self) -> &Session {
        &self.session
    }
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }
}

impl Arcade {
    /// Resolve a token to its session, matching either seat.
    ///
    /// This is the polling read; the mutating path in
    /// [`Arcade::submit`](super::Arcade::submit) re-runs the lookup
    /// inside its own transaction rather than trusting this one.
    pub async fn session(&self, token: Token) -> Result<Option<SessionView>, PgErr> {
        const FIND: &'static str = r#"
            SELECT id, player_1, player_2, open, move_1, move_2
            FROM sessions
            WHERE player_1 = $1 OR player_2 = $1
        "#;
        const HISTORY: &'static str = r#"
            SELECT id, session_id, move_1, move_2, verdict
            FROM outcomes
            WHERE session_id = $1
            ORDER BY created_at
        "#;
        let client = self.client.lock().await;
        let uuid = token.inner();
        match client.query_opt(FIND, &[&uuid]).await? {
            None => Ok(None),
            Some(row) => {
                let session = Session::from(row);
                let id = session.id().inner();
                let outcomes = client
                    .query(HISTORY, &[&id])
                    .await?
                    .into_iter()
                    .map(Outcome::from)
                    .collect();
                Ok(Some(SessionView { session, outcomes }))
            }
        }
    }
}
