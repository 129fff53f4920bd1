use super::choice::Choice;
use super::session::Session;
use super::verdict::Verdict;
use crate::util::ID;
use crate::util::Unique;

/// Immutable record of one resolved round.
///
/// Created exactly once per round and never mutated. Solo-mode outcomes
/// carry no session reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    id: ID<Outcome>,
    session: Option<ID<Session>>,
    player_1: Choice,
    player_2: Choice,
    verdict: Verdict,
}

impl Unique for Outcome {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

impl Outcome {
    /// Record a resolved multiplayer round.
    pub fn versus(session: ID<Session>, player_1: Choice, player_2: Choice) -> Self {
        Self {
            id: ID::default(),
            session: Some(session),
            player_1,
            player_2,
            verdict: Verdict::between(player_1, player_2),
        }
    }
    /// Record a solo round against the computer.
    pub fn solo(player: Choice, computer: Choice) -> Self {
        Self {
            id: ID::default(),
            session: None,
            player_1: player,
            player_2: computer,
            verdict: Verdict::between(player, computer),
        }
    }
    pub fn session(&self) -> Option<ID<Session>> {
        self.session
    }
    pub fn player_1(&self) -> Choice {
        self.player_1
    }
    pub fn player_2(&self) -> Choice {
        self.player_2
    }
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }
}

impl From<tokio_postgres::Row> for Outcome {
    fn from(row: tokio_postgres::Row) -> Self {
        Self {
            id: ID::from(row.get::<_, uuid::Uuid>(0)),
            session: row.get::<_, Option<uuid::Uuid>>(1).map(ID::from),
            player_1: Choice::from(row.get::<_, i16>(2)),
            player_2: Choice::from(row.get::<_, i16>(3)),
            verdict: Verdict::from(row.get::<_, &str>(4)),
        }
    }
}

mod schema {
    use super::*;
    use crate::store::OUTCOMES;
    use crate::store::SESSIONS;
    use crate::store::Schema;

    impl Schema for Outcome {
        fn name() -> &'static str {
            OUTCOMES
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                OUTCOMES,
                " (
                    id          UUID PRIMARY KEY,
                    session_id  UUID REFERENCES ",
                SESSIONS,
                "(id),
                    move_1      SMALLINT NOT NULL,
                    move_2      SMALLINT NOT NULL,
                    verdict     TEXT NOT NULL,
                    created_at  TIMESTAMPTZ NOT NULL DEFAULT now()
                );"
            )
        }
        fn indices() -> &'static str {
            const_format::concatcp!(
                "CREATE INDEX IF NOT EXISTS idx_outcomes_session ON ",
                OUTCOMES,
                " (session_id);
                 CREATE INDEX IF NOT EXISTS idx_outcomes_created ON ",
                OUTCOMES,
                " (created_at);"
            )
        }
    }
}
