use super::choice::Choice;
use super::outcome::Outcome;
use super::seat::Seat;
use super::seat::Token;
use crate::util::ID;
use crate::util::Unique;

/// What became of a submitted move.
///
/// `NotFound` is produced by the token lookup, never by
/// [`Session::submit`] itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    NotFound,
    Accepted,
    Rejected,
    Resolved(Outcome),
}

/// A pairing of two anonymous players and the round currently in flight.
///
/// The round state machine lives here, free of any persistence concern:
/// the arcade replays these transitions inside a locked transaction and
/// mirrors the field changes back to the sessions row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    id: ID<Session>,
    player_1: Token,
    player_2: Token,
    open: bool,
    move_1: Option<Choice>,
    move_2: Option<Choice>,
}

impl Unique for Session {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

impl Session {
    /// Start a session waiting for its second player.
    /// Both tokens are minted up front; the second is handed out by
    /// [`Session::join`].
    pub fn new() -> Self {
        Self {
            id: ID::default(),
            player_1: ID::default(),
            player_2: ID::default(),
            open: true,
            move_1: None,
            move_2: None,
        }
    }

    /// Admit the second player, closing the session to further pairing.
    pub fn join(&mut self) -> Token {
        self.open = false;
        self.player_2
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Which seat a token occupies, if any.
    pub fn seat(&self, token: Token) -> Option<Seat> {
        if token == self.player_1 {
            Some(Seat::One)
        } else if token == self.player_2 {
            Some(Seat::Two)
        } else {
            None
        }
    }

    pub fn token(&self, seat: Seat) -> Token {
        match seat {
            Seat::One => self.player_1,
            Seat::Two => self.player_2,
        }
    }

    /// The move currently stored for a seat, if it has played this round.
    pub fn choice(&self, seat: Seat) -> Option<Choice> {
        match seat {
            Seat::One => self.move_1,
            Seat::Two => self.move_2,
        }
    }

    /// Accept a move for the current round.
    ///
    /// A seat that has already played is rejected, never overwritten.
    /// The second mover resolves the round: both slots are cleared in the
    /// same transition that mints the [`Outcome`], so no state ever shows
    /// an outcome alongside a stale move.
    pub fn submit(&mut self, seat: Seat, choice: Choice) -> Submission {
        if self.choice(seat).is_some() {
            return Submission::Rejected;
        }
        match self.choice(seat.other()) {
            None => {
                self.store(seat, choice);
                Submission::Accepted
            }
            Some(other) => {
                let (player_1, player_2) = match seat {
                    Seat::One => (choice, other),
                    Seat::Two => (other, choice),
                };
                self.move_1 = None;
                self.move_2 = None;
                Submission::Resolved(Outcome::versus(self.id, player_1, player_2))
            }
        }
    }

    fn store(&mut self, seat: Seat, choice: Choice) {
        match seat {
            Seat::One => self.move_1 = Some(choice),
            Seat::Two => self.move_2 = Some(choice),
        }
    }
}

impl From<tokio_postgres::Row> for Session {
    fn from(row: tokio_postgres::Row) -> Self {
        Self {
            id: ID::from(row.get::<_, uuid::Uuid>(0)),
            player_1: ID::from(row.get::<_, uuid::Uuid>(1)),
            player_2: ID::from(row.get::<_, uuid::Uuid>(2)),
            open: row.get::<_, bool>(3),
            move_1: row.get::<_, Option<i16>>(4).map(Choice::from),
            move_2: row.get::<_, Option<i16>>(5).map(Choice::from),
        }
    }
}

mod schema {
    use super::*;
    use crate::store::SESSIONS;
    use crate::store::Schema;

    impl Schema for Session {
        fn name() -> &'static str {
            SESSIONS
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                SESSIONS,
                " (
                    id          UUID PRIMARY KEY,
                    player_1    UUID NOT NULL,
                    player_2    UUID NOT NULL,
                    open        BOOLEAN NOT NULL DEFAULT TRUE,
                    move_1      SMALLINT,
                    move_2      SMALLINT,
                    created_at  TIMESTAMPTZ NOT NULL DEFAULT now()
                );"
            )
        }
        fn indices() -> &'static str {
            const_format::concatcp!(
                "CREATE UNIQUE INDEX IF NOT EXISTS idx_sessions_open ON ",
                SESSIONS,
                " (open) WHERE open;
                 CREATE UNIQUE INDEX IF NOT EXISTS idx_sessions_player_1 ON ",
                SESSIONS,
                " (player_1);
                 CREATE UNIQUE INDEX IF NOT EXISTS idx_sessions_player_2 ON ",
                SESSIONS,
                " (player_2);"
            )
        }
    }
}
