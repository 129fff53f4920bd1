use crate::util::ID;

/// One of the two player slots in a session.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Seat {
    One,
    Two,
}

impl Seat {
    pub fn other(self) -> Seat {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::One => write!(f, "player 1"),
            Seat::Two => write!(f, "player 2"),
        }
    }
}

/// Opaque credential issued to a player at pairing time.
/// Identifies exactly one seat of exactly one session, and is never
/// reused or reassigned.
pub type Token = ID<Seat>;
