use crate::util::Arbitrary;

/// One of the five playable moves.
///
/// Discriminants are the stable wire identifiers (1..=5). They also appear
/// as SMALLINT values in the database, so they must never be renumbered.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Choice {
    Rock = 1,
    Paper = 2,
    Scissors = 3,
    Spock = 4,
    Lizard = 5,
}

impl Choice {
    /// All five moves in wire-id order.
    pub const fn all() -> [Choice; 5] {
        [
            Choice::Rock,
            Choice::Paper,
            Choice::Scissors,
            Choice::Spock,
            Choice::Lizard,
        ]
    }

    /// The two moves this one defeats.
    ///
    /// The relation is a tournament on 5 nodes: each move beats exactly
    /// two others and loses to the remaining two.
    pub const fn defeats(self) -> [Choice; 2] {
        match self {
            Choice::Paper => [Choice::Rock, Choice::Spock],
            Choice::Rock => [Choice::Lizard, Choice::Scissors],
            Choice::Lizard => [Choice::Spock, Choice::Paper],
            Choice::Spock => [Choice::Scissors, Choice::Rock],
            Choice::Scissors => [Choice::Lizard, Choice::Paper],
        }
    }

    pub fn beats(self, other: Choice) -> bool {
        self.defeats().contains(&other)
    }
}

impl TryFrom<u8> for Choice {
    type Error = anyhow::Error;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Choice::Rock),
            2 => Ok(Choice::Paper),
            3 => Ok(Choice::Scissors),
            4 => Ok(Choice::Spock),
            5 => Ok(Choice::Lizard),
            _ => Err(anyhow::anyhow!("invalid choice id {}", n)),
        }
    }
}

impl From<i16> for Choice {
    fn from(n: i16) -> Choice {
        match n {
            1 => Choice::Rock,
            2 => Choice::Paper,
            3 => Choice::Scissors,
            4 => Choice::Spock,
            5 => Choice::Lizard,
            _ => panic!("invalid choice id {}", n),
        }
    }
}

impl From<Choice> for u8 {
    fn from(c: Choice) -> u8 {
        c as u8
    }
}
impl From<Choice> for i16 {
    fn from(c: Choice) -> i16 {
        c as i16
    }
}

impl Arbitrary for Choice {
    fn random() -> Self {
        Self::try_from(rand::random_range(1u8..=5)).expect("range is valid")
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Choice::Rock => "rock",
                Choice::Paper => "paper",
                Choice::Scissors => "scissors",
                Choice::Spock => "spock",
                Choice::Lizard => "lizard",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn tournament_is_antisymmetric() {
        for a in Choice::all() {
            for b in Choice::all() {
                if a == b {
                    assert!(!a.beats(b));
                } else {
                    assert!(a.beats(b) ^ b.beats(a));
                }
            }
        }
    }
    #[test]
    fn each_choice_beats_exactly_two() {
        for a in Choice::all() {
            let wins = Choice::all().iter().filter(|b| a.beats(**b)).count();
            let losses = Choice::all().iter().filter(|b| b.beats(a)).count();
            assert_eq!(wins, 2);
            assert_eq!(losses, 2);
        }
    }
    #[test]
    fn wire_ids_round_trip() {
        for c in Choice::all() {
            assert_eq!(c, Choice::try_from(u8::from(c)).unwrap());
            assert_eq!(c, Choice::from(i16::from(c)));
        }
    }
    #[test]
    fn wire_ids_are_one_through_five() {
        let ids = Choice::all().map(u8::from);
        assert_eq!(ids, [1, 2, 3, 4, 5]);
    }
    #[test]
    fn out_of_range_ids_are_rejected() {
        assert!(Choice::try_from(0u8).is_err());
        assert!(Choice::try_from(6u8).is_err());
    }
    #[test]
    fn random_choices_are_valid() {
        for _ in 0..100 {
            let c = Choice::random();
            assert!(Choice::all().contains(&c));
        }
    }
}
