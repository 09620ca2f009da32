use crate::sign::HandSign;
use tracing::warn;

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Outcome {
    Lose,
    Draw,
    Win,
    Unknown,
}

impl Outcome {
    /// Reads the second column as an instruction: X lose, Y draw, Z win.
    pub fn from_move(token: &str) -> Outcome {
        match token {
            "X" => Outcome::Lose,
            "Y" => Outcome::Draw,
            "Z" => Outcome::Win,
            _ => {
                warn!(token, "unrecognized desired outcome");
                Outcome::Unknown
            }
        }
    }

    pub fn score(self) -> i64 {
        match self {
            Outcome::Win => 6,
            Outcome::Draw => 3,
            Outcome::Lose => 0,
            Outcome::Unknown => 0,
        }
    }
}

/// Picks the sign that gets `desired` against `opponent`.
pub fn sign_to_choose(opponent: HandSign, desired: Outcome) -> HandSign {
    match desired {
        Outcome::Draw => opponent,
        Outcome::Win => opponent.winner_against(),
        Outcome::Lose => opponent.loser_against(),
        Outcome::Unknown => HandSign::Unknown,
    }
}
