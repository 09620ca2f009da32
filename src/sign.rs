use tracing::warn;

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum HandSign {
    Rock,
    Paper,
    Scissors,
    /// Stand-in for a token that names no sign. Scores nothing.
    Unknown,
}

/// Each sign beats the one before it, wrapping around.
const CYCLE: [HandSign; 3] = [HandSign::Rock, HandSign::Paper, HandSign::Scissors];

impl HandSign {
    /// Reads a move from either column: A/X, B/Y and C/Z are Rock, Paper and
    /// Scissors.
    pub fn from_move(token: &str) -> HandSign {
        match token {
            "A" | "X" => HandSign::Rock,
            "B" | "Y" => HandSign::Paper,
            "C" | "Z" => HandSign::Scissors,
            _ => {
                warn!(token, "unrecognized hand sign");
                HandSign::Unknown
            }
        }
    }

    /// Reads a move from the opponent's column only.
    pub fn from_opponent_move(token: &str) -> HandSign {
        match token {
            "A" => HandSign::Rock,
            "B" => HandSign::Paper,
            "C" => HandSign::Scissors,
            _ => {
                warn!(token, "unrecognized opponent hand sign");
                HandSign::Unknown
            }
        }
    }

    fn cycle_index(self) -> Option<usize> {
        match self {
            HandSign::Rock => Some(0),
            HandSign::Paper => Some(1),
            HandSign::Scissors => Some(2),
            HandSign::Unknown => None,
        }
    }

    fn step(self, offset: usize) -> HandSign {
        match self.cycle_index() {
            Some(i) => CYCLE[(i + offset) % CYCLE.len()],
            None => HandSign::Unknown,
        }
    }

    /// The sign that beats this one.
    pub fn winner_against(self) -> HandSign {
        self.step(1)
    }

    /// The sign this one beats.
    pub fn loser_against(self) -> HandSign {
        self.step(2)
    }

    pub fn beats(self, other: HandSign) -> bool {
        match (self.cycle_index(), other.cycle_index()) {
            (Some(a), Some(b)) => (a + CYCLE.len() - b) % CYCLE.len() == 1,
            _ => false,
        }
    }
}
