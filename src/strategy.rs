use crate::error::{Error, Result};
use crate::outcome::{sign_to_choose, Outcome};
use crate::round::{tokens, Round};
use crate::score::round_score;
use crate::sign::HandSign;
use tracing::debug;

/// How the second column of the strategy guide is read.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Rule {
    /// X/Y/Z is the sign we play.
    LiteralMove,
    /// X/Y/Z is the result we have to arrange.
    DesiredOutcome,
}

impl Rule {
    pub fn label(self) -> &'static str {
        match self {
            Rule::LiteralMove => "Total score (part 1)",
            Rule::DesiredOutcome => "Total score (part 2)",
        }
    }

    /// Returns (opponent, me).
    pub fn signs(self, round: &Round) -> (HandSign, HandSign) {
        match self {
            Rule::LiteralMove => (
                HandSign::from_move(round.opponent),
                HandSign::from_move(round.own),
            ),
            Rule::DesiredOutcome => {
                let them = HandSign::from_opponent_move(round.opponent);
                let desired = Outcome::from_move(round.own);
                (them, sign_to_choose(them, desired))
            }
        }
    }

    pub fn score_round(self, round: &Round) -> i64 {
        let (them, me) = self.signs(round);
        round_score(them, me)
    }
}

/// Sums the score of every line in order, stopping at the first line that is
/// not exactly two tokens.
pub fn total_score<S: AsRef<str>>(lines: &[S], rule: Rule) -> Result<i64> {
    let mut running_total: i64 = 0;

    for (index, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        let round = Round::parse(line).ok_or_else(|| Error::MalformedLine {
            line_number: index + 1,
            line: line.to_string(),
            token_count: tokens(line).count(),
            partial_total: running_total,
        })?;

        let score = rule.score_round(&round);
        debug!(line_number = index + 1, line, score, "scored round");

        running_total += score;
    }

    Ok(running_total)
}
