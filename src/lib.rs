//! Scoring for the rock/paper/scissors strategy guide.
//!
//! Each line of a strategy guide holds two tokens: the opponent's move and a
//! second column that is read either as our own move ([`Rule::LiteralMove`]) or
//! as the result we are supposed to arrange ([`Rule::DesiredOutcome`]).

pub mod cli;
pub mod error;
pub mod input;
pub mod outcome;
pub mod round;
pub mod score;
pub mod sign;
pub mod strategy;

pub use error::{Error, Result};
pub use outcome::{sign_to_choose, Outcome};
pub use round::Round;
pub use score::{outcome_score, round_score, shape_score};
pub use sign::HandSign;
pub use strategy::{total_score, Rule};
