use itertools::Itertools;
use std::str::Split;

/// One line of the strategy guide, split into its two columns.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Round<'a> {
    pub opponent: &'a str,
    pub own: &'a str,
}

/// Columns are separated by exactly one space; a doubled space makes an
/// empty token.
pub fn tokens(line: &str) -> Split<'_, char> {
    line.split(' ')
}

impl<'a> Round<'a> {
    /// Returns `None` unless the line holds exactly two tokens.
    pub fn parse(line: &'a str) -> Option<Round<'a>> {
        let (opponent, own) = tokens(line).collect_tuple()?;
        Some(Round { opponent, own })
    }
}
