use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error(
        "line {line_number}: expected 2 moves, found {token_count} in {line:?} (score so far: {partial_total})"
    )]
    MalformedLine {
        line_number: usize,
        line: String,
        token_count: usize,
        partial_total: i64,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
