use thiserror::Error;

/// An input value outside the range the engine accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("rule {0} is outside 0..=2186")]
    InvalidRule(i64),

    #[error("generation count {0} is outside 1..=49")]
    InvalidGenerations(i64),

    #[error("initial cell value {0} must be 1 or 2")]
    InvalidSeed(i64),
}
