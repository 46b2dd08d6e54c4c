/// Failures of the pure computation core.
///
/// These are all local, synchronous errors: there is no I/O and no partial
/// state behind them, so no retry semantics apply. The presentation layer is
/// responsible for turning them into user-facing messages.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum CoreError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("the immediate window average intensity is zero, savings are undefined")]
    DivisionByZero,

    #[error("insufficient forecast data: got {actual} points, need at least {needed}")]
    InsufficientData { needed: usize, actual: usize },
}
