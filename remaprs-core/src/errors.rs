use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum IntervalSetError {
    #[error("Cannot take the minimum of an empty interval set")]
    EmptySet,
}
