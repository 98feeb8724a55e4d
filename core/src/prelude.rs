/// Common error type for the decision engine.
///
/// `NoFeasibleInterceptor` is deliberately absent: an empty candidate set is
/// a valid terminal outcome and surfaces as a `Decision` variant, not an
/// error.
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("reference data inconsistency: {0}")]
    ReferenceData(String),
}

pub type EngineResult<T> = Result<T, EngineError>;
