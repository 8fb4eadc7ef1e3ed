//! Errors raised while wiring services together

use thiserror::Error;

/// A service context could not be assembled
#[derive(Debug, Error)]
pub enum ContextError {
    #[error("{0} is required")]
    MissingDependency(&'static str),
}

pub type ContextResult<T> = Result<T, ContextError>;
