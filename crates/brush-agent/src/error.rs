//! Agent-store error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("replacement population length {got} does not match current count {expected}")]
    CountMismatch { expected: usize, got: usize },
}

pub type AgentResult<T> = Result<T, AgentError>;
