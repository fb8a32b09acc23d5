use ec_core::MoveRequestId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("no active move request {0}")]
    UnknownRequest(MoveRequestId),

    #[error("movement speed must be finite and positive, got {0}")]
    InvalidSpeed(f32),
}

pub type NavigationResult<T> = Result<T, NavigationError>;
