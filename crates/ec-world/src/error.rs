use ec_core::ActorId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("actor {0} not found")]
    ActorNotFound(ActorId),

    #[error("bounds must be finite, got min {min:?} max {max:?}")]
    InvalidBounds { min: [f32; 3], max: [f32; 3] },
}

pub type WorldResult<T> = Result<T, WorldError>;
