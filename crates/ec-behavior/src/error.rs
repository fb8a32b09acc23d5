use thiserror::Error;

use crate::TreeRole;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("behavior configuration error: {0}")]
    Config(String),

    #[error("could not start {role} tree from asset {asset:?}: {reason}")]
    StartFailed {
        role:   TreeRole,
        asset:  String,
        reason: String,
    },
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
