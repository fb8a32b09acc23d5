//! Workspace-wide base error type.
//!
//! Sub-crates define their own error enums and wrap `EcError` as one variant
//! where they need to surface a core failure.

use thiserror::Error;

/// The base error type for `ec-core`.
#[derive(Debug, Error)]
pub enum EcError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `ec-core`.
pub type EcResult<T> = Result<T, EcError>;
