//! Move completion payloads.

use std::fmt;

use ec_core::{ActorId, MoveRequestId};

/// Terminal status of a move request.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PathFollowingCode {
    /// Destination reached.
    Success,
    /// Path blocked before arrival.
    Blocked,
    /// Unit left the path and could not recover.
    OffPath,
    /// Superseded by a newer request or cancelled.
    Aborted,
    /// Request could not be started at all.
    Invalid,
}

impl PathFollowingCode {
    pub fn as_str(self) -> &'static str {
        match self {
            PathFollowingCode::Success => "success",
            PathFollowingCode::Blocked => "blocked",
            PathFollowingCode::OffPath => "off_path",
            PathFollowingCode::Aborted => "aborted",
            PathFollowingCode::Invalid => "invalid",
        }
    }
}

impl fmt::Display for PathFollowingCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PathFollowingResult {
    pub code: PathFollowingCode,
}

impl PathFollowingResult {
    #[inline]
    pub fn new(code: PathFollowingCode) -> Self {
        Self { code }
    }

    #[inline]
    pub fn success() -> Self {
        Self::new(PathFollowingCode::Success)
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        self.code == PathFollowingCode::Success
    }
}

/// A finished request, addressed to the unit that issued it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MoveCompletion {
    pub unit:    ActorId,
    pub request: MoveRequestId,
    pub result:  PathFollowingResult,
}
