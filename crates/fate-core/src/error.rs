//! Error types for the sheet model.

use crate::aspect::AspectId;
use crate::character::StuntId;
use crate::consequence::ConsequenceId;
use crate::stress::TrackId;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when mutating a character sheet.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The referenced aspect does not exist on the character.
    #[error("aspect not found: {0}")]
    AspectNotFound(AspectId),

    /// The referenced stunt does not exist on the character.
    #[error("stunt not found: {0}")]
    StuntNotFound(StuntId),

    /// The referenced consequence does not exist on the character.
    #[error("consequence not found: {0}")]
    ConsequenceNotFound(ConsequenceId),

    /// The referenced stress track does not exist on the character.
    #[error("stress track not found: {0}")]
    TrackNotFound(TrackId),

    /// The stress track is a built-in one and cannot be removed.
    #[error("stress track \"{0}\" is protected and cannot be removed")]
    ProtectedTrack(String),
}
