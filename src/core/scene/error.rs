//=========================================================================
// Scene Errors
//=========================================================================
//
// Recoverable failures of the scene core.
//
// Both variants abort a scene switch and leave the previously active
// scene in place. Misuse of the manager (updating before initialization,
// initializing twice) is not represented here: it panics.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt::Display;

use thiserror::Error;

//=== Internal Dependencies ===============================================

use super::SceneId;

//=== SceneError ==========================================================

/// Errors raised while constructing or entering a scene.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    /// The scene could not be built or entered, typically because a
    /// required asset or collaborator was unavailable.
    #[error("failed to construct scene `{scene}`: {reason}")]
    Construction { scene: SceneId, reason: String },

    /// No constructor is registered for the requested scene.
    #[error("scene `{0}` is not registered with the factory")]
    InvalidRequest(SceneId),
}

impl SceneError {
    /// Builds a [`SceneError::Construction`] from any displayable cause.
    pub fn construction(scene: SceneId, reason: impl Display) -> Self {
        Self::Construction {
            scene,
            reason: reason.to_string(),
        }
    }

    /// The scene the failed operation targeted.
    pub fn scene(&self) -> SceneId {
        match self {
            Self::Construction { scene, .. } => *scene,
            Self::InvalidRequest(scene) => *scene,
        }
    }
}

//=== Tests ===============================================================
