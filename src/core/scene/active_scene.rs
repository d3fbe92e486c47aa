//=========================================================================
// Active Scene Guard
//=========================================================================
//
// Owns one scene instance and guarantees its `exit` hook runs exactly
// once: either explicitly through `retire`, or on drop.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::{Scene, SceneError, SceneId};

//=== ActiveScene =========================================================

pub(crate) struct ActiveScene {
    id: SceneId,
    scene: Box<dyn Scene>,
    exited: bool,
}

impl ActiveScene {
    /// Wraps a freshly constructed scene and runs its `enter` hook.
    ///
    /// On failure the guard is dropped here, so `exit` still runs for
    /// whatever `enter` acquired before failing.
    pub(crate) fn enter(id: SceneId, scene: Box<dyn Scene>) -> Result<Self, SceneError> {
        let mut guard = Self {
            id,
            scene,
            exited: false,
        };

        debug!("Entering scene {}", id);
        guard.scene.enter()?;
        Ok(guard)
    }

    pub(crate) fn id(&self) -> SceneId {
        self.id
    }

    pub(crate) fn scene(&self) -> &dyn Scene {
        self.scene.as_ref()
    }

    pub(crate) fn scene_mut(&mut self) -> &mut dyn Scene {
        self.scene.as_mut()
    }

    /// Runs `exit` and drops the scene.
    pub(crate) fn retire(mut self) {
        self.run_exit();
    }

    fn run_exit(&mut self) {
        if !self.exited {
            self.exited = true;
            debug!("Exiting scene {}", self.id);
            self.scene.exit();
        }
    }
}

impl Drop for ActiveScene {
    fn drop(&mut self) {
        self.run_exit();
    }
}

//=== Tests ===============================================================
