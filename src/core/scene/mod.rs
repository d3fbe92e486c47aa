//=========================================================================
// Scene System
//=========================================================================
//
// Scene contract, factory, transition state machine and manager.
//
// Architecture:
//   SceneManager
//     ├─ factory: SceneFactory            (SceneId → Box<dyn Scene>)
//     ├─ transitions: SceneTransitionManager (Idle/FadingOut/Switching/FadingIn)
//     └─ active: ActiveScene              (exit-once guard around the scene)
//
// Flow:
//   update(dt) ─┬─ idle ──────────► Scene::update ──► SceneContext requests
//               └─ transitioning ─► advance() ──► handoff at Switching
//
//=========================================================================

//=== Module Declarations =================================================

mod active_scene;
mod config;
mod error;
mod factory;
mod scene_id;
mod scene_manager;
mod transition;
mod transition_queue;

//=== Public API ==========================================================

pub use config::SceneConfig;
pub use error::SceneError;
pub use factory::{SceneConstructor, SceneFactory};
pub use scene_id::SceneId;
pub use scene_manager::SceneManager;
pub use transition::{Blend, Easing, SceneTransitionManager, TransitionState};
pub use transition_queue::{TransitionEvent, TransitionQueue};

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;
use crate::core::services::RenderSurface;

//=== Scene Trait =========================================================

/// A self-contained unit of screen behavior.
///
/// Scenes are built by the [`SceneFactory`], owned exclusively by the
/// [`SceneManager`] and dropped when left. A fresh instance is created on
/// every entry.
///
/// # Lifecycle
///
/// ```text
/// create ─► enter ─► (update / handle_input / render)* ─► exit ─► drop
/// ```
///
/// `exit` runs exactly once, including when `enter` fails part-way.
/// Once a transition away from the scene starts it only receives `render`.
///
/// # Minimal Implementation
///
/// ```rust
/// use stagecraft::prelude::*;
///
/// struct Blank;
///
/// impl Scene for Blank {
///     fn update(&mut self, _dt: f32, _ctx: &mut SceneContext) {}
///     fn render(&self, _surface: &mut dyn RenderSurface) {}
/// }
/// ```
pub trait Scene: Send {
    /// Called once when the scene becomes active.
    ///
    /// An error aborts the switch to this scene.
    fn enter(&mut self) -> Result<(), SceneError> {
        Ok(())
    }

    /// Advances scene logic by `dt` seconds.
    fn update(&mut self, dt: f32, ctx: &mut SceneContext);

    /// Reacts to one input event. Only called while no transition runs.
    fn handle_input(&mut self, _event: &InputEvent, _ctx: &mut SceneContext) {}

    /// Draws the scene. Takes `&self`: rendering never changes scene state.
    fn render(&self, surface: &mut dyn RenderSurface);

    /// Called once before the scene is dropped.
    fn exit(&mut self) {}
}

//=== SceneContext ========================================================

/// Requests a scene can make while updating or handling input.
///
/// The manager drains the context after every call into the scene.
/// Multiple navigation requests within one call collapse to the last one.
#[derive(Debug, Default)]
pub struct SceneContext {
    scene_request: Option<SceneId>,
    quit: bool,
}

impl SceneContext {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Asks the manager to transition to `target`.
    pub fn request_scene_change(&mut self, target: SceneId) {
        self.scene_request = Some(target);
    }

    /// Asks the application to shut down.
    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// The navigation request recorded so far, if any.
    pub fn scene_request(&self) -> Option<SceneId> {
        self.scene_request
    }

    /// Returns true if quitting was requested.
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub(crate) fn take_scene_request(&mut self) -> Option<SceneId> {
        self.scene_request.take()
    }
}

//=== Tests ===============================================================
