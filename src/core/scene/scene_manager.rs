//=========================================================================
// Scene Manager
//=========================================================================
//
// Owns the active scene and mediates every switch request.
//
// Per-frame calls from the application loop (update, handle_input,
// render) are routed to the active scene while idle. While a transition
// runs the scene is render-only: timing is delegated to the
// SceneTransitionManager, construction to the SceneFactory, and the
// ownership handoff happens inside `update` at the Switching moment.
//
// Handoff order:
//   create(target) ─► exit(old) ─► drop(old) ─► enter(new)
//
// A construction failure happens before the old scene is touched, so it
// stays active. An `enter` failure happens after the old scene is gone;
// a fresh instance of the previous scene is built and entered instead.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, error, info, trace, warn};

//=== Internal Dependencies ===============================================

use super::active_scene::ActiveScene;
use super::{
    Blend, SceneConfig, SceneContext, SceneError, SceneFactory, SceneId,
    SceneTransitionManager, TransitionEvent, TransitionState,
};
use crate::core::input::InputEvent;
use crate::core::services::RenderSurface;

//=== Scene Manager =======================================================

/// Top-level scene orchestrator.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use stagecraft::prelude::*;
///
/// struct Blank;
/// impl Scene for Blank {
///     fn update(&mut self, _dt: f32, _ctx: &mut SceneContext) {}
///     fn render(&self, _surface: &mut dyn RenderSurface) {}
/// }
///
/// let (audio, _commands) = AudioChannel::bounded(16);
/// let services = SceneServices::new(Arc::new(AssetRegistry::new()), Arc::new(audio));
/// let mut factory = SceneFactory::new(services);
/// factory.register(SceneId::Splash, |_| Ok(Box::new(Blank)));
/// factory.register(SceneId::MainMenu, |_| Ok(Box::new(Blank)));
///
/// let config = SceneConfig::default().with_fade_out(0.2).with_fade_in(0.2);
/// let mut manager = SceneManager::new(factory, config);
/// manager.start().unwrap();
///
/// manager.request_scene_change(SceneId::MainMenu).unwrap();
/// while manager.is_transitioning() {
///     manager.update(1.0 / 60.0);
/// }
/// assert_eq!(manager.active_scene_id(), Some(SceneId::MainMenu));
/// ```
///
/// # Panics
///
/// `update`, `render`, `handle_input` and `request_scene_change` panic when
/// called before [`initialize`](Self::initialize) succeeded, and
/// `initialize` panics when called twice. Both are programming errors.
///
/// `update` also panics when a switch target fails to `enter` and the
/// previous scene can then not be rebuilt, leaving no scene to run.
pub struct SceneManager {
    factory: SceneFactory,
    config: SceneConfig,
    transitions: SceneTransitionManager,
    active: Option<ActiveScene>,
    quit_requested: bool,
}

impl SceneManager {
    //--- Construction -----------------------------------------------------

    /// Creates an uninitialized manager.
    pub fn new(factory: SceneFactory, config: SceneConfig) -> Self {
        Self {
            transitions: SceneTransitionManager::new(&config),
            factory,
            config,
            active: None,
            quit_requested: false,
        }
    }

    /// Constructs and enters the first scene, without a transition.
    ///
    /// # Errors
    ///
    /// Returns the factory or `enter` error. Nothing is active afterwards;
    /// the caller should treat this as a fatal startup failure.
    pub fn initialize(&mut self, initial: SceneId) -> Result<(), SceneError> {
        if let Some(active) = &self.active {
            lifecycle_violation(&format!(
                "initialize({}) called while {} is already active",
                initial,
                active.id()
            ));
        }

        let scene = self.factory.create(initial)?;
        self.active = Some(ActiveScene::enter(initial, scene)?);

        info!("Scene manager started with {}", initial);
        Ok(())
    }

    /// Initializes with the configured initial scene.
    pub fn start(&mut self) -> Result<(), SceneError> {
        self.initialize(self.config.initial_scene)
    }

    //--- Frame Loop -------------------------------------------------------

    /// Advances one frame by `dt` seconds.
    ///
    /// While idle the active scene is updated. While transitioning only
    /// the transition timer advances; reaching the switching moment
    /// performs the handoff before this call returns.
    pub fn update(&mut self, dt: f32) {
        self.expect_active("update");

        if self.transitions.is_transitioning() {
            if self.transitions.advance(dt) == TransitionState::Switching {
                self.perform_switch();
            }
            return;
        }

        let mut ctx = SceneContext::new();
        self.expect_active_mut("update").scene_mut().update(dt, &mut ctx);
        self.apply_context(ctx);
    }

    /// Forwards one input event to the active scene.
    ///
    /// Events received while transitioning are dropped.
    pub fn handle_input(&mut self, event: &InputEvent) {
        self.expect_active("handle_input");

        if self.transitions.is_transitioning() {
            trace!("Dropping {:?} during {:?}", event, self.transitions.state());
            return;
        }

        let mut ctx = SceneContext::new();
        self.expect_active_mut("handle_input")
            .scene_mut()
            .handle_input(event, &mut ctx);
        self.apply_context(ctx);
    }

    /// Draws the visible scene with its current blend weight.
    ///
    /// Idle: full opacity. Fading out: the outgoing weight. Fading in: the
    /// incoming weight. Nothing is drawn at zero weight.
    pub fn render(&self, surface: &mut dyn RenderSurface) {
        let active = self.expect_active("render");

        let weight = self.render_weight();
        if weight <= 0.0 {
            return;
        }

        surface.set_opacity(weight);
        active.scene().render(surface);
        surface.set_opacity(1.0);
    }

    //--- Navigation -------------------------------------------------------

    /// Requests a transition to `target`.
    ///
    /// - Idle and `target` already active: no-op.
    /// - Idle otherwise: a fade-out starts.
    /// - Transitioning: `target` becomes the pending request, overwriting
    ///   any earlier one.
    ///
    /// # Errors
    ///
    /// [`SceneError::InvalidRequest`] if `target` is not registered. The
    /// state machine is left untouched.
    pub fn request_scene_change(&mut self, target: SceneId) -> Result<(), SceneError> {
        let current = self.expect_active("request_scene_change").id();

        if !self.factory.is_registered(target) {
            warn!("Rejected request for unregistered scene {}", target);
            return Err(SceneError::InvalidRequest(target));
        }

        if !self.transitions.is_transitioning() && target == current {
            debug!("Scene {} is already active, ignoring request", target);
            return Ok(());
        }

        self.transitions.start_transition(target);
        Ok(())
    }

    //--- Queries ----------------------------------------------------------

    /// Identifier of the active scene, `None` before initialization.
    pub fn active_scene_id(&self) -> Option<SceneId> {
        self.active.as_ref().map(ActiveScene::id)
    }

    /// Returns true once a scene has been entered.
    pub fn is_initialized(&self) -> bool {
        self.active.is_some()
    }

    /// Current transition phase.
    pub fn state(&self) -> TransitionState {
        self.transitions.state()
    }

    /// Progress of the current phase, in [0, 1].
    pub fn progress(&self) -> f32 {
        self.transitions.progress()
    }

    /// Blend weights for the current frame.
    pub fn blend(&self) -> Blend {
        self.transitions.current_blend()
    }

    /// Destination of the running transition.
    pub fn transition_target(&self) -> Option<SceneId> {
        self.transitions.target()
    }

    /// Request waiting for the next eligible point.
    pub fn pending_request(&self) -> Option<SceneId> {
        self.transitions.pending()
    }

    /// Returns true while a transition runs; input is dropped meanwhile.
    pub fn is_transitioning(&self) -> bool {
        self.transitions.is_transitioning()
    }

    /// Returns true once a scene asked the application to quit.
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Drains transition events recorded since the last call.
    pub fn take_events(&mut self) -> Vec<TransitionEvent> {
        self.transitions.take_events()
    }

    /// The configuration this manager was built with.
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// The factory used to build scenes.
    pub fn factory(&self) -> &SceneFactory {
        &self.factory
    }

    //--- Internal Helpers -------------------------------------------------

    fn render_weight(&self) -> f32 {
        let blend = self.transitions.current_blend();
        match self.transitions.state() {
            TransitionState::FadingOut => blend.outgoing,
            TransitionState::Idle
            | TransitionState::Switching
            | TransitionState::FadingIn => blend.incoming,
        }
    }

    fn perform_switch(&mut self) {
        let Some(target) = self.transitions.take_switch_target() else {
            return;
        };
        let outgoing = self.expect_active("update").id();

        let scene = match self.factory.create(target) {
            Ok(scene) => scene,
            Err(err) => {
                self.abort_switch(outgoing, target, err);
                return;
            }
        };

        if let Some(previous) = self.active.take() {
            previous.retire();
        }

        match ActiveScene::enter(target, scene) {
            Ok(incoming) => {
                self.active = Some(incoming);
                info!("Switched scene {} -> {}", outgoing, target);
                self.transitions.record(TransitionEvent::SceneSwitched {
                    from: outgoing,
                    to: target,
                });
                self.transitions.complete_switch();
            }
            Err(err) => {
                self.restore(outgoing);
                self.abort_switch(outgoing, target, err);
            }
        }
    }

    fn abort_switch(&mut self, outgoing: SceneId, target: SceneId, err: SceneError) {
        error!("Switch {} -> {} aborted: {}", outgoing, target, err);
        self.transitions.record(TransitionEvent::Aborted { target, error: err });
        self.transitions.abort_switch();
    }

    fn restore(&mut self, id: SceneId) {
        warn!("Rebuilding {} after failed switch", id);

        let restored = self
            .factory
            .create(id)
            .and_then(|scene| ActiveScene::enter(id, scene));

        match restored {
            Ok(active) => self.active = Some(active),
            Err(err) => panic!(
                "SceneManager: scene {} could not be restored after a failed switch: {}",
                id, err
            ),
        }
    }

    fn apply_context(&mut self, mut ctx: SceneContext) {
        if ctx.quit_requested() && !self.quit_requested {
            info!("Quit requested by scene {:?}", self.active_scene_id());
            self.quit_requested = true;
        }

        if let Some(target) = ctx.take_scene_request() {
            if let Err(err) = self.request_scene_change(target) {
                warn!("Scene request ignored: {}", err);
            }
        }
    }

    #[track_caller]
    fn expect_active(&self, operation: &str) -> &ActiveScene {
        match &self.active {
            Some(active) => active,
            None => lifecycle_violation(&format!("{} called before initialize", operation)),
        }
    }

    #[track_caller]
    fn expect_active_mut(&mut self, operation: &str) -> &mut ActiveScene {
        match &mut self.active {
            Some(active) => active,
            None => lifecycle_violation(&format!("{} called before initialize", operation)),
        }
    }
}

#[track_caller]
fn lifecycle_violation(message: &str) -> ! {
    panic!("SceneManager lifecycle violation: {}", message)
}

//=== Tests ===============================================================
