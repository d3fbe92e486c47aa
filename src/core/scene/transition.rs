//=========================================================================
// Scene Transition Manager
//=========================================================================
//
// Drives the fade state machine and its per-phase progress timer.
//
// State Machine:
// ```text
//          start_transition(X)            progress = 1
//   Idle ──────────────────────► FadingOut ─────────────► Switching
//    ▲                               ▲                        │
//    │ progress = 1                  │ pending request        │ complete_switch()
//    │ (no pending)                  │ at progress = 1        ▼
//    └────────────────────────── FadingIn ◄───────────────────┘
//
//   Switching ──abort_switch()──► Idle
// ```
//
// Requests that arrive while not Idle are stored as a single pending
// request (last write wins). A request pending during FadingOut or
// Switching replaces the target before it is constructed; one pending
// during FadingIn starts a new fade-out the moment the fade-in finishes.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::{SceneConfig, SceneId, TransitionEvent, TransitionQueue};

//=== Easing ==============================================================

/// Curve mapping linear phase progress to a blend weight.
///
/// Every variant is continuous and monotonic on [0, 1] with
/// `apply(0) == 0` and `apply(1) == 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant speed throughout.
    #[default]
    Linear,
    /// Start slow, accelerate.
    EaseIn,
    /// Start fast, decelerate.
    EaseOut,
    /// Start slow, speed up, then slow down.
    EaseInOut,
}

impl Easing {
    /// Applies the curve to `t`, clamped to [0, 1].
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

//=== TransitionState =====================================================

/// Phase of the scene transition state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransitionState {
    /// No transition; exactly one scene is active.
    #[default]
    Idle,

    /// The outgoing scene is fading away.
    FadingOut,

    /// Single-frame handoff: construct the target, retire the outgoing scene.
    Switching,

    /// The new scene is fading in.
    FadingIn,
}

//=== Blend ===============================================================

/// Opacity weights for the scenes visible this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blend {
    /// Weight of the scene being left.
    pub outgoing: f32,

    /// Weight of the scene being entered (or the active scene when idle).
    pub incoming: f32,
}

impl Blend {
    /// Blend while idle: only the active scene, fully opaque.
    pub const IDLE: Self = Self {
        outgoing: 0.0,
        incoming: 1.0,
    };
}

//=== SceneTransitionManager ==============================================

/// Transition state machine and progress timer.
///
/// The manager never touches scenes itself. It tells its owner when the
/// switching moment has been reached (`advance` returns
/// [`TransitionState::Switching`]) and which scene to build
/// ([`take_switch_target`](Self::take_switch_target)); the owner reports
/// back with [`complete_switch`](Self::complete_switch) or
/// [`abort_switch`](Self::abort_switch).
#[derive(Debug)]
pub struct SceneTransitionManager {
    fade_out: f32,
    fade_in: f32,
    easing: Easing,
    state: TransitionState,
    progress: f32,
    target: Option<SceneId>,
    pending: Option<SceneId>,
    events: TransitionQueue,
}

impl SceneTransitionManager {
    //--- Construction -----------------------------------------------------

    /// Creates an idle transition manager from the configured durations.
    pub fn new(config: &SceneConfig) -> Self {
        assert!(
            config.fade_out > 0.0 && config.fade_in > 0.0,
            "Fade durations must be positive, got {} / {}",
            config.fade_out,
            config.fade_in
        );

        Self {
            fade_out: config.fade_out,
            fade_in: config.fade_in,
            easing: config.easing,
            state: TransitionState::Idle,
            progress: 0.0,
            target: None,
            pending: None,
            events: TransitionQueue::new(),
        }
    }

    //--- Requests ---------------------------------------------------------

    /// Begins a transition toward `target`.
    ///
    /// When idle, enters `FadingOut` and returns `true`. Otherwise the
    /// running transition is left untouched, `target` overwrites any
    /// earlier pending request, and `false` is returned.
    pub fn start_transition(&mut self, target: SceneId) -> bool {
        if self.state == TransitionState::Idle {
            debug!("Starting transition to {}", target);
            self.target = Some(target);
            self.enter_phase(TransitionState::FadingOut);
            return true;
        }

        let replaced = self.pending.replace(target);
        match replaced {
            Some(previous) if previous != target => {
                warn!("Pending request for {} overwritten by {}", previous, target)
            }
            _ => debug!("Queued request for {} during {:?}", target, self.state),
        }
        self.events.push(TransitionEvent::RequestQueued { target, replaced });
        false
    }

    //--- Per-Frame Advance ------------------------------------------------

    /// Advances the current phase by `dt` seconds and returns the new state.
    ///
    /// Non-positive or non-finite `dt` values are ignored. Time left over
    /// when a phase completes is discarded; the next phase starts at 0.
    /// `Switching` does not advance: it waits for the owner's handoff.
    pub fn advance(&mut self, dt: f32) -> TransitionState {
        if !(dt.is_finite() && dt > 0.0) {
            return self.state;
        }

        match self.state {
            TransitionState::Idle | TransitionState::Switching => {}
            TransitionState::FadingOut => {
                self.progress = (self.progress + dt / self.fade_out).min(1.0);
                if self.progress >= 1.0 {
                    self.enter_phase(TransitionState::Switching);
                }
            }
            TransitionState::FadingIn => {
                self.progress = (self.progress + dt / self.fade_in).min(1.0);
                if self.progress >= 1.0 {
                    self.finish();
                }
            }
        }

        self.state
    }

    //--- Switching Handoff ------------------------------------------------

    /// Resolves the scene to construct at the switching moment.
    ///
    /// A pending request supersedes the original target. Returns `None`
    /// outside of `Switching`.
    pub fn take_switch_target(&mut self) -> Option<SceneId> {
        if self.state != TransitionState::Switching {
            return None;
        }

        if let Some(redirect) = self.pending.take() {
            debug!("Redirecting switch from {:?} to {}", self.target, redirect);
            self.target = Some(redirect);
        }

        self.target
    }

    /// Marks the handoff as done and begins fading in.
    pub fn complete_switch(&mut self) {
        if self.state != TransitionState::Switching {
            warn!("complete_switch called during {:?}, ignoring", self.state);
            return;
        }
        self.enter_phase(TransitionState::FadingIn);
    }

    /// Abandons the current transition and returns to `Idle`.
    ///
    /// Used when the target could not be constructed or entered.
    pub fn abort_switch(&mut self) {
        if self.state != TransitionState::Switching {
            warn!("abort_switch called during {:?}, ignoring", self.state);
            return;
        }
        self.pending = None;
        self.enter_phase(TransitionState::Idle);
        self.target = None;
    }

    //--- Queries ----------------------------------------------------------

    /// Current phase.
    pub fn state(&self) -> TransitionState {
        self.state
    }

    /// Linear progress of the current phase, in [0, 1].
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Destination of the running transition.
    pub fn target(&self) -> Option<SceneId> {
        self.target
    }

    /// Request waiting for the next eligible point.
    pub fn pending(&self) -> Option<SceneId> {
        self.pending
    }

    /// Returns true unless idle.
    pub fn is_transitioning(&self) -> bool {
        self.state != TransitionState::Idle
    }

    /// Opacity weights for the current frame.
    pub fn current_blend(&self) -> Blend {
        let eased = self.easing.apply(self.progress);
        match self.state {
            TransitionState::Idle => Blend::IDLE,
            TransitionState::FadingOut => Blend {
                outgoing: 1.0 - eased,
                incoming: 0.0,
            },
            TransitionState::Switching => Blend {
                outgoing: 0.0,
                incoming: 0.0,
            },
            TransitionState::FadingIn => Blend {
                outgoing: 0.0,
                incoming: eased,
            },
        }
    }

    //--- Events -----------------------------------------------------------

    /// Records an event produced by the owner of this manager.
    pub(crate) fn record(&mut self, event: TransitionEvent) {
        self.events.push(event);
    }

    /// Drains every event recorded since the last call.
    pub fn take_events(&mut self) -> Vec<TransitionEvent> {
        self.events.take()
    }

    //--- Internal Helpers -------------------------------------------------

    fn enter_phase(&mut self, to: TransitionState) {
        let from = self.state;
        self.state = to;
        self.progress = 0.0;
        self.events.push(TransitionEvent::PhaseChanged {
            from,
            to,
            target: self.target,
        });
    }

    fn finish(&mut self) {
        let arrived = self.target;
        self.enter_phase(TransitionState::Idle);
        self.target = None;

        let Some(next) = self.pending.take() else {
            return;
        };

        if Some(next) == arrived {
            debug!("Dropping pending request for {}, already active", next);
            return;
        }

        debug!("Starting queued transition to {}", next);
        self.target = Some(next);
        self.enter_phase(TransitionState::FadingOut);
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> SceneTransitionManager {
        SceneTransitionManager::new(
            &SceneConfig::default().with_fade_out(1.0).with_fade_in(0.5),
        )
    }

    fn phases(events: &[TransitionEvent]) -> Vec<TransitionState> {
        events
            .iter()
            .filter_map(|e| match e {
                TransitionEvent::PhaseChanged { to, .. } => Some(*to),
                _ => None,
            })
            .collect()
    }

    /// Drives a transition from FadingOut up to Switching.
    fn to_switching(m: &mut SceneTransitionManager) {
        while m.state() == TransitionState::FadingOut {
            m.advance(0.1);
        }
        assert_eq!(m.state(), TransitionState::Switching);
    }

    //--- Easing Tests -----------------------------------------------------

    #[test]
    fn easing_endpoints_and_monotonicity() {
        for easing in [Easing::Linear, Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6);

            let mut last = 0.0;
            for step in 0..=100 {
                let value = easing.apply(step as f32 / 100.0);
                assert!(value >= last, "{:?} not monotonic at {}", easing, step);
                last = value;
            }
        }
    }

    #[test]
    fn easing_clamps_input() {
        assert_eq!(Easing::Linear.apply(-1.0), 0.0);
        assert_eq!(Easing::EaseIn.apply(2.0), 1.0);
    }

    //--- State Machine Tests ----------------------------------------------

    #[test]
    fn starts_idle() {
        let m = manager();
        assert_eq!(m.state(), TransitionState::Idle);
        assert!(!m.is_transitioning());
        assert_eq!(m.progress(), 0.0);
        assert_eq!(m.current_blend(), Blend::IDLE);
    }

    #[test]
    fn start_from_idle_enters_fading_out() {
        let mut m = manager();
        assert!(m.start_transition(SceneId::MainMenu));
        assert_eq!(m.state(), TransitionState::FadingOut);
        assert_eq!(m.target(), Some(SceneId::MainMenu));
        assert_eq!(m.progress(), 0.0);
        assert!(m.is_transitioning());
    }

    #[test]
    fn fading_out_accumulates_progress() {
        let mut m = manager();
        m.start_transition(SceneId::MainMenu);

        m.advance(0.25);
        assert!((m.progress() - 0.25).abs() < 1e-6);
        assert!((m.current_blend().outgoing - 0.75).abs() < 1e-6);
        assert_eq!(m.current_blend().incoming, 0.0);

        m.advance(0.25);
        assert!((m.progress() - 0.5).abs() < 1e-6);
        assert_eq!(m.state(), TransitionState::FadingOut);
    }

    #[test]
    fn fading_out_completes_into_switching_with_reset_progress() {
        let mut m = manager();
        m.start_transition(SceneId::MainMenu);

        assert_eq!(m.advance(1.5), TransitionState::Switching);
        assert_eq!(m.progress(), 0.0);
        assert_eq!(
            m.current_blend(),
            Blend {
                outgoing: 0.0,
                incoming: 0.0
            }
        );
    }

    #[test]
    fn switching_does_not_advance_on_its_own() {
        let mut m = manager();
        m.start_transition(SceneId::Game);
        to_switching(&mut m);

        assert_eq!(m.advance(10.0), TransitionState::Switching);
    }

    #[test]
    fn full_cycle_visits_phases_in_order() {
        let mut m = manager();
        m.start_transition(SceneId::Settings);
        to_switching(&mut m);

        assert_eq!(m.take_switch_target(), Some(SceneId::Settings));
        m.complete_switch();
        assert_eq!(m.state(), TransitionState::FadingIn);

        m.advance(0.25);
        assert!((m.current_blend().incoming - 0.5).abs() < 1e-6);

        m.advance(0.25);
        assert_eq!(m.state(), TransitionState::Idle);
        assert_eq!(m.target(), None);

        assert_eq!(
            phases(&m.take_events()),
            vec![
                TransitionState::FadingOut,
                TransitionState::Switching,
                TransitionState::FadingIn,
                TransitionState::Idle,
            ]
        );
    }

    #[test]
    fn invalid_dt_is_ignored() {
        let mut m = manager();
        m.start_transition(SceneId::Game);
        m.advance(0.3);

        m.advance(-1.0);
        m.advance(0.0);
        m.advance(f32::NAN);
        m.advance(f32::INFINITY);

        assert!((m.progress() - 0.3).abs() < 1e-6);
    }

    //--- Pending Request Tests --------------------------------------------

    #[test]
    fn request_while_transitioning_is_pending_not_restart() {
        let mut m = manager();
        m.start_transition(SceneId::MainMenu);
        m.advance(0.4);

        assert!(!m.start_transition(SceneId::Settings));
        assert_eq!(m.state(), TransitionState::FadingOut);
        assert!((m.progress() - 0.4).abs() < 1e-6);
        assert_eq!(m.target(), Some(SceneId::MainMenu));
        assert_eq!(m.pending(), Some(SceneId::Settings));
    }

    #[test]
    fn last_pending_request_wins() {
        let mut m = manager();
        m.start_transition(SceneId::MainMenu);
        m.start_transition(SceneId::Settings);
        m.start_transition(SceneId::Game);

        let events = m.take_events();
        assert!(events.contains(&TransitionEvent::RequestQueued {
            target: SceneId::Game,
            replaced: Some(SceneId::Settings),
        }));

        to_switching(&mut m);
        assert_eq!(m.take_switch_target(), Some(SceneId::Game));
        assert_eq!(m.pending(), None);
    }

    #[test]
    fn pending_during_fade_in_starts_next_fade_out_immediately() {
        let mut m = manager();
        m.start_transition(SceneId::MainMenu);
        to_switching(&mut m);
        m.take_switch_target();
        m.complete_switch();
        m.take_events();

        m.advance(0.1);
        m.start_transition(SceneId::Game);
        assert_eq!(m.state(), TransitionState::FadingIn);

        assert_eq!(m.advance(1.0), TransitionState::FadingOut);
        assert_eq!(m.target(), Some(SceneId::Game));
        assert_eq!(m.progress(), 0.0);

        assert_eq!(
            phases(&m.take_events()),
            vec![TransitionState::Idle, TransitionState::FadingOut]
        );
    }

    #[test]
    fn pending_for_arrived_scene_is_dropped() {
        let mut m = manager();
        m.start_transition(SceneId::MainMenu);
        to_switching(&mut m);
        m.take_switch_target();
        m.complete_switch();

        m.start_transition(SceneId::MainMenu);
        assert_eq!(m.advance(1.0), TransitionState::Idle);
        assert_eq!(m.pending(), None);
    }

    #[test]
    fn abort_returns_to_idle_and_clears_target() {
        let mut m = manager();
        m.start_transition(SceneId::Game);
        to_switching(&mut m);
        m.take_switch_target();

        m.abort_switch();
        assert_eq!(m.state(), TransitionState::Idle);
        assert_eq!(m.target(), None);
        assert_eq!(m.progress(), 0.0);
    }

    #[test]
    fn handoff_calls_outside_switching_are_ignored() {
        let mut m = manager();
        assert_eq!(m.take_switch_target(), None);

        m.complete_switch();
        m.abort_switch();
        assert_eq!(m.state(), TransitionState::Idle);

        m.start_transition(SceneId::Game);
        m.complete_switch();
        assert_eq!(m.state(), TransitionState::FadingOut);
    }

    //--- Progress Invariants ----------------------------------------------

    #[test]
    fn progress_stays_bounded_and_monotonic_within_phase() {
        let mut m = manager();
        m.start_transition(SceneId::MainMenu);

        let steps = [0.07, 0.31, 0.002, 0.6, 0.45, 0.13, 0.9, 0.01, 0.2, 0.33];
        let mut last_state = m.state();
        let mut last_progress = m.progress();

        for (i, dt) in steps.iter().cycle().take(60).enumerate() {
            if i == 5 {
                m.start_transition(SceneId::Game);
            }
            if m.state() == TransitionState::Switching {
                m.take_switch_target();
                m.complete_switch();
            } else {
                m.advance(*dt);
            }

            let progress = m.progress();
            assert!((0.0..=1.0).contains(&progress));
            if m.state() == last_state {
                assert!(progress >= last_progress);
            } else {
                assert_eq!(progress, 0.0);
            }
            last_state = m.state();
            last_progress = progress;
        }
    }
}
