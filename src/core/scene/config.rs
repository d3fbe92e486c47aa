//=========================================================================
// Scene Configuration
//=========================================================================
//
// Fixed timing and startup parameters of the scene core.
//
// Provided once at SceneManager construction. Durations are per phase
// (fade out, fade in), in seconds, and must be strictly positive.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{Easing, SceneId};

//=== SceneConfig =========================================================

/// Scene manager configuration.
///
/// # Default Values
///
/// - **Fade out**: 0.5 s
/// - **Fade in**: 0.5 s
/// - **Easing**: [`Easing::Linear`]
/// - **Initial scene**: [`SceneId::Splash`]
///
/// # Examples
///
/// ```rust
/// use stagecraft::prelude::*;
///
/// let config = SceneConfig::default()
///     .with_fade_out(0.25)
///     .with_fade_in(0.75)
///     .with_easing(Easing::EaseInOut)
///     .with_initial_scene(SceneId::MainMenu);
///
/// assert_eq!(config.fade_out, 0.25);
/// assert_eq!(config.initial_scene, SceneId::MainMenu);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConfig {
    /// Duration of the fade-out phase in seconds.
    pub fade_out: f32,

    /// Duration of the fade-in phase in seconds.
    pub fade_in: f32,

    /// Curve applied to phase progress when computing blend weights.
    pub easing: Easing,

    /// Scene entered by [`SceneManager::start`](super::SceneManager::start).
    pub initial_scene: SceneId,
}

impl SceneConfig {
    /// Sets the fade-out duration.
    ///
    /// # Panics
    ///
    /// Panics if `seconds` is not strictly positive and finite.
    pub fn with_fade_out(mut self, seconds: f32) -> Self {
        assert_positive("fade out", seconds);
        self.fade_out = seconds;
        self
    }

    /// Sets the fade-in duration.
    ///
    /// # Panics
    ///
    /// Panics if `seconds` is not strictly positive and finite.
    pub fn with_fade_in(mut self, seconds: f32) -> Self {
        assert_positive("fade in", seconds);
        self.fade_in = seconds;
        self
    }

    /// Sets the easing curve used for blend weights.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Sets the scene entered on startup.
    pub fn with_initial_scene(mut self, scene: SceneId) -> Self {
        self.initial_scene = scene;
        self
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            fade_out: 0.5,
            fade_in: 0.5,
            easing: Easing::Linear,
            initial_scene: SceneId::Splash,
        }
    }
}

fn assert_positive(what: &str, seconds: f32) {
    assert!(
        seconds.is_finite() && seconds > 0.0,
        "{} duration must be positive, got {}",
        what,
        seconds
    );
}

//=== Tests ===============================================================
