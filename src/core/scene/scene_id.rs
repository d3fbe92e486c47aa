//=========================================================================
// Scene Identifiers
//=========================================================================
//
// Enumerates every scene type the application can navigate to.
//
// A `SceneId` is the lookup key of the SceneFactory and the target of the
// SceneTransitionManager. It never identifies an *instance*: every entry
// into a scene constructs a fresh one.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

//=== SceneId =============================================================

/// Identifies a scene type.
///
/// Used to request navigation (`SceneManager::request_scene_change`) and
/// as the registration key of the [`SceneFactory`](super::SceneFactory).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneId {
    /// Startup logo screen.
    Splash,

    /// Title menu with navigation to the other scenes.
    MainMenu,

    /// Audio and display options.
    Settings,

    /// Gameplay.
    Game,
}

impl SceneId {
    /// Every scene identifier, in navigation order.
    pub const ALL: [SceneId; 4] = [
        SceneId::Splash,
        SceneId::MainMenu,
        SceneId::Settings,
        SceneId::Game,
    ];

    /// Stable lowercase name, used in log output.
    pub fn name(self) -> &'static str {
        match self {
            SceneId::Splash => "splash",
            SceneId::MainMenu => "main_menu",
            SceneId::Settings => "settings",
            SceneId::Game => "game",
        }
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//=== Tests ===============================================================
