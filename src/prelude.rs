//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use stagecraft::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Runtime
pub use crate::runtime::{Runtime, RuntimeBuilder};

// Scene system
pub use crate::core::scene::{
    Blend, Easing, Scene, SceneConfig, SceneContext, SceneError, SceneFactory, SceneId,
    SceneManager, TransitionEvent, TransitionState,
};

// External services
pub use crate::core::services::{
    AssetError, AssetProvider, AssetRegistry, AudioChannel, AudioCommand, AudioProvider, Color,
    CommandSurface, DrawCommand, FontHandle, RenderSurface, SceneServices, TextureHandle,
};

// Input
pub use crate::core::input::{InputEvent, KeyCode, Modifiers, MouseButton};
pub use crate::core::platform_bridge::{InputFeed, InputMessage, TickControl};
pub use crate::platform::InputTranslator;
