//=========================================================================
// Core Systems
//
// Everything the scene lifecycle needs, independent of any windowing
// backend.
//
// Layout:
// - `scene`: scene contract, factory, transition state machine, manager
// - `services`: asset, audio and render-surface interfaces
// - `input`: platform-independent input events
// - `platform_bridge`: input channel between producers and the frame loop
//
//=========================================================================

//=== Public Modules ======================================================

pub mod input;
pub mod platform_bridge;
pub mod scene;
pub mod services;

//=== Re-exports ==========================================================

pub use platform_bridge::{InputFeed, InputMessage, TickControl};
pub use scene::{Scene, SceneContext, SceneId, SceneManager};
