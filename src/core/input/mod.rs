//=========================================================================
// Input
//
// Input events consumed by scenes. Device polling lives outside this
// crate; see `platform` for the winit translation and
// `core::platform_bridge` for per-frame delivery.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod event;

//=== Public API ==========================================================

pub use event::{InputEvent, KeyCode, Modifiers, MouseButton};
