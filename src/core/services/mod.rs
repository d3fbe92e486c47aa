//=========================================================================
// External Services
//=========================================================================
//
// Interfaces of the collaborators the scene core consumes but does not
// own: asset lookup, audio playback and the render surface.
//
// Architecture:
//   SceneFactory ── SceneServices (Arc<dyn AssetProvider>,
//                                  Arc<dyn AudioProvider>)
//        │
//        └─► each constructed scene keeps the handles it needs
//
//   SceneManager::render(&mut dyn RenderSurface)
//
// Each interface ships with a small reference implementation usable in
// headless runs and tests.
//
//=========================================================================

//=== Module Declarations =================================================

mod assets;
mod audio;
mod surface;

//=== Public API ==========================================================

pub use assets::{AssetError, AssetProvider, AssetRegistry, FontHandle, TextureHandle};
pub use audio::{AudioChannel, AudioCommand, AudioProvider};
pub use surface::{Color, CommandSurface, DrawCommand, RenderSurface};

//=== External Dependencies ===============================================

use std::sync::Arc;

//=== SceneServices =======================================================

/// Shared collaborators injected into every constructed scene.
///
/// Cheap to clone: every field is reference counted.
#[derive(Clone)]
pub struct SceneServices {
    /// Font and texture lookup.
    pub assets: Arc<dyn AssetProvider>,

    /// Fire-and-forget sound and music playback.
    pub audio: Arc<dyn AudioProvider>,
}

impl SceneServices {
    /// Bundles the given providers.
    pub fn new(assets: Arc<dyn AssetProvider>, audio: Arc<dyn AudioProvider>) -> Self {
        Self { assets, audio }
    }
}
