//=========================================================================
// Asset Provider
//=========================================================================
//
// Synchronous font and texture lookup.
//
// Scenes resolve every asset they need while being constructed. A lookup
// that fails makes the scene's construction fail, which aborts the scene
// switch without touching the active scene.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

//=== Handles =============================================================

/// Resolved font reference.
#[derive(Debug, Clone, PartialEq)]
pub struct FontHandle {
    pub name: Arc<str>,
    pub size: f32,
}

/// Resolved texture reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureHandle {
    pub name: Arc<str>,
    pub width: u32,
    pub height: u32,
}

//=== AssetError ==========================================================

/// Lookup failures reported by an [`AssetProvider`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetError {
    #[error("font `{0}` not found")]
    MissingFont(String),

    #[error("texture `{0}` not found")]
    MissingTexture(String),
}

//=== AssetProvider =======================================================

/// Resolves named assets for scenes.
///
/// Implementations must answer synchronously.
pub trait AssetProvider: Send + Sync {
    /// Looks up a font by name.
    fn font(&self, name: &str) -> Result<FontHandle, AssetError>;

    /// Looks up a texture by name.
    fn texture(&self, name: &str) -> Result<TextureHandle, AssetError>;
}

//=== AssetRegistry =======================================================

/// In-memory [`AssetProvider`] populated up front.
///
/// # Example
///
/// ```rust
/// use stagecraft::prelude::*;
///
/// let assets = AssetRegistry::new()
///     .with_font("title", 48.0)
///     .with_texture("logo", 512, 256);
///
/// assert_eq!(assets.texture("logo").unwrap().width, 512);
/// assert!(assets.font("missing").is_err());
/// ```
#[derive(Debug, Default)]
pub struct AssetRegistry {
    fonts: HashMap<String, FontHandle>,
    textures: HashMap<String, TextureHandle>,
}

impl AssetRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a font, replacing any previous one with the same name.
    pub fn with_font(mut self, name: &str, size: f32) -> Self {
        self.fonts.insert(
            name.to_owned(),
            FontHandle {
                name: Arc::from(name),
                size,
            },
        );
        self
    }

    /// Registers a texture, replacing any previous one with the same name.
    pub fn with_texture(mut self, name: &str, width: u32, height: u32) -> Self {
        self.textures.insert(
            name.to_owned(),
            TextureHandle {
                name: Arc::from(name),
                width,
                height,
            },
        );
        self
    }
}

impl AssetProvider for AssetRegistry {
    fn font(&self, name: &str) -> Result<FontHandle, AssetError> {
        self.fonts
            .get(name)
            .cloned()
            .ok_or_else(|| AssetError::MissingFont(name.to_owned()))
    }

    fn texture(&self, name: &str) -> Result<TextureHandle, AssetError> {
        self.textures
            .get(name)
            .cloned()
            .ok_or_else(|| AssetError::MissingTexture(name.to_owned()))
    }
}

//=== Tests ===============================================================
