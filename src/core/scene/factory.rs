//=========================================================================
// Scene Factory
//=========================================================================
//
// Builds fresh scene instances by identifier.
//
// Constructors are registered once per SceneId and receive the shared
// SceneServices on every call. Instances are never cached: each call to
// `create` yields a new scene, so nothing from a previous visit leaks in.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::{Scene, SceneError, SceneId};
use crate::core::services::SceneServices;

//=== SceneConstructor ====================================================

/// Builds one scene from the shared services.
pub type SceneConstructor =
    Box<dyn Fn(&SceneServices) -> Result<Box<dyn Scene>, SceneError> + Send + Sync>;

//=== SceneFactory ========================================================

/// Maps scene identifiers to constructors.
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
///
/// let mut factory = SceneFactory::new(services);
/// factory.register(SceneId::Splash, |_services| Ok(Box::new(Blank)));
///
/// assert!(factory.create(SceneId::Splash).is_ok());
/// assert_eq!(
///     factory.create(SceneId::Game).err(),
///     Some(SceneError::InvalidRequest(SceneId::Game))
/// );
/// ```
pub struct SceneFactory {
    services: SceneServices,
    constructors: HashMap<SceneId, SceneConstructor>,
}

impl SceneFactory {
    //--- Construction -----------------------------------------------------

    /// Creates a factory with no registered scenes.
    pub fn new(services: SceneServices) -> Self {
        Self {
            services,
            constructors: HashMap::new(),
        }
    }

    //--- Registration -----------------------------------------------------

    /// Registers the constructor for `id`, replacing any previous one.
    pub fn register<F>(&mut self, id: SceneId, constructor: F)
    where
        F: Fn(&SceneServices) -> Result<Box<dyn Scene>, SceneError> + Send + Sync + 'static,
    {
        if self.constructors.insert(id, Box::new(constructor)).is_some() {
            warn!("Scene {} was already registered and has been replaced", id);
        }
    }

    /// Returns true if a constructor exists for `id`.
    pub fn is_registered(&self, id: SceneId) -> bool {
        self.constructors.contains_key(&id)
    }

    /// Identifiers with a registered constructor, in [`SceneId::ALL`] order.
    pub fn registered(&self) -> Vec<SceneId> {
        SceneId::ALL
            .into_iter()
            .filter(|id| self.is_registered(*id))
            .collect()
    }

    /// The services handed to every constructor.
    pub fn services(&self) -> &SceneServices {
        &self.services
    }

    //--- Creation ---------------------------------------------------------

    /// Builds a new instance of scene `id`.
    ///
    /// # Errors
    ///
    /// - [`SceneError::InvalidRequest`] if `id` has no constructor.
    /// - [`SceneError::Construction`] if the constructor fails.
    pub fn create(&self, id: SceneId) -> Result<Box<dyn Scene>, SceneError> {
        let constructor = self
            .constructors
            .get(&id)
            .ok_or(SceneError::InvalidRequest(id))?;

        debug!("Constructing scene {}", id);
        constructor(&self.services)
    }
}

//=== Tests ===============================================================
