//=========================================================================
// Stagecraft Library Root
//
// Scene lifecycle and fade transition controller.
//
// Responsibilities:
// - Decide which scene (splash, main menu, settings, game) is active
// - Switch scenes on request through a fade-out / fade-in transition
// - Guarantee every scene is entered and exited exactly once
//
// Typical usage:
// ```no_run
// use std::sync::Arc;
// use stagecraft::prelude::*;
// use stagecraft::scenes;
//
// let (audio, _commands) = AudioChannel::bounded(32);
// let services = SceneServices::new(Arc::new(scenes::builtin_assets()), Arc::new(audio));
//
// let (runtime, input) = RuntimeBuilder::new().build(scenes::builtin_factory(services));
// // hand `input` to the platform thread; dropping it ends the loop
// runtime.run(&mut CommandSurface::new()).unwrap();
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the scene system and the interfaces it consumes.
// `scenes` provides the built-in Splash/MainMenu/Settings/Game scenes.
// `platform` converts winit window events into core input events.
//
pub mod core;
pub mod platform;
pub mod prelude;
pub mod scenes;

//--- Internal Modules ----------------------------------------------------

mod runtime;

//--- Public Exports ------------------------------------------------------

pub use runtime::{Runtime, RuntimeBuilder};
