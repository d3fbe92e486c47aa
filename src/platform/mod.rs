//=========================================================================
// Platform Integration
//
// Winit-facing adapters. Window and event loop ownership stay with the
// application; this module only converts what winit reports into the
// crate's own input types.
//
// Typical use inside an `ApplicationHandler::window_event`:
// ```text
//   if let Some(event) = translator.translate(&window_event) {
//       sender.send(InputMessage::single(event))
//   }
//   on CloseRequested: sender.send(InputMessage::Closed)
// ```
//
//=========================================================================

//=== Submodules ==========================================================

mod input_translator;

//=== Public API ==========================================================

pub use input_translator::InputTranslator;
