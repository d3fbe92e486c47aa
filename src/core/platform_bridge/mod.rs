//=========================================================================
// Platform Bridge
//=========================================================================
//
// Bridges input producers (winit window thread, scripted input, tests)
// with the thread that drives the scene manager.
//
// Producers send InputMessages over a bounded crossbeam channel; the
// consumer drains them once per frame through an InputFeed. Neither side
// knows how the other is implemented.
//
// Components:
// - `interface`: the message type crossing the thread boundary
// - `event_collector`: consumer-side per-frame collection
//
//=========================================================================

//=== Module Declarations =================================================

mod event_collector;
mod interface;

//=== Public API ==========================================================

pub use event_collector::{InputFeed, TickControl};
pub use interface::InputMessage;
