//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Messages sent from an input producer (window thread, script, test) to
// the thread that drives the scenes.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;

//=== InputMessage ========================================================

/// Message carried by the input channel.
#[derive(Debug, Clone, PartialEq)]
pub enum InputMessage {
    /// Input events for one producer frame, in arrival order.
    Batch(Vec<InputEvent>),

    /// The producer is shutting down (e.g. the window was closed).
    Closed,
}

impl InputMessage {
    /// Wraps a single event in a one-element batch.
    pub fn single(event: InputEvent) -> Self {
        Self::Batch(vec![event])
    }
}
