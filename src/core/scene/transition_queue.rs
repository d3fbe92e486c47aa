//=========================================================================
// Transition Queue
//=========================================================================
//
// Queue of observable transition events.
//
// The transition manager and scene manager record every phase change,
// queued request, completed switch and aborted switch here. The
// application drains the queue once per frame (e.g. to trigger audio
// cues or to assert ordering in tests).
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{SceneError, SceneId, TransitionState};

//=== Transition Event ====================================================

/// Something observable that happened in the transition state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionEvent {
    /// The state machine moved from one phase to another.
    ///
    /// `target` is the destination scene of the transition the change
    /// belongs to.
    PhaseChanged {
        from: TransitionState,
        to: TransitionState,
        target: Option<SceneId>,
    },

    /// A request arrived while transitioning and was stored as pending.
    ///
    /// `replaced` holds the earlier unconsumed request it overwrote.
    RequestQueued {
        target: SceneId,
        replaced: Option<SceneId>,
    },

    /// Ownership passed from the outgoing scene to a new instance.
    SceneSwitched { from: SceneId, to: SceneId },

    /// The switch toward `target` failed; the previous scene stayed active.
    Aborted { target: SceneId, error: SceneError },
}

//=== Transition Queue ====================================================

/// FIFO buffer of [`TransitionEvent`]s.
#[derive(Debug)]
pub struct TransitionQueue {
    queue: Vec<TransitionEvent>,
}

impl TransitionQueue {
    /// Creates a new empty queue.
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    /// Appends an event.
    pub fn push(&mut self, event: TransitionEvent) {
        self.queue.push(event);
    }

    /// Returns an iterator over the queued events.
    pub fn iter(&self) -> impl Iterator<Item = &TransitionEvent> {
        self.queue.iter()
    }

    /// Returns true if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns the number of queued events.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Clears all queued events.
    pub fn clear(&mut self) {
        self.queue.clear()
    }

    /// Takes all events from the queue, leaving it empty.
    pub fn take(&mut self) -> Vec<TransitionEvent> {
        std::mem::take(&mut self.queue)
    }
}

impl Default for TransitionQueue {
    fn default() -> Self {
        Self::new()
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn queued(target: SceneId) -> TransitionEvent {
        TransitionEvent::RequestQueued { target, replaced: None }
    }

    #[test]
    fn new_queue_is_empty() {
        let queue = TransitionQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn take_preserves_order_and_empties() {
        let mut queue = TransitionQueue::new();
        queue.push(queued(SceneId::MainMenu));
        queue.push(queued(SceneId::Settings));

        assert_eq!(queue.iter().count(), 2);

        let events = queue.take();
        assert_eq!(events, vec![queued(SceneId::MainMenu), queued(SceneId::Settings)]);
        assert!(queue.is_empty());
    }

    #[test]
    fn clear_discards_events() {
        let mut queue = TransitionQueue::default();
        queue.push(queued(SceneId::Game));
        queue.clear();
        assert!(queue.is_empty());
    }
}
