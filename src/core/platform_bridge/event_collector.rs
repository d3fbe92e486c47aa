//=========================================================================
// Input Feed
//=========================================================================
//
// Per-frame input collector with bounded draining and shutdown detection.
//
// Architecture:
//   Receiver<InputMessage> → collect_frame() → events → TickControl
//
// Bounded draining keeps a flooding producer from starving the frame.
// Messages beyond the bound stay in the channel for the next frame.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::InputMessage;
use crate::core::input::InputEvent;

//=== TickControl =========================================================

/// Frame loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Exit,
}

//=== InputFeed ===========================================================

/// Collects the input messages that arrived since the previous frame.
pub struct InputFeed {
    receiver: Receiver<InputMessage>,
    events: Vec<InputEvent>,
}

impl InputFeed {
    /// Maximum number of messages drained per frame.
    pub const MAX_MESSAGES_PER_FRAME: usize = 100;

    pub fn new(receiver: Receiver<InputMessage>) -> Self {
        Self {
            receiver,
            events: Vec::with_capacity(16),
        }
    }

    /// Drains pending messages into this frame's event list.
    ///
    /// Returns [`TickControl::Exit`] once the producer sent
    /// [`InputMessage::Closed`] or every sender was dropped. Events batched
    /// before the close message are still available through
    /// [`events`](Self::events).
    pub fn collect_frame(&mut self) -> TickControl {
        self.events.clear();
        let mut drained = 0;

        while drained < Self::MAX_MESSAGES_PER_FRAME {
            match self.receiver.try_recv() {
                Ok(InputMessage::Batch(batch)) => {
                    self.events.extend(batch);
                    drained += 1;
                }
                Ok(InputMessage::Closed) => {
                    debug!("Input producer closed");
                    return TickControl::Exit;
                }
                Err(TryRecvError::Disconnected) => {
                    debug!("Input channel disconnected");
                    return TickControl::Exit;
                }
                Err(TryRecvError::Empty) => break,
            }
        }

        if drained >= Self::MAX_MESSAGES_PER_FRAME {
            warn!("Input backlog: drained {} messages this frame", drained);
        }

        TickControl::Continue
    }

    /// Events collected by the last `collect_frame`.
    pub fn events(&self) -> &[InputEvent] {
        &self.events
    }

    /// Takes the collected events, leaving the buffer empty.
    pub fn take_events(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{KeyCode, Modifiers};
    use crossbeam_channel::unbounded;

    #[test]
    fn collect_handles_empty_queue() {
        let (_tx, rx) = unbounded::<InputMessage>();
        let mut feed = InputFeed::new(rx);

        assert_eq!(feed.collect_frame(), TickControl::Continue);
        assert!(feed.events().is_empty());
    }

    #[test]
    fn collect_flattens_batches_in_order() {
        let (tx, rx) = unbounded();
        let mut feed = InputFeed::new(rx);

        tx.send(InputMessage::Batch(vec![
            InputEvent::key_down(KeyCode::KeyA),
            InputEvent::key_up(KeyCode::KeyA),
        ]))
        .unwrap();
        tx.send(InputMessage::single(InputEvent::MouseMoved { x: 10.0, y: 20.0 }))
            .unwrap();

        assert_eq!(feed.collect_frame(), TickControl::Continue);
        assert_eq!(
            feed.events(),
            &[
                InputEvent::KeyDown {
                    key: KeyCode::KeyA,
                    modifiers: Modifiers::NONE
                },
                InputEvent::key_up(KeyCode::KeyA),
                InputEvent::MouseMoved { x: 10.0, y: 20.0 },
            ]
        );
    }

    #[test]
    fn collect_returns_exit_on_closed() {
        let (tx, rx) = unbounded();
        let mut feed = InputFeed::new(rx);

        tx.send(InputMessage::single(InputEvent::key_down(KeyCode::Space)))
            .unwrap();
        tx.send(InputMessage::Closed).unwrap();

        assert_eq!(feed.collect_frame(), TickControl::Exit);
        assert_eq!(feed.events().len(), 1);
    }

    #[test]
    fn collect_clears_previous_frame() {
        let (tx, rx) = unbounded();
        let mut feed = InputFeed::new(rx);

        tx.send(InputMessage::single(InputEvent::key_down(KeyCode::Space)))
            .unwrap();
        feed.collect_frame();
        assert_eq!(feed.events().len(), 1);

        tx.send(InputMessage::Batch(Vec::new())).unwrap();
        feed.collect_frame();
        assert!(feed.events().is_empty());
    }

    #[test]
    fn collect_returns_exit_on_disconnect() {
        let (tx, rx) = unbounded::<InputMessage>();
        let mut feed = InputFeed::new(rx);

        drop(tx);

        assert_eq!(feed.collect_frame(), TickControl::Exit);
    }

    #[test]
    fn backlog_is_carried_to_next_frame() {
        let (tx, rx) = unbounded();
        let mut feed = InputFeed::new(rx);

        for _ in 0..InputFeed::MAX_MESSAGES_PER_FRAME + 5 {
            tx.send(InputMessage::single(InputEvent::key_down(KeyCode::Tab)))
                .unwrap();
        }

        feed.collect_frame();
        assert_eq!(feed.events().len(), InputFeed::MAX_MESSAGES_PER_FRAME);

        let taken = feed.take_events();
        assert_eq!(taken.len(), InputFeed::MAX_MESSAGES_PER_FRAME);
        assert!(feed.events().is_empty());

        feed.collect_frame();
        assert_eq!(feed.events().len(), 5);
    }
}
