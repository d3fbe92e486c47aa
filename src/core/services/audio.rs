//=========================================================================
// Audio Provider
//=========================================================================
//
// Fire-and-forget playback requests issued by scenes.
//
// Architecture:
//   Scene ──play_sound()──► AudioChannel ──AudioCommand──► audio thread
//                            (bounded crossbeam channel)
//
// Nothing is ever returned to the caller. A full or disconnected channel
// drops the command with a warning instead of blocking the frame.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use log::warn;

//=== AudioProvider =======================================================

/// Sink for sound and music requests.
pub trait AudioProvider: Send + Sync {
    /// Plays a one-shot sound effect.
    fn play_sound(&self, id: &str);

    /// Starts looping background music, replacing the current track.
    fn play_music(&self, id: &str);

    /// Stops background music.
    fn stop_music(&self);
}

//=== AudioCommand ========================================================

/// Message forwarded to the audio backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioCommand {
    PlaySound(String),
    PlayMusic(String),
    StopMusic,
}

//=== AudioChannel ========================================================

/// [`AudioProvider`] that forwards commands over a bounded channel.
///
/// # Example
///
/// ```rust
/// use stagecraft::prelude::*;
///
/// let (audio, commands) = AudioChannel::bounded(8);
/// audio.play_sound("click");
///
/// assert_eq!(commands.try_recv().unwrap(), AudioCommand::PlaySound("click".into()));
/// ```
#[derive(Debug, Clone)]
pub struct AudioChannel {
    sender: Sender<AudioCommand>,
}

impl AudioChannel {
    /// Creates a channel holding at most `capacity` undelivered commands.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn bounded(capacity: usize) -> (Self, Receiver<AudioCommand>) {
        assert!(capacity > 0, "Audio channel capacity must be positive");
        let (sender, receiver) = bounded(capacity);
        (Self { sender }, receiver)
    }

    fn send(&self, command: AudioCommand) {
        match self.sender.try_send(command) {
            Ok(()) => {}
            Err(TrySendError::Full(command)) => {
                warn!("Audio queue full, dropping {:?}", command)
            }
            Err(TrySendError::Disconnected(command)) => {
                warn!("Audio backend disconnected, dropping {:?}", command)
            }
        }
    }
}

impl AudioProvider for AudioChannel {
    fn play_sound(&self, id: &str) {
        self.send(AudioCommand::PlaySound(id.to_owned()));
    }

    fn play_music(&self, id: &str) {
        self.send(AudioCommand::PlayMusic(id.to_owned()));
    }

    fn stop_music(&self) {
        self.send(AudioCommand::StopMusic);
    }
}

//=== Tests ===============================================================
