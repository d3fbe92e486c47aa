//=========================================================================
// Stagecraft Demo
//
// Headless walkthrough of the built-in scenes.
//
// Threads:
//   main     Runtime loop (update → input → render at 60 TPS)
//   script   Sends a scripted key sequence over the input channel
//   audio    Logs AudioCommands until the runtime drops its sender
//
// Run with `RUST_LOG=debug` to see every transition event.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use env_logger::{Builder, Env};
use log::{error, info, trace};

//=== Internal Dependencies ===============================================

use stagecraft::prelude::*;
use stagecraft::scenes;

//=== Script ==============================================================

const STEP: Duration = Duration::from_millis(700);

/// Key presses sent one per step, with what they should do.
const SCRIPT: &[(KeyCode, &str)] = &[
    (KeyCode::Space, "skip splash"),
    (KeyCode::ArrowDown, "select Settings"),
    (KeyCode::Enter, "open Settings"),
    (KeyCode::ArrowRight, "raise volume"),
    (KeyCode::Escape, "back to menu"),
    (KeyCode::Enter, "play"),
    (KeyCode::Escape, "back to menu"),
    (KeyCode::ArrowUp, "select Quit"),
    (KeyCode::Enter, "quit"),
];

//=== TraceSurface ========================================================

/// Render surface that only traces what would be drawn.
#[derive(Default)]
struct TraceSurface {
    opacity: f32,
}

impl RenderSurface for TraceSurface {
    fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity;
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, _color: Color) {
        trace!("rect {}x{} at ({}, {}) @ {:.2}", width, height, x, y, self.opacity);
    }

    fn draw_text(&mut self, _font: &FontHandle, text: &str, x: f32, y: f32, _color: Color) {
        trace!("text {:?} at ({}, {}) @ {:.2}", text, x, y, self.opacity);
    }

    fn draw_texture(&mut self, texture: &TextureHandle, x: f32, y: f32) {
        trace!("texture {} at ({}, {}) @ {:.2}", texture.name, x, y, self.opacity);
    }
}

//=== Main ================================================================

fn main() -> Result<(), SceneError> {
    Builder::from_env(Env::default().default_filter_or("info")).init();

    //--- 1. Services ------------------------------------------------------
    let (audio, audio_commands) = AudioChannel::bounded(64);
    let services = SceneServices::new(Arc::new(scenes::builtin_assets()), Arc::new(audio));

    let audio_thread = thread::spawn(move || {
        for command in audio_commands.iter() {
            info!("[audio] {:?}", command);
        }
    });

    //--- 2. Runtime -------------------------------------------------------
    let (runtime, sender) = RuntimeBuilder::new()
        .with_tps(60.0)
        .with_scene_config(
            SceneConfig::default()
                .with_fade_out(0.3)
                .with_fade_in(0.3)
                .with_easing(Easing::EaseInOut),
        )
        .build(scenes::builtin_factory(services));

    //--- 3. Scripted input ------------------------------------------------
    let script_thread = thread::spawn(move || {
        for (key, intent) in SCRIPT {
            thread::sleep(STEP);
            info!("[script] {:?}: {}", key, intent);
            let batch = vec![InputEvent::key_down(*key), InputEvent::key_up(*key)];
            if sender.send(InputMessage::Batch(batch)).is_err() {
                return;
            }
        }
        thread::sleep(STEP);
        let _ = sender.send(InputMessage::Closed);
    });

    //--- 4. Run until a scene quits ---------------------------------------
    runtime.run(&mut TraceSurface::default())?;

    if script_thread.join().is_err() {
        error!("Script thread panicked");
    }
    if audio_thread.join().is_err() {
        error!("Audio thread panicked");
    }

    info!("Demo finished");
    Ok(())
}
