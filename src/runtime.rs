//=========================================================================
// Runtime
//
// Fixed-rate frame driver around the scene manager.
//
// Architecture:
// ```text
//     RuntimeBuilder  ──build(factory)──>  (Runtime, Sender<InputMessage>)
//         │                                  │
//         ├─ with_tps()                      ├─ tick(): update → input → render
//         ├─ with_channel_capacity()         └─ run(): tick at TPS until exit
//         └─ with_scene_config()
// ```
//
// The runtime owns only the receiving end of the input channel. Producers
// (a winit thread, a scripted driver, tests) hold the sender returned by
// `build` and its clones; once every one of them is dropped the channel
// disconnects and the runtime exits.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{bounded, Sender};
use log::{debug, info};

//=== Internal Dependencies ===============================================

use crate::core::platform_bridge::{InputFeed, InputMessage, TickControl};
use crate::core::scene::{SceneConfig, SceneError, SceneFactory, SceneManager, TransitionEvent};
use crate::core::services::RenderSurface;

//=== RuntimeBuilder ======================================================

/// Builder for configuring and constructing a [`Runtime`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (frames per second)
/// - **Channel capacity**: 128 input messages
/// - **Scene config**: [`SceneConfig::default`]
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use stagecraft::prelude::*;
/// use stagecraft::scenes;
///
/// let (audio, _commands) = AudioChannel::bounded(32);
/// let services = SceneServices::new(Arc::new(scenes::builtin_assets()), Arc::new(audio));
///
/// let (mut runtime, _input) = RuntimeBuilder::new()
///     .with_tps(120.0)
///     .with_channel_capacity(256)
///     .with_scene_config(SceneConfig::default().with_fade_out(0.25))
///     .build(scenes::builtin_factory(services));
///
/// runtime.start().unwrap();
/// let mut surface = CommandSurface::new();
/// assert_eq!(runtime.tick(1.0 / 120.0, &mut surface), TickControl::Continue);
/// ```
#[derive(Debug, Clone)]
pub struct RuntimeBuilder {
    tps: f64,
    channel_capacity: usize,
    scene_config: SceneConfig,
}

impl RuntimeBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
            scene_config: SceneConfig::default(),
        }
    }

    /// Sets the target frames per second of [`Runtime::run`].
    ///
    /// # Panics
    ///
    /// Panics if `tps` is not positive.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the capacity of the input channel.
    ///
    /// Producers block on `send` once the channel is full.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Sets fade durations, easing and the initial scene.
    pub fn with_scene_config(mut self, config: SceneConfig) -> Self {
        self.scene_config = config;
        self
    }

    /// Builds the runtime around `factory`. No scene is entered yet.
    ///
    /// Returns the runtime and the sender for input producers. The runtime
    /// keeps no sender of its own: dropping the returned one and all its
    /// clones closes the channel.
    pub fn build(self, factory: SceneFactory) -> (Runtime, Sender<InputMessage>) {
        info!(
            "Building runtime (TPS: {}, channel: {}, scenes: {:?})",
            self.tps,
            self.channel_capacity,
            factory.registered()
        );

        let (sender, receiver) = bounded(self.channel_capacity);

        let runtime = Runtime {
            manager: SceneManager::new(factory, self.scene_config),
            feed: InputFeed::new(receiver),
            frame_events: Vec::new(),
            tps: self.tps,
        };
        (runtime, sender)
    }
}

impl Default for RuntimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Runtime =============================================================

/// Scene manager plus its input channel and frame pacing.
pub struct Runtime {
    manager: SceneManager,
    feed: InputFeed,
    frame_events: Vec<TransitionEvent>,
    tps: f64,
}

impl Runtime {
    //--- Accessors --------------------------------------------------------

    pub fn manager(&self) -> &SceneManager {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut SceneManager {
        &mut self.manager
    }

    pub fn tps(&self) -> f64 {
        self.tps
    }

    /// Transition events recorded during the last [`tick`](Self::tick).
    pub fn frame_events(&self) -> &[TransitionEvent] {
        &self.frame_events
    }

    //--- Lifecycle --------------------------------------------------------

    /// Enters the configured initial scene.
    pub fn start(&mut self) -> Result<(), SceneError> {
        self.manager.start()
    }

    /// Runs one frame.
    ///
    /// 1. Collects input messages (exits on `Closed` or disconnect)
    /// 2. Updates the scene manager by `dt`
    /// 3. Forwards the collected input, in order
    /// 4. Renders into `surface`
    ///
    /// Returns [`TickControl::Exit`] once the input producer closed, every
    /// sender was dropped, or a scene requested quit.
    ///
    /// Transition events are drained from the manager every tick, logged at
    /// debug level and kept until the next tick in
    /// [`frame_events`](Self::frame_events).
    ///
    /// # Panics
    ///
    /// Panics if [`start`](Self::start) has not succeeded.
    pub fn tick(&mut self, dt: f32, surface: &mut dyn RenderSurface) -> TickControl {
        self.frame_events.clear();

        if self.feed.collect_frame() == TickControl::Exit {
            return TickControl::Exit;
        }

        self.manager.update(dt);

        for event in self.feed.take_events() {
            self.manager.handle_input(&event);
        }

        self.manager.render(surface);

        self.frame_events = self.manager.take_events();
        for event in &self.frame_events {
            debug!("{:?}", event);
        }

        if self.manager.quit_requested() {
            TickControl::Exit
        } else {
            TickControl::Continue
        }
    }

    /// Starts the runtime if needed and loops at the configured rate until
    /// [`tick`](Self::tick) returns `Exit`.
    ///
    /// Every frame advances by exactly `1 / tps` seconds, whatever the
    /// wall-clock time taken.
    ///
    /// # Errors
    ///
    /// Returns the error of entering the initial scene.
    pub fn run(mut self, surface: &mut dyn RenderSurface) -> Result<(), SceneError> {
        if !self.manager.is_initialized() {
            self.start()?;
        }

        let frame_duration = Duration::from_secs_f64(1.0 / self.tps);
        let dt = frame_duration.as_secs_f32();
        let mut frames: u64 = 0;

        info!("Runtime loop started (TPS: {})", self.tps);

        loop {
            let frame_start = Instant::now();

            let control = self.tick(dt, surface);
            frames += 1;

            if control == TickControl::Exit {
                break;
            }

            let elapsed = frame_start.elapsed();
            if elapsed < frame_duration {
                thread::sleep(frame_duration - elapsed);
            }
        }

        info!(
            "Runtime stopped after {} frames in scene {:?}",
            frames,
            self.manager.active_scene_id()
        );
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{InputEvent, KeyCode};
    use crate::core::scene::{SceneId, TransitionState};
    use crate::core::services::CommandSurface;
    use crate::scenes::{builtin_factory, test_support::services};

    fn runtime() -> (Runtime, Sender<InputMessage>) {
        let (services, _audio) = services();
        RuntimeBuilder::new()
            .with_tps(1000.0)
            .with_scene_config(SceneConfig::default().with_fade_out(0.1).with_fade_in(0.1))
            .build(builtin_factory(services))
    }

    //=====================================================================
    // RuntimeBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = RuntimeBuilder::new();
        assert_eq!(builder.tps, 60.0);
        assert_eq!(builder.channel_capacity, 128);
        assert_eq!(builder.scene_config, SceneConfig::default());
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let builder = RuntimeBuilder::new()
            .with_tps(120.0)
            .with_channel_capacity(256);
        assert_eq!(builder.tps, 120.0);
        assert_eq!(builder.channel_capacity, 256);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_zero() {
        RuntimeBuilder::new().with_tps(0.0);
    }

    #[test]
    #[should_panic(expected = "Channel capacity must be positive")]
    fn builder_with_channel_capacity_panics_on_zero() {
        RuntimeBuilder::new().with_channel_capacity(0);
    }

    //=====================================================================
    // Runtime Tests
    //=====================================================================

    #[test]
    fn tick_forwards_input_and_renders() {
        let (mut runtime, sender) = runtime();
        runtime.start().unwrap();

        sender
            .send(InputMessage::single(InputEvent::key_down(KeyCode::Enter)))
            .unwrap();

        let mut surface = CommandSurface::new();
        assert_eq!(runtime.tick(0.01, &mut surface), TickControl::Continue);
        assert!(surface.texts().any(|t| t == "stagecraft"));
        assert_eq!(runtime.manager().state(), TransitionState::FadingOut);

        for _ in 0..30 {
            runtime.tick(0.01, &mut surface);
        }
        assert_eq!(runtime.manager().active_scene_id(), Some(SceneId::MainMenu));
    }

    #[test]
    fn tick_exits_when_scene_quits() {
        let (mut runtime, sender) = runtime();
        runtime.start().unwrap();
        runtime
            .manager_mut()
            .request_scene_change(SceneId::MainMenu)
            .unwrap();

        let mut surface = CommandSurface::new();
        while runtime.manager().is_transitioning() {
            runtime.tick(0.02, &mut surface);
        }

        sender
            .send(InputMessage::single(InputEvent::key_down(KeyCode::Escape)))
            .unwrap();
        assert_eq!(runtime.tick(0.02, &mut surface), TickControl::Exit);
    }

    #[test]
    fn tick_exits_when_producer_closes() {
        let (mut runtime, sender) = runtime();
        runtime.start().unwrap();
        sender.send(InputMessage::Closed).unwrap();

        assert_eq!(runtime.tick(0.01, &mut CommandSurface::new()), TickControl::Exit);
    }

    #[test]
    fn tick_exits_when_every_producer_is_dropped() {
        let (mut runtime, sender) = runtime();
        runtime.start().unwrap();
        let clone = sender.clone();

        let mut surface = CommandSurface::new();
        drop(sender);
        assert_eq!(runtime.tick(0.01, &mut surface), TickControl::Continue);

        drop(clone);
        assert_eq!(runtime.tick(0.01, &mut surface), TickControl::Exit);
    }

    #[test]
    fn tick_drains_transition_events() {
        let (mut runtime, sender) = runtime();
        runtime.start().unwrap();
        runtime.manager_mut().take_events();

        sender
            .send(InputMessage::single(InputEvent::key_down(KeyCode::Space)))
            .unwrap();

        let mut surface = CommandSurface::new();
        runtime.tick(0.01, &mut surface);
        assert!(runtime.frame_events().contains(&TransitionEvent::RequestQueued {
            target: SceneId::MainMenu,
            replaced: None,
        }));
        assert!(runtime.manager_mut().take_events().is_empty());

        let mut switched = false;
        for _ in 0..30 {
            runtime.tick(0.01, &mut surface);
            switched |= runtime.frame_events().contains(&TransitionEvent::SceneSwitched {
                from: SceneId::Splash,
                to: SceneId::MainMenu,
            });
        }
        assert!(switched);
        assert!(runtime.frame_events().is_empty());
        assert!(runtime.manager_mut().take_events().is_empty());
    }

    #[test]
    fn run_starts_and_stops_on_close() {
        let (runtime, sender) = runtime();
        sender
            .send(InputMessage::single(InputEvent::key_down(KeyCode::Space)))
            .unwrap();

        let producer = thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            let _ = sender.send(InputMessage::Closed);
        });

        let mut surface = CommandSurface::new();
        assert!(runtime.run(&mut surface).is_ok());
        producer.join().unwrap();
    }

    #[test]
    fn run_stops_when_producer_thread_ends() {
        let (runtime, sender) = runtime();

        let producer = thread::spawn(move || {
            sender
                .send(InputMessage::single(InputEvent::key_down(KeyCode::Space)))
                .unwrap();
            thread::sleep(Duration::from_millis(20));
        });

        let mut surface = CommandSurface::new();
        assert!(runtime.run(&mut surface).is_ok());
        producer.join().unwrap();
    }

    #[test]
    fn run_reports_startup_failure() {
        use crate::core::services::AssetRegistry;
        use crate::scenes::test_support::services_with;

        let (services, _audio) = services_with(AssetRegistry::new());
        let (runtime, _input) = RuntimeBuilder::new().build(builtin_factory(services));

        let result = runtime.run(&mut CommandSurface::new());
        assert!(matches!(result, Err(SceneError::Construction { scene: SceneId::Splash, .. })));
    }
}
