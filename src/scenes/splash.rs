//=========================================================================
// Splash Scene
//=========================================================================
//
// Shows the logo, then hands over to the main menu once the display
// time elapsed or the user pressed any key or mouse button.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::Arc;

use log::debug;

//=== Internal Dependencies ===============================================

use super::{BACKGROUND, LOGO_TEXTURE, SCREEN_HEIGHT, SCREEN_WIDTH, TITLE_FONT};
use crate::core::input::InputEvent;
use crate::core::scene::{Scene, SceneContext, SceneError, SceneId};
use crate::core::services::{
    AudioProvider, Color, FontHandle, RenderSurface, SceneServices, TextureHandle,
};

//=== SplashScene =========================================================

/// Timed logo screen.
pub struct SplashScene {
    logo: TextureHandle,
    font: FontHandle,
    audio: Arc<dyn AudioProvider>,
    display_time: f32,
    elapsed: f32,
    advanced: bool,
}

impl SplashScene {
    /// Seconds the logo stays up before advancing on its own.
    pub const DEFAULT_DISPLAY_TIME: f32 = 2.0;

    pub fn new(services: &SceneServices) -> Result<Self, SceneError> {
        let logo = services
            .assets
            .texture(LOGO_TEXTURE)
            .map_err(|e| SceneError::construction(SceneId::Splash, e))?;
        let font = services
            .assets
            .font(TITLE_FONT)
            .map_err(|e| SceneError::construction(SceneId::Splash, e))?;

        Ok(Self {
            logo,
            font,
            audio: Arc::clone(&services.audio),
            display_time: Self::DEFAULT_DISPLAY_TIME,
            elapsed: 0.0,
            advanced: false,
        })
    }

    /// Overrides the display time.
    ///
    /// # Panics
    ///
    /// Panics if `seconds` is not positive.
    pub fn with_display_time(mut self, seconds: f32) -> Self {
        assert!(seconds > 0.0, "Display time must be positive, got {}", seconds);
        self.display_time = seconds;
        self
    }

    /// Seconds spent on screen so far.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    fn advance(&mut self, ctx: &mut SceneContext) {
        if !self.advanced {
            self.advanced = true;
            ctx.request_scene_change(SceneId::MainMenu);
        }
    }
}

impl Scene for SplashScene {
    fn enter(&mut self) -> Result<(), SceneError> {
        self.audio.play_sound("splash_chime");
        Ok(())
    }

    fn update(&mut self, dt: f32, ctx: &mut SceneContext) {
        self.elapsed += dt;
        if self.elapsed >= self.display_time {
            debug!("Splash display time elapsed");
            self.advance(ctx);
        }
    }

    fn handle_input(&mut self, event: &InputEvent, ctx: &mut SceneContext) {
        if event.is_press() {
            self.advance(ctx);
        }
    }

    fn render(&self, surface: &mut dyn RenderSurface) {
        surface.fill_rect(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT, BACKGROUND);

        let x = (SCREEN_WIDTH - self.logo.width as f32) / 2.0;
        let y = (SCREEN_HEIGHT - self.logo.height as f32) / 2.0;
        surface.draw_texture(&self.logo, x, y);
        surface.draw_text(
            &self.font,
            "stagecraft",
            x,
            y + self.logo.height as f32 + 16.0,
            Color::WHITE,
        );
    }
}

//=== Tests ===============================================================
