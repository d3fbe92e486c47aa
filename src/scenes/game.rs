//=========================================================================
// Game Scene
//=========================================================================
//
// Minimal gameplay: a player sprite moved with the arrow keys and a
// survival score shown in the HUD.
//
// Movement uses held-key state, so a key released during a transition
// is simply never seen; every fresh instance starts with nothing held.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::Arc;

//=== Internal Dependencies ===============================================

use super::{BACKGROUND, PLAYER_TEXTURE, SCREEN_HEIGHT, SCREEN_WIDTH, UI_FONT};
use crate::core::input::{InputEvent, KeyCode};
use crate::core::scene::{Scene, SceneContext, SceneError, SceneId};
use crate::core::services::{
    AudioProvider, Color, FontHandle, RenderSurface, SceneServices, TextureHandle,
};

//=== Held Directions =====================================================

#[derive(Debug, Default, Clone, Copy)]
struct Held {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
}

impl Held {
    fn set(&mut self, key: KeyCode, pressed: bool) {
        match key {
            KeyCode::ArrowUp | KeyCode::KeyW => self.up = pressed,
            KeyCode::ArrowDown | KeyCode::KeyS => self.down = pressed,
            KeyCode::ArrowLeft | KeyCode::KeyA => self.left = pressed,
            KeyCode::ArrowRight | KeyCode::KeyD => self.right = pressed,
            _ => {}
        }
    }

    fn axis(negative: bool, positive: bool) -> f32 {
        match (negative, positive) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

//=== GameScene ===========================================================

pub struct GameScene {
    hud_font: FontHandle,
    player: TextureHandle,
    audio: Arc<dyn AudioProvider>,
    position: (f32, f32),
    held: Held,
    survived: f32,
    score: u32,
}

impl GameScene {
    /// Player speed in pixels per second.
    pub const PLAYER_SPEED: f32 = 240.0;

    /// Points awarded per second survived.
    pub const POINTS_PER_SECOND: u32 = 10;

    pub fn new(services: &SceneServices) -> Result<Self, SceneError> {
        let hud_font = services
            .assets
            .font(UI_FONT)
            .map_err(|e| SceneError::construction(SceneId::Game, e))?;
        let player = services
            .assets
            .texture(PLAYER_TEXTURE)
            .map_err(|e| SceneError::construction(SceneId::Game, e))?;

        let position = (
            (SCREEN_WIDTH - player.width as f32) / 2.0,
            (SCREEN_HEIGHT - player.height as f32) / 2.0,
        );

        Ok(Self {
            hud_font,
            player,
            audio: Arc::clone(&services.audio),
            position,
            held: Held::default(),
            survived: 0.0,
            score: 0,
        })
    }

    /// Top-left corner of the player sprite.
    pub fn position(&self) -> (f32, f32) {
        self.position
    }

    pub fn score(&self) -> u32 {
        self.score
    }
}

impl Scene for GameScene {
    fn enter(&mut self) -> Result<(), SceneError> {
        self.audio.play_music("game_theme");
        Ok(())
    }

    fn update(&mut self, dt: f32, _ctx: &mut SceneContext) {
        let dx = Held::axis(self.held.left, self.held.right);
        let dy = Held::axis(self.held.up, self.held.down);

        let max_x = SCREEN_WIDTH - self.player.width as f32;
        let max_y = SCREEN_HEIGHT - self.player.height as f32;
        self.position.0 = (self.position.0 + dx * Self::PLAYER_SPEED * dt).clamp(0.0, max_x);
        self.position.1 = (self.position.1 + dy * Self::PLAYER_SPEED * dt).clamp(0.0, max_y);

        self.survived += dt;
        self.score = (self.survived * Self::POINTS_PER_SECOND as f32) as u32;
    }

    fn handle_input(&mut self, event: &InputEvent, ctx: &mut SceneContext) {
        match event {
            InputEvent::KeyDown {
                key: KeyCode::Escape,
                ..
            } => ctx.request_scene_change(SceneId::MainMenu),
            InputEvent::KeyDown { key, .. } => self.held.set(*key, true),
            InputEvent::KeyUp { key, .. } => self.held.set(*key, false),
            _ => {}
        }
    }

    fn render(&self, surface: &mut dyn RenderSurface) {
        surface.fill_rect(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT, BACKGROUND);
        surface.draw_texture(&self.player, self.position.0, self.position.1);
        surface.draw_text(
            &self.hud_font,
            &format!("Score: {}", self.score),
            16.0,
            16.0,
            Color::WHITE,
        );
    }

    fn exit(&mut self) {
        self.audio.stop_music();
    }
}

//=== Tests ===============================================================
