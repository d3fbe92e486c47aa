//=========================================================================
// Main Menu Scene
//=========================================================================
//
// Vertical menu with wrap-around selection.
//
// Controls:
//   ArrowUp / KeyW      previous entry
//   ArrowDown / KeyS    next entry
//   Enter / Space       activate entry
//   Escape              quit
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::Arc;

//=== Internal Dependencies ===============================================

use super::{BACKGROUND, HIGHLIGHT, SCREEN_HEIGHT, SCREEN_WIDTH, TITLE_FONT, UI_FONT};
use crate::core::input::{InputEvent, KeyCode};
use crate::core::scene::{Scene, SceneContext, SceneError, SceneId};
use crate::core::services::{AudioProvider, Color, FontHandle, RenderSurface, SceneServices};

//=== MenuItem ============================================================

/// Entries of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Play,
    Settings,
    Quit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 3] = [MenuItem::Play, MenuItem::Settings, MenuItem::Quit];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Play => "Play",
            MenuItem::Settings => "Settings",
            MenuItem::Quit => "Quit",
        }
    }
}

//=== MainMenuScene =======================================================

pub struct MainMenuScene {
    title_font: FontHandle,
    item_font: FontHandle,
    audio: Arc<dyn AudioProvider>,
    selected: usize,
}

impl MainMenuScene {
    pub fn new(services: &SceneServices) -> Result<Self, SceneError> {
        let title_font = services
            .assets
            .font(TITLE_FONT)
            .map_err(|e| SceneError::construction(SceneId::MainMenu, e))?;
        let item_font = services
            .assets
            .font(UI_FONT)
            .map_err(|e| SceneError::construction(SceneId::MainMenu, e))?;

        Ok(Self {
            title_font,
            item_font,
            audio: Arc::clone(&services.audio),
            selected: 0,
        })
    }

    /// Currently highlighted entry.
    pub fn selected(&self) -> MenuItem {
        MenuItem::ALL[self.selected]
    }

    fn move_selection(&mut self, forward: bool) {
        let count = MenuItem::ALL.len();
        self.selected = if forward {
            (self.selected + 1) % count
        } else {
            (self.selected + count - 1) % count
        };
        self.audio.play_sound("menu_move");
    }

    fn activate(&mut self, ctx: &mut SceneContext) {
        self.audio.play_sound("menu_select");
        match self.selected() {
            MenuItem::Play => ctx.request_scene_change(SceneId::Game),
            MenuItem::Settings => ctx.request_scene_change(SceneId::Settings),
            MenuItem::Quit => ctx.request_quit(),
        }
    }
}

impl Scene for MainMenuScene {
    fn enter(&mut self) -> Result<(), SceneError> {
        self.audio.play_music("menu_theme");
        Ok(())
    }

    fn update(&mut self, _dt: f32, _ctx: &mut SceneContext) {}

    fn handle_input(&mut self, event: &InputEvent, ctx: &mut SceneContext) {
        match event.pressed_key() {
            Some(KeyCode::ArrowUp | KeyCode::KeyW) => self.move_selection(false),
            Some(KeyCode::ArrowDown | KeyCode::KeyS) => self.move_selection(true),
            Some(KeyCode::Enter | KeyCode::Space) => self.activate(ctx),
            Some(KeyCode::Escape) => ctx.request_quit(),
            _ => {}
        }
    }

    fn render(&self, surface: &mut dyn RenderSurface) {
        surface.fill_rect(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT, BACKGROUND);
        surface.draw_text(&self.title_font, "Main Menu", 240.0, 120.0, Color::WHITE);

        for (index, item) in MenuItem::ALL.iter().enumerate() {
            let y = 260.0 + index as f32 * 48.0;
            let color = if index == self.selected {
                HIGHLIGHT
            } else {
                Color::WHITE
            };
            surface.draw_text(&self.item_font, item.label(), 320.0, y, color);
        }
    }
}

//=== Tests ===============================================================
