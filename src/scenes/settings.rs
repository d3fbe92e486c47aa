//=========================================================================
// Settings Scene
//=========================================================================
//
// In-memory audio settings. Values live only as long as the scene
// instance; persisting them is left to the application.
//
// Controls:
//   ArrowUp / ArrowDown       select row
//   ArrowLeft / ArrowRight    adjust volume
//   Enter / Space             toggle music, or go back on "Back"
//   Escape                    back to the main menu
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::Arc;

use log::debug;

//=== Internal Dependencies ===============================================

use super::{BACKGROUND, HIGHLIGHT, SCREEN_HEIGHT, SCREEN_WIDTH, TITLE_FONT, UI_FONT};
use crate::core::input::{InputEvent, KeyCode};
use crate::core::scene::{Scene, SceneContext, SceneError, SceneId};
use crate::core::services::{AudioProvider, Color, FontHandle, RenderSurface, SceneServices};

//=== SettingsRow =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    Volume,
    Music,
    Back,
}

impl SettingsRow {
    pub const ALL: [SettingsRow; 3] = [SettingsRow::Volume, SettingsRow::Music, SettingsRow::Back];
}

//=== SettingsScene =======================================================

pub struct SettingsScene {
    title_font: FontHandle,
    row_font: FontHandle,
    audio: Arc<dyn AudioProvider>,
    row: usize,
    volume: u8,
    music_enabled: bool,
}

impl SettingsScene {
    pub const MAX_VOLUME: u8 = 10;
    pub const DEFAULT_VOLUME: u8 = 7;

    pub fn new(services: &SceneServices) -> Result<Self, SceneError> {
        let title_font = services
            .assets
            .font(TITLE_FONT)
            .map_err(|e| SceneError::construction(SceneId::Settings, e))?;
        let row_font = services
            .assets
            .font(UI_FONT)
            .map_err(|e| SceneError::construction(SceneId::Settings, e))?;

        Ok(Self {
            title_font,
            row_font,
            audio: Arc::clone(&services.audio),
            row: 0,
            volume: Self::DEFAULT_VOLUME,
            music_enabled: true,
        })
    }

    pub fn selected(&self) -> SettingsRow {
        SettingsRow::ALL[self.row]
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    pub fn music_enabled(&self) -> bool {
        self.music_enabled
    }

    fn adjust_volume(&mut self, up: bool) {
        let volume = if up {
            (self.volume + 1).min(Self::MAX_VOLUME)
        } else {
            self.volume.saturating_sub(1)
        };

        if volume != self.volume {
            self.volume = volume;
            debug!("Volume set to {}", volume);
            self.audio.play_sound("menu_move");
        }
    }

    fn toggle_music(&mut self) {
        self.music_enabled = !self.music_enabled;
        if self.music_enabled {
            self.audio.play_music("menu_theme");
        } else {
            self.audio.stop_music();
        }
    }

    fn row_label(&self, row: SettingsRow) -> String {
        match row {
            SettingsRow::Volume => format!("Volume: {}/{}", self.volume, Self::MAX_VOLUME),
            SettingsRow::Music => {
                format!("Music: {}", if self.music_enabled { "on" } else { "off" })
            }
            SettingsRow::Back => "Back".to_owned(),
        }
    }
}

impl Scene for SettingsScene {
    fn update(&mut self, _dt: f32, _ctx: &mut SceneContext) {}

    fn handle_input(&mut self, event: &InputEvent, ctx: &mut SceneContext) {
        let Some(key) = event.pressed_key() else {
            return;
        };
        let rows = SettingsRow::ALL.len();

        match (key, self.selected()) {
            (KeyCode::Escape, _) => ctx.request_scene_change(SceneId::MainMenu),
            (KeyCode::ArrowUp, _) => self.row = (self.row + rows - 1) % rows,
            (KeyCode::ArrowDown, _) => self.row = (self.row + 1) % rows,
            (KeyCode::ArrowLeft, SettingsRow::Volume) => self.adjust_volume(false),
            (KeyCode::ArrowRight, SettingsRow::Volume) => self.adjust_volume(true),
            (KeyCode::Enter | KeyCode::Space, SettingsRow::Music) => self.toggle_music(),
            (KeyCode::Enter | KeyCode::Space, SettingsRow::Back) => {
                ctx.request_scene_change(SceneId::MainMenu)
            }
            _ => {}
        }
    }

    fn render(&self, surface: &mut dyn RenderSurface) {
        surface.fill_rect(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT, BACKGROUND);
        surface.draw_text(&self.title_font, "Settings", 260.0, 120.0, Color::WHITE);

        for (index, row) in SettingsRow::ALL.iter().enumerate() {
            let color = if index == self.row {
                HIGHLIGHT
            } else {
                Color::WHITE
            };
            let y = 260.0 + index as f32 * 48.0;
            surface.draw_text(&self.row_font, &self.row_label(*row), 280.0, y, color);
        }
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::{AudioCommand, CommandSurface};
    use crate::scenes::test_support::{drain, services};

    fn press(settings: &mut SettingsScene, key: KeyCode) -> SceneContext {
        let mut ctx = SceneContext::new();
        settings.handle_input(&InputEvent::key_down(key), &mut ctx);
        ctx
    }

    #[test]
    fn volume_is_clamped() {
        let (services, _audio) = services();
        let mut settings = SettingsScene::new(&services).unwrap();

        for _ in 0..20 {
            press(&mut settings, KeyCode::ArrowRight);
        }
        assert_eq!(settings.volume(), SettingsScene::MAX_VOLUME);

        for _ in 0..20 {
            press(&mut settings, KeyCode::ArrowLeft);
        }
        assert_eq!(settings.volume(), 0);
    }

    #[test]
    fn volume_only_changes_on_volume_row() {
        let (services, _audio) = services();
        let mut settings = SettingsScene::new(&services).unwrap();

        press(&mut settings, KeyCode::ArrowDown);
        press(&mut settings, KeyCode::ArrowRight);
        assert_eq!(settings.selected(), SettingsRow::Music);
        assert_eq!(settings.volume(), SettingsScene::DEFAULT_VOLUME);
    }

    #[test]
    fn music_toggle_drives_audio() {
        let (services, audio) = services();
        let mut settings = SettingsScene::new(&services).unwrap();

        press(&mut settings, KeyCode::ArrowDown);
        press(&mut settings, KeyCode::Enter);
        assert!(!settings.music_enabled());
        press(&mut settings, KeyCode::Space);
        assert!(settings.music_enabled());

        assert_eq!(
            drain(&audio),
            vec![
                AudioCommand::StopMusic,
                AudioCommand::PlayMusic("menu_theme".into()),
            ]
        );
    }

    #[test]
    fn back_row_and_escape_return_to_menu() {
        let (services, _audio) = services();
        let mut settings = SettingsScene::new(&services).unwrap();

        assert_eq!(press(&mut settings, KeyCode::Escape).scene_request(), Some(SceneId::MainMenu));

        press(&mut settings, KeyCode::ArrowUp);
        assert_eq!(settings.selected(), SettingsRow::Back);
        assert_eq!(press(&mut settings, KeyCode::Enter).scene_request(), Some(SceneId::MainMenu));
    }

    #[test]
    fn renders_current_values() {
        let (services, _audio) = services();
        let mut settings = SettingsScene::new(&services).unwrap();
        press(&mut settings, KeyCode::ArrowLeft);

        let mut surface = CommandSurface::new();
        settings.render(&mut surface);
        assert_eq!(
            surface.texts().collect::<Vec<_>>(),
            vec!["Settings", "Volume: 6/10", "Music: on", "Back"]
        );
    }
}
