//=========================================================================
// Built-in Scenes
//=========================================================================
//
// The four screens of a typical small application: Splash, MainMenu,
// Settings and Game, plus the helpers that register them.
//
// Navigation graph:
//   Splash ──(timeout / any press)──► MainMenu
//   MainMenu ──► Game | Settings | quit
//   Settings ──(Escape / Back)──► MainMenu
//   Game ──(Escape)──► MainMenu
//
// Every scene resolves its fonts and textures in its constructor, so a
// missing asset fails the switch before the old scene is left.
//
//=========================================================================

//=== Module Declarations =================================================

mod game;
mod main_menu;
mod settings;
mod splash;

//=== Public API ==========================================================

pub use game::GameScene;
pub use main_menu::{MainMenuScene, MenuItem};
pub use settings::{SettingsRow, SettingsScene};
pub use splash::SplashScene;

//=== Internal Dependencies ===============================================

use crate::core::scene::{SceneFactory, SceneId};
use crate::core::services::{AssetRegistry, Color, SceneServices};

//=== Layout & Asset Names ================================================

/// Logical screen width the built-in scenes lay out against.
pub const SCREEN_WIDTH: f32 = 800.0;

/// Logical screen height the built-in scenes lay out against.
pub const SCREEN_HEIGHT: f32 = 600.0;

/// Large font used for screen titles.
pub const TITLE_FONT: &str = "title";

/// Font used for menu entries and the HUD.
pub const UI_FONT: &str = "ui";

/// Splash screen logo.
pub const LOGO_TEXTURE: &str = "logo";

/// Player sprite in the game scene.
pub const PLAYER_TEXTURE: &str = "player";

pub(crate) const BACKGROUND: Color = Color::rgb(0.06, 0.06, 0.09);
pub(crate) const HIGHLIGHT: Color = Color::rgb(1.0, 0.8, 0.2);

//=== Registration ========================================================

/// Asset registry containing everything the built-in scenes need.
pub fn builtin_assets() -> AssetRegistry {
    AssetRegistry::new()
        .with_font(TITLE_FONT, 48.0)
        .with_font(UI_FONT, 24.0)
        .with_texture(LOGO_TEXTURE, 256, 128)
        .with_texture(PLAYER_TEXTURE, 32, 32)
}

/// Registers the four built-in scenes with `factory`.
pub fn register_builtin(factory: &mut SceneFactory) {
    factory.register(SceneId::Splash, |services| {
        Ok(Box::new(SplashScene::new(services)?))
    });
    factory.register(SceneId::MainMenu, |services| {
        Ok(Box::new(MainMenuScene::new(services)?))
    });
    factory.register(SceneId::Settings, |services| {
        Ok(Box::new(SettingsScene::new(services)?))
    });
    factory.register(SceneId::Game, |services| {
        Ok(Box::new(GameScene::new(services)?))
    });
}

/// Factory with every built-in scene registered.
pub fn builtin_factory(services: SceneServices) -> SceneFactory {
    let mut factory = SceneFactory::new(services);
    register_builtin(&mut factory);
    factory
}

//=== Test Support ========================================================


//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::test_support::{drain, services, services_with};
    use super::*;
    use crate::core::input::{InputEvent, KeyCode};
    use crate::core::scene::{SceneConfig, SceneError, SceneManager};
    use crate::core::services::AudioCommand;

    #[test]
    fn builtin_factory_registers_every_scene() {
        let (services, _audio) = services();
        let factory = builtin_factory(services);
        assert_eq!(factory.registered(), SceneId::ALL.to_vec());

        for id in SceneId::ALL {
            assert!(factory.create(id).is_ok(), "{} failed to build", id);
        }
    }

    #[test]
    fn missing_asset_is_construction_error() {
        let (services, _audio) = services_with(AssetRegistry::new().with_font(TITLE_FONT, 48.0));
        let factory = builtin_factory(services);

        let err = factory.create(SceneId::Splash).err().unwrap();
        assert_eq!(err.scene(), SceneId::Splash);
        assert!(matches!(err, SceneError::Construction { .. }));
    }

    fn manager_with(services: SceneServices) -> SceneManager {
        let config = SceneConfig::default().with_fade_out(0.1).with_fade_in(0.1);
        SceneManager::new(builtin_factory(services), config)
    }

    fn settle(manager: &mut SceneManager) {
        while manager.is_transitioning() {
            manager.update(0.05);
        }
    }

    fn press(manager: &mut SceneManager, key: KeyCode) {
        manager.handle_input(&InputEvent::key_down(key));
        settle(manager);
    }

    #[test]
    fn navigation_flow_through_builtin_scenes() {
        let (services, audio) = services();
        let mut manager = manager_with(services);
        manager.start().unwrap();

        press(&mut manager, KeyCode::Space);
        assert_eq!(manager.active_scene_id(), Some(SceneId::MainMenu));

        press(&mut manager, KeyCode::Enter);
        assert_eq!(manager.active_scene_id(), Some(SceneId::Game));

        press(&mut manager, KeyCode::Escape);
        assert_eq!(manager.active_scene_id(), Some(SceneId::MainMenu));

        manager.handle_input(&InputEvent::key_down(KeyCode::ArrowUp));
        manager.handle_input(&InputEvent::key_down(KeyCode::Enter));
        assert!(manager.quit_requested());

        assert_eq!(
            drain(&audio),
            vec![
                AudioCommand::PlaySound("splash_chime".into()),
                AudioCommand::PlayMusic("menu_theme".into()),
                AudioCommand::PlaySound("menu_select".into()),
                AudioCommand::PlayMusic("game_theme".into()),
                AudioCommand::StopMusic,
                AudioCommand::PlayMusic("menu_theme".into()),
                AudioCommand::PlaySound("menu_move".into()),
                AudioCommand::PlaySound("menu_select".into()),
            ]
        );
    }

    #[test]
    fn leaving_game_keeps_menu_music_playing() {
        let (services, audio) = services();
        let mut manager = manager_with(services);
        manager.initialize(SceneId::Game).unwrap();
        drain(&audio);

        press(&mut manager, KeyCode::Escape);
        assert_eq!(manager.active_scene_id(), Some(SceneId::MainMenu));

        let music: Vec<_> = drain(&audio)
            .into_iter()
            .filter(|c| !matches!(c, AudioCommand::PlaySound(_)))
            .collect();
        assert_eq!(
            music,
            vec![AudioCommand::StopMusic, AudioCommand::PlayMusic("menu_theme".into())]
        );
    }
}
