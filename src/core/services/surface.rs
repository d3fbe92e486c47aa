//=========================================================================
// Render Surface
//=========================================================================
//
// Opaque drawable target handed to scenes each frame.
//
// The scene core never configures the surface. It only sets the global
// opacity before asking a scene to draw, so a fading scene needs no
// knowledge of the transition.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{FontHandle, TextureHandle};

//=== Color ===============================================================

/// RGBA color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    /// Opaque color from RGB components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

//=== RenderSurface =======================================================

/// Drawing operations available to scenes.
pub trait RenderSurface {
    /// Sets the opacity multiplier applied to subsequent draws.
    fn set_opacity(&mut self, opacity: f32);

    /// Fills an axis-aligned rectangle.
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);

    /// Draws a line of text with its top-left corner at `(x, y)`.
    fn draw_text(&mut self, font: &FontHandle, text: &str, x: f32, y: f32, color: Color);

    /// Draws a texture with its top-left corner at `(x, y)`.
    fn draw_texture(&mut self, texture: &TextureHandle, x: f32, y: f32);
}

//=== CommandSurface ======================================================

/// Recorded draw operation, with the opacity active when it was issued.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
        opacity: f32,
    },
    Text {
        font: FontHandle,
        text: String,
        x: f32,
        y: f32,
        color: Color,
        opacity: f32,
    },
    Texture {
        texture: TextureHandle,
        x: f32,
        y: f32,
        opacity: f32,
    },
}

impl DrawCommand {
    /// Opacity the command was drawn with.
    pub fn opacity(&self) -> f32 {
        match self {
            Self::Rect { opacity, .. }
            | Self::Text { opacity, .. }
            | Self::Texture { opacity, .. } => *opacity,
        }
    }
}

/// Headless [`RenderSurface`] that records draw commands.
#[derive(Debug)]
pub struct CommandSurface {
    opacity: f32,
    commands: Vec<DrawCommand>,
}

impl CommandSurface {
    /// Creates an empty surface at full opacity.
    pub fn new() -> Self {
        Self {
            opacity: 1.0,
            commands: Vec::new(),
        }
    }

    /// Commands recorded since the last [`clear`](Self::clear).
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Texts drawn since the last clear, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Discards recorded commands and restores full opacity.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.opacity = 1.0;
    }
}

impl Default for CommandSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSurface for CommandSurface {
    fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
            color,
            opacity: self.opacity,
        });
    }

    fn draw_text(&mut self, font: &FontHandle, text: &str, x: f32, y: f32, color: Color) {
        self.commands.push(DrawCommand::Text {
            font: font.clone(),
            text: text.to_owned(),
            x,
            y,
            color,
            opacity: self.opacity,
        });
    }

    fn draw_texture(&mut self, texture: &TextureHandle, x: f32, y: f32) {
        self.commands.push(DrawCommand::Texture {
            texture: texture.clone(),
            x,
            y,
            opacity: self.opacity,
        });
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn records_commands_with_current_opacity() {
        let mut surface = CommandSurface::new();
        surface.fill_rect(0.0, 0.0, 10.0, 10.0, Color::BLACK);
        surface.set_opacity(0.25);
        surface.fill_rect(0.0, 0.0, 10.0, 10.0, Color::WHITE);

        let opacities: Vec<_> = surface.commands().iter().map(DrawCommand::opacity).collect();
        assert_eq!(opacities, vec![1.0, 0.25]);
    }

    #[test]
    fn opacity_is_clamped() {
        let mut surface = CommandSurface::new();
        surface.set_opacity(3.0);
        surface.fill_rect(0.0, 0.0, 1.0, 1.0, Color::BLACK);
        surface.set_opacity(-1.0);
        surface.fill_rect(0.0, 0.0, 1.0, 1.0, Color::BLACK);

        assert_eq!(surface.commands()[0].opacity(), 1.0);
        assert_eq!(surface.commands()[1].opacity(), 0.0);
    }

    #[test]
    fn texts_and_clear() {
        let font = FontHandle {
            name: Arc::from("menu"),
            size: 12.0,
        };
        let mut surface = CommandSurface::new();
        surface.set_opacity(0.5);
        surface.draw_text(&font, "Play", 0.0, 0.0, Color::WHITE);
        surface.draw_text(&font, "Quit", 0.0, 20.0, Color::WHITE);

        assert_eq!(surface.texts().collect::<Vec<_>>(), vec!["Play", "Quit"]);

        surface.clear();
        assert!(surface.commands().is_empty());
        surface.fill_rect(0.0, 0.0, 1.0, 1.0, Color::BLACK);
        assert_eq!(surface.commands()[0].opacity(), 1.0);
    }
}
