//=========================================================================
// Input Event Types
//
// Platform-independent input events delivered to the active scene.
//
// The scene manager forwards these, in arrival order, to the active
// scene's `handle_input` while no transition is running. Events that
// arrive mid-transition are dropped, never queued.
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    InputTranslator (platform::input_translator)
//         ↓
//    InputEvent (this module) ──► InputFeed (per-frame batch)
//         ↓
//    SceneManager::handle_input ──► Scene::handle_input
// ```
//
//=========================================================================

//=== MouseButton =========================================================

/// Physical mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,

    /// Secondary button (typically right).
    Right,

    /// Middle button (wheel click).
    Middle,

    /// Side buttons, thumb buttons and anything else.
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced.
/// Only the keys scenes actually navigate with are mapped; everything else
/// becomes `Unidentified` and is filtered by the translator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------

    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------

    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------

    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------

    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,

    /// Key not covered above.
    Unidentified,
}

//=== Modifiers ===========================================================

/// Modifier key state (Shift, Ctrl, Alt).
///
/// Left and right variants are not distinguished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
    };

    /// Shift only.
    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
        alt: false,
    };

    /// Ctrl only.
    pub const CTRL: Self = Self {
        shift: false,
        ctrl: true,
        alt: false,
    };

    /// Alt only.
    pub const ALT: Self = Self {
        shift: false,
        ctrl: false,
        alt: true,
    };

    /// Returns true if any modifier is held.
    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt
    }
}

//=== InputEvent ==========================================================

/// Low-level input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Key pressed down.
    KeyDown { key: KeyCode, modifiers: Modifiers },

    /// Key released.
    KeyUp { key: KeyCode, modifiers: Modifiers },

    /// Mouse button pressed.
    MouseButtonDown { button: MouseButton, modifiers: Modifiers },

    /// Mouse button released.
    MouseButtonUp { button: MouseButton, modifiers: Modifiers },

    /// Cursor moved, in screen pixels with a top-left origin.
    MouseMoved { x: f32, y: f32 },
}

impl InputEvent {
    //--- Constructors -----------------------------------------------------

    /// Key press without modifiers.
    pub fn key_down(key: KeyCode) -> Self {
        Self::KeyDown {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    /// Key release without modifiers.
    pub fn key_up(key: KeyCode) -> Self {
        Self::KeyUp {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    /// Mouse button press without modifiers.
    pub fn mouse_down(button: MouseButton) -> Self {
        Self::MouseButtonDown {
            button,
            modifiers: Modifiers::NONE,
        }
    }

    //--- Queries ----------------------------------------------------------

    /// The key pressed by this event, if it is a `KeyDown`.
    pub fn pressed_key(&self) -> Option<KeyCode> {
        match self {
            Self::KeyDown { key, .. } => Some(*key),
            _ => None,
        }
    }

    /// The key released by this event, if it is a `KeyUp`.
    pub fn released_key(&self) -> Option<KeyCode> {
        match self {
            Self::KeyUp { key, .. } => Some(*key),
            _ => None,
        }
    }

    /// Returns true for key and mouse button presses.
    pub fn is_press(&self) -> bool {
        matches!(self, Self::KeyDown { .. } | Self::MouseButtonDown { .. })
    }

    /// Returns a copy with its modifiers replaced. No effect on `MouseMoved`.
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        match &mut self {
            Self::KeyDown { modifiers: m, .. }
            | Self::KeyUp { modifiers: m, .. }
            | Self::MouseButtonDown { modifiers: m, .. }
            | Self::MouseButtonUp { modifiers: m, .. } => *m = modifiers,
            Self::MouseMoved { .. } => {}
        }
        self
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
