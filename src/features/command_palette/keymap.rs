use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

/// What the palette component is asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteCommand {
    Open,
    Navigate(Direction),
    Select,
    Close,
}

/// Event payload pushed with a command; empty except for navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommandPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<&'static str>,
}

impl PaletteCommand {
    pub fn event_name(&self) -> &'static str {
        match self {
            PaletteCommand::Open => "open",
            PaletteCommand::Navigate(_) => "navigate",
            PaletteCommand::Select => "select",
            PaletteCommand::Close => "close",
        }
    }

    pub fn payload(&self) -> CommandPayload {
        match self {
            PaletteCommand::Navigate(direction) => CommandPayload { direction: Some(direction.as_str()) },
            _ => CommandPayload::default(),
        }
    }
}

/// The modifier that has to accompany the shortcut key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Meta,
    Control,
}

impl Modifier {
    /// Cmd on macOS, Ctrl everywhere else. Takes `navigator.platform`.
    pub fn for_platform(platform: &str) -> Self {
        if platform.to_uppercase().contains("MAC") {
            Modifier::Meta
        } else {
            Modifier::Control
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyPress {
    pub key: String,
    pub meta: bool,
    pub ctrl: bool,
}

impl KeyPress {
    pub fn plain(key: &str) -> Self {
        KeyPress { key: key.to_string(), ..KeyPress::default() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keymap {
    modifier: Modifier,
    shortcut: String,
}

impl Keymap {
    pub fn new(modifier: Modifier, shortcut: &str) -> Self {
        Self { modifier, shortcut: shortcut.to_string() }
    }

    /// Maps a key press to a command. Every `Some` must have its default
    /// action prevented by the caller.
    pub fn resolve(&self, press: &KeyPress, is_open: bool) -> Option<PaletteCommand> {
        let modifier_held = match self.modifier {
            Modifier::Meta => press.meta,
            Modifier::Control => press.ctrl,
        };
        if modifier_held && press.key == self.shortcut {
            return Some(PaletteCommand::Open);
        }

        if !is_open {
            return None;
        }
        match press.key.as_str() {
            "ArrowDown" => Some(PaletteCommand::Navigate(Direction::Down)),
            "ArrowUp" => Some(PaletteCommand::Navigate(Direction::Up)),
            "Enter" => Some(PaletteCommand::Select),
            "Escape" => Some(PaletteCommand::Close),
            _ => None,
        }
    }
}
