use serde::{Deserialize, Serialize};
use std::fmt;

/// Режим окна kitty по данным System Events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindowMode {
    Fullscreen,
    Windowed,
}

impl WindowMode {
    pub fn from_fullscreen(is_fullscreen: bool) -> Self {
        if is_fullscreen {
            WindowMode::Fullscreen
        } else {
            WindowMode::Windowed
        }
    }
}

impl fmt::Display for WindowMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowMode::Fullscreen => write!(f, "fullscreen"),
            WindowMode::Windowed => write!(f, "windowed"),
        }
    }
}

/// Смена режима окна, обнаруженная циклом опроса
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub previous: Option<WindowMode>,
    pub mode: WindowMode,
    pub padding: u32,
}

impl Transition {
    pub fn new(previous: Option<WindowMode>, mode: WindowMode, padding: u32) -> Self {
        Self {
            previous,
            mode,
            padding,
        }
    }

    /// Первое наблюдение после запуска
    pub fn is_initial(&self) -> bool {
        self.previous.is_none()
    }
}

/// Строка статуса для stdout
impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            WindowMode::Fullscreen => {
                write!(f, "Fullscreen detected - padding set to {}", self.padding)
            }
            WindowMode::Windowed => write!(f, "Windowed mode - padding set to {}", self.padding),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_bool() {
        assert_eq!(WindowMode::from_fullscreen(true), WindowMode::Fullscreen);
        assert_eq!(WindowMode::from_fullscreen(false), WindowMode::Windowed);
    }

    #[test]
    fn test_status_lines() {
        let fullscreen = Transition::new(Some(WindowMode::Windowed), WindowMode::Fullscreen, 0);
        assert_eq!(fullscreen.to_string(), "Fullscreen detected - padding set to 0");
        assert!(!fullscreen.is_initial());

        let windowed = Transition::new(None, WindowMode::Windowed, 20);
        assert_eq!(windowed.to_string(), "Windowed mode - padding set to 20");
        assert!(windowed.is_initial());
    }
}
