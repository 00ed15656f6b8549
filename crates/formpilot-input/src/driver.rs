//! Input driver trait and the enigo-backed production driver.

use std::thread;
use std::time::Duration;

use enigo::{Button, Coordinate, Direction, Enigo, Key, Keyboard, Mouse, Settings};
use thiserror::Error;

use formpilot_protocols::form::Point;

/// Input control errors.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Input failed: {0}")]
    Failed(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

/// Abstraction over the simulated input device.
///
/// The device is a process-wide exclusive resource; callers hold it for a
/// whole fill sequence. Implementations are not expected to be re-entrant.
pub trait InputDriver: Send {
    /// Click the left mouse button at an absolute position.
    fn click(&mut self, point: Point) -> Result<(), InputError>;

    /// Type text one character at a time with the given inter-key interval.
    fn type_text(&mut self, text: &str, interval: Duration) -> Result<(), InputError>;

    /// Press a key combination, e.g. `["win", "ctrl", "left"]`.
    fn hotkey(&mut self, keys: &[&str]) -> Result<(), InputError>;

    /// Blocking wait between scripted steps.
    fn sleep(&mut self, duration: Duration);

    /// Width and height of the main display in pixels.
    fn screen_size(&mut self) -> Result<(i32, i32), InputError>;
}

/// Production input driver over enigo.
pub struct EnigoDriver {
    enigo: Enigo,
}

impl EnigoDriver {
    pub fn new() -> Result<Self, InputError> {
        let enigo =
            Enigo::new(&Settings::default()).map_err(|e| InputError::Failed(e.to_string()))?;
        Ok(Self { enigo })
    }
}

impl InputDriver for EnigoDriver {
    fn click(&mut self, point: Point) -> Result<(), InputError> {
        self.enigo
            .move_mouse(point.x, point.y, Coordinate::Abs)
            .map_err(|e| InputError::Failed(e.to_string()))?;
        self.enigo
            .button(Button::Left, Direction::Click)
            .map_err(|e| InputError::Failed(e.to_string()))
    }

    fn type_text(&mut self, text: &str, interval: Duration) -> Result<(), InputError> {
        for c in text.chars() {
            self.enigo
                .key(Key::Unicode(c), Direction::Click)
                .map_err(|e| InputError::Failed(e.to_string()))?;
            thread::sleep(interval);
        }
        Ok(())
    }

    fn hotkey(&mut self, keys: &[&str]) -> Result<(), InputError> {
        // Hold all modifiers, tap the final key, release in reverse order.
        for key in keys.iter().take(keys.len().saturating_sub(1)) {
            let k = parse_key(key)?;
            self.enigo
                .key(k, Direction::Press)
                .map_err(|e| InputError::Failed(e.to_string()))?;
        }

        if let Some(last) = keys.last() {
            let k = parse_key(last)?;
            self.enigo
                .key(k, Direction::Click)
                .map_err(|e| InputError::Failed(e.to_string()))?;
        }

        for key in keys.iter().rev().skip(1) {
            let k = parse_key(key)?;
            self.enigo
                .key(k, Direction::Release)
                .map_err(|e| InputError::Failed(e.to_string()))?;
        }

        Ok(())
    }

    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }

    fn screen_size(&mut self) -> Result<(i32, i32), InputError> {
        self.enigo
            .main_display()
            .map_err(|e| InputError::Failed(e.to_string()))
    }
}

/// Parse a key string to an enigo Key.
fn parse_key(key: &str) -> Result<Key, InputError> {
    let k = match key.to_lowercase().as_str() {
        "enter" | "return" => Key::Return,
        "tab" => Key::Tab,
        "space" => Key::Space,
        "backspace" => Key::Backspace,
        "delete" | "del" => Key::Delete,
        "escape" | "esc" => Key::Escape,
        "home" => Key::Home,
        "end" => Key::End,
        "pageup" => Key::PageUp,
        "pagedown" => Key::PageDown,
        "up" => Key::UpArrow,
        "down" => Key::DownArrow,
        "left" => Key::LeftArrow,
        "right" => Key::RightArrow,

        "ctrl" | "control" => Key::Control,
        "alt" => Key::Alt,
        "shift" => Key::Shift,
        "meta" | "cmd" | "command" | "win" | "super" => Key::Meta,

        "f1" => Key::F1,
        "f2" => Key::F2,
        "f3" => Key::F3,
        "f4" => Key::F4,
        "f5" => Key::F5,
        "f6" => Key::F6,
        "f7" => Key::F7,
        "f8" => Key::F8,
        "f9" => Key::F9,
        "f10" => Key::F10,
        "f11" => Key::F11,
        "f12" => Key::F12,

        s if s.chars().count() == 1 => {
            let c = s.chars().next().ok_or_else(|| InputError::InvalidKey(key.to_string()))?;
            Key::Unicode(c)
        }

        _ => return Err(InputError::InvalidKey(key.to_string())),
    };

    Ok(k)
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod tests;
