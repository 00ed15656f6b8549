//! Recording input driver for tests without a display.

use std::time::Duration;

use formpilot_protocols::form::Point;

use crate::driver::{InputDriver, InputError};

/// One recorded simulated input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimEvent {
    Click(Point),
    KeyPress(char),
    Hotkey(Vec<String>),
    Sleep(Duration),
}

/// Driver that records events instead of driving real hardware.
///
/// Sleeps are recorded, never performed, so scripted tests run instantly.
#[derive(Debug, Default)]
pub struct ScriptedDriver {
    pub events: Vec<SimEvent>,
    /// When set, every operation fails with this message.
    pub fail_with: Option<String>,
    /// Reported display size.
    pub screen: (i32, i32),
}

impl ScriptedDriver {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            fail_with: None,
            screen: (1920, 1080),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fail_with: Some(message.into()),
            ..Self::new()
        }
    }

    fn check(&self) -> Result<(), InputError> {
        match &self.fail_with {
            Some(msg) => Err(InputError::Failed(msg.clone())),
            None => Ok(()),
        }
    }

    /// Recorded clicks, in order.
    pub fn clicks(&self) -> Vec<Point> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SimEvent::Click(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    /// Number of recorded keystrokes.
    pub fn keystrokes(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SimEvent::KeyPress(_)))
            .count()
    }

    /// Recorded hotkey invocations.
    pub fn hotkeys(&self) -> Vec<Vec<String>> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SimEvent::Hotkey(keys) => Some(keys.clone()),
                _ => None,
            })
            .collect()
    }
}

impl InputDriver for ScriptedDriver {
    fn click(&mut self, point: Point) -> Result<(), InputError> {
        self.check()?;
        self.events.push(SimEvent::Click(point));
        Ok(())
    }

    fn type_text(&mut self, text: &str, _interval: Duration) -> Result<(), InputError> {
        self.check()?;
        for c in text.chars() {
            self.events.push(SimEvent::KeyPress(c));
        }
        Ok(())
    }

    fn hotkey(&mut self, keys: &[&str]) -> Result<(), InputError> {
        self.check()?;
        self.events
            .push(SimEvent::Hotkey(keys.iter().map(|k| k.to_string()).collect()));
        Ok(())
    }

    fn sleep(&mut self, duration: Duration) {
        self.events.push(SimEvent::Sleep(duration));
    }

    fn screen_size(&mut self) -> Result<(i32, i32), InputError> {
        self.check()?;
        Ok(self.screen)
    }
}
