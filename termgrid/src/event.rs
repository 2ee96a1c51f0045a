use crossterm::event::{Event as CrosstermEvent, KeyEventKind, MouseEventKind};

use crate::element::Element;
use crate::hit::hit_test;
use crate::layout::LayoutResult;

/// High-level events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press event
    Key { key: Key, modifiers: Modifiers },
    /// Mouse click event, targeted at the deepest clickable element
    Click {
        target: Option<String>,
        x: u16,
        y: u16,
        button: MouseButton,
    },
    /// Terminal resized
    Resize { width: u16, height: u16 },
}

impl Event {
    /// Build a left click aimed directly at an element.
    pub fn click(target: impl Into<String>) -> Self {
        Event::Click {
            target: Some(target.into()),
            x: 0,
            y: 0,
            button: MouseButton::Left,
        }
    }

    pub fn target(&self) -> Option<&str> {
        match self {
            Event::Click { target, .. } => target.as_deref(),
            _ => None,
        }
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Tab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Other,
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Convert raw terminal events into targeted events.
///
/// Mouse presses are hit-tested against `root` using the layout of the
/// frame the user was looking at. Key releases and mouse motion are dropped.
pub fn translate_events(
    raw: &[CrosstermEvent],
    root: &Element,
    layout: &LayoutResult,
) -> Vec<Event> {
    raw.iter()
        .filter_map(|event| match event {
            CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => Some(Event::Key {
                key: key.code.into(),
                modifiers: key.modifiers.into(),
            }),
            CrosstermEvent::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(button) => {
                    let target = hit_test(layout, root, mouse.column, mouse.row);
                    log::trace!(
                        "click at ({}, {}) -> {:?}",
                        mouse.column,
                        mouse.row,
                        target
                    );
                    Some(Event::Click {
                        target,
                        x: mouse.column,
                        y: mouse.row,
                        button: button.into(),
                    })
                }
                _ => None,
            },
            CrosstermEvent::Resize(width, height) => Some(Event::Resize {
                width: *width,
                height: *height,
            }),
            _ => None,
        })
        .collect()
}

// Conversion from crossterm types
impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Tab => Key::Tab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            _ => Key::Other,
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
