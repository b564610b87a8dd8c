/// Keyboard model: held movement keys are sampled once per frame, while fire
/// and abilities fire once per key press.
///
/// Terminals differ in what they report. Keyboard-enhancement capable
/// terminals send `Press` / `Repeat` / `Release` (and bare Shift presses);
/// classic ones only send `Press`, with OS key-repeat showing up as repeated
/// presses. `KeyTracker` records the frame each key was last seen and treats
/// it as held for `HOLD_WINDOW` frames, or until its release arrives.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, ModifierKeyCode};

use crate::abilities::Ability;

/// A key counts as held if seen within this many frames. Longer than the OS
/// key-repeat interval at 50 fps, so a repeating key never drops out.
pub const HOLD_WINDOW: u64 = 4;

/// Stand-in for "the modifier is down", whichever way the terminal reports it.
const MODIFIER: KeyCode = KeyCode::Modifier(ModifierKeyCode::LeftShift);

/// Held-key snapshot for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Speed boost; also turns fire into spread-fire.
    pub boost: bool,
}

impl KeyState {
    /// Sum of the unit vectors of every held direction key.
    pub fn net_delta(&self) -> (i32, i32) {
        let mut dx = 0;
        let mut dy = 0;
        if self.up {
            dy -= 1;
        }
        if self.down {
            dy += 1;
        }
        if self.left {
            dx -= 1;
        }
        if self.right {
            dx += 1;
        }
        (dx, dy)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Fire,
    SpreadFire,
    Activate(Ability),
    Quit,
}

#[derive(Debug, Default)]
pub struct KeyTracker {
    /// Each held key → the frame it was last seen (press or repeat).
    key_frame: HashMap<KeyCode, u64>,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `event` at `frame`; returns the command a press triggers, if any.
    pub fn handle(&mut self, event: KeyEvent, frame: u64) -> Option<Command> {
        let code = normalize(event.code);
        match event.kind {
            KeyEventKind::Press => {
                self.touch(code, event.modifiers, frame);
                self.command_for(code, event.modifiers, frame)
            }
            KeyEventKind::Repeat => {
                self.touch(code, event.modifiers, frame);
                None
            }
            KeyEventKind::Release => {
                self.key_frame.remove(&code);
                None
            }
        }
    }

    pub fn snapshot(&self, frame: u64) -> KeyState {
        let any = |keys: &[KeyCode]| keys.iter().any(|k| self.is_held(*k, frame));
        KeyState {
            up: any(&[KeyCode::Up, KeyCode::Char('w')]),
            down: any(&[KeyCode::Down, KeyCode::Char('s')]),
            left: any(&[KeyCode::Left, KeyCode::Char('a')]),
            right: any(&[KeyCode::Right, KeyCode::Char('d')]),
            boost: self.is_held(MODIFIER, frame),
        }
    }

    fn touch(&mut self, code: KeyCode, modifiers: KeyModifiers, frame: u64) {
        self.key_frame.insert(code, frame);
        if modifiers.contains(KeyModifiers::SHIFT) {
            self.key_frame.insert(MODIFIER, frame);
        }
    }

    fn is_held(&self, key: KeyCode, frame: u64) -> bool {
        self.key_frame
            .get(&key)
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    fn command_for(&self, code: KeyCode, modifiers: KeyModifiers, frame: u64) -> Option<Command> {
        match code {
            KeyCode::Char('q') => Some(Command::Quit),
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
            KeyCode::Char(' ') if self.is_held(MODIFIER, frame) => Some(Command::SpreadFire),
            KeyCode::Char(' ') => Some(Command::Fire),
            KeyCode::Char('x') => Some(Command::Activate(Ability::Shield)),
            KeyCode::Enter => Some(Command::Activate(Ability::Gravity)),
            KeyCode::Char('e') => Some(Command::Activate(Ability::Emp)),
            KeyCode::Char('h') => Some(Command::Activate(Ability::Overdrive)),
            _ => None,
        }
    }
}

/// Fold shifted letters onto their base key and both Shift keys onto one.
fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        KeyCode::Modifier(ModifierKeyCode::RightShift) => MODIFIER,
        other => other,
    }
}
