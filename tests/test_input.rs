use arcade_shooter::abilities::Ability;
use arcade_shooter::input::*;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, ModifierKeyCode};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Press)
}

fn press_with(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new_with_kind(code, modifiers, KeyEventKind::Press)
}

fn release(code: KeyCode) -> KeyEvent {
    KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Release)
}

// ── KeyState ─────────────────────────────────────────────────────────────────

#[test]
fn net_delta_sums_held_directions() {
    let keys = KeyState {
        up: true,
        right: true,
        ..KeyState::default()
    };
    assert_eq!(keys.net_delta(), (1, -1));

    let all = KeyState {
        up: true,
        down: true,
        left: true,
        right: true,
        boost: false,
    };
    assert_eq!(all.net_delta(), (0, 0));
    assert_eq!(KeyState::default().net_delta(), (0, 0));
}

// ── Held keys ────────────────────────────────────────────────────────────────

#[test]
fn key_is_held_within_the_window() {
    let mut t = KeyTracker::new();
    assert_eq!(t.handle(press(KeyCode::Up), 10), None);
    assert!(t.snapshot(10).up);
    assert!(t.snapshot(10 + HOLD_WINDOW).up);
    assert!(!t.snapshot(10 + HOLD_WINDOW + 1).up);
}

#[test]
fn repeat_refreshes_and_release_clears() {
    let mut t = KeyTracker::new();
    t.handle(press(KeyCode::Left), 0);
    t.handle(
        KeyEvent::new_with_kind(KeyCode::Left, KeyModifiers::NONE, KeyEventKind::Repeat),
        4,
    );
    assert!(t.snapshot(8).left);
    t.handle(release(KeyCode::Left), 8);
    assert!(!t.snapshot(8).left);
}

#[test]
fn wasd_and_arrows_are_interchangeable() {
    let mut t = KeyTracker::new();
    t.handle(press(KeyCode::Char('w')), 0);
    t.handle(press(KeyCode::Char('d')), 0);
    let keys = t.snapshot(0);
    assert!(keys.up && keys.right);
    assert!(!keys.down && !keys.left && !keys.boost);
}

#[test]
fn shifted_letters_move_and_boost() {
    let mut t = KeyTracker::new();
    t.handle(press_with(KeyCode::Char('S'), KeyModifiers::SHIFT), 3);
    let keys = t.snapshot(3);
    assert!(keys.down);
    assert!(keys.boost);
}

#[test]
fn bare_shift_key_is_the_modifier() {
    let mut t = KeyTracker::new();
    t.handle(
        press_with(
            KeyCode::Modifier(ModifierKeyCode::RightShift),
            KeyModifiers::SHIFT,
        ),
        0,
    );
    assert!(t.snapshot(0).boost);
    t.handle(release(KeyCode::Modifier(ModifierKeyCode::RightShift)), 1);
    assert!(!t.snapshot(1).boost);
}

// ── Commands ─────────────────────────────────────────────────────────────────

#[test]
fn space_fires_and_modifier_spreads() {
    let mut t = KeyTracker::new();
    assert_eq!(t.handle(press(KeyCode::Char(' ')), 0), Some(Command::Fire));
    assert_eq!(
        t.handle(press_with(KeyCode::Char(' '), KeyModifiers::SHIFT), 1),
        Some(Command::SpreadFire)
    );

    let mut t = KeyTracker::new();
    t.handle(press(KeyCode::Modifier(ModifierKeyCode::LeftShift)), 0);
    assert_eq!(t.handle(press(KeyCode::Char(' ')), 1), Some(Command::SpreadFire));
}

#[test]
fn repeats_do_not_fire() {
    let mut t = KeyTracker::new();
    let repeat = KeyEvent::new_with_kind(KeyCode::Char(' '), KeyModifiers::NONE, KeyEventKind::Repeat);
    assert_eq!(t.handle(repeat, 0), None);
}

#[test]
fn ability_keys() {
    let mut t = KeyTracker::new();
    assert_eq!(
        t.handle(press(KeyCode::Char('x')), 0),
        Some(Command::Activate(Ability::Shield))
    );
    assert_eq!(
        t.handle(press(KeyCode::Enter), 0),
        Some(Command::Activate(Ability::Gravity))
    );
    assert_eq!(
        t.handle(press(KeyCode::Char('e')), 0),
        Some(Command::Activate(Ability::Emp))
    );
    assert_eq!(
        t.handle(press(KeyCode::Char('H')), 0),
        Some(Command::Activate(Ability::Overdrive))
    );
}

#[test]
fn quit_keys() {
    let mut t = KeyTracker::new();
    assert_eq!(t.handle(press(KeyCode::Char('q')), 0), Some(Command::Quit));
    assert_eq!(
        t.handle(press_with(KeyCode::Char('c'), KeyModifiers::CONTROL), 0),
        Some(Command::Quit)
    );
    assert_eq!(t.handle(press(KeyCode::Char('c')), 0), None);
}
