/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state. No game logic is performed; this module only translates
/// logical field coordinates into terminal cells and draw commands.

use std::io::Write;

use arcade_shooter::abilities::Ability;
use arcade_shooter::config::{
    ENEMY_GLYPHS, EXPLOSION_GLYPHS, FIELD_HEIGHT, FIELD_WIDTH, SPREAD_COUNT,
};
use arcade_shooter::entities::{Beam, Enemy, GameState, GameStatus, Projectile};
use arcade_shooter::geometry::Rect;
use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use glam::Vec2;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_EFFECTS: Color = Color::Cyan;
const C_PLAYER: Color = Color::White;
const C_ENEMY: Color = Color::Green;
const C_ENEMY_JAMMED: Color = Color::DarkGrey;
const C_BEAM: Color = Color::Cyan;
const C_BOMB_JAMMED: Color = Color::DarkGrey;
const C_SHIELD: Color = Color::Blue;
const C_GRAVITY: Color = Color::DarkMagenta;
const C_EMP_FLASH: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;

const CONTROLS: &str =
    "←↑→↓/WASD move  Shift boost  Space fire  X shield  Enter gravity  E emp  H overdrive  Q quit";

// ── Viewport ─────────────────────────────────────────────────────────────────

/// Maps the logical field onto the terminal area inside the border.
/// Row 0 is the HUD, rows 1 and `rows - 2` are the border, the last row
/// holds the controls hint.
#[derive(Clone, Copy)]
struct Viewport {
    cols: u16,
    rows: u16,
}

impl Viewport {
    fn current() -> std::io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        Ok(Self { cols, rows })
    }

    fn first_col(&self) -> u16 {
        1
    }

    fn last_col(&self) -> u16 {
        self.cols.saturating_sub(2)
    }

    fn first_row(&self) -> u16 {
        2
    }

    fn last_row(&self) -> u16 {
        self.rows.saturating_sub(3)
    }

    /// Terminal cell for a field point, clamped to the inner area.
    fn cell(&self, p: Vec2) -> (u16, u16) {
        let span_x = self.last_col().saturating_sub(self.first_col()) as f32;
        let span_y = self.last_row().saturating_sub(self.first_row()) as f32;
        let fx = (p.x / FIELD_WIDTH).clamp(0.0, 1.0);
        let fy = (p.y / FIELD_HEIGHT).clamp(0.0, 1.0);
        (
            self.first_col() + (fx * span_x).round() as u16,
            self.first_row() + (fy * span_y).round() as u16,
        )
    }

    /// Top-left and bottom-right cells covered by `rect`.
    fn span(&self, rect: &Rect) -> ((u16, u16), (u16, u16)) {
        (
            self.cell(Vec2::new(rect.left(), rect.top())),
            self.cell(Vec2::new(rect.right(), rect.bottom())),
        )
    }

    fn is_visible(&self, p: Vec2) -> bool {
        (0.0..=FIELD_WIDTH).contains(&p.x) && (0.0..=FIELD_HEIGHT).contains(&p.y)
    }
}

// ── Public entry points ──────────────────────────────────────────────────────

/// Render one complete frame, back to front.
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let view = Viewport::current()?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, view, state)?;
    if state.emp_flash > 0 {
        fill_field(out, view, '░', C_EMP_FLASH)?;
    }
    if !state.gravity_fields.is_empty() {
        fill_field(out, view, '·', C_GRAVITY)?;
    }

    for enemy in &state.enemies {
        draw_enemy(out, view, enemy)?;
    }
    draw_player(out, view, state)?;
    for beam in &state.beams {
        draw_beam(out, view, beam)?;
    }
    for bomb in &state.projectiles {
        draw_projectile(out, view, bomb)?;
    }
    for shield in &state.shields {
        fill_rect(out, view, &shield.rect, '█', C_SHIELD)?;
    }
    for explosion in &state.explosions {
        let color = if explosion.image == 0 { Color::Yellow } else { Color::Red };
        draw_glyph(out, view, explosion.center, EXPLOSION_GLYPHS[explosion.image], color)?;
    }

    draw_hud(out, view, state)?;
    draw_controls_hint(out, view)?;

    if state.status == GameStatus::GameOver {
        draw_game_over(out, view, state)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

/// Title screen with controls and ability prices.
pub fn draw_title<W: Write>(out: &mut W) -> std::io::Result<()> {
    let view = Viewport::current()?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let cx = view.cols / 2;
    let cy = view.rows / 2;

    let title = "★  BEAM  BARRAGE  ★";
    out.queue(cursor::MoveTo(
        cx.saturating_sub(title.chars().count() as u16 / 2),
        cy.saturating_sub(7),
    ))?;
    out.queue(style::SetForegroundColor(Color::Cyan))?;
    out.queue(Print(title))?;

    let left = cx.saturating_sub(22);
    let rows: &[(&str, String)] = &[
        ("Arrows / WASD", "move (hold Shift to boost)".to_string()),
        ("Space", "fire".to_string()),
        ("Shift + Space", format!("{SPREAD_COUNT}-beam spread")),
        ("X", format!("shield       — costs {}", Ability::Shield.cost())),
        ("Enter", format!("gravity      — costs {}", Ability::Gravity.cost())),
        ("E", format!("emp          — costs {}", Ability::Emp.cost())),
        ("H", format!("overdrive    — costs {}", Ability::Overdrive.cost())),
    ];
    for (i, (key, desc)) in rows.iter().enumerate() {
        let row = cy.saturating_sub(4) + i as u16;
        out.queue(cursor::MoveTo(left, row))?;
        out.queue(style::SetForegroundColor(Color::Yellow))?;
        out.queue(Print(format!("{key:<15}")))?;
        out.queue(style::SetForegroundColor(Color::DarkGrey))?;
        out.queue(Print(desc))?;
    }

    out.queue(cursor::MoveTo(left, cy + 5))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print("Space : Start    Q : Quit"))?;

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

// ── Border & backdrops ───────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, view: Viewport, state: &GameState) -> std::io::Result<()> {
    let w = view.cols as usize;
    let h = view.rows;

    let color = if state.emp_flash > 0 { C_EMP_FLASH } else { C_BORDER };
    out.queue(style::SetForegroundColor(color))?;

    // Row 1 — top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row h-2 — bottom bar
    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    // Side walls
    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(view.cols.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

fn fill_field<W: Write>(out: &mut W, view: Viewport, ch: char, color: Color) -> std::io::Result<()> {
    fill_rect(out, view, &Rect::field(), ch, color)
}

fn fill_rect<W: Write>(
    out: &mut W,
    view: Viewport,
    rect: &Rect,
    ch: char,
    color: Color,
) -> std::io::Result<()> {
    let ((c0, r0), (c1, r1)) = view.span(rect);
    let line: String = std::iter::repeat(ch).take((c1.saturating_sub(c0) + 1) as usize).collect();
    out.queue(style::SetForegroundColor(color))?;
    for row in r0..=r1 {
        out.queue(cursor::MoveTo(c0, row))?;
        out.queue(Print(&line))?;
    }
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// Print `glyph` centred on a field point; skipped when the point is off-field.
fn draw_glyph<W: Write>(
    out: &mut W,
    view: Viewport,
    at: Vec2,
    glyph: &str,
    color: Color,
) -> std::io::Result<()> {
    if !view.is_visible(at) {
        return Ok(());
    }
    let (col, row) = view.cell(at);
    let half = glyph.chars().count() as u16 / 2;
    let col = col.saturating_sub(half).max(view.first_col());
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(glyph))?;
    Ok(())
}

fn draw_player<W: Write>(out: &mut W, view: Viewport, state: &GameState) -> std::io::Result<()> {
    let player = &state.player;
    // Overdrive flickers between two colours.
    let color = if player.overdrive {
        if (state.frame / 4) % 2 == 0 {
            Color::Magenta
        } else {
            Color::Cyan
        }
    } else {
        C_PLAYER
    };
    draw_glyph(out, view, player.rect.center, player.image, color)
}

fn draw_enemy<W: Write>(out: &mut W, view: Viewport, enemy: &Enemy) -> std::io::Result<()> {
    let color = if enemy.drop_interval.is_none() {
        C_ENEMY_JAMMED
    } else {
        C_ENEMY
    };
    let glyph = ENEMY_GLYPHS[enemy.variant % ENEMY_GLYPHS.len()];
    draw_glyph(out, view, enemy.rect.center, glyph, color)
}

fn draw_beam<W: Write>(out: &mut W, view: Viewport, beam: &Beam) -> std::io::Result<()> {
    let a = beam.angle.rem_euclid(180.0);
    let glyph = if !(22.5_f32..157.5).contains(&a) {
        "─"
    } else if a < 67.5 {
        "╱"
    } else if a < 112.5 {
        "│"
    } else {
        "╲"
    };
    draw_glyph(out, view, beam.rect.center, glyph, C_BEAM)
}

fn draw_projectile<W: Write>(out: &mut W, view: Viewport, bomb: &Projectile) -> std::io::Result<()> {
    let (glyph, color) = if bomb.neutralized {
        ("○", C_BOMB_JAMMED)
    } else {
        let (r, g, b) = bomb.color;
        ("●", Color::Rgb { r, g, b })
    };
    draw_glyph(out, view, bomb.rect.center, glyph, color)
}

// ── HUD (row 0) & hint (last row) ────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, view: Viewport, state: &GameState) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(state.score.display()))?;

    let mut tags = Vec::new();
    if !state.shields.is_empty() {
        tags.push(format!("[SHIELD ×{}]", state.shields.len()));
    }
    if let Some(life) = state.gravity_fields.iter().map(|g| g.life).max() {
        tags.push(format!("[GRAVITY {life}]"));
    }
    if state.player.overdrive {
        tags.push(format!("[OVERDRIVE {}]", state.player.overdrive_life.max(0)));
    }
    if state.emp_flash > 0 {
        tags.push("[EMP]".to_string());
    }
    let right = tags.join(" ");
    if !right.is_empty() {
        let col = view.cols.saturating_sub(right.chars().count() as u16 + 1);
        out.queue(cursor::MoveTo(col, 0))?;
        out.queue(style::SetForegroundColor(C_HUD_EFFECTS))?;
        out.queue(Print(right))?;
    }
    Ok(())
}

fn draw_controls_hint<W: Write>(out: &mut W, view: Viewport) -> std::io::Result<()> {
    let max = view.cols.saturating_sub(2) as usize;
    let hint: String = CONTROLS.chars().take(max).collect();
    out.queue(cursor::MoveTo(1, view.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(hint))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, view: Viewport, state: &GameState) -> std::io::Result<()> {
    let score_line = format!("Final Score: {:>6}", state.score.value);

    let lines: &[(&str, Color)] = &[
        ("╔════════════════════╗", Color::Red),
        ("║    GAME  OVER      ║", Color::Red),
        ("╚════════════════════╝", Color::Red),
    ];

    let cx = view.cols / 2;
    let total_rows = lines.len() + 1;
    let start_row = (view.rows / 2).saturating_sub(total_rows as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    let score_row = start_row + lines.len() as u16;
    let col = cx.saturating_sub(score_line.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, score_row))?;
    out.queue(style::SetForegroundColor(Color::Yellow))?;
    out.queue(Print(&score_line))?;

    Ok(())
}
