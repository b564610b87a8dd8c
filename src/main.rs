mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info, trace};
use tracing_subscriber::EnvFilter;

use arcade_shooter::compute::{apply_command, init_state, tick};
use arcade_shooter::config::{DEATH_PAUSE, TARGET_FPS};
use arcade_shooter::entities::{GameState, GameStatus};
use arcade_shooter::error::GameError;
use arcade_shooter::input::{Command, KeyTracker};

const MIN_COLS: u16 = 60;
const MIN_ROWS: u16 = 20;

/// Terminal arcade shooter
#[derive(Parser)]
#[command(name = "arcade_shooter")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Target frame rate
    #[arg(long, default_value_t = TARGET_FPS, value_parser = clap::value_parser!(u32).range(1..=240))]
    fps: u32,

    /// Seed the RNG for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (the terminal itself belongs to the game)
    #[arg(long, env = "SHOOTER_LOG")]
    log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(cli: &Cli) -> Result<(), GameError> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };
    let file = File::create(path).map_err(|source| GameError::LogFile {
        path: path.clone(),
        source,
    })?;

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .compact()
        .init();
    Ok(())
}

// ── Title screen ──────────────────────────────────────────────────────────────

enum MenuResult {
    Start,
    Quit,
}

fn show_title<W: Write>(out: &mut W) -> Result<MenuResult, GameError> {
    display::draw_title(out)?;

    // Block until the user makes a choice
    loop {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            match code {
                KeyCode::Char(' ') | KeyCode::Enter => return Ok(MenuResult::Start),
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    return Ok(MenuResult::Quit);
                }
                _ => {}
            }
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

enum SessionEnd {
    Quit,
    Defeated,
}

/// One frame: poll input → apply commands → tick → render → pace.
fn play_session<W: Write>(
    out: &mut W,
    state: &mut GameState,
    rng: &mut StdRng,
    frame_time: Duration,
) -> Result<SessionEnd, GameError> {
    let mut keys = KeyTracker::new();

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                match keys.handle(key, state.frame) {
                    Some(Command::Quit) => return Ok(SessionEnd::Quit),
                    Some(command) => *state = apply_command(state, command),
                    None => {}
                }
            }
        }

        *state = tick(state, &keys.snapshot(state.frame), rng);
        display::render(out, state)?;

        if state.status == GameStatus::GameOver {
            thread::sleep(DEATH_PAUSE);
            // Whatever was mashed during the pause should not leak into the menu.
            while event::poll(Duration::ZERO)? {
                event::read()?;
            }
            return Ok(SessionEnd::Defeated);
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        } else {
            trace!(?elapsed, frame = state.frame, "frame overran its budget");
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<(), GameError> {
    let cli = Cli::parse();
    init_tracing(&cli)?;

    let (cols, rows) = terminal::size()?;
    if cols < MIN_COLS || rows < MIN_ROWS {
        return Err(GameError::TerminalTooSmall {
            cols,
            rows,
            min_cols: MIN_COLS,
            min_rows: MIN_ROWS,
        });
    }

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Ask for release events and bare modifier presses so Shift can be held.
    // Terminals without the kitty protocol ignore this and fall back to the
    // hold-window model.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
                | KeyboardEnhancementFlags::REPORT_ALL_KEYS_AS_ESCAPE_CODES,
        ))
        .is_ok();

    let result = run(&mut out, &cli);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(err) = &result {
        error!(%err, "exiting with error");
    }
    result
}

fn run<W: Write>(out: &mut W, cli: &Cli) -> Result<(), GameError> {
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let frame_time = Duration::from_secs(1) / cli.fps;

    loop {
        match show_title(out)? {
            MenuResult::Quit => break,
            MenuResult::Start => {
                let mut state = init_state();
                info!(seed = ?cli.seed, fps = cli.fps, "session started");
                let end = play_session(out, &mut state, &mut rng, frame_time)?;
                info!(
                    score = state.score.value,
                    frames = state.frame,
                    defeated = matches!(end, SessionEnd::Defeated),
                    "session ended"
                );
                if let SessionEnd::Quit = end {
                    break;
                }
            }
        }
    }
    Ok(())
}
