use crossterm::cursor;
use crossterm::event;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::config::GameConfig;
use flappy::core::clock::{Clock, SystemClock, TickPacer};
use flappy::game::GameInput;
use flappy::input::map_event;
use flappy::scores::{FileScoreLog, ScoreLog};
use flappy::session::{Session, SessionStatus};
use flappy::ui;
use flappy::utils::guard::OnDrop;
use flappy::utils::logging;
use rand::Rng;
use ratatui::backend::Backend;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    if let Err(e) = logging::init() {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let config = GameConfig::load();
    let score_log = FileScoreLog::default_location()?;
    log::info!("Score history at {}", score_log.path().display());
    let mut session = Session::new(config, SystemClock::new(), score_log, rand::thread_rng());

    // Setup terminal; each guard undoes its step on any exit path
    enable_raw_mode()?;
    let _raw_mode = OnDrop::new(|| {
        if let Err(e) = disable_raw_mode() {
            log::warn!("Could not leave raw mode: {}", e);
        }
    });
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let _alternate_screen = OnDrop::new(|| {
        let mut stdout = io::stdout();
        if let Err(e) = stdout
            .execute(LeaveAlternateScreen)
            .and_then(|out| out.execute(cursor::Show))
        {
            log::warn!("Could not restore the screen: {}", e);
        }
    });
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut session);
    if let Err(e) = &result {
        log::error!("Exiting on error: {}", e);
    }
    result
}

/// Perpetual round loop: gather input, step, draw, wait for the next tick.
fn run<B, C, L, R>(terminal: &mut Terminal<B>, session: &mut Session<C, L, R>) -> io::Result<()>
where
    B: Backend,
    C: Clock,
    L: ScoreLog,
    R: Rng,
{
    let mut pacer = TickPacer::new(session.config().tick_rate_hz, Instant::now());
    terminal.draw(|frame| ui::draw(frame, session.screen()))?;

    loop {
        let on_board = session.is_showing_scores();
        let inputs = if on_board {
            // Block until something happens; resizes fall through to a redraw.
            map_event(&event::read()?).into_iter().collect()
        } else {
            drain_inputs()?
        };

        if session.step(&inputs)? == SessionStatus::Quit {
            return Ok(());
        }

        terminal.draw(|frame| ui::draw(frame, session.screen()))?;

        if on_board {
            if !session.is_showing_scores() {
                pacer.reset(Instant::now());
            }
        } else {
            pacer.wait();
        }
    }
}

/// Every input waiting in the terminal's queue, without blocking.
fn drain_inputs() -> io::Result<Vec<GameInput>> {
    let mut inputs = Vec::new();
    while event::poll(Duration::ZERO)? {
        if let Some(input) = map_event(&event::read()?) {
            inputs.push(input);
        }
    }
    Ok(inputs)
}
