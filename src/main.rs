use std::io;
use std::thread;
use std::time::Duration;
use std::time::Instant;

use anyhow::Context;
use crossterm::cursor;
use crossterm::event;
use crossterm::execute;
use crossterm::style;
use crossterm::terminal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gridlife::Coordinate;
use gridlife::ScreenSize;
use gridlife::clock::Clock;
use gridlife::config::Config;
use gridlife::grid::Grid;
use gridlife::pattern;
use gridlife::screen::Screen;
use gridlife::step;

use events::AppEvent;
use events::Event;
use events::SimEvent;

mod events;
mod input;

const FRAMERATE: u32 = 60;
const FRAMETIME: Duration =
    Duration::from_millis(((1f64 / FRAMERATE as f64) * 1_000f64) as u64);

/// Starting cadence, a handful of steps per second
const STEP_INTERVAL: Duration = Duration::from_millis(200);

const CELL_COLS: ScreenSize = 2;
const CELL_ROWS: ScreenSize = 1;

/// Smallest field we'll run on, however cramped the terminal is
const MIN_FIELD: usize = 8;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let seed = load_seed().context("Failed to load the starting pattern")?;

    terminal::enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(
        stdout,
        terminal::EnterAlternateScreen,
        event::EnableMouseCapture,
        cursor::Hide
    )?;

    let res = run(&mut stdout, seed);

    execute!(
        stdout,
        cursor::Show,
        event::DisableMouseCapture,
        terminal::LeaveAlternateScreen
    )?;
    terminal::disable_raw_mode()?;

    res
}

/// The seed is the glider, unless a plaintext pattern file is given.
fn load_seed() -> anyhow::Result<Vec<Coordinate>> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(pattern::GLIDER.to_vec());
    };

    let bytes = std::fs::read(&path).with_context(|| format!("Failed to read \"{path}\""))?;
    let cells = pattern::parse(&bytes).with_context(|| format!("Failed to parse \"{path}\""))?;

    Ok(cells)
}

fn run(stdout: &mut io::Stdout, seed: Vec<Coordinate>) -> anyhow::Result<()> {
    // Size the field to the terminal, keeping one row for the status line
    let (cols, rows) = terminal::size()?;

    let config = Config {
        width: (cols as usize / CELL_COLS as usize).max(MIN_FIELD),
        height: (rows.saturating_sub(1) as usize / CELL_ROWS as usize).max(MIN_FIELD),
        initial_alive: pattern::offset(&seed, 1, 1),
        cell_cols: CELL_COLS,
        cell_rows: CELL_ROWS,
    };

    let mut grid = config.build_grid().context("Seed does not fit the field")?;
    let mut screen = Screen::new(&config);
    let mut clock = Clock::new(STEP_INTERVAL);

    let mut generation: u64 = 0;

    info!(width = config.width, height = config.height, "session started");

    loop {
        let t = Instant::now();

        // Poll for at most one frame
        let event = if event::poll(FRAMETIME)? {
            input::convert_event(event::read()?, &screen)
        } else {
            None
        };

        match event {
            None => {}
            Some(Event::App(AppEvent::Exit)) => break,
            Some(Event::Sim(event)) => {
                apply_sim_event(event, &mut grid, &mut clock, &mut generation)?;
            }
        }

        if clock.due(Instant::now()) {
            step::advance(&mut grid);
            generation += 1;
        }

        screen.draw(&grid);
        paint(stdout, screen.render(), &clock, generation)?;

        thread::sleep(FRAMETIME.saturating_sub(t.elapsed()));
    }

    info!(generation, "session ended");

    Ok(())
}

fn apply_sim_event(
    event: SimEvent,
    grid: &mut Grid,
    clock: &mut Clock,
    generation: &mut u64,
) -> anyhow::Result<()> {
    match event {
        SimEvent::Step => {
            step::advance(grid);
            *generation += 1;
        }
        SimEvent::TogglePlay => clock.toggle(),
        SimEvent::Faster => clock.faster(),
        SimEvent::Slower => clock.slower(),

        // Clicks bypass the stepper and mutate the field directly
        SimEvent::ToggleCell { x, y } => {
            if grid.is_alive(x, y)? {
                grid.kill(x, y)?;
            } else {
                grid.spawn(x, y)?;
            }
        }
    }

    Ok(())
}

fn paint(
    stdout: &mut io::Stdout,
    frame: &str,
    clock: &Clock,
    generation: u64,
) -> anyhow::Result<()> {
    execute!(
        stdout,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0),
    )?;

    for line in frame.lines() {
        execute!(stdout, style::Print(line), cursor::MoveToNextLine(1))?;
    }

    let state = if clock.is_running() { "running" } else { "paused" };
    let status = format!(
        "gen {generation}  {state}  {}ms/step  [space] play/pause  [s] step  [+/-] speed  [click] toggle cell  [q] quit",
        clock.interval().as_millis()
    );
    execute!(stdout, style::Print(status))?;

    Ok(())
}
