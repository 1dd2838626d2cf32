use std::io;
use std::panic;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use snakefield::config::{
    DEFAULT_AREA_SIZE, DEFAULT_CELL_COUNT, DEFAULT_ORIGIN_X, DEFAULT_ORIGIN_Y,
    DEFAULT_TICK_INTERVAL_MS,
};
use snakefield::grid::Grid;
use snakefield::input::{poll_input, SessionInput};
use snakefield::renderer;
use snakefield::session::Session;

#[derive(Debug, Parser)]
#[command(about = "Classic grid snake in the terminal")]
struct Cli {
    /// Playable area edge length in coordinate units.
    #[arg(long, default_value_t = DEFAULT_AREA_SIZE)]
    area_size: i32,

    /// Number of cells along each axis.
    #[arg(long, default_value_t = DEFAULT_CELL_COUNT)]
    cells: i32,

    /// X coordinate of the grid's top-left corner.
    #[arg(long, default_value_t = DEFAULT_ORIGIN_X)]
    origin_x: i32,

    /// Y coordinate of the grid's top-left corner.
    #[arg(long, default_value_t = DEFAULT_ORIGIN_Y)]
    origin_y: i32,

    /// Milliseconds between simulation ticks.
    #[arg(long, default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    tick_ms: u64,

    /// Seed for reproducible snake and food placement.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let grid = Grid::new(cli.area_size, cli.cells, cli.origin_x, cli.origin_y)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidInput, error))?;
    let session = match cli.seed {
        Some(seed) => Session::new_with_seed(grid, seed),
        None => Session::new(grid),
    };

    install_panic_hook();

    let result = run(session, Duration::from_millis(cli.tick_ms));
    cleanup_terminal()?;
    result
}

fn run(mut session: Session, tick_interval: Duration) -> io::Result<()> {
    let mut terminal = setup_terminal()?;
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| renderer::render(frame, &session))?;

        // Poll only for the remainder of the tick so input between ticks is
        // queued without delaying the cadence.
        let poll_timeout = tick_interval.saturating_sub(last_tick.elapsed());
        match poll_input(poll_timeout)? {
            Some(SessionInput::Quit) => break,
            Some(SessionInput::Heading(heading)) => session.apply_heading(heading),
            None => {}
        }

        if last_tick.elapsed() >= tick_interval {
            session.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn cleanup_terminal() -> io::Result<()> {
    disable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, Show, LeaveAlternateScreen)?;

    Ok(())
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal_after_panic();
        default_hook(panic_info);
    }));
}

fn restore_terminal_after_panic() {
    let _ = disable_raw_mode();

    let mut stdout = io::stdout();
    let _ = execute!(stdout, Show, LeaveAlternateScreen);
}
