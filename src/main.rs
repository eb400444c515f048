use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use hurdle::input::{handle_key, InputResult};
use hurdle::runner::logic::tick_runner;
use hurdle::runner::types::RunnerGame;
use hurdle::{build_info, ui};
use ratatui::style::Color;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// Poll/draw cadence (~60 fps). Simulation ticks are derived from measured
/// wall-clock deltas, not from this value.
const FRAME_POLL_MS: u64 = 16;

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "hurdle {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Hurdle - Splash-Screen Runner Mini-Game\n");
                println!("Usage: hurdle\n");
                println!("Keys:");
                println!("  Space/Up   Start, jump, or restart");
                println!("  Q / Esc    Quit");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'hurdle --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut game = RunnerGame::new();
    let mut rng = rand::thread_rng();
    let mut last_frame = Instant::now();

    // Frame loop: draw every iteration, dispatch keys, feed elapsed
    // wall-clock time into the fixed-timestep simulation.
    loop {
        terminal.draw(|frame| ui::draw_splash(frame, &game, Color::Cyan))?;

        if event::poll(Duration::from_millis(FRAME_POLL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                if handle_key(key_event, &mut game) == InputResult::Quit {
                    break;
                }
            }
        }

        let dt_ms = last_frame.elapsed().as_millis() as u64;
        last_frame = Instant::now();
        tick_runner(&mut game, dt_ms, &mut rng);
    }

    // Cleanup terminal. The single exit path releases the alternate screen
    // and raw mode together, so nothing leaks past unmount.
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    Ok(())
}
