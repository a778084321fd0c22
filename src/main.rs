use std::io;
use std::time::Duration;
use std::time::Instant;

use anyhow::Result;

use crossterm::cursor;
use crossterm::event;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::execute;
use crossterm::style;
use crossterm::terminal;

use tracing_subscriber::EnvFilter;

use gridlife::DEFAULT_COLS;
use gridlife::DEFAULT_ROWS;
use gridlife::camera::Camera;
use gridlife::events::AppEvent;
use gridlife::events::Event;
use gridlife::io::convert_event;
use gridlife::world::World;

/// How long to wait for input between redraws while paused.
const IDLE_POLL: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut world = World::new(DEFAULT_ROWS, DEFAULT_COLS);
    let mut cam = Camera::new(DEFAULT_COLS, DEFAULT_ROWS);

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnableMouseCapture, cursor::Hide)?;

    let res = run(&mut stdout, &mut world, &mut cam);

    execute!(stdout, DisableMouseCapture, cursor::Show)?;
    terminal::disable_raw_mode()?;

    res
}

fn run(stdout: &mut io::Stdout, world: &mut World, cam: &mut Camera) -> Result<()> {
    let mut last_tick = Instant::now();

    'main: loop {
        draw(stdout, world, cam)?;

        // While running, wake up in time for the next generation; while
        // paused, wake up just often enough to stay responsive.
        let timeout = if world.running() {
            world
                .interval()
                .saturating_sub(last_tick.elapsed())
                .min(IDLE_POLL)
        } else {
            IDLE_POLL
        };

        if event::poll(timeout)? {
            let event = event::read()?;

            match convert_event(event, world.grid().rows(), world.grid().cols()) {
                None => {}
                Some(Event::App(AppEvent::Exit)) => break 'main,
                Some(Event::Engine(engine_event)) => world.handle(engine_event),
            }
        }

        // The run flag is consulted fresh on every pass; stopping simply
        // means the next tick never gets scheduled.
        if world.running() && last_tick.elapsed() >= world.interval() {
            world.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}

fn draw(stdout: &mut io::Stdout, world: &World, cam: &mut Camera) -> Result<()> {
    cam.reset();
    cam.draw(world.grid());
    let s = cam.render();

    execute!(
        stdout,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0),
    )?;

    for line in s.lines() {
        execute!(stdout, style::Print(line), cursor::MoveToNextLine(1))?;
    }

    let status = format!(
        "gen {}  pop {}  {}ms  [{}]  space start/stop  s step  r reset  j/k speed  click/drag paint  q quit",
        world.generation(),
        world.grid().population(),
        world.interval().as_millis(),
        if world.running() { "running" } else { "paused" },
    );

    execute!(stdout, style::Print(status), cursor::MoveToNextLine(1))?;

    Ok(())
}
