use std::thread;
use std::time::Instant;

use anyhow::Context;
use anyhow::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gridlife::events::AppEvent;
use gridlife::events::Event;
use gridlife::sim::Simulation;

use crate::draw::GridData;
use crate::draw::WindowData;

mod draw;
mod ext;
mod io;

/// Cells per board side.
const BOARD_SIDE: usize = 200;

/// On-screen side length of one cell, in pixels.
const PIXEL_SIZE: u32 = 5;

/// Starting speed, in generations per second.
const DEFAULT_TICK_RATE: u32 = 60;

/// Fraction of interior cells seeded alive at startup.
const SEED_DENSITY: f64 = 0.1;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut rng = rand::thread_rng();

    let mut sim = Simulation::new(BOARD_SIDE, DEFAULT_TICK_RATE)?;
    sim.randomize(SEED_DENSITY, &mut rng);

    let mut window_state = WindowData::new(
        BOARD_SIDE as u32 * PIXEL_SIZE,
        BOARD_SIDE as u32 * PIXEL_SIZE,
    );
    let mut grid = GridData::new(PIXEL_SIZE);

    let sdl_context = sdl2::init().map_err(Error::msg)?;
    let video_subsystem = sdl_context.video().map_err(Error::msg)?;

    let window = video_subsystem
        .window("Game of Life", window_state.width, window_state.height)
        .position_centered()
        .build()
        .context("cannot create window")?;

    let mut canvas = window
        .into_canvas()
        .accelerated()
        .present_vsync()
        .build()
        .context("cannot create renderer")?;

    let mut event_pump = sdl_context.event_pump().map_err(Error::msg)?;

    info!(
        "seeded {}x{} board, {} cells alive",
        BOARD_SIDE,
        BOARD_SIDE,
        sim.board().population()
    );

    'main: loop {
        let frame_start = Instant::now();

        for event in event_pump.poll_iter() {
            match io::convert_event(event) {
                Some(Event::App(AppEvent::Exit)) => break 'main,

                Some(Event::App(AppEvent::ToggleFullscreen)) => {
                    window_state
                        .toggle_fullscreen(canvas.window_mut())
                        .map_err(Error::msg)?;
                }

                Some(Event::App(AppEvent::Recolor(target))) => grid.recolor(target, &mut rng),

                Some(Event::Sim(event)) => sim.apply(event),

                None => {}
            }
        }

        sim.tick();

        grid.draw(&mut canvas, sim.board()).map_err(Error::msg)?;
        canvas.present();

        thread::sleep(sim.frame_time().saturating_sub(frame_start.elapsed()));
    }

    info!("exiting after {} generations", sim.generation());

    Ok(())
}
