use anyhow::Result;
use log::info;
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use engine::game_loop::GameLoop;
use engine::input::InputManager;
use engine::physics::PhysicsConfig;
use engine::renderer::{Renderer, TitleRenderer};
use game::{Level, Session};

const TITLE: &str = "Rusted Platformer";

fn log_run_stats(game_loop: &GameLoop) {
    info!(
        "Ran {} frames ({} simulated) in {:.1}s",
        game_loop.frame_count(),
        game_loop.update_count(),
        game_loop.elapsed_secs()
    );
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting {}...", TITLE);

    let level = Level::default_level();
    let config = PhysicsConfig::default();
    let mut session = Session::new(&level, config)?;

    // Create event loop and window sized to the play area
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(TITLE)
        .with_inner_size(winit::dpi::LogicalSize::new(
            level.area.width,
            level.area.height,
        ))
        .with_resizable(false)
        .build(&event_loop)?;

    info!("Window created successfully");

    let mut renderer = TitleRenderer::new(window, TITLE);
    let mut input = InputManager::default();
    let mut game_loop = GameLoop::with_max_frame_time(config.max_frame_time);

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                log_run_stats(&game_loop);
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                input.process_keyboard_event(&event);
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => {
                // Key releases are not delivered while unfocused
                input.reset();
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                let dt = game_loop.begin_frame();
                let frame = input.sample();

                if frame.close {
                    info!("Close action, shutting down...");
                    log_run_stats(&game_loop);
                    elwt.exit();
                    return;
                }
                if frame.toggle_pause {
                    game_loop.toggle_pause();
                }

                if dt > 0.0 && !game_loop.is_paused() {
                    session.tick(dt, &frame);
                }

                let snapshot = session.snapshot(game_loop.is_paused(), game_loop.fps());
                renderer.render(&snapshot);
                input.update();
            }
            Event::AboutToWait => {
                // Request redraw on next frame
                renderer.window().request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
