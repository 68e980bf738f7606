use anyhow::Result;
use log::{debug, info};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod engine;

use engine::input::{
    default_control_scheme, Controller, KeyboardInput, PlayerController, WorldTime,
};

/// Number of local players, one per default control scheme
const MAX_PLAYERS: usize = 4;

const WINDOW_TITLE: &str = "Pie Brawl";
const WINDOW_WIDTH: u32 = 1280;
const WINDOW_HEIGHT: u32 = 720;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting {}...", WINDOW_TITLE);

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .with_inner_size(winit::dpi::LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .with_resizable(true)
        .build(&event_loop)?;

    let keyboard = Rc::new(RefCell::new(KeyboardInput::new()));
    let mut players: Vec<PlayerController> = (0..MAX_PLAYERS)
        .map(|player_id| {
            let mut controller = PlayerController::new();
            controller.initialize(keyboard.clone(), default_control_scheme(player_id));
            controller
        })
        .collect();

    info!("{} player controllers bound", players.len());

    let mut last_tick = Instant::now();

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                keyboard.borrow_mut().process_keyboard_event(&event);
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => {
                // Held keys never report a release while unfocused
                keyboard.borrow_mut().release_all();
            }
            Event::AboutToWait => {
                let now = Instant::now();
                let delta_time = now.duration_since(last_tick).as_millis() as WorldTime;
                last_tick = now;

                for (player_id, player) in players.iter_mut().enumerate() {
                    player.advance_frame(delta_time);
                    let state = player.state();
                    if !state.went_down_mask().is_empty() || !state.went_up_mask().is_empty() {
                        debug!(
                            "Player {}: down={:?} up={:?} held={:?} direction={:?}",
                            player_id,
                            state.went_down_mask(),
                            state.went_up_mask(),
                            state.is_down_mask(),
                            state.is_down_mask().direction()
                        );
                    }
                }
                keyboard.borrow_mut().update();

                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
