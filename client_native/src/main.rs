//! Native Pong client
//!
//! Single-threaded frame loop: poll held keys, advance the simulation with
//! the measured delta time, render, then wait out the fixed tick delay.
//! Physics is delta-time driven, so paddle and ball speeds stay the same
//! whether or not a frame runs long.

mod camera;
mod digits;
mod fsm;
mod input;
mod mesh;
mod renderer;
mod session;

use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use fsm::MatchPhase;
use game_core::Config;
use input::InputState;
use renderer::Renderer;
use session::LocalMatch;

struct ClientState {
    window: Arc<Window>,
    renderer: Renderer,
    input: InputState,
    session: LocalMatch,
    last_tick: Instant,
}

impl ClientState {
    fn tick(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;

        // A window drag or similar stall produces one huge delta; skip the
        // physics for that tick rather than jump the ball across the arena.
        if dt > self.session.config.stall_dt() {
            log::debug!("skipping stalled tick (dt = {:.3}s)", dt);
        } else {
            let left_dir = self.input.dir(0);
            let right_dir = self.input.dir(1);
            self.session.step(dt, left_dir, right_dir);
        }

        match self.session.phase() {
            MatchPhase::Playing => {}
            MatchPhase::RoundOver => {
                // Fresh ball and centered paddles, scores preserved
                self.session.start_next_round();
            }
            MatchPhase::MatchOver => {
                let score = self.session.score;
                let winner = if self.session.winner() == Some(0) {
                    "left"
                } else {
                    "right"
                };
                log::info!(
                    "match over, {} player wins {} - {}",
                    winner,
                    score.left,
                    score.right
                );
                event_loop.exit();
                return;
            }
        }

        if let Err(e) = self.renderer.draw(&self.session.scene()) {
            log::error!("draw failed: {}", e);
        }

        // Fixed per-tick delay; measured dt above keeps speeds consistent
        let tick_interval = Duration::from_secs_f32(self.session.config.tick_interval);
        event_loop.set_control_flow(ControlFlow::WaitUntil(now + tick_interval));
    }
}

struct App {
    state: Option<ClientState>,
}

impl App {
    fn new() -> Self {
        Self { state: None }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let config = Config::new();
        let window = Arc::new(
            event_loop
                .create_window(
                    Window::default_attributes()
                        .with_title("Pong")
                        .with_inner_size(LogicalSize::new(
                            config.window_width as f64,
                            config.window_height as f64,
                        ))
                        .with_resizable(false),
                )
                .expect("Failed to create window"),
        );
        log::info!(
            "window created: {}x{}",
            config.window_width,
            config.window_height
        );

        let renderer = pollster::block_on(Renderer::new(window.clone(), config.clone()))
            .expect("Failed to initialize renderer");

        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(12345);

        self.state = Some(ClientState {
            window,
            renderer,
            input: InputState::new(),
            session: LocalMatch::new(config, seed),
            last_tick: Instant::now(),
        });
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let state = match self.state.as_mut() {
            Some(s) => s,
            None => return,
        };

        match event {
            WindowEvent::CloseRequested => {
                log::info!("close requested, exiting");
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                state.renderer.resize(physical_size.width, physical_size.height);
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key_code) = event.physical_key {
                    match event.state {
                        ElementState::Pressed => {
                            if key_code == KeyCode::Escape {
                                event_loop.exit();
                                return;
                            }
                            state.input.key_down(key_code);
                        }
                        ElementState::Released => state.input.key_up(key_code),
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                state.tick(event_loop);
            }

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            let score = state.session.score;
            println!("{} {}", score.left, score.right);
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();
    event_loop.run_app(&mut app).expect("Event loop error");
}
