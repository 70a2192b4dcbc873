use std::time::Instant;

use anyhow::{Context, Result};
use glam::Vec2;
use log::{debug, info};
use rusted_controller::engine::game_loop::FixedStepClock;
use rusted_controller::engine::input::{Control, InputManager, TickInput};
use rusted_controller::engine::physics::{body::presets, PhysicsWorld, RigidBodyHandle};
use rusted_controller::game::characters::{
    CharacterEvent, CharacterId, CharacterManager, ControllerConfig,
};
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

const CHARACTER_WIDTH: f32 = 0.8;
const CHARACTER_HEIGHT: f32 = 1.8;
const SPAWN_POINT: Vec2 = Vec2::new(0.0, 3.0);
/// Below this height a character is respawned
const KILL_PLANE: f32 = -20.0;

/// Wires window input to one controller standing in a rapier arena
struct DemoHost {
    input: InputManager,
    clock: FixedStepClock,
    physics: PhysicsWorld,
    characters: CharacterManager,
    player: CharacterId,
    body: RigidBodyHandle,
    /// Clip the player is currently showing
    animation: &'static str,
    last_frame: Instant,
}

impl DemoHost {
    fn new() -> Result<Self> {
        let mut physics = PhysicsWorld::with_gravity(rapier2d::prelude::vector![0.0, -40.0]);

        let floor = physics.add_rigid_body(presets::platform_body(0.0, -0.5));
        physics.add_collider(presets::platform_collider(30.0, 1.0), floor);
        let ledge = physics.add_rigid_body(presets::platform_body(8.0, 4.0));
        physics.add_collider(presets::platform_collider(6.0, 0.5), ledge);

        let body = physics.add_rigid_body(presets::character_body(SPAWN_POINT.x, SPAWN_POINT.y));
        physics.add_collider(
            presets::character_collider(CHARACTER_WIDTH, CHARACTER_HEIGHT),
            body,
        );

        let mut characters = CharacterManager::new();
        let player = characters
            .spawn(ControllerConfig::standard())
            .context("Failed to spawn player character")?;

        info!("Arena ready with {} bodies", physics.body_count());

        Ok(Self {
            input: InputManager::new(1),
            clock: FixedStepClock::new(),
            physics,
            characters,
            player,
            body,
            animation: "idle",
            last_frame: Instant::now(),
        })
    }

    /// Run one frame. Returns false once the player asked to quit.
    fn frame(&mut self) -> Result<bool> {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.input.any_player_just_pressed(Control::Menu) {
            return Ok(false);
        }
        if self.input.any_player_just_pressed(Control::Pause) {
            self.clock.toggle_pause();
        }

        let player_input = self
            .input
            .player(0)
            .context("Player one input missing")?;
        let axis = player_input.movement_axis();
        let jump_held = player_input.jump_held();

        // Sample phase: every press edge of this frame goes into the buffer
        if !self.clock.is_paused() {
            for kind in player_input.pressed_actions() {
                self.characters.sample(self.player, kind);
            }
        }

        // Step phase
        let steps = self.clock.advance(frame_time);
        for _ in 0..steps {
            self.fixed_step(axis, jump_held)?;
        }

        self.respawn_if_fallen()?;
        self.input.update();
        Ok(true)
    }

    fn fixed_step(&mut self, axis: f32, jump_held: bool) -> Result<()> {
        let grounded = self
            .physics
            .is_grounded(self.body, CHARACTER_HEIGHT / 2.0);
        let controller = self
            .characters
            .get_mut(self.player)
            .context("Player character missing")?;
        if let Some(velocity) = self.physics.velocity(self.body) {
            controller.sync_vertical_velocity(velocity.y);
        }

        let tick = TickInput::new(axis, grounded, self.clock.fixed_timestep())?
            .with_jump_held(jump_held);
        let output = controller.step(&tick);

        self.physics.set_velocity(self.body, output.velocity);
        self.physics.step();

        for event in &output.events {
            announce(event);
        }
        if output.animation != self.animation {
            debug!(
                "Player animation {} -> {} (speed ratio {:.2})",
                self.animation, output.animation, output.speed_ratio
            );
            self.animation = output.animation;
        }
        Ok(())
    }

    fn respawn_if_fallen(&mut self) -> Result<()> {
        let Some(position) = self.physics.translation(self.body) else {
            return Ok(());
        };
        if position.y >= KILL_PLANE {
            return Ok(());
        }

        self.characters
            .get_mut(self.player)
            .context("Player character missing")?
            .respawn();
        self.physics.set_position(self.body, SPAWN_POINT);
        Ok(())
    }
}

/// Stand-in for the audio and animation players
fn announce(event: &CharacterEvent) {
    match (event.kind.audio_cue(), event.kind.animation_trigger()) {
        (None, None) => info!("Character {}: {:?}", event.character, event.kind),
        (audio, animation) => info!(
            "Character {}: {:?} (audio: {}, animation: {})",
            event.character,
            event.kind,
            audio.unwrap_or("-"),
            animation.unwrap_or("-"),
        ),
    }
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting controller demo...");

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let _window = WindowBuilder::new()
        .with_title("Rusted Controller")
        .with_inner_size(winit::dpi::LogicalSize::new(640, 360))
        .with_resizable(false)
        .build(&event_loop)?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut host = DemoHost::new()?;
    info!("Move with A/D, jump with Space, J/K/L attack, Shift dashes, P pauses, Escape quits");

    // Main event loop
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
            } => host.input.process_keyboard_event(&event),
            Event::WindowEvent {
                event: WindowEvent::MouseInput { state, button, .. },
                ..
            } => host.input.process_mouse_button(button, state),
            Event::AboutToWait => match host.frame() {
                Ok(true) => {}
                Ok(false) => {
                    info!("Quit requested, shutting down...");
                    elwt.exit();
                }
                Err(e) => {
                    log::error!("Frame failed: {:#}", e);
                    elwt.exit();
                }
            },
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
