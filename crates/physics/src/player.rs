//! Kinematic player controller: input intent, gravity, jumping, look.

use crate::collide::resolve_movement;
use blockgame_core::{player_box, Aabb};
use glam::{IVec3, Vec3};

/// Pitch stops just short of straight up/down to avoid gimbal flip.
const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

/// One tick's worth of buffered input, polled by the collaborator.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    /// Forward intent in [-1, 1] (positive = toward the look direction).
    pub move_forward: f32,
    /// Strafe intent in [-1, 1] (positive = to the right).
    pub move_right: f32,
    /// Sprint modifier held.
    pub sprint: bool,
    /// Jump requested this tick.
    pub jump_pressed: bool,
    /// Yaw delta in radians.
    pub look_delta_yaw: f32,
    /// Pitch delta in radians.
    pub look_delta_pitch: f32,
}

/// Movement tuning knobs.
#[derive(Debug, Clone, Copy)]
pub struct MoveTuning {
    /// Horizontal speed while walking.
    pub walk_speed: f32,
    /// Horizontal speed while sprinting.
    pub sprint_speed: f32,
    /// Downward acceleration, applied every tick.
    pub gravity: f32,
    /// Vertical velocity set by a jump.
    pub jump_speed: f32,
    /// Falling speed is clamped here.
    pub terminal_velocity: f32,
    /// Eye height above the feet, read by the camera collaborator.
    pub eye_height: f32,
    /// dt is clamped to this to keep long frame stalls from exploding a
    /// single tick's displacement.
    pub max_tick_dt: f32,
}

impl Default for MoveTuning {
    fn default() -> Self {
        Self {
            walk_speed: 4.3,
            sprint_speed: 7.0,
            gravity: -24.0,
            jump_speed: 8.5,
            terminal_velocity: -50.0,
            eye_height: 1.5,
            max_tick_dt: 0.1,
        }
    }
}

/// Player kinematic state. Position is the feet center.
#[derive(Debug, Clone, Copy)]
pub struct PlayerBody {
    /// Feet-center position in world space.
    pub position: Vec3,
    /// Current velocity.
    pub velocity: Vec3,
    /// Whether downward motion is currently arrested by a floor.
    pub grounded: bool,
    /// Horizontal look angle in radians, wrapped to [0, 2π).
    pub yaw: f32,
    /// Vertical look angle in radians, clamped just short of straight
    /// up/down.
    pub pitch: f32,
}

impl PlayerBody {
    /// Bounding box at the current position.
    pub fn aabb(&self) -> Aabb {
        player_box(self.position)
    }
}

/// Owns the player body and advances it one tick at a time.
pub struct PlayerController {
    body: PlayerBody,
    tuning: MoveTuning,
}

impl PlayerController {
    /// Create a controller with default tuning at the given feet position.
    pub fn new(spawn: Vec3) -> Self {
        Self::with_tuning(spawn, MoveTuning::default())
    }

    /// Create a controller with explicit tuning.
    pub fn with_tuning(spawn: Vec3, tuning: MoveTuning) -> Self {
        Self {
            body: PlayerBody {
                position: spawn,
                velocity: Vec3::ZERO,
                grounded: false,
                yaw: 0.0,
                pitch: 0.0,
            },
            tuning,
        }
    }

    /// Read-only view of the player state.
    pub fn body(&self) -> &PlayerBody {
        &self.body
    }

    /// Tuning in effect.
    pub fn tuning(&self) -> &MoveTuning {
        &self.tuning
    }

    /// Camera position: feet plus eye height.
    pub fn eye_position(&self) -> Vec3 {
        self.body.position + Vec3::new(0.0, self.tuning.eye_height, 0.0)
    }

    /// Full look direction including pitch, for targeting rays.
    pub fn look_dir(&self) -> Vec3 {
        let (yaw, pitch) = (self.body.yaw, self.body.pitch);
        Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize()
    }

    /// Advance the player one tick.
    ///
    /// Applies look deltas, horizontal intent, gravity, and jump, then
    /// delegates the displacement to the collision resolver and commits its
    /// output. Only this controller's own body is mutated.
    pub fn tick<F>(&mut self, input: &InputSnapshot, dt: f32, is_solid: F)
    where
        F: FnMut(IVec3) -> bool,
    {
        let dt = dt.min(self.tuning.max_tick_dt);

        // Mouse look: yaw wraps, pitch clamps.
        self.body.yaw = (self.body.yaw + input.look_delta_yaw).rem_euclid(std::f32::consts::TAU);
        self.body.pitch = (self.body.pitch + input.look_delta_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);

        // Horizontal intent, rotated into the yaw frame and flattened.
        let forward = Vec3::new(self.body.yaw.cos(), 0.0, self.body.yaw.sin());
        let right = Vec3::new(self.body.yaw.sin(), 0.0, -self.body.yaw.cos());
        let mut wish = forward * input.move_forward.clamp(-1.0, 1.0)
            + right * input.move_right.clamp(-1.0, 1.0);
        if wish.length_squared() > 1.0 {
            wish = wish.normalize();
        }
        let speed = if input.sprint {
            self.tuning.sprint_speed
        } else {
            self.tuning.walk_speed
        };
        self.body.velocity.x = wish.x * speed;
        self.body.velocity.z = wish.z * speed;

        // Gravity every tick; contact detection, not gravity, decides
        // grounded state below.
        self.body.velocity.y = (self.body.velocity.y + self.tuning.gravity * dt)
            .max(self.tuning.terminal_velocity);

        if input.jump_pressed && self.body.grounded {
            self.body.velocity.y = self.tuning.jump_speed;
            self.body.grounded = false;
        }

        let result = resolve_movement(self.body.aabb(), self.body.velocity * dt, is_solid);
        self.body.position += result.applied;

        if result.contacts.floor() || result.contacts.ceiling() {
            self.body.velocity.y = 0.0;
        }
        if result.contacts.wall_x() {
            self.body.velocity.x = 0.0;
        }
        if result.contacts.wall_z() {
            self.body.velocity.z = 0.0;
        }
        self.body.grounded = result.contacts.floor();
    }
}
