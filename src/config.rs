use anyhow::{Context, Result};
use blockgame_physics::MoveTuning;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::warn;

const DEFAULT_CONFIG_PATH: &str = "config/sim.toml";

/// Tuning knobs for the simulation, loadable from TOML.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SimConfig {
    /// Horizontal speed while walking.
    pub walk_speed: f32,
    /// Horizontal speed while sprinting.
    pub sprint_speed: f32,
    /// Downward acceleration.
    pub gravity: f32,
    /// Vertical velocity set by a jump.
    pub jump_speed: f32,
    /// Falling speed clamp.
    pub terminal_velocity: f32,
    /// Eye height above the feet.
    pub eye_height: f32,
    /// Upper bound on a single tick's dt.
    pub max_tick_dt: f32,
    /// How far block targeting reaches.
    pub reach_distance: f32,
    /// Simulation ticks per second.
    pub tick_rate: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        let tuning = MoveTuning::default();
        Self {
            walk_speed: tuning.walk_speed,
            sprint_speed: tuning.sprint_speed,
            gravity: tuning.gravity,
            jump_speed: tuning.jump_speed,
            terminal_velocity: tuning.terminal_velocity,
            eye_height: tuning.eye_height,
            max_tick_dt: tuning.max_tick_dt,
            reach_distance: 7.5,
            tick_rate: 60.0,
        }
    }
}

impl SimConfig {
    /// Load configuration from the default path.
    pub fn load() -> Self {
        Self::load_from_path(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Load configuration from an explicit path, falling back to defaults on
    /// a missing or malformed file.
    pub fn load_from_path(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<SimConfig>(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    warn!("Failed to parse {}: {err}. Using defaults", path.display());
                    SimConfig::default()
                }
            },
            Err(err) => {
                if path != Path::new(DEFAULT_CONFIG_PATH)
                    || err.kind() != std::io::ErrorKind::NotFound
                {
                    warn!("Failed to read {}: {err}. Using defaults", path.display());
                }
                SimConfig::default()
            }
        }
    }

    /// Save the configuration for later editing.
    #[allow(dead_code)]
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self).context("serializing sim config")?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        fs::write(path, contents).with_context(|| format!("writing {}", path.display()))
    }

    /// The movement tuning this configuration describes.
    pub fn tuning(&self) -> MoveTuning {
        MoveTuning {
            walk_speed: self.walk_speed,
            sprint_speed: self.sprint_speed,
            gravity: self.gravity,
            jump_speed: self.jump_speed,
            terminal_velocity: self.terminal_velocity,
            eye_height: self.eye_height,
            max_tick_dt: self.max_tick_dt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let cfg = SimConfig::load_from_path(Path::new("does/not/exist.toml"));
        assert_eq!(cfg.reach_distance, 7.5);
        assert_eq!(cfg.tick_rate, 60.0);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let cfg: SimConfig = toml::from_str("jump_speed = 12.0").unwrap();
        assert_eq!(cfg.jump_speed, 12.0);
        assert_eq!(cfg.walk_speed, SimConfig::default().walk_speed);
    }

    #[test]
    fn round_trips_through_toml() {
        let cfg = SimConfig::default();
        let text = toml::to_string_pretty(&cfg).unwrap();
        let back: SimConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.gravity, cfg.gravity);
        assert_eq!(back.reach_distance, cfg.reach_distance);
    }
}
