//! Scripted input for headless runs: a JSON list of timed steps, each held
//! for its duration, with optional one-shot block edits at step entry.

use crate::sim::EditAction;
use anyhow::{Context, Result};
use blockgame_core::BlockKind;
use blockgame_physics::InputSnapshot;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize)]
struct ScriptFile {
    steps: Vec<ScriptStep>,
}

#[derive(Debug, Clone, Deserialize, Default)]
struct ScriptStep {
    duration: f32,
    #[serde(default)]
    move_forward: f32,
    #[serde(default)]
    move_right: f32,
    #[serde(default)]
    sprint: bool,
    #[serde(default)]
    jump: bool,
    #[serde(default)]
    look_yaw: f32,
    #[serde(default)]
    look_pitch: f32,
    /// Block kind to place on step entry.
    #[serde(default)]
    place: Option<String>,
    /// Remove the targeted block on step entry.
    #[serde(default)]
    remove: bool,
}

/// Replays script steps as per-tick input snapshots.
pub struct ScriptPlayer {
    steps: Vec<ScriptStep>,
    index: usize,
    time_in_step: f32,
    entered: bool,
}

impl ScriptPlayer {
    /// Load a script from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let file: ScriptFile = serde_json::from_str(&contents)
            .with_context(|| format!("parsing {}", path.display()))?;
        anyhow::ensure!(!file.steps.is_empty(), "script contains no steps");
        for step in &file.steps {
            if let Some(kind) = &step.place {
                kind.parse::<BlockKind>()
                    .with_context(|| format!("in {}", path.display()))?;
            }
        }
        Ok(Self::from_steps(file.steps))
    }

    /// Built-in demo script: wander, sprint, jump, edit a couple of blocks.
    pub fn demo() -> Self {
        Self::from_steps(vec![
            ScriptStep {
                duration: 2.0,
                move_forward: 1.0,
                ..Default::default()
            },
            ScriptStep {
                duration: 1.0,
                move_forward: 1.0,
                sprint: true,
                ..Default::default()
            },
            ScriptStep {
                duration: 0.5,
                jump: true,
                move_forward: 1.0,
                ..Default::default()
            },
            ScriptStep {
                duration: 0.5,
                look_pitch: -0.8,
                ..Default::default()
            },
            ScriptStep {
                duration: 0.5,
                remove: true,
                ..Default::default()
            },
            ScriptStep {
                duration: 0.5,
                place: Some("grass".to_string()),
                ..Default::default()
            },
        ])
    }

    fn from_steps(steps: Vec<ScriptStep>) -> Self {
        Self {
            steps,
            index: 0,
            time_in_step: 0.0,
            entered: false,
        }
    }

    /// Input for the next tick, plus a one-shot edit when a step with an
    /// edit is entered. Look deltas are spread over the step's duration.
    pub fn advance(&mut self, dt: f32) -> (InputSnapshot, Option<EditAction>) {
        let Some(step) = self.steps.get(self.index) else {
            return (InputSnapshot::default(), None);
        };

        let first_tick = !self.entered;
        self.entered = true;

        let fraction = (dt / step.duration.max(dt)).min(1.0);
        let input = InputSnapshot {
            move_forward: step.move_forward,
            move_right: step.move_right,
            sprint: step.sprint,
            jump_pressed: step.jump && first_tick,
            look_delta_yaw: step.look_yaw * fraction,
            look_delta_pitch: step.look_pitch * fraction,
        };
        let edit = if first_tick {
            step.remove
                .then_some(EditAction::Remove)
                .or_else(|| edit_from_place(step.place.as_deref()))
        } else {
            None
        };

        self.time_in_step += dt;
        if self.time_in_step >= step.duration {
            self.index += 1;
            self.time_in_step = 0.0;
            self.entered = false;
        }

        (input, edit)
    }

    /// Whether every step has been consumed.
    pub fn finished(&self) -> bool {
        self.index >= self.steps.len()
    }
}

fn edit_from_place(place: Option<&str>) -> Option<EditAction> {
    // Kind names were validated at load time; fall back to grass if a
    // hand-built step slips through with a bad name.
    place.map(|name| EditAction::Place(name.parse().unwrap_or(BlockKind::Grass)))
}
