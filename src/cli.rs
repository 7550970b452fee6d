//! Command line options for the headless driver

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use glam::Vec3;
use particle_simulation::{InteractionMode, InteractionState, SimulationConfig};

#[derive(Parser, Debug)]
#[command(name = "particle-box", about = "Run the particle box simulation without a window")]
pub struct Args {
    /// JSON file with a `SimulationConfig`; flags below override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of frames to simulate
    #[arg(short, long, default_value_t = 600)]
    pub frames: u32,

    /// Frame time in seconds
    #[arg(long, default_value_t = 1.0 / 60.0)]
    pub dt: f32,

    #[arg(long)]
    pub count: Option<u32>,

    #[arg(long)]
    pub gravity: Option<f32>,

    #[arg(long)]
    pub radius: Option<f32>,

    /// Container scale (half extent = columns / 2 * spacing * scale)
    #[arg(long)]
    pub scale: Option<f32>,

    /// Pairwise resolution passes per frame
    #[arg(long)]
    pub iterations: Option<u32>,

    /// Hold a push or pull interaction for the whole run
    #[arg(long, value_enum, requires = "target")]
    pub interact: Option<Mode>,

    /// Interaction target as `x,y,z`
    #[arg(long, value_parser = parse_vec3)]
    pub target: Option<Vec3>,

    /// Log diagnostics every N frames (0 = only at the end)
    #[arg(long, default_value_t = 60)]
    pub log_every: u32,

    /// Write the final particle state as JSON
    #[arg(long)]
    pub dump: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Mode {
    Push,
    Pull,
}

impl From<Mode> for InteractionMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Push => InteractionMode::Push,
            Mode::Pull => InteractionMode::Pull,
        }
    }
}

impl Args {
    /// Config file (or defaults) with command line overrides applied
    pub fn simulation_config(&self) -> Result<SimulationConfig> {
        let mut config: SimulationConfig = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("failed to parse {}", path.display()))?
            }
            None => SimulationConfig::default(),
        };

        if let Some(count) = self.count {
            config.particle_count = count;
        }
        if let Some(gravity) = self.gravity {
            config.gravity = gravity;
        }
        if let Some(radius) = self.radius {
            config.particle_radius = radius;
        }
        if let Some(scale) = self.scale {
            config.container_scale = scale;
        }
        if let Some(iterations) = self.iterations {
            config.resolution_iterations = iterations;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn interaction(&self) -> InteractionState {
        match (self.interact, self.target) {
            (Some(mode), Some(point)) => InteractionState::at(point, mode.into()),
            _ => InteractionState::idle(),
        }
    }

    pub fn check(&self) -> Result<()> {
        if !(self.dt.is_finite() && self.dt >= 0.0) {
            bail!("frame time must be non-negative, got {}", self.dt);
        }
        Ok(())
    }
}

fn parse_vec3(s: &str) -> Result<Vec3, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("expected x,y,z but got `{}`", s));
    }
    let mut xyz = [0.0_f32; 3];
    for (slot, part) in xyz.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .map_err(|e| format!("invalid coordinate `{}`: {}", part, e))?;
    }
    Ok(Vec3::from_array(xyz))
}
