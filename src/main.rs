//! Particle Box
//!
//! Headless driver for the particle box simulation: spheres falling under
//! gravity in a cube, colliding with the walls and each other.

mod cli;

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Args;
use particle_simulation::{
    containment_violations, kinetic_energy, max_penetration, max_speed, Particle, Simulation,
};
use serde::Serialize;

/// Particle state as written by `--dump`
#[derive(Serialize)]
struct ParticleRecord {
    position: [f32; 3],
    velocity: [f32; 3],
    radius: f32,
}

impl From<&Particle> for ParticleRecord {
    fn from(p: &Particle) -> Self {
        Self {
            position: p.position.to_array(),
            velocity: p.velocity.to_array(),
            radius: p.radius(),
        }
    }
}

fn log_diagnostics(sim: &Simulation) {
    let particles = sim.particles();
    log::info!(
        "frame {:>6}: energy {:>10.3}, max speed {:>7.3}, max overlap {:.4}, outside {}",
        sim.frame(),
        kinetic_energy(particles),
        max_speed(particles),
        max_penetration(particles),
        containment_violations(particles, sim.container(), 1e-3)
    );
}

fn dump_particles(sim: &Simulation, path: &Path) -> Result<()> {
    let records: Vec<ParticleRecord> = sim.particles().iter().map(ParticleRecord::from).collect();
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), &records)
        .with_context(|| format!("failed to write {}", path.display()))?;
    log::info!("✓ Wrote {} particles to {}", records.len(), path.display());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    args.check()?;
    let config = args.simulation_config()?;
    let interaction = args.interaction();

    log::info!("Starting particle box simulation...");
    let mut sim = Simulation::new(&config)?;
    if interaction.active {
        log::info!(
            "  holding {:?} interaction at {}",
            interaction.mode,
            interaction.point
        );
    }

    let started = Instant::now();
    for _ in 0..args.frames {
        let report = sim.step(args.dt, &config, &interaction);
        log::trace!("{:?}", report);
        if args.log_every > 0 && report.frame % u64::from(args.log_every) == 0 {
            log_diagnostics(&sim);
        }
    }
    let elapsed = started.elapsed();

    log_diagnostics(&sim);
    log::info!(
        "✓ {} frames in {:.2?} ({:.1} frames/s)",
        args.frames,
        elapsed,
        args.frames as f64 / elapsed.as_secs_f64().max(f64::EPSILON)
    );

    if let Some(path) = &args.dump {
        dump_particles(&sim, path)?;
    }
    Ok(())
}
