// simulation/simulation.rs
// Contains the Simulation struct and its main methods (new, fire, tick,
// reset). Owns every active particle and the trails of finished ones; no
// particle state lives outside this session.

use ultraviolet::Vec2;

use super::kinematics;
use crate::config::SimConfig;
use crate::interaction::InteractionEvent;
use crate::layers::LayerRegistry;
use crate::particle::Particle;
use crate::path::Path;
use crate::rng::{FastrandSource, RandomSource};

pub struct Simulation {
    pub frame: usize,
    pub config: SimConfig,
    pub layers: LayerRegistry,
    pub particles: Vec<Particle>,
    pub trails: Vec<Path>,
    rng: Box<dyn RandomSource>,
}

impl Simulation {
    pub fn new() -> Self {
        Self::with_rng(Box::new(FastrandSource::new()))
    }

    /// Build a session around an explicit random source; tests script one to
    /// make trajectories exact.
    pub fn with_rng(rng: Box<dyn RandomSource>) -> Self {
        Self {
            frame: 0,
            config: SimConfig::default(),
            layers: LayerRegistry::with_default_rings(),
            particles: Vec::new(),
            trails: Vec::new(),
            rng,
        }
    }

    /// Emit one particle from the detector center with a random kind and
    /// emission angle. Hadrons draw their charge sign here, once.
    pub fn fire(&mut self) {
        let kind = self.rng.kind();
        let charge = match kind.fixed_charge() {
            Some(q) => q,
            None => self.rng.charge_sign(),
        };
        let angle = self.rng.angle();
        let vel = Vec2::new(angle.cos(), angle.sin()) * self.config.base_speed;
        self.particles
            .push(Particle::new(kind, charge, vel, self.config.base_speed));
    }

    /// Advance every active particle once and retire the finished ones,
    /// moving their trails into permanent storage. Returned events are meant
    /// for consumption within this same frame.
    pub fn tick(&mut self) -> Vec<InteractionEvent> {
        let mut events = Vec::new();
        for particle in &mut self.particles {
            kinematics::advance(
                particle,
                &self.layers,
                &self.config,
                self.rng.as_mut(),
                &mut events,
            );
        }
        let mut i = 0;
        while i < self.particles.len() {
            if self.particles[i].finished {
                let particle = self.particles.swap_remove(i);
                self.trails.push(particle.path);
            } else {
                i += 1;
            }
        }
        self.frame += 1;
        events
    }

    /// Discard all active particles and stored trails. Safe at any tick
    /// boundary; the next fire() behaves like one on a fresh session.
    pub fn reset(&mut self) {
        self.particles.clear();
        self.trails.clear();
        self.frame = 0;
    }

    pub fn active(&self) -> &[Particle] {
        &self.particles
    }

    pub fn trails(&self) -> &[Path] {
        &self.trails
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}
