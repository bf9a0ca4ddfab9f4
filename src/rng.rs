// rng.rs
// Injectable random source for emission and effect sampling, so tests can
// script exact sequences. The default draws from a seedable fastrand::Rng.

use std::f32::consts::TAU;

use ultraviolet::Vec2;

use crate::config;
use crate::particle::ParticleKind;

pub trait RandomSource: Send {
    /// Emission angle in [0, 2π).
    fn angle(&mut self) -> f32;
    /// Uniformly chosen particle kind.
    fn kind(&mut self) -> ParticleKind;
    /// Charge sign drawn for a hadron, +1.0 or -1.0.
    fn charge_sign(&mut self) -> f32;
    /// Offset of one interaction spark around its crossing point.
    fn spark_offset(&mut self) -> Vec2;
}

pub struct FastrandSource {
    rng: fastrand::Rng,
}

impl FastrandSource {
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Default for FastrandSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for FastrandSource {
    fn angle(&mut self) -> f32 {
        self.rng.f32() * TAU
    }

    fn kind(&mut self) -> ParticleKind {
        ParticleKind::ALL[self.rng.usize(..ParticleKind::ALL.len())]
    }

    fn charge_sign(&mut self) -> f32 {
        if self.rng.bool() {
            1.0
        } else {
            -1.0
        }
    }

    fn spark_offset(&mut self) -> Vec2 {
        let a = self.rng.f32() * TAU;
        let r = config::SPARK_RADIUS_MIN
            + self.rng.f32() * (config::SPARK_RADIUS_MAX - config::SPARK_RADIUS_MIN);
        Vec2::new(a.cos(), a.sin()) * r
    }
}
