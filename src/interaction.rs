// interaction.rs
// Decides what happens when a particle crosses an occupied ring: absorption,
// a visual-only signal, or nothing. Rings interact at most once per particle;
// the crossed-set dedup lives in the kinematics step.

use ultraviolet::Vec2;

use crate::config;
use crate::part::{self, PartKind};
use crate::particle::{Particle, ParticleKind};
use crate::rng::RandomSource;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Outcome {
    pub absorbed: bool,
    pub visual: bool,
}

/// Interaction table over the closed kind/part sets.
pub fn outcome(kind: ParticleKind, part: PartKind) -> Outcome {
    use PartKind::*;
    use ParticleKind::*;
    match (kind, part) {
        (Photon | Electron, Tracker) => Outcome {
            absorbed: false,
            visual: false,
        },
        (Photon | Electron, _) => Outcome {
            absorbed: true,
            visual: true,
        },
        (Hadron, Hcal | Magnet | MuonChamber) => Outcome {
            absorbed: true,
            visual: true,
        },
        // Hadrons shed energy in the ECAL but keep going.
        (Hadron, Ecal) => Outcome {
            absorbed: false,
            visual: true,
        },
        (Hadron, Tracker) => Outcome {
            absorbed: false,
            visual: false,
        },
        (Muon, MuonChamber) => Outcome {
            absorbed: false,
            visual: true,
        },
        (Muon, _) => Outcome {
            absorbed: false,
            visual: false,
        },
    }
}

/// Transient scatter effect handed to the renderer within the frame it was
/// produced; the core never stores these.
#[derive(Clone, Debug)]
pub struct InteractionEvent {
    pub pos: Vec2,
    pub kind: ParticleKind,
    pub layer: usize,
    pub color: [u8; 4],
    pub spark_color: [u8; 4],
    pub sparks: Vec<Vec2>,
}

/// Apply the interaction for one ring crossing. Empty slots interact with
/// nothing; absorption flips `finished` on the particle as a side effect
/// visible to the caller.
pub fn resolve(
    particle: &mut Particle,
    part: Option<PartKind>,
    layer: usize,
    rng: &mut dyn RandomSource,
) -> Option<InteractionEvent> {
    let part = part?;
    let Outcome { absorbed, visual } = outcome(particle.kind, part);
    if absorbed {
        particle.finished = true;
    }
    if !visual {
        return None;
    }
    let sparks = (0..config::SPARK_COUNT)
        .map(|_| particle.pos + rng.spark_offset())
        .collect();
    Some(InteractionEvent {
        pos: particle.pos,
        kind: particle.kind,
        layer,
        color: part::part_props(part).color,
        spark_color: part::spark_color(part),
        sparks,
    })
}
