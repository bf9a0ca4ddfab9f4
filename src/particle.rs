// particle.rs
// Defines the particle struct (kind, charge, position, velocity, trail) and its
// creation rules. Charge follows the kind: photons are neutral, electrons +1,
// muons -1, hadrons draw a random sign fixed at creation.

use smallvec::SmallVec;
use ultraviolet::Vec2;

use crate::path::Path;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ParticleKind {
    Photon,
    Electron,
    Muon,
    Hadron,
}

impl ParticleKind {
    pub const ALL: [ParticleKind; 4] = [
        ParticleKind::Photon,
        ParticleKind::Electron,
        ParticleKind::Muon,
        ParticleKind::Hadron,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ParticleKind::Photon => "photon",
            ParticleKind::Electron => "electron",
            ParticleKind::Muon => "muon",
            ParticleKind::Hadron => "hadron",
        }
    }

    pub fn color(self) -> [u8; 4] {
        match self {
            ParticleKind::Photon => [255, 230, 90, 255],
            ParticleKind::Electron => [90, 200, 255, 255],
            ParticleKind::Muon => [120, 230, 120, 255],
            ParticleKind::Hadron => [240, 100, 200, 255],
        }
    }

    /// Charge for kinds where it is fixed. Hadrons draw a sign when fired.
    pub fn fixed_charge(self) -> Option<f32> {
        match self {
            ParticleKind::Photon => Some(0.0),
            ParticleKind::Electron => Some(1.0),
            ParticleKind::Muon => Some(-1.0),
            ParticleKind::Hadron => None,
        }
    }
}

#[derive(Clone)]
pub struct Particle {
    pub kind: ParticleKind,
    pub charge: f32,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Emission speed; the velocity is pinned back to this magnitude after
    /// every field kick.
    pub speed: f32,
    pub inside_field: bool,
    /// Remaining ticks of fringe counter-curvature after leaving a magnet region.
    pub fringe_steps: u32,
    /// Ring indices already processed, so each ring interacts at most once.
    pub crossed: SmallVec<[usize; 8]>,
    pub finished: bool,
    pub path: Path,
}

impl Particle {
    /// New particle at the detector center with the given emission velocity.
    pub fn new(kind: ParticleKind, charge: f32, vel: Vec2, speed: f32) -> Self {
        let pos = Vec2::zero();
        let mut path = Path::new();
        path.push(pos);
        Self {
            kind,
            charge,
            pos,
            vel,
            speed,
            inside_field: false,
            fringe_steps: 0,
            crossed: SmallVec::new(),
            finished: false,
            path,
        }
    }

    pub fn color(&self) -> [u8; 4] {
        self.kind.color()
    }
}
