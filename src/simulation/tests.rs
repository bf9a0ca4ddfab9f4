// simulation/tests.rs
// End-to-end behavior of the session: straight neutral flight, magnet
// curvature and fringe decay, crossing dedup, absorption rules, reset.

use ultraviolet::Vec2;

use super::kinematics;
use super::Simulation;
use crate::config::SimConfig;
use crate::interaction::InteractionEvent;
use crate::layers::LayerRegistry;
use crate::part::PartKind;
use crate::particle::{Particle, ParticleKind};
use crate::rng::RandomSource;

/// Scripted source: every draw returns the same fixed values, making fired
/// trajectories exact.
struct Scripted {
    kind: ParticleKind,
    angle: f32,
    sign: f32,
}

impl RandomSource for Scripted {
    fn angle(&mut self) -> f32 {
        self.angle
    }
    fn kind(&mut self) -> ParticleKind {
        self.kind
    }
    fn charge_sign(&mut self) -> f32 {
        self.sign
    }
    fn spark_offset(&mut self) -> Vec2 {
        Vec2::new(10.0, 0.0)
    }
}

fn session(kind: ParticleKind, angle: f32, sign: f32) -> Simulation {
    let mut sim = Simulation::with_rng(Box::new(Scripted { kind, angle, sign }));
    sim.layers = LayerRegistry::new(&[60.0, 100.0, 140.0, 180.0, 220.0]);
    sim
}

fn run_to_completion(sim: &mut Simulation, cap: usize) -> Vec<InteractionEvent> {
    let mut events = Vec::new();
    for _ in 0..cap {
        events.extend(sim.tick());
        if sim.active().is_empty() {
            return events;
        }
    }
    panic!("simulation did not finish within {} ticks", cap);
}

#[test]
fn photon_travels_straight_and_leaves_the_play_area() {
    let mut sim = session(ParticleKind::Photon, 0.3, 1.0);
    sim.fire();
    let events = run_to_completion(&mut sim, 10_000);

    assert!(events.is_empty(), "no parts assigned, no interactions");
    assert_eq!(sim.trails().len(), 1);

    let trail = &sim.trails()[0];
    let points = trail.points();
    assert!(points.len() > 100);

    // Collinear within float tolerance: every segment parallel to the first.
    let first = points[1] - points[0];
    for w in points.windows(2) {
        let seg = w[1] - w[0];
        let cross = first.x * seg.y - first.y * seg.x;
        assert!(cross.abs() < 1e-2, "photon bent: cross = {}", cross);
    }

    // Terminated by the play-area bound, nothing else.
    let last = trail.last().expect("trail has points");
    assert!(last.x.abs() > 250.0 || last.y.abs() > 250.0);
}

#[test]
fn charged_speed_is_renormalized_every_tick() {
    let mut sim = session(ParticleKind::Muon, 0.7, 1.0);
    sim.layers.assign(0, PartKind::Magnet);
    sim.fire();

    for _ in 0..2_000 {
        sim.tick();
        for p in sim.active() {
            let mag = p.vel.mag();
            assert!(
                (mag - p.speed).abs() < 1e-3,
                "speed drifted to {} at frame {}",
                mag,
                sim.frame
            );
        }
        if sim.active().is_empty() {
            return;
        }
    }
    panic!("muon never left the play area");
}

#[test]
fn fringe_curvature_decays_monotonically_to_zero() {
    let mut layers = LayerRegistry::new(&[60.0]);
    layers.assign(0, PartKind::Magnet);
    let mut config = SimConfig::default();
    config.half_width = 10_000.0;
    config.half_height = 10_000.0;
    let mut rng = Scripted {
        kind: ParticleKind::Muon,
        angle: 0.0,
        sign: 1.0,
    };
    let mut events = Vec::new();

    // Start just inside the magnet ring, heading out: one tick inside, then
    // the fringe countdown runs from the exit.
    let mut p = Particle::new(ParticleKind::Muon, -1.0, Vec2::new(2.0, 0.0), 2.0);
    p.pos = Vec2::new(59.0, 0.0);
    kinematics::advance(&mut p, &layers, &config, &mut rng, &mut events);
    assert!(p.inside_field);
    assert_eq!(p.fringe_steps, 0);

    let mut deltas = Vec::new();
    for _ in 0..100 {
        let before = p.vel.y.atan2(p.vel.x);
        kinematics::advance(&mut p, &layers, &config, &mut rng, &mut events);
        let after = p.vel.y.atan2(p.vel.x);
        deltas.push((after - before).abs());
    }
    assert_eq!(p.fringe_steps, 0, "fringe exhausted after 100 ticks");

    for w in deltas.windows(2) {
        assert!(w[0] > w[1], "fringe kick must strictly decay: {:?}", w);
    }
    assert!(deltas[99] > 0.0);

    // Past the span the velocity is untouched, exactly.
    let frozen = p.vel;
    for _ in 0..5 {
        kinematics::advance(&mut p, &layers, &config, &mut rng, &mut events);
        assert_eq!(p.vel, frozen);
    }
}

#[test]
fn a_ring_interacts_at_most_once_per_particle() {
    let mut sim = session(ParticleKind::Muon, 0.0, 1.0);
    sim.layers.assign(0, PartKind::MuonChamber);
    sim.fire();
    let events = run_to_completion(&mut sim, 10_000);

    // Speed 2 against a 10-wide band: several ticks of dwell, one event.
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].layer, 0);
    assert_eq!(events[0].kind, ParticleKind::Muon);
}

#[test]
fn electron_is_absorbed_by_anything_but_tracker() {
    let mut sim = session(ParticleKind::Electron, 0.0, 1.0);
    sim.layers.assign(0, PartKind::Ecal);
    sim.fire();

    for _ in 0..10_000 {
        let events = sim.tick();
        if !events.is_empty() {
            assert_eq!(events.len(), 1);
            assert!(
                sim.active().is_empty(),
                "absorption retires the particle in the same tick"
            );
            assert_eq!(sim.trails().len(), 1);
            let last = sim.trails()[0].last().expect("trail recorded");
            assert!(last.mag() < 100.0, "absorbed near the ring, not at the edge");
            return;
        }
        assert!(!sim.active().is_empty(), "electron vanished without an event");
    }
    panic!("electron never reached the ECAL ring");
}

#[test]
fn electron_passes_a_tracker_untouched() {
    let mut sim = session(ParticleKind::Electron, 0.0, 1.0);
    sim.layers.assign(0, PartKind::Tracker);
    sim.fire();
    let events = run_to_completion(&mut sim, 10_000);

    assert!(events.is_empty());
    let last = sim.trails()[0].last().expect("trail recorded");
    assert!(last.x.abs() > 250.0 || last.y.abs() > 250.0);
}

#[test]
fn muon_signals_only_in_a_muon_chamber() {
    let mut sim = session(ParticleKind::Muon, 0.0, 1.0);
    sim.layers.assign(0, PartKind::MuonChamber);
    sim.fire();

    let mut saw_signal = false;
    for _ in 0..10_000 {
        let events = sim.tick();
        if !events.is_empty() {
            assert!(!saw_signal, "second event for the same ring");
            saw_signal = true;
            assert_eq!(events.len(), 1);
            assert_eq!(
                sim.active().len(),
                1,
                "a muon chamber signal does not absorb the muon"
            );
        }
        if sim.active().is_empty() {
            break;
        }
    }
    assert!(saw_signal);

    // Any other part stays silent for muons.
    let mut sim = session(ParticleKind::Muon, 0.0, 1.0);
    sim.layers.assign(0, PartKind::Ecal);
    sim.fire();
    let events = run_to_completion(&mut sim, 10_000);
    assert!(events.is_empty());
}

#[test]
fn reset_matches_a_freshly_constructed_session() {
    let mut used = session(ParticleKind::Hadron, 1.0, -1.0);
    used.layers.assign(0, PartKind::Magnet);
    used.fire();
    for _ in 0..50 {
        used.tick();
    }
    used.fire();
    used.tick();

    used.reset();
    assert!(used.active().is_empty());
    assert!(used.trails().is_empty());
    assert_eq!(used.frame, 0);

    let mut fresh = session(ParticleKind::Hadron, 1.0, -1.0);
    used.fire();
    fresh.fire();
    let a = &used.active()[0];
    let b = &fresh.active()[0];
    assert_eq!(a.kind, b.kind);
    assert_eq!(a.charge, b.charge);
    assert_eq!(a.pos, b.pos);
    assert_eq!(a.vel, b.vel);
    assert_eq!(a.path.len(), b.path.len());
}

#[test]
fn hadron_is_absorbed_at_the_magnet_ring() {
    // Magnet at ring 0 (radius 60), ECAL at ring 1 (radius 100).
    let mut sim = session(ParticleKind::Hadron, 0.0, 1.0);
    sim.layers.assign(0, PartKind::Magnet);
    sim.layers.assign(1, PartKind::Ecal);
    sim.fire();
    let events = run_to_completion(&mut sim, 10_000);

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].layer, 0);
    assert_eq!(sim.trails().len(), 1);
    let last = sim.trails()[0].last().expect("trail recorded");
    assert!(last.mag() < 100.0, "absorbed at the ring, not at the edge");
}

#[test]
fn hadron_sheds_energy_in_the_ecal_and_continues() {
    let mut sim = session(ParticleKind::Hadron, 0.0, 1.0);
    sim.layers.assign(1, PartKind::Ecal);
    sim.fire();

    let mut ecal_events = 0;
    for _ in 0..10_000 {
        let events = sim.tick();
        for event in &events {
            assert_eq!(event.layer, 1);
            ecal_events += 1;
            assert_eq!(
                sim.active().len(),
                1,
                "an ECAL signal does not absorb the hadron"
            );
        }
        if sim.active().is_empty() {
            break;
        }
    }
    assert_eq!(ecal_events, 1);
    let last = sim.trails()[0].last().expect("trail recorded");
    assert!(
        last.x.abs() > 250.0 || last.y.abs() > 250.0,
        "hadron kept going until the play-area bound"
    );
}

#[test]
fn a_fast_particle_can_tunnel_past_a_ring() {
    // Per-tick displacement larger than the crossing band: the ring is never
    // sampled inside the tolerance and the crossing is missed. Accepted
    // behavior, not a defect.
    let mut sim = session(ParticleKind::Electron, 0.0, 1.0);
    sim.config.base_speed = 11.0;
    sim.layers.assign(0, PartKind::Ecal);
    sim.fire();
    let events = run_to_completion(&mut sim, 10_000);

    assert!(events.is_empty(), "ring crossing was sampled unexpectedly");
    assert_eq!(sim.trails().len(), 1);
    let last = sim.trails()[0].last().expect("trail recorded");
    assert!(last.x.abs() > 250.0, "electron escaped without absorption");
}
