// app/mod.rs
// Wires the command channel, seeds the session from init_config.toml when
// present, and drives a headless demo volley against the published snapshots.

use std::sync::mpsc::channel;
use std::time::Duration;

pub mod simulation_loop;
pub mod state;

use crate::commands::SimCommand;
use crate::config;
use crate::init_config::InitConfig;
use crate::part::PartKind;
use crate::simulation::Simulation;
use state::{PARTICLES, SIM_COMMAND_SENDER, TRAILS};

/// Number of particles the demo fires.
pub const DEMO_SHOTS: usize = 8;
/// Upper bound on demo frames before giving up waiting.
const DEMO_FRAME_CAP: usize = 4000;

pub fn run() {
    let (tx, rx) = channel();
    *SIM_COMMAND_SENDER.lock() = Some(tx);

    let mut simulation = Simulation::new();
    match InitConfig::load_default() {
        Ok(init) => {
            if let Err(err) = init.apply(&mut simulation) {
                eprintln!("init_config.toml: {}", err);
            }
        }
        Err(_) => default_layout(&mut simulation),
    }

    println!("rings:");
    for (i, slot) in simulation.layers.slots().iter().enumerate() {
        match slot.part {
            Some(part) => println!(
                "  ring {} r={}: {}",
                i,
                slot.radius,
                crate::part::part_props(part).label
            ),
            None => println!("  ring {} r={}: empty", i, slot.radius),
        }
    }

    std::thread::spawn(move || {
        simulation_loop::run_simulation_loop(rx, simulation);
    });

    demo();
}

/// Reference detector used when no init_config.toml is found: magnet bore in
/// the middle, calorimeters outside it, muon chamber and tracker outermost.
fn default_layout(simulation: &mut Simulation) {
    simulation.layers.assign(0, PartKind::Magnet);
    simulation.layers.assign(1, PartKind::Ecal);
    simulation.layers.assign(2, PartKind::Hcal);
    simulation.layers.assign(3, PartKind::MuonChamber);
    simulation.layers.assign(4, PartKind::Tracker);
}

/// Fire a volley and report the recorded trails once everything settles.
fn demo() {
    let sender = match SIM_COMMAND_SENDER.lock().clone() {
        Some(sender) => sender,
        None => return,
    };
    for _ in 0..DEMO_SHOTS {
        let _ = sender.send(SimCommand::Fire);
    }

    let mut reported = false;
    for _ in 0..DEMO_FRAME_CAP {
        std::thread::sleep(Duration::from_millis(config::TICK_INTERVAL_MS));
        if !reported {
            let particles = PARTICLES.lock();
            if !particles.is_empty() {
                let kinds: Vec<&str> = particles.iter().map(|p| p.kind.label()).collect();
                println!("in flight: {}", kinds.join(", "));
                reported = true;
            }
        }
        let active = PARTICLES.lock().len();
        let done = TRAILS.lock().len();
        if active == 0 && done >= DEMO_SHOTS {
            break;
        }
    }

    let trails = TRAILS.lock();
    println!("finished trails: {}", trails.len());
    for (i, trail) in trails.iter().enumerate() {
        println!(
            "  trail {}: {} points, {:.1} units",
            i,
            trail.len(),
            trail.total_len()
        );
    }
}
