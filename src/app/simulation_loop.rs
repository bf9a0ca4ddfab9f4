// app/simulation_loop.rs
// Background loop owning the session: drain pending commands, tick once per
// frame, publish snapshots for the viewer.

use std::sync::atomic::Ordering;
use std::sync::mpsc::Receiver;
use std::time::Duration;

use super::state::{EVENTS, PARTICLES, PAUSED, TRAILS, UPDATE_LOCK};
use crate::commands::{self, SimCommand};
use crate::config;
use crate::interaction::InteractionEvent;
use crate::simulation::Simulation;

pub fn publish(simulation: &Simulation, events: Vec<InteractionEvent>) {
    let mut lock = UPDATE_LOCK.lock();
    {
        let mut particles = PARTICLES.lock();
        particles.clear();
        particles.extend_from_slice(simulation.active());
    }
    {
        let mut trails = TRAILS.lock();
        trails.clear();
        trails.extend_from_slice(simulation.trails());
    }
    *EVENTS.lock() = events;
    *lock |= true;
}

pub fn run_simulation_loop(rx: Receiver<SimCommand>, mut simulation: Simulation) {
    loop {
        // Handle commands
        while let Ok(cmd) = rx.try_recv() {
            commands::process_command(cmd, &mut simulation);
        }

        let events = if PAUSED.load(Ordering::Relaxed) {
            Vec::new()
        } else {
            simulation.tick()
        };

        publish(&simulation, events);

        // One tick per frame interval; the viewer reads snapshots in between.
        std::thread::sleep(Duration::from_millis(config::TICK_INTERVAL_MS));
    }
}
