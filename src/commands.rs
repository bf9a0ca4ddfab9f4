// commands.rs
// Handles processing of SimCommand messages for the simulation

use std::sync::atomic::Ordering;

use crate::app::state::{EVENTS, PAUSED};
use crate::part::PartKind;
use crate::simulation::Simulation;

/// Commands sent to the simulation thread from the presentation thread.
pub enum SimCommand {
    Fire,
    StepOnce,
    Reset,
    AssignPart { layer: usize, part: PartKind },
    UnassignPart { layer: usize },
    SetPaused { paused: bool },
}

/// Process a single SimCommand
pub fn process_command(cmd: SimCommand, simulation: &mut Simulation) {
    match cmd {
        // Emit one particle from the detector center
        SimCommand::Fire => {
            simulation.fire();
        }

        // Advance one frame while paused
        SimCommand::StepOnce => {
            handle_step_once(simulation);
        }

        // Drop all particles, trails and pending effects
        SimCommand::Reset => {
            handle_reset(simulation);
        }

        SimCommand::AssignPart { layer, part } => {
            simulation.layers.assign(layer, part);
        }

        SimCommand::UnassignPart { layer } => {
            simulation.layers.unassign(layer);
        }

        SimCommand::SetPaused { paused } => {
            PAUSED.store(paused, Ordering::Relaxed);
        }
    }
}

fn handle_step_once(simulation: &mut Simulation) {
    let events = simulation.tick();
    EVENTS.lock().extend(events);
}

fn handle_reset(simulation: &mut Simulation) {
    simulation.reset();
    EVENTS.lock().clear();
}
