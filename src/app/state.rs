// app/state.rs
// Shared state bridging the simulation thread and the presentation layer:
// command channel registration plus per-frame read-only snapshots.

use std::sync::atomic::AtomicBool;
use std::sync::mpsc::Sender;

use once_cell::sync::Lazy;
use parking_lot::Mutex;

use crate::commands::SimCommand;
use crate::interaction::InteractionEvent;
use crate::particle::Particle;
use crate::path::Path;

pub static PAUSED: Lazy<AtomicBool> = Lazy::new(|| AtomicBool::new(false));
pub static UPDATE_LOCK: Lazy<Mutex<bool>> = Lazy::new(|| Mutex::new(false));

/// Snapshot of active particles (position, color, trail) for drawing.
pub static PARTICLES: Lazy<Mutex<Vec<Particle>>> = Lazy::new(|| Mutex::new(Vec::new()));
/// Snapshot of finished trails for redraw.
pub static TRAILS: Lazy<Mutex<Vec<Path>>> = Lazy::new(|| Mutex::new(Vec::new()));
/// Events produced this frame, consumed by the viewer within the same frame.
pub static EVENTS: Lazy<Mutex<Vec<InteractionEvent>>> = Lazy::new(|| Mutex::new(Vec::new()));

pub static SIM_COMMAND_SENDER: Lazy<Mutex<Option<Sender<SimCommand>>>> =
    Lazy::new(|| Mutex::new(None));
