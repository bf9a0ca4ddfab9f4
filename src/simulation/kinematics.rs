// simulation/kinematics.rs
// One discrete step of particle motion: magnet curvature, decaying fringe
// counter-curvature, speed re-normalization, ring-crossing detection and
// play-area retirement.

use std::f32::consts::FRAC_PI_2;

use ultraviolet::Vec2;

use crate::config::SimConfig;
use crate::interaction::{self, InteractionEvent};
use crate::layers::LayerRegistry;
use crate::particle::Particle;
use crate::rng::RandomSource;

/// Advance one particle by one tick. Interaction events produced by ring
/// crossings are pushed into `events` for same-frame consumption.
pub fn advance(
    particle: &mut Particle,
    layers: &LayerRegistry,
    config: &SimConfig,
    rng: &mut dyn RandomSource,
    events: &mut Vec<InteractionEvent>,
) {
    if particle.finished {
        return;
    }

    let dist = particle.pos.mag();
    let was_inside = particle.inside_field;
    particle.inside_field = layers.inside_magnet(dist);

    if particle.charge != 0.0 {
        let prev_vel = particle.vel;
        let mut kicked = false;
        if particle.inside_field {
            // Perpendicular kick; the sense follows the charge sign.
            particle.vel +=
                perp_unit(particle.vel, -FRAC_PI_2) * config.field_strength * particle.charge;
            particle.fringe_steps = 0;
            kicked = true;
        } else {
            if was_inside {
                particle.fringe_steps = config.fringe_span;
            }
            if particle.fringe_steps > 0 {
                // Opposite-sense kick fading linearly over the fringe span.
                let falloff = particle.fringe_steps as f32 / config.fringe_span as f32;
                particle.vel += perp_unit(particle.vel, FRAC_PI_2)
                    * config.field_strength
                    * config.fringe_boost
                    * falloff
                    * particle.charge;
                particle.fringe_steps -= 1;
                kicked = true;
            }
        }
        if kicked {
            // The additive rotation drifts the magnitude; pin it back to the
            // emission speed. A zero-magnitude result skips normalization,
            // and a non-finite one keeps the pre-kick velocity.
            let mag = particle.vel.mag();
            if mag > 0.0 {
                particle.vel = particle.vel / mag * particle.speed;
            }
            if !particle.vel.x.is_finite() || !particle.vel.y.is_finite() {
                particle.vel = prev_vel;
            }
        }
    }

    particle.pos += particle.vel;
    particle.path.push(particle.pos);

    for (layer, slot) in layers.slots().iter().enumerate() {
        if (dist - slot.radius).abs() < config.crossing_tolerance
            && !particle.crossed.contains(&layer)
        {
            particle.crossed.push(layer);
            if let Some(event) = interaction::resolve(particle, slot.part, layer, rng) {
                events.push(event);
            }
            if particle.finished {
                break;
            }
        }
    }

    if particle.pos.x.abs() > config.half_width || particle.pos.y.abs() > config.half_height {
        particle.finished = true;
    }
}

fn perp_unit(vel: Vec2, offset: f32) -> Vec2 {
    let heading = vel.y.atan2(vel.x) + offset;
    Vec2::new(heading.cos(), heading.sin())
}
