// layers.rs
// Ordered registry of detector rings and the part (if any) assigned to each.
// Radii are fixed at construction; part assignments change at any time via
// the drag-and-drop collaborator.

use ultraviolet::Vec2;

use crate::part::PartKind;

#[derive(Clone, Debug)]
pub struct LayerSlot {
    pub radius: f32,
    pub part: Option<PartKind>,
}

#[derive(Clone, Debug)]
pub struct LayerRegistry {
    slots: Vec<LayerSlot>,
}

impl LayerRegistry {
    /// Build a registry from strictly increasing ring radii.
    pub fn new(radii: &[f32]) -> Self {
        debug_assert!(
            radii.windows(2).all(|w| w[0] < w[1]),
            "ring radii must be strictly increasing"
        );
        let slots = radii
            .iter()
            .map(|&radius| LayerSlot { radius, part: None })
            .collect();
        Self { slots }
    }

    pub fn with_default_rings() -> Self {
        Self::new(&crate::config::DEFAULT_LAYER_RADII)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[LayerSlot] {
        &self.slots
    }

    pub fn radius(&self, layer: usize) -> Option<f32> {
        self.slots.get(layer).map(|s| s.radius)
    }

    pub fn part(&self, layer: usize) -> Option<PartKind> {
        self.slots.get(layer).and_then(|s| s.part)
    }

    /// Assign a part to a ring. Out-of-range indices are ignored; keeping a
    /// part on at most one ring is the drag collaborator's concern.
    pub fn assign(&mut self, layer: usize, part: PartKind) {
        if let Some(slot) = self.slots.get_mut(layer) {
            slot.part = Some(part);
        }
    }

    pub fn unassign(&mut self, layer: usize) {
        if let Some(slot) = self.slots.get_mut(layer) {
            slot.part = None;
        }
    }

    /// Nearest ring to a world position and the radial distance to it, for
    /// snap-to-ring placement.
    pub fn nearest(&self, pos: Vec2) -> Option<(usize, f32)> {
        let dist = pos.mag();
        self.slots
            .iter()
            .enumerate()
            .map(|(i, s)| (i, (dist - s.radius).abs()))
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }

    /// True when the distance lies at or within a ring holding a magnet.
    /// Scans in ascending radius order; the first match decides.
    pub fn inside_magnet(&self, dist: f32) -> bool {
        self.slots
            .iter()
            .any(|s| s.part == Some(PartKind::Magnet) && dist <= s.radius)
    }
}
