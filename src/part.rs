// part.rs
// Catalog of detector parts a ring can host, with their display properties.
// The part set is closed so the interaction table can match exhaustively.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use palette::{Hsluv, IntoColor, Srgba};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PartKind {
    Magnet,
    Ecal,
    Hcal,
    MuonChamber,
    Tracker,
}

impl PartKind {
    pub const ALL: [PartKind; 5] = [
        PartKind::Magnet,
        PartKind::Ecal,
        PartKind::Hcal,
        PartKind::MuonChamber,
        PartKind::Tracker,
    ];
}

#[derive(Clone, Copy, Debug)]
pub struct PartProps {
    pub label: &'static str,
    /// Hsluv hue the base and spark colors are derived from.
    pub hue: f32,
    pub color: [u8; 4],
}

fn hsluv_rgba(h: f32, s: f32, l: f32) -> [u8; 4] {
    let c = Hsluv::new(h, s, l);
    let rgba: Srgba = c.into_color();
    [
        (rgba.red * 255.0) as u8,
        (rgba.green * 255.0) as u8,
        (rgba.blue * 255.0) as u8,
        (rgba.alpha * 255.0) as u8,
    ]
}

pub static PART_PROPERTIES: Lazy<HashMap<PartKind, PartProps>> = Lazy::new(|| {
    use PartKind::*;
    let mut m = HashMap::new();
    m.insert(
        Magnet,
        PartProps {
            label: "Magnet",
            hue: 12.0,
            color: hsluv_rgba(12.0, 85.0, 55.0),
        },
    );
    m.insert(
        Ecal,
        PartProps {
            label: "ECAL",
            hue: 127.0,
            color: hsluv_rgba(127.0, 80.0, 60.0),
        },
    );
    m.insert(
        Hcal,
        PartProps {
            label: "HCAL",
            hue: 45.0,
            color: hsluv_rgba(45.0, 90.0, 65.0),
        },
    );
    m.insert(
        MuonChamber,
        PartProps {
            label: "Muon",
            hue: 258.0,
            color: hsluv_rgba(258.0, 80.0, 55.0),
        },
    );
    m.insert(
        Tracker,
        PartProps {
            label: "Tracker",
            hue: 86.0,
            color: hsluv_rgba(86.0, 70.0, 70.0),
        },
    );
    m
});

pub fn part_props(kind: PartKind) -> PartProps {
    PART_PROPERTIES.get(&kind).copied().unwrap_or(PartProps {
        label: "?",
        hue: 0.0,
        color: [255, 255, 255, 255],
    })
}

/// Brightened variant of the part color, used for interaction sparks.
pub fn spark_color(kind: PartKind) -> [u8; 4] {
    let props = part_props(kind);
    hsluv_rgba(props.hue, 65.0, 85.0)
}
