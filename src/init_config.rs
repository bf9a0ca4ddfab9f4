// init_config.rs
// Handles loading and parsing the initial detector layout from init_config.toml

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::layers::LayerRegistry;
use crate::part::PartKind;
use crate::simulation::Simulation;

#[derive(Debug, Deserialize, Serialize)]
pub struct InitConfig {
    pub simulation: Option<SimulationConfig>,
    #[serde(default)]
    pub layers: Vec<LayerConfig>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SimulationConfig {
    /// Optional emission speed override. Falls back to the default when omitted.
    pub base_speed: Option<f32>,
    /// Optional half-extents of the play area.
    pub half_width: Option<f32>,
    pub half_height: Option<f32>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct LayerConfig {
    pub radius: f32,
    /// Part name hosted by this ring; omit for an empty ring.
    pub part: Option<String>,
}

impl InitConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config: InitConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        Self::load_from_file("init_config.toml")
    }

    /// Apply the layout onto a session: optional emission/play-area overrides
    /// plus a rebuilt ring registry with its part assignments.
    pub fn apply(&self, simulation: &mut Simulation) -> Result<(), String> {
        if let Some(sim) = &self.simulation {
            if let Some(speed) = sim.base_speed {
                simulation.config.base_speed = speed;
            }
            if let Some(w) = sim.half_width {
                simulation.config.half_width = w;
            }
            if let Some(h) = sim.half_height {
                simulation.config.half_height = h;
            }
        }
        if !self.layers.is_empty() {
            let radii: Vec<f32> = self.layers.iter().map(|l| l.radius).collect();
            if !radii.windows(2).all(|w| w[0] < w[1]) {
                return Err("layer radii must be strictly increasing".to_string());
            }
            simulation.layers = LayerRegistry::new(&radii);
            for (i, layer) in self.layers.iter().enumerate() {
                if let Some(part) = layer.to_part()? {
                    simulation.layers.assign(i, part);
                }
            }
        }
        Ok(())
    }
}

impl LayerConfig {
    pub fn to_part(&self) -> Result<Option<PartKind>, String> {
        match &self.part {
            None => Ok(None),
            Some(name) => match name.as_str() {
                "Magnet" => Ok(Some(PartKind::Magnet)),
                "ECAL" => Ok(Some(PartKind::Ecal)),
                "HCAL" => Ok(Some(PartKind::Hcal)),
                "Muon" => Ok(Some(PartKind::MuonChamber)),
                "Tracker" => Ok(Some(PartKind::Tracker)),
                _ => Err(format!("Unknown part: {}", name)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_layout() {
        let toml_str = r#"
            [simulation]
            base_speed = 3.0

            [[layers]]
            radius = 60.0
            part = "Magnet"

            [[layers]]
            radius = 100.0
        "#;
        let config: InitConfig = toml::from_str(toml_str).expect("valid layout");
        let mut sim = Simulation::new();
        config.apply(&mut sim).expect("layout applies");

        assert_eq!(sim.config.base_speed, 3.0);
        assert_eq!(sim.layers.len(), 2);
        assert_eq!(sim.layers.part(0), Some(PartKind::Magnet));
        assert_eq!(sim.layers.part(1), None);
    }

    #[test]
    fn unknown_part_names_are_rejected() {
        let layer = LayerConfig {
            radius: 60.0,
            part: Some("Calorimeter".to_string()),
        };
        assert!(layer.to_part().is_err());
    }

    #[test]
    fn unsorted_radii_are_rejected() {
        let toml_str = r#"
            [[layers]]
            radius = 100.0

            [[layers]]
            radius = 60.0
        "#;
        let config: InitConfig = toml::from_str(toml_str).expect("parses");
        let mut sim = Simulation::new();
        assert!(config.apply(&mut sim).is_err());
    }
}
