//! Game settings and preferences
//!
//! Loaded from an optional JSON file. Missing fields take their defaults and
//! an unreadable file falls back to defaults entirely.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Maximum live particles for this preset
    pub fn max_particles(&self) -> usize {
        match self {
            QualityPreset::Low => 50,
            QualityPreset::Medium => 200,
            QualityPreset::High => 800,
        }
    }

    /// Background stars for this preset
    pub fn star_count(&self) -> usize {
        match self {
            QualityPreset::Low => 60,
            QualityPreset::Medium => 200,
            QualityPreset::High => 400,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,
    /// Particle bursts on jumps, claims and pickups
    pub particles: bool,
    /// Stop the idle star drift
    pub reduced_motion: bool,
    /// How long checkpoint messages stay up
    pub message_hide_ms: u32,
    /// Seed for fragment scatter and the starfield
    pub level_seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            particles: true,
            reduced_motion: false,
            message_hide_ms: 2500,
            level_seed: 0x5EED,
        }
    }
}

impl Settings {
    /// Apply a quality preset (updates quality-dependent settings)
    pub fn apply_preset(&mut self, preset: QualityPreset) {
        self.quality = preset;
        if preset == QualityPreset::Low {
            self.particles = false;
        }
    }

    /// Apply a preset given by name (e.g. from the command line or
    /// environment). Unknown names are logged and ignored.
    pub fn override_quality(&mut self, name: &str) {
        match QualityPreset::from_name(name) {
            Some(preset) => {
                self.apply_preset(preset);
                log::info!("Quality preset: {}", preset.as_str());
            }
            None => log::warn!(
                "Unknown quality preset '{name}', keeping {}",
                self.quality.as_str()
            ),
        }
    }

    /// Effective particle cap
    pub fn max_particles(&self) -> usize {
        if !self.particles {
            0
        } else {
            self.quality.max_particles()
        }
    }

    pub fn star_count(&self) -> usize {
        self.quality.star_count()
    }

    /// Parse settings JSON, falling back to defaults on error
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("Invalid settings ({err}), using defaults");
                Self::default()
            }
        }
    }

    /// Load settings from a file, falling back to defaults if it is missing
    /// or malformed
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => {
                log::info!("Loaded settings from {}", path.display());
                Self::from_json(&json)
            }
            Err(err) => {
                log::info!("Using default settings ({}: {err})", path.display());
                Self::default()
            }
        }
    }
}
