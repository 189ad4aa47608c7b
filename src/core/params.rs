use std::path::Path;

use image::Rgb;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::types::{ORANGE_BASE, PURPLE_TARGET, RecolorStrategy, Variant};

/// Pixel thresholds and colors, suitable for JSON presets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingParams {
    /// Pixels with every channel above this become transparent white
    pub light_threshold: u8,
    /// Pixels with every channel below this become transparent black
    pub dark_threshold: u8,
    pub recolor: RecolorStrategy,
    /// Euclidean RGB distance bound for `RecolorStrategy::Distance` (exclusive)
    pub tolerance: f64,
    #[serde(with = "hex_color")]
    pub source_color: Rgb<u8>,
    #[serde(with = "hex_color")]
    pub target_color: Rgb<u8>,
    pub tone: ToneThresholds,
}

/// Bounds used by the tone classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToneThresholds {
    /// Pixels with alpha below this are left alone
    pub min_alpha: u8,
    /// All channels below this: shadow (black hole center)
    pub shadow_max: u8,
    /// All channels above this: highlight (text)
    pub highlight_min: u8,
    pub warm_min_red: u8,
    pub warm_min_green: u8,
    pub warm_max_blue: u8,
}

impl Default for ToneThresholds {
    fn default() -> Self {
        Self {
            min_alpha: 10,
            shadow_max: 30,
            highlight_min: 200,
            warm_min_red: 150,
            warm_min_green: 50,
            warm_max_blue: 150,
        }
    }
}

impl ProcessingParams {
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Legacy => Self {
                light_threshold: 240,
                dark_threshold: 20,
                recolor: RecolorStrategy::Distance,
                tolerance: 50.0,
                source_color: ORANGE_BASE,
                target_color: PURPLE_TARGET,
                tone: ToneThresholds::default(),
            },
            Variant::Fixed => Self {
                light_threshold: 240,
                dark_threshold: 15,
                recolor: RecolorStrategy::Tone,
                tolerance: 50.0,
                source_color: ORANGE_BASE,
                target_color: PURPLE_TARGET,
                tone: ToneThresholds::default(),
            },
        }
    }

    /// Load a JSON preset layered over `base`; fields the preset omits keep `base` values.
    pub fn from_json_file(path: &Path, base: &ProcessingParams) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_over(&json, base)
    }

    pub fn from_json_over(json: &str, base: &ProcessingParams) -> Result<Self> {
        let preset: Value = serde_json::from_str(json)?;
        let mut merged = serde_json::to_value(base)?;
        merge_json(&mut merged, preset);
        let params: ProcessingParams = serde_json::from_value(merged)?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(Error::InvalidArgument {
                arg: "tolerance",
                value: self.tolerance.to_string(),
            });
        }
        if self.light_threshold <= self.dark_threshold {
            return Err(Error::InvalidArgument {
                arg: "light_threshold",
                value: format!(
                    "{} (must exceed dark_threshold {})",
                    self.light_threshold, self.dark_threshold
                ),
            });
        }
        Ok(())
    }
}

impl Default for ProcessingParams {
    fn default() -> Self {
        Self::for_variant(Variant::Fixed)
    }
}

/// Recursively overlay `patch` onto `target`; objects merge key by key, anything else replaces.
fn merge_json(target: &mut Value, patch: Value) {
    match (target, patch) {
        (Value::Object(target), Value::Object(patch)) => {
            for (key, value) in patch {
                match target.get_mut(&key) {
                    Some(existing) => merge_json(existing, value),
                    None => {
                        target.insert(key, value);
                    }
                }
            }
        }
        (target, patch) => *target = patch,
    }
}

mod hex_color {
    use image::Rgb;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::types::{format_hex_color, parse_hex_color};

    pub fn serialize<S: Serializer>(color: &Rgb<u8>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_hex_color(*color))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Rgb<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_hex_color(&s).map_err(serde::de::Error::custom)
    }
}
