//! Shared types and enums used across logoproc.
//! Includes the pipeline `Variant`, `JobKind`, `RecolorStrategy`, the `Tone` a pixel
//! classifies as, the named brand colors, and hex color parsing.
use clap::ValueEnum;
use image::Rgb;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Accretion disk orange, #FF9500
pub const ORANGE_BASE: Rgb<u8> = Rgb([255, 149, 0]);

/// Brand purple, #6A00FF
pub const PURPLE_TARGET: Rgb<u8> = Rgb([106, 0, 255]);

/// Pipeline generation. `Legacy` is the first pass (distance recolor, sheet cropping);
/// `Fixed` keeps dark artwork intact and only remaps warm tones.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Legacy,
    Fixed,
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Legacy => write!(f, "Legacy"),
            Variant::Fixed => write!(f, "Fixed"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobKind {
    #[default]
    Single,
    ReferenceSheet,
}

impl std::fmt::Display for JobKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            JobKind::Single => "Single",
            JobKind::ReferenceSheet => "ReferenceSheet",
        };
        write!(f, "{}", s)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecolorStrategy {
    /// Replace pixels within `tolerance` of the source color with the flat target color
    Distance,
    /// Remap warm-toned pixels to the target color scaled by their brightness
    Tone,
}

impl std::fmt::Display for RecolorStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecolorStrategy::Distance => write!(f, "Distance"),
            RecolorStrategy::Tone => write!(f, "Tone"),
        }
    }
}

/// Classification of a single RGBA pixel for tone-based recoloring
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Tone {
    Transparent,
    Shadow,
    Highlight,
    Cool,
    Warm,
    Neutral,
}

/// Parse `#RRGGBB` (leading `#` optional) into an RGB triple
pub fn parse_hex_color(value: &str) -> Result<Rgb<u8>> {
    let invalid = || Error::InvalidColor {
        value: value.to_string(),
    };
    let hex = value.trim().strip_prefix('#').unwrap_or(value.trim());
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let mut rgb = [0u8; 3];
    for (i, channel) in rgb.iter_mut().enumerate() {
        *channel = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).map_err(|_| invalid())?;
    }
    Ok(Rgb(rgb))
}

pub fn format_hex_color(color: Rgb<u8>) -> String {
    format!("#{:02X}{:02X}{:02X}", color[0], color[1], color[2])
}
