//! Mask rule and mask-set configuration types.

use serde::{Deserialize, Serialize};

/// A single classification rule: one reference color plus the distance
/// threshold and per-channel weights used to match pixels against it.
///
/// Equality is structural with exact float comparison, which is what the
/// change-detection layer relies on to decide whether a mask needs to be
/// regenerated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickedColor {
    /// Reference color as RGB in the 0.0-1.0 range
    pub color: [f32; 3],

    /// Maximum allowed weighted HSV distance for a pixel to match
    #[serde(default)]
    pub threshold: f32,

    /// Hue weight applied before distance computation (0.0-1.0)
    #[serde(default = "default_h_coeff")]
    pub h_coeff: f32,

    /// Saturation weight applied before distance computation (0.0-1.0)
    #[serde(default = "default_s_coeff")]
    pub s_coeff: f32,

    /// Value weight applied before distance computation (0.0-1.0)
    #[serde(default = "default_v_coeff")]
    pub v_coeff: f32,
}

pub(crate) fn default_h_coeff() -> f32 {
    1.0
}

pub(crate) fn default_s_coeff() -> f32 {
    0.1
}

pub(crate) fn default_v_coeff() -> f32 {
    0.1
}

impl Default for PickedColor {
    fn default() -> Self {
        Self {
            color: [0.0, 0.0, 0.0],
            threshold: 0.0,
            h_coeff: default_h_coeff(),
            s_coeff: default_s_coeff(),
            v_coeff: default_v_coeff(),
        }
    }
}

impl PickedColor {
    /// Check that the rule's parameters are in their valid ranges.
    pub fn validate(&self) -> Result<(), String> {
        if self.threshold < 0.0 {
            return Err(format!("Rule threshold must be non-negative, got {}", self.threshold));
        }

        for (name, coeff) in [
            ("h_coeff", self.h_coeff),
            ("s_coeff", self.s_coeff),
            ("v_coeff", self.v_coeff),
        ] {
            if !(0.0..=1.0).contains(&coeff) {
                return Err(format!("Rule {} must be in 0.0-1.0, got {}", name, coeff));
            }
        }

        Ok(())
    }
}

/// A named, ordered list of picked-color rules defining one mask.
///
/// Rules are applied in order as full passes over the image, so a later
/// rule overwrites pixels already matched by an earlier one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaskDefinition {
    /// Mask name, unique within a set. An empty name marks the definition
    /// as inactive: it produces no output and is skipped during diffing.
    pub name: String,

    /// Classification rules, applied in order (last match wins per pixel)
    #[serde(default)]
    pub picked_colors: Vec<PickedColor>,
}

impl MaskDefinition {
    /// Whether this definition participates in generation.
    pub fn is_active(&self) -> bool {
        !self.name.is_empty()
    }

    /// Check that every rule in the definition is well-formed.
    pub fn validate(&self) -> Result<(), String> {
        for (i, rule) in self.picked_colors.iter().enumerate() {
            rule.validate()
                .map_err(|e| format!("Mask '{}', rule {}: {}", self.name, i, e))?;
        }
        Ok(())
    }
}

/// The authored configuration unit: mask definitions plus the global
/// modifiers that apply to every mask in the set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskSet {
    /// Mask definitions in authoring order
    pub masks: Vec<MaskDefinition>,

    /// Replace matched pixels with their value channel (grayscale)
    pub desaturate: bool,

    /// Preview height in pixels for scaled-down generation
    pub preview_height: u32,
}

pub(crate) fn default_preview_height() -> u32 {
    100
}

impl Default for MaskSet {
    fn default() -> Self {
        Self {
            masks: Vec::new(),
            desaturate: false,
            preview_height: default_preview_height(),
        }
    }
}

impl MaskSet {
    /// Validate every definition and reject duplicate active names.
    pub fn validate(&self) -> Result<(), String> {
        let mut seen: Vec<&str> = Vec::new();

        for mask in &self.masks {
            mask.validate()?;

            if mask.is_active() {
                if seen.contains(&mask.name.as_str()) {
                    return Err(format!("Duplicate mask name: '{}'", mask.name));
                }
                seen.push(&mask.name);
            }
        }

        Ok(())
    }

    /// Iterate over the definitions that will produce output.
    pub fn active_masks(&self) -> impl Iterator<Item = &MaskDefinition> {
        self.masks.iter().filter(|m| m.is_active())
    }
}
