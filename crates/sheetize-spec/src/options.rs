//! Layout options and the closed strategy variants that select algorithms.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::geometry::{Scale, Spacing};

/// Options shared by tileset and spritesheet layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutOptions {
    /// Uniform border around the sheet, in pre-scale pixels.
    #[serde(default)]
    pub offset: u32,

    /// Gap between cells, in pre-scale pixels.
    #[serde(default)]
    pub spacing: Spacing,

    /// Upscale factor applied to every final position and size.
    #[serde(default)]
    pub scale: Scale,

    /// Place tiles in reverse input order (tileset mode only).
    #[serde(default)]
    pub invert_order: bool,
}

impl LayoutOptions {
    /// Sets the border offset.
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// Sets the cell spacing.
    pub fn with_spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    /// Sets the upscale factor.
    pub fn with_scale(mut self, scale: Scale) -> Self {
        self.scale = scale;
        self
    }

    /// Sets whether tile input order is reversed.
    pub fn with_invert_order(mut self, invert_order: bool) -> Self {
        self.invert_order = invert_order;
        self
    }
}

/// Error returned when a strategy or mode name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant {
    /// What kind of value was being parsed.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
    /// Accepted names.
    pub expected: &'static [&'static str],
}

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown {} '{}' (expected one of: {})",
            self.kind,
            self.value,
            self.expected.join(", ")
        )
    }
}

impl std::error::Error for UnknownVariant {}

/// How clips are grouped into rows in spritesheet mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackingStrategy {
    /// Best-fit-decreasing with capacity equal to the longest clip.
    #[default]
    BestFitDecreasing,
    /// Legacy next-fit over clips sorted by length, wrapping at
    /// `max(longest, floor(sqrt(total frames)))`.
    SqrtWrap,
}

impl PackingStrategy {
    /// All accepted names, in declaration order.
    pub const NAMES: &'static [&'static str] = &["best_fit_decreasing", "sqrt_wrap"];

    /// Returns the canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PackingStrategy::BestFitDecreasing => "best_fit_decreasing",
            PackingStrategy::SqrtWrap => "sqrt_wrap",
        }
    }
}

impl fmt::Display for PackingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackingStrategy {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "best_fit_decreasing" | "bfd" => Ok(PackingStrategy::BestFitDecreasing),
            "sqrt_wrap" | "sqrt" => Ok(PackingStrategy::SqrtWrap),
            _ => Err(UnknownVariant {
                kind: "packing strategy",
                value: s.to_string(),
                expected: Self::NAMES,
            }),
        }
    }
}

/// Arrangement used to preview how a tile repeats next to its neighbours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreviewMode {
    /// 3x3 block with the primary tile in the centre.
    #[default]
    Block,
    /// Single row of three with the primary tile in the middle.
    Floor,
    /// Three rows; the middle column is the primary tile.
    Columns,
    /// Primary tile stacked above the secondary tile.
    VerticalAdjacent,
}

impl PreviewMode {
    /// All accepted names, in declaration order.
    pub const NAMES: &'static [&'static str] = &["block", "floor", "columns", "v-adjacent"];

    /// Returns the canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PreviewMode::Block => "block",
            PreviewMode::Floor => "floor",
            PreviewMode::Columns => "columns",
            PreviewMode::VerticalAdjacent => "v-adjacent",
        }
    }
}

impl fmt::Display for PreviewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PreviewMode {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "block" => Ok(PreviewMode::Block),
            "floor" => Ok(PreviewMode::Floor),
            "columns" => Ok(PreviewMode::Columns),
            "v-adjacent" | "vertical-adjacent" | "v-adj" => Ok(PreviewMode::VerticalAdjacent),
            _ => Err(UnknownVariant {
                kind: "preview mode",
                value: s.to_string(),
                expected: Self::NAMES,
            }),
        }
    }
}
