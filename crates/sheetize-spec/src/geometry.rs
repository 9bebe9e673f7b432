//! Pixel geometry primitives shared by layouts and manifests.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// Width and height of a cell or canvas, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Creates a new size.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Gap between neighbouring cells, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Spacing {
    /// Horizontal gap between columns.
    #[serde(default)]
    pub horizontal: u32,
    /// Vertical gap between rows.
    #[serde(default)]
    pub vertical: u32,
}

impl Spacing {
    /// Creates a spacing with independent horizontal and vertical gaps.
    pub fn new(horizontal: u32, vertical: u32) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Creates a spacing with the same gap on both axes.
    pub fn uniform(gap: u32) -> Self {
        Self::new(gap, gap)
    }
}

/// An axis-aligned rectangle in final (post-scale) pixel units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Bounds {
    /// Left edge.
    pub left: u32,
    /// Top edge.
    pub top: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Bounds {
    /// Creates a new bounding box.
    pub fn new(left: u32, top: u32, width: u32, height: u32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Exclusive right edge.
    pub fn right(&self) -> u64 {
        self.left as u64 + self.width as u64
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> u64 {
        self.top as u64 + self.height as u64
    }

    /// Returns the size of the box.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns true if the two boxes share at least one pixel.
    ///
    /// Empty boxes never intersect anything.
    pub fn intersects(&self, other: &Bounds) -> bool {
        if self.width == 0 || self.height == 0 || other.width == 0 || other.height == 0 {
            return false;
        }
        (self.left as u64) < other.right()
            && (other.left as u64) < self.right()
            && (self.top as u64) < other.bottom()
            && (other.top as u64) < self.bottom()
    }

    /// Returns true if `other` lies entirely inside this box.
    pub fn contains(&self, other: &Bounds) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// Uniform upscale factor applied to every final position and size.
///
/// Scaling multiplies a pre-scale pixel value and truncates toward zero.
/// Export scales must be finite and at least 1; preview zooms only need to
/// be finite and positive (see [`Scale::zoom`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Scale(f64);

impl Scale {
    /// The identity scale.
    pub const ONE: Scale = Scale(1.0);

    /// Creates an export scale. Rejects NaN, infinities, and values below 1.
    pub fn new(factor: f64) -> Result<Self, LayoutError> {
        if !factor.is_finite() || factor < 1.0 {
            return Err(LayoutError::InvalidOption(format!(
                "scale must be a finite number >= 1, got {}",
                factor
            )));
        }
        Ok(Self(factor))
    }

    /// Creates a preview zoom. Any finite positive factor is accepted.
    pub fn zoom(factor: f64) -> Result<Self, LayoutError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(LayoutError::InvalidOption(format!(
                "zoom must be a finite number > 0, got {}",
                factor
            )));
        }
        Ok(Self(factor))
    }

    /// Returns the raw factor.
    pub fn factor(&self) -> f64 {
        self.0
    }

    /// Returns true if the factor is a whole number.
    pub fn is_integral(&self) -> bool {
        self.0.fract() == 0.0
    }

    /// Scales a pre-scale pixel value and truncates it.
    ///
    /// Fails if the scaled value does not fit into a `u32` pixel coordinate.
    pub fn apply(&self, value: u64) -> Result<u32, LayoutError> {
        let scaled = (value as f64 * self.0).trunc();
        if scaled > u32::MAX as f64 {
            return Err(LayoutError::InvalidOption(format!(
                "scaled coordinate {} exceeds the pixel range",
                scaled
            )));
        }
        Ok(scaled as u32)
    }

    /// Scales every field of a pre-scale box.
    pub fn apply_bounds(
        &self,
        left: u64,
        top: u64,
        width: u64,
        height: u64,
    ) -> Result<Bounds, LayoutError> {
        Ok(Bounds {
            left: self.apply(left)?,
            top: self.apply(top)?,
            width: self.apply(width)?,
            height: self.apply(height)?,
        })
    }
}

impl Default for Scale {
    fn default() -> Self {
        Scale::ONE
    }
}

impl TryFrom<f64> for Scale {
    type Error = LayoutError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Scale::new(value)
    }
}

impl From<Scale> for f64 {
    fn from(scale: Scale) -> Self {
        scale.0
    }
}

impl std::fmt::Display for Scale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_rejects_out_of_domain() {
        assert!(Scale::new(0.5).is_err());
        assert!(Scale::new(f64::NAN).is_err());
        assert!(Scale::new(f64::INFINITY).is_err());
        assert!(Scale::new(1.0).is_ok());
        assert!(Scale::zoom(0.25).is_ok());
        assert!(Scale::zoom(0.0).is_err());
    }

    #[test]
    fn test_scale_truncates() {
        let scale = Scale::new(1.5).unwrap();
        assert_eq!(scale.apply(3).unwrap(), 4);
        assert_eq!(scale.apply(16).unwrap(), 24);
        assert!(!scale.is_integral());
        assert!(Scale::new(2.0).unwrap().is_integral());
    }

    #[test]
    fn test_scale_overflow() {
        let scale = Scale::new(2.0).unwrap();
        assert!(scale.apply(u32::MAX as u64).is_err());
    }

    #[test]
    fn test_scale_deserialize_validates() {
        let scale: Scale = serde_json::from_str("2.5").unwrap();
        assert_eq!(scale.factor(), 2.5);
        assert!(serde_json::from_str::<Scale>("0.5").is_err());
    }

    #[test]
    fn test_bounds_intersection() {
        let a = Bounds::new(0, 0, 16, 16);
        let b = Bounds::new(16, 0, 16, 16);
        let c = Bounds::new(15, 15, 4, 4);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&c));
        assert!(b.intersects(&c));
        assert!(!a.intersects(&Bounds::new(4, 4, 0, 0)));
    }

    #[test]
    fn test_bounds_contains() {
        let sheet = Bounds::new(0, 0, 96, 96);
        assert!(sheet.contains(&Bounds::new(64, 64, 32, 32)));
        assert!(!sheet.contains(&Bounds::new(65, 64, 32, 32)));
    }
}
