use crate::foundation::error::{EaselError, EaselResult};

pub use kurbo::Point;

/// Reject negative or non-finite frame numbers.
pub(crate) fn check_frame(frame: f64) -> EaselResult<f64> {
    if !frame.is_finite() || frame < 0.0 {
        return Err(EaselError::validation(format!(
            "frame must be a finite number >= 0, got {frame}"
        )));
    }
    Ok(frame)
}

/// Reject reference points outside the non-negative quadrant.
pub(crate) fn check_position(p: Point) -> EaselResult<Point> {
    if !p.x.is_finite() || !p.y.is_finite() || p.x < 0.0 || p.y < 0.0 {
        return Err(EaselError::validation(format!(
            "position coordinates must be >= 0, got ({}, {})",
            p.x, p.y
        )));
    }
    Ok(p)
}

/// Reject zero, negative or non-finite shape dimensions.
pub(crate) fn check_dimension(v: f64, what: &str) -> EaselResult<f64> {
    if !v.is_finite() || v <= 0.0 {
        return Err(EaselError::validation(format!("{what} must be > 0, got {v}")));
    }
    Ok(v)
}

/// Frame window `[start, end]` of a transformation or of a shape's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameWindow {
    /// First frame of the window.
    pub start: f64,
    /// Last frame of the window; never before `start`.
    pub end: f64,
}

impl FrameWindow {
    /// Build a window, rejecting negative frames and `start > end`.
    pub fn new(start: f64, end: f64) -> EaselResult<Self> {
        check_frame(start)?;
        check_frame(end)?;
        if start > end {
            return Err(EaselError::validation(format!(
                "frame window start must be <= end, got [{start}, {end}]"
            )));
        }
        Ok(Self { start, end })
    }

    /// Window length in frames.
    pub fn len_frames(self) -> f64 {
        self.end - self.start
    }

    /// `true` when `start == end`.
    pub fn is_instant(self) -> bool {
        self.start == self.end
    }

    /// Half-open membership: `start <= frame < end`.
    pub fn contains(self, frame: f64) -> bool {
        self.start <= frame && frame < self.end
    }

    /// Half-open overlap test. Windows that merely touch do not overlap.
    pub fn overlaps(self, other: Self) -> bool {
        !(self.end <= other.start || other.end <= self.start)
    }

    /// Smallest window covering both `self` and `other`.
    pub fn union(self, other: Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

/// Opaque 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Build a color from channels already known to be in range.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from wide integer channels, rejecting anything outside `0..=255`.
    pub fn from_channels(r: i64, g: i64, b: i64) -> EaselResult<Self> {
        fn channel(v: i64, name: &str) -> EaselResult<u8> {
            u8::try_from(v).map_err(|_| {
                EaselError::validation(format!("{name} channel must be in 0..=255, got {v}"))
            })
        }

        Ok(Self {
            r: channel(r, "red")?,
            g: channel(g, "green")?,
            b: channel(b, "blue")?,
        })
    }

    /// Per-channel linear mix, rounded to the nearest channel value.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        }

        Self {
            r: lerp_u8(self.r, other.r, t),
            g: lerp_u8(self.g, other.g, t),
            b: lerp_u8(self.b, other.b, t),
        }
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb8> for [u8; 3] {
    fn from(c: Rgb8) -> Self {
        [c.r, c.g, c.b]
    }
}

/// Which side of a shape a resize acts on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// Horizontal extent.
    Base,
    /// Vertical extent.
    Height,
}

/// Scene bounding rectangle in integer device units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Bounds {
    /// Left-most x coordinate.
    pub x: i32,
    /// Top-most y coordinate.
    pub y: i32,
    /// Width; must be > 0.
    pub width: u32,
    /// Height; must be > 0.
    pub height: u32,
}

impl Bounds {
    /// Build bounds, rejecting an empty rectangle.
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> EaselResult<Self> {
        if width == 0 || height == 0 {
            return Err(EaselError::validation("canvas width/height must be > 0"));
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            width: 500,
            height: 500,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
