use crate::{
    animation::transformation::{TransformTag, Transformation},
    foundation::{
        core::{FrameWindow, Point, Rgb8, check_dimension, check_position},
        error::{EaselError, EaselResult},
    },
};

/// Geometric family of a shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// Axis-aligned rectangle; the reference point is its top-left corner.
    Rectangle,
    /// Axis-aligned ellipse; the reference point is its center.
    Oval,
}

impl ShapeKind {
    /// Lower-case name used in text reports and scene documents.
    pub fn name(self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::Oval => "oval",
        }
    }
}

/// Attributes restored by [`Shape::reset`].
#[derive(Clone, Copy, Debug, PartialEq)]
struct Baseline {
    position: Point,
    base: f64,
    height: f64,
    color: Rgb8,
    visible: bool,
}

/// A named shape with baseline attributes and the transformations attached to it.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    id: String,
    kind: ShapeKind,
    position: Point,
    base: f64,
    height: f64,
    color: Rgb8,
    visible: bool,
    lifetime: Option<FrameWindow>,
    transformations: Vec<Transformation>, // insertion order
    baseline: Baseline,
}

/// Serializable view of a shape at one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ShapeSnapshot {
    /// Shape identifier.
    pub id: String,
    /// Shape family.
    pub kind: ShapeKind,
    /// Reference point x.
    pub x: f64,
    /// Reference point y.
    pub y: f64,
    /// Horizontal extent.
    pub base: f64,
    /// Vertical extent.
    pub height: f64,
    /// Fill color.
    pub color: Rgb8,
    /// Visibility flag.
    pub visible: bool,
}

impl Shape {
    /// Build a hidden shape with no transformations.
    pub fn new(
        id: impl Into<String>,
        kind: ShapeKind,
        position: Point,
        base: f64,
        height: f64,
        color: Rgb8,
    ) -> EaselResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(EaselError::validation("shape id must be non-empty"));
        }
        let position = check_position(position)?;
        let base = check_dimension(base, "base")?;
        let height = check_dimension(height, "height")?;
        Ok(Self {
            id,
            kind,
            position,
            base,
            height,
            color,
            visible: false,
            lifetime: None,
            transformations: Vec::new(),
            baseline: Baseline {
                position,
                base,
                height,
                color,
                visible: false,
            },
        })
    }

    /// Independent value copy; mutating it never touches `self`.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Stable identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Shape family.
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Reference point.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Horizontal extent.
    pub fn base(&self) -> f64 {
        self.base
    }

    /// Vertical extent.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Fill color.
    pub fn color(&self) -> Rgb8 {
        self.color
    }

    /// Whether the shape is currently drawn.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Declared appear/disappear window, if any.
    pub fn lifetime(&self) -> Option<FrameWindow> {
        self.lifetime
    }

    /// Attached transformations in insertion order.
    pub fn transformations(&self) -> &[Transformation] {
        &self.transformations
    }

    /// Declare the frames at which this shape appears and disappears.
    pub fn set_lifetime(&mut self, window: FrameWindow) {
        self.lifetime = Some(window);
    }

    /// Move the reference point. Both coordinates must be >= 0.
    pub fn set_position(&mut self, position: Point) -> EaselResult<()> {
        self.position = check_position(position)?;
        Ok(())
    }

    /// Set both extents. Both must be > 0; nothing changes if either is rejected.
    pub fn resize(&mut self, base: f64, height: f64) -> EaselResult<()> {
        let base = check_dimension(base, "base")?;
        let height = check_dimension(height, "height")?;
        self.base = base;
        self.height = height;
        Ok(())
    }

    /// Set the fill color. Use [`Rgb8::from_channels`] to range-check raw channels.
    pub fn set_color(&mut self, color: Rgb8) {
        self.color = color;
    }

    /// Show or hide the shape.
    pub fn set_visibility(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Append `t` unless it overlaps an existing transformation of the same kind.
    pub fn add_transformation(&mut self, t: Transformation) -> EaselResult<()> {
        if t.shape_id() != self.id {
            return Err(EaselError::validation(format!(
                "transformation for shape '{}' cannot be attached to shape '{}'",
                t.shape_id(),
                self.id
            )));
        }
        if let Some(existing) = self.transformations.iter().find(|e| e.conflicts_with(&t)) {
            return Err(EaselError::conflict(format!(
                "shape '{}': {} over [{}, {}] overlaps existing {} over [{}, {}]",
                self.id,
                t.tag().label(),
                t.start(),
                t.end(),
                existing.tag().label(),
                existing.start(),
                existing.end(),
            )));
        }
        self.transformations.push(t);
        Ok(())
    }

    /// `true` when a visibility window is attached.
    pub fn has_visibility_window(&self) -> bool {
        self.transformations
            .iter()
            .any(|t| t.tag() == TransformTag::ChangeVisibility)
    }

    /// Turn the declared lifetime into a visibility window unless one already exists.
    ///
    /// Returns `true` when a window was added. Calling it again is a no-op.
    pub fn set_frames(&mut self) -> bool {
        let Some(window) = self.lifetime else {
            return false;
        };
        if self.has_visibility_window() {
            return false;
        }
        self.transformations.push(Transformation::from_lifetime(&self.id, window));
        true
    }

    /// Record the current attributes as the state [`Shape::reset`] returns to.
    pub(crate) fn capture_baseline(&mut self) {
        self.baseline = Baseline {
            position: self.position,
            base: self.base,
            height: self.height,
            color: self.color,
            visible: self.visible,
        };
    }

    /// Restore the attributes recorded when the shape joined its canvas.
    pub fn reset(&mut self) {
        let b = self.baseline;
        self.position = b.position;
        self.base = b.base;
        self.height = b.height;
        self.color = b.color;
        self.visible = b.visible;
    }

    /// Attribute view for serialization.
    pub fn snapshot(&self) -> ShapeSnapshot {
        ShapeSnapshot {
            id: self.id.clone(),
            kind: self.kind,
            x: self.position.x,
            y: self.position.y,
            base: self.base,
            height: self.height,
            color: self.color,
            visible: self.visible,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/shape.rs"]
mod tests;
