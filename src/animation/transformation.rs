use crate::{
    foundation::{
        core::{Dimension, FrameWindow, Point, Rgb8, check_dimension, check_frame, check_position},
        error::{EaselError, EaselResult},
    },
    model::shape::Shape,
};

/// Variant payload of a [`Transformation`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransformKind {
    /// Move the reference point between two positions.
    Move {
        /// Position at the start frame.
        from: Point,
        /// Position at the end frame.
        to: Point,
    },
    /// Change one dimension between two extents.
    Resize {
        /// Dimension being resized.
        dimension: Dimension,
        /// Extent at the start frame.
        from: f64,
        /// Extent at the end frame.
        to: f64,
    },
    /// Fade the fill color between two colors.
    ChangeColor {
        /// Color at the start frame.
        from: Rgb8,
        /// Color at the end frame.
        to: Rgb8,
    },
    /// Visible inside `[start, end)`, hidden outside it.
    ChangeVisibility,
}

/// Payload-free discriminant of [`TransformKind`]; the unit of conflict detection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransformTag {
    /// [`TransformKind::Move`].
    Move,
    /// [`TransformKind::Resize`].
    Resize,
    /// [`TransformKind::ChangeColor`].
    ChangeColor,
    /// [`TransformKind::ChangeVisibility`].
    ChangeVisibility,
}

impl TransformTag {
    /// Lower-case label used in diagnostics.
    pub fn label(self) -> &'static str {
        match self {
            Self::Move => "move",
            Self::Resize => "resize",
            Self::ChangeColor => "change-color",
            Self::ChangeVisibility => "change-visibility",
        }
    }
}

impl TransformKind {
    /// Discriminant of this payload.
    pub fn tag(&self) -> TransformTag {
        match self {
            Self::Move { .. } => TransformTag::Move,
            Self::Resize { .. } => TransformTag::Resize,
            Self::ChangeColor { .. } => TransformTag::ChangeColor,
            Self::ChangeVisibility => TransformTag::ChangeVisibility,
        }
    }

    fn validate(&self) -> EaselResult<()> {
        match self {
            Self::Move { from, to } => {
                check_position(*from)?;
                check_position(*to)?;
            }
            Self::Resize { dimension, from, to } => {
                let what = match dimension {
                    Dimension::Base => "base",
                    Dimension::Height => "height",
                };
                check_dimension(*from, what)?;
                check_dimension(*to, what)?;
            }
            Self::ChangeColor { .. } | Self::ChangeVisibility => {}
        }
        Ok(())
    }
}

/// The value a transformation contributes to a shape at one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameValue {
    /// New reference point.
    Position(Point),
    /// New extent for one dimension.
    Size {
        /// Dimension the value applies to.
        dimension: Dimension,
        /// Interpolated extent.
        value: f64,
    },
    /// New fill color.
    Color(Rgb8),
    /// New visibility flag.
    Visibility(bool),
}

/// Where a frame sits relative to a window.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Before,
    Within(f64),
    After,
}

fn phase(window: FrameWindow, frame: f64) -> Phase {
    if frame < window.start {
        Phase::Before
    } else if window.is_instant() || frame >= window.end {
        Phase::After
    } else {
        Phase::Within((frame - window.start) / window.len_frames())
    }
}

/// Linear keyframe law shared by every numeric transformation.
///
/// Before `start` the caller's `current` value is kept, from `end` onwards `target` is
/// held (SVG `fill="freeze"`), and in between the value moves linearly from `initial`.
/// A zero-length window jumps straight to `target` at its start frame.
pub fn value_at_frame(
    window: FrameWindow,
    frame: f64,
    current: f64,
    initial: f64,
    target: f64,
) -> EaselResult<f64> {
    let frame = check_frame(frame)?;
    Ok(match phase(window, frame) {
        Phase::Before => current,
        Phase::Within(t) => initial + (target - initial) * t,
        Phase::After => target,
    })
}

/// A time-bounded keyframe instruction for one attribute of one shape.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transformation {
    shape_id: String,
    window: FrameWindow,
    kind: TransformKind,
}

impl Transformation {
    /// Build a transformation for the shape named `shape_id`.
    pub fn new(
        shape_id: impl Into<String>,
        window: FrameWindow,
        kind: TransformKind,
    ) -> EaselResult<Self> {
        let shape_id = shape_id.into();
        if shape_id.trim().is_empty() {
            return Err(EaselError::validation(
                "transformation shape id must be non-empty",
            ));
        }
        kind.validate()?;
        Ok(Self {
            shape_id,
            window,
            kind,
        })
    }

    /// Move from `from` to `to` over `[start, end]`.
    pub fn moving(
        shape_id: impl Into<String>,
        start: f64,
        end: f64,
        from: Point,
        to: Point,
    ) -> EaselResult<Self> {
        Self::new(
            shape_id,
            FrameWindow::new(start, end)?,
            TransformKind::Move { from, to },
        )
    }

    /// Resize one dimension from `from` to `to` over `[start, end]`.
    pub fn resizing(
        shape_id: impl Into<String>,
        start: f64,
        end: f64,
        dimension: Dimension,
        from: f64,
        to: f64,
    ) -> EaselResult<Self> {
        Self::new(
            shape_id,
            FrameWindow::new(start, end)?,
            TransformKind::Resize {
                dimension,
                from,
                to,
            },
        )
    }

    /// Change color from `from` to `to` over `[start, end]`.
    pub fn recoloring(
        shape_id: impl Into<String>,
        start: f64,
        end: f64,
        from: Rgb8,
        to: Rgb8,
    ) -> EaselResult<Self> {
        Self::new(
            shape_id,
            FrameWindow::new(start, end)?,
            TransformKind::ChangeColor { from, to },
        )
    }

    /// Show the shape for `[start, end)`.
    pub fn visibility(shape_id: impl Into<String>, start: f64, end: f64) -> EaselResult<Self> {
        Self::new(
            shape_id,
            FrameWindow::new(start, end)?,
            TransformKind::ChangeVisibility,
        )
    }

    /// Visibility window derived from a shape's already-validated lifetime.
    pub(crate) fn from_lifetime(shape_id: &str, window: FrameWindow) -> Self {
        Self {
            shape_id: shape_id.to_owned(),
            window,
            kind: TransformKind::ChangeVisibility,
        }
    }

    /// Identifier of the shape this transformation belongs to.
    pub fn shape_id(&self) -> &str {
        &self.shape_id
    }

    /// Active frame window.
    pub fn window(&self) -> FrameWindow {
        self.window
    }

    /// First frame.
    pub fn start(&self) -> f64 {
        self.window.start
    }

    /// Last frame.
    pub fn end(&self) -> f64 {
        self.window.end
    }

    /// Variant payload.
    pub fn kind(&self) -> &TransformKind {
        &self.kind
    }

    /// Variant discriminant.
    pub fn tag(&self) -> TransformTag {
        self.kind.tag()
    }

    /// [`value_at_frame`] over this transformation's window.
    pub fn value_at_frame(
        &self,
        frame: f64,
        current: f64,
        initial: f64,
        target: f64,
    ) -> EaselResult<f64> {
        value_at_frame(self.window, frame, current, initial, target)
    }

    /// Same variant and overlapping windows (touching endpoints are fine).
    pub fn conflicts_with(&self, other: &Self) -> bool {
        self.tag() == other.tag() && self.window.overlaps(other.window)
    }

    /// Value of the governed attribute at `frame`.
    ///
    /// `current` is the snapshot as folded so far; its attribute is kept when `frame`
    /// precedes the window. Visibility ignores `current`: the shape is hidden outside
    /// `[start, end)`.
    pub fn execute_at_frame(&self, frame: f64, current: &Shape) -> EaselResult<FrameValue> {
        let frame = check_frame(frame)?;
        let phase = phase(self.window, frame);
        Ok(match &self.kind {
            TransformKind::Move { from, to } => {
                let at = current.position();
                FrameValue::Position(Point::new(
                    self.value_at_frame(frame, at.x, from.x, to.x)?,
                    self.value_at_frame(frame, at.y, from.y, to.y)?,
                ))
            }
            TransformKind::Resize {
                dimension,
                from,
                to,
            } => {
                let at = match dimension {
                    Dimension::Base => current.base(),
                    Dimension::Height => current.height(),
                };
                FrameValue::Size {
                    dimension: *dimension,
                    value: self.value_at_frame(frame, at, *from, *to)?,
                }
            }
            TransformKind::ChangeColor { from, to } => FrameValue::Color(match phase {
                Phase::Before => current.color(),
                Phase::Within(t) => from.lerp(*to, t),
                Phase::After => *to,
            }),
            TransformKind::ChangeVisibility => {
                FrameValue::Visibility(matches!(phase, Phase::Within(_)))
            }
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/transformation.rs"]
mod tests;
