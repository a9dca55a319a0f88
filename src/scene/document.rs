use crate::{
    animation::transformation::{TransformKind, Transformation},
    foundation::{
        core::{Bounds, Dimension, FrameWindow, Point, Rgb8},
        error::{EaselError, EaselResult},
    },
    model::{
        canvas::Canvas,
        shape::{Shape, ShapeKind},
    },
    scene::builder::{CanvasBuilder, Keyframe},
};

/// JSON scene description fed through [`CanvasBuilder`].
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneDocument {
    /// Scene bounding rectangle.
    #[serde(default)]
    pub bounds: Bounds,
    /// Shape declarations, in canvas order.
    #[serde(default)]
    pub shapes: Vec<ShapeDecl>,
    /// Explicit transformation records.
    #[serde(default)]
    pub transformations: Vec<TransformDecl>,
    /// Keyframed motions between two full shape states.
    #[serde(default)]
    pub motions: Vec<MotionDecl>,
}

/// One shape declaration. Geometry is either fully given or left to the first motion.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShapeDecl {
    /// Unique identifier.
    pub id: String,
    /// Shape family.
    pub kind: ShapeKind,
    /// Reference point x.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// Reference point y.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// Horizontal extent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<f64>,
    /// Vertical extent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Fill color as raw `[r, g, b]` channels; range-checked on load.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<[i64; 3]>,
    /// Frame at which the shape appears.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appears: Option<f64>,
    /// Frame at which the shape disappears.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disappears: Option<f64>,
    /// Visibility before any visibility window applies.
    #[serde(default)]
    pub visible: bool,
}

/// One explicit transformation record.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct TransformDecl {
    /// Identifier of the target shape.
    pub shape: String,
    /// First frame.
    pub start: f64,
    /// Last frame.
    pub end: f64,
    /// Variant and its payload.
    #[serde(flatten)]
    pub kind: TransformKindDecl,
}

/// Transformation payload as written in a scene document; colors are raw channels.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransformKindDecl {
    /// See [`TransformKind::Move`].
    Move {
        /// Position at the start frame.
        from: Point,
        /// Position at the end frame.
        to: Point,
    },
    /// See [`TransformKind::Resize`].
    Resize {
        /// Dimension being resized.
        dimension: Dimension,
        /// Extent at the start frame.
        from: f64,
        /// Extent at the end frame.
        to: f64,
    },
    /// See [`TransformKind::ChangeColor`].
    ChangeColor {
        /// `[r, g, b]` at the start frame.
        from: [i64; 3],
        /// `[r, g, b]` at the end frame.
        to: [i64; 3],
    },
    /// See [`TransformKind::ChangeVisibility`].
    ChangeVisibility,
}

impl TransformKindDecl {
    fn into_kind(self) -> EaselResult<TransformKind> {
        Ok(match self {
            Self::Move { from, to } => TransformKind::Move { from, to },
            Self::Resize {
                dimension,
                from,
                to,
            } => TransformKind::Resize {
                dimension,
                from,
                to,
            },
            Self::ChangeColor { from, to } => TransformKind::ChangeColor {
                from: channels(from)?,
                to: channels(to)?,
            },
            Self::ChangeVisibility => TransformKind::ChangeVisibility,
        })
    }
}

/// Keyframe as written in a scene document; the color is raw channels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeyframeDecl {
    /// Frame number.
    pub frame: f64,
    /// Reference point x.
    pub x: f64,
    /// Reference point y.
    pub y: f64,
    /// Horizontal extent.
    pub base: f64,
    /// Vertical extent.
    pub height: f64,
    /// Fill color as `[r, g, b]`; range-checked on load.
    pub color: [i64; 3],
}

impl KeyframeDecl {
    fn into_keyframe(self) -> EaselResult<Keyframe> {
        Ok(Keyframe {
            frame: self.frame,
            x: self.x,
            y: self.y,
            base: self.base,
            height: self.height,
            color: channels(self.color)?,
        })
    }
}

fn channels([r, g, b]: [i64; 3]) -> EaselResult<Rgb8> {
    Rgb8::from_channels(r, g, b)
}

/// One keyframed motion record.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MotionDecl {
    /// Identifier of the target shape.
    pub shape: String,
    /// State at the first frame.
    pub from: KeyframeDecl,
    /// State at the last frame.
    pub to: KeyframeDecl,
}

impl ShapeDecl {
    fn into_shape(self) -> EaselResult<Option<Shape>> {
        let lifetime = match (self.appears, self.disappears) {
            (Some(a), Some(d)) => Some(FrameWindow::new(a, d)?),
            (None, None) => None,
            _ => {
                return Err(EaselError::validation(format!(
                    "shape '{}' must give both appears and disappears, or neither",
                    self.id
                )));
            }
        };

        let shape = match (self.x, self.y, self.base, self.height, self.color) {
            (Some(x), Some(y), Some(base), Some(height), Some(color)) => {
                let color = channels(color)?;
                let mut shape =
                    Shape::new(self.id, self.kind, Point::new(x, y), base, height, color)?;
                shape.set_visibility(self.visible);
                if let Some(w) = lifetime {
                    shape.set_lifetime(w);
                }
                Some(shape)
            }
            (None, None, None, None, None) if lifetime.is_none() && !self.visible => None,
            _ => {
                return Err(EaselError::validation(format!(
                    "shape '{}' must give all of x, y, base, height and color, or none of them",
                    self.id
                )));
            }
        };
        Ok(shape)
    }
}

impl SceneDocument {
    /// Parse a scene document from JSON text.
    pub fn from_json_str(s: &str) -> EaselResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Build and finalize the canvas this document describes.
    ///
    /// Shapes are declared first, then motions, then explicit transformations.
    pub fn into_canvas(self) -> EaselResult<Canvas> {
        let b = self.bounds;
        let mut builder = CanvasBuilder::new().bounds(b.x, b.y, b.width, b.height)?;

        for decl in self.shapes {
            let (id, kind) = (decl.id.clone(), decl.kind);
            builder = match decl.into_shape()? {
                Some(shape) => builder.shape_with(shape),
                None => builder.shape(id, kind)?,
            };
        }
        for m in self.motions {
            builder = builder.motion(&m.shape, m.from.into_keyframe()?, m.to.into_keyframe()?)?;
        }
        for t in self.transformations {
            let window = FrameWindow::new(t.start, t.end)?;
            let kind = t.kind.into_kind()?;
            builder = builder.transformation(Transformation::new(t.shape, window, kind)?)?;
        }
        builder.build()
    }
}

impl Canvas {
    /// Parse and build a canvas from a JSON [`SceneDocument`].
    pub fn from_json_str(s: &str) -> EaselResult<Self> {
        SceneDocument::from_json_str(s)?.into_canvas()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/document.rs"]
mod tests;
