use std::collections::HashMap;

use crate::{
    animation::transformation::{FrameValue, Transformation},
    foundation::{
        core::{Bounds, Dimension, check_frame},
        error::{EaselError, EaselResult},
    },
    model::shape::{Shape, ShapeSnapshot},
};

/// Owner of every shape in a scene and the entry point for frame queries.
///
/// Shapes keep their insertion order; lookups by identifier go through an index.
/// Structural mutation belongs to the build phase, queries never touch canonical shapes.
#[derive(Clone, Debug, Default)]
pub struct Canvas {
    shapes: Vec<Shape>,
    index: HashMap<String, usize>,
    bounds: Bounds,
}

impl Canvas {
    /// Empty canvas with default bounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty canvas with the given bounds.
    pub fn with_bounds(bounds: Bounds) -> Self {
        Self {
            bounds,
            ..Self::default()
        }
    }

    /// Insert `shape`, replacing any shape with the same identifier in place.
    ///
    /// The shape's current attributes become its reset baseline. Returns the replaced shape.
    pub fn add_shape(&mut self, mut shape: Shape) -> Option<Shape> {
        shape.capture_baseline();
        tracing::debug!(id = shape.id(), kind = shape.kind().name(), "add shape");
        match self.index.get(shape.id()) {
            Some(&i) => Some(std::mem::replace(&mut self.shapes[i], shape)),
            None => {
                self.index.insert(shape.id().to_owned(), self.shapes.len());
                self.shapes.push(shape);
                None
            }
        }
    }

    /// Remove the shape named `id`, keeping the order of the others.
    pub fn remove_shape(&mut self, id: &str) -> Option<Shape> {
        let i = self.index.remove(id)?;
        let removed = self.shapes.remove(i);
        for slot in self.index.values_mut() {
            if *slot > i {
                *slot -= 1;
            }
        }
        Some(removed)
    }

    /// Shape named `id`.
    pub fn shape(&self, id: &str) -> EaselResult<&Shape> {
        self.index
            .get(id)
            .map(|&i| &self.shapes[i])
            .ok_or_else(|| EaselError::not_found(format!("shape '{id}'")))
    }

    /// Mutable shape named `id`, for build-phase edits.
    pub fn shape_mut(&mut self, id: &str) -> EaselResult<&mut Shape> {
        match self.index.get(id) {
            Some(&i) => Ok(&mut self.shapes[i]),
            None => Err(EaselError::not_found(format!("shape '{id}'"))),
        }
    }

    /// Shapes in insertion order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// `true` when no shapes are present.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Attach `t` to the shape named `shape_id`.
    pub fn add_transformation(&mut self, shape_id: &str, t: Transformation) -> EaselResult<()> {
        let shape = self.shape_mut(shape_id)?;
        tracing::debug!(
            id = shape_id,
            tag = t.tag().label(),
            start = t.start(),
            end = t.end(),
            "add transformation"
        );
        shape.add_transformation(t)
    }

    /// Derive a visibility window for every shape that declares a lifetime but has none.
    ///
    /// Idempotent; run once after the build phase and before any query.
    #[tracing::instrument(skip(self), fields(shapes = self.shapes.len()))]
    pub fn set_all_frames(&mut self) {
        for shape in &mut self.shapes {
            if shape.set_frames() {
                tracing::debug!(id = shape.id(), "derived visibility window from lifetime");
            }
        }
    }

    /// State of every shape at `frame`, in insertion order.
    ///
    /// Each result is an independent copy with every transformation folded in by
    /// ascending start frame, so the latest-started transformation of a kind governs.
    #[tracing::instrument(skip(self))]
    pub fn shapes_at_frame(&self, frame: f64) -> EaselResult<Vec<Shape>> {
        let frame = check_frame(frame)?;
        self.shapes
            .iter()
            .map(|shape| shape_at_frame(shape, frame))
            .collect()
    }

    /// [`Canvas::shapes_at_frame`] reduced to serializable snapshots.
    pub fn snapshots_at_frame(&self, frame: f64) -> EaselResult<Vec<ShapeSnapshot>> {
        Ok(self
            .shapes_at_frame(frame)?
            .iter()
            .map(Shape::snapshot)
            .collect())
    }

    /// Restore every shape to the attributes it had when it was added.
    pub fn reset_dynamic_shapes(&mut self) {
        for shape in &mut self.shapes {
            shape.reset();
        }
    }

    /// Replace the scene bounds.
    pub fn set_canvas_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    /// Scene bounds.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Left edge of the scene.
    pub fn left_most_x(&self) -> i32 {
        self.bounds.x
    }

    /// Top edge of the scene.
    pub fn top_most_y(&self) -> i32 {
        self.bounds.y
    }

    /// Scene width.
    pub fn border_width(&self) -> u32 {
        self.bounds.width
    }

    /// Scene height.
    pub fn border_height(&self) -> u32 {
        self.bounds.height
    }

    /// Latest end frame across all transformations, or `0.0` without any.
    pub fn last_frame(&self) -> f64 {
        self.shapes
            .iter()
            .flat_map(Shape::transformations)
            .map(Transformation::end)
            .fold(0.0, f64::max)
    }
}

fn shape_at_frame(shape: &Shape, frame: f64) -> EaselResult<Shape> {
    let mut ordered: Vec<&Transformation> = shape.transformations().iter().collect();
    ordered.sort_by(|l, r| l.start().total_cmp(&r.start()));

    let mut snap = shape.copy();
    // Several visibility windows on one shape show it inside any of them.
    let mut windowed = false;
    for t in ordered {
        match t.execute_at_frame(frame, &snap)? {
            FrameValue::Position(p) => snap.set_position(p)?,
            FrameValue::Size {
                dimension: Dimension::Base,
                value,
            } => snap.resize(value, snap.height())?,
            FrameValue::Size {
                dimension: Dimension::Height,
                value,
            } => snap.resize(snap.base(), value)?,
            FrameValue::Color(c) => snap.set_color(c),
            FrameValue::Visibility(v) => {
                snap.set_visibility(v || (windowed && snap.is_visible()));
                windowed = true;
            }
        }
    }
    Ok(snap)
}

#[cfg(test)]
#[path = "../../tests/unit/model/canvas.rs"]
mod tests;
