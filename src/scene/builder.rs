use std::collections::HashMap;

use crate::{
    animation::transformation::Transformation,
    foundation::{
        core::{Bounds, Dimension, FrameWindow, Point, Rgb8, check_dimension, check_position},
        error::{EaselError, EaselResult},
    },
    model::{
        canvas::Canvas,
        shape::{Shape, ShapeKind},
    },
};

/// Full shape state at one frame, as written in keyframed motion records.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Keyframe {
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
    /// Fill color.
    pub color: Rgb8,
}

impl Keyframe {
    fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    fn validate(&self) -> EaselResult<()> {
        check_position(self.position())?;
        check_dimension(self.base, "base")?;
        check_dimension(self.height, "height")?;
        Ok(())
    }
}

struct Entry {
    id: String,
    kind: ShapeKind,
    shape: Option<Shape>,
    lifetime: Option<FrameWindow>,
}

/// Chainable scene construction; [`CanvasBuilder::build`] yields a finalized [`Canvas`].
pub struct CanvasBuilder {
    bounds: Bounds,
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
    transformations: Vec<Transformation>,
}

impl Default for CanvasBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasBuilder {
    /// Empty scene with default bounds.
    pub fn new() -> Self {
        Self {
            bounds: Bounds::default(),
            entries: Vec::new(),
            index: HashMap::new(),
            transformations: Vec::new(),
        }
    }

    /// Scene bounding rectangle.
    pub fn bounds(mut self, x: i32, y: i32, width: u32, height: u32) -> EaselResult<Self> {
        self.bounds = Bounds::new(x, y, width, height)?;
        Ok(self)
    }

    /// Declare a shape whose geometry comes from its first [`CanvasBuilder::motion`].
    pub fn shape(mut self, id: impl Into<String>, kind: ShapeKind) -> EaselResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(EaselError::validation("shape id must be non-empty"));
        }
        self.upsert(Entry {
            id,
            kind,
            shape: None,
            lifetime: None,
        });
        Ok(self)
    }

    /// Add a fully specified shape; its declared lifetime is kept.
    pub fn shape_with(mut self, shape: Shape) -> Self {
        self.upsert(Entry {
            id: shape.id().to_owned(),
            kind: shape.kind(),
            lifetime: shape.lifetime(),
            shape: Some(shape),
        });
        self
    }

    /// Add an explicit transformation record for a declared shape.
    pub fn transformation(mut self, t: Transformation) -> EaselResult<Self> {
        if !self.index.contains_key(t.shape_id()) {
            return Err(EaselError::not_found(format!("shape '{}'", t.shape_id())));
        }
        self.transformations.push(t);
        Ok(self)
    }

    /// Keyframed motion between two full shape states.
    ///
    /// The first motion of a shape sets its starting geometry. Every motion widens the
    /// shape's lifetime and becomes one transformation per attribute that changes.
    pub fn motion(mut self, id: &str, from: Keyframe, to: Keyframe) -> EaselResult<Self> {
        let window = FrameWindow::new(from.frame, to.frame)?;
        from.validate()?;
        to.validate()?;
        let i = *self
            .index
            .get(id)
            .ok_or_else(|| EaselError::not_found(format!("shape '{id}'")))?;

        let mut staged = Vec::new();
        if from.position() != to.position() {
            staged.push(Transformation::moving(
                id,
                window.start,
                window.end,
                from.position(),
                to.position(),
            )?);
        }
        if from.base != to.base {
            staged.push(Transformation::resizing(
                id,
                window.start,
                window.end,
                Dimension::Base,
                from.base,
                to.base,
            )?);
        }
        if from.height != to.height {
            staged.push(Transformation::resizing(
                id,
                window.start,
                window.end,
                Dimension::Height,
                from.height,
                to.height,
            )?);
        }
        if from.color != to.color {
            staged.push(Transformation::recoloring(
                id,
                window.start,
                window.end,
                from.color,
                to.color,
            )?);
        }

        let entry = &mut self.entries[i];
        if entry.shape.is_none() {
            entry.shape = Some(Shape::new(
                id,
                entry.kind,
                from.position(),
                from.base,
                from.height,
                from.color,
            )?);
        }
        entry.lifetime = Some(match entry.lifetime {
            Some(w) => w.union(window),
            None => window,
        });
        self.transformations.extend(staged);
        Ok(self)
    }

    /// Assemble the canvas and derive visibility windows from shape lifetimes.
    #[tracing::instrument(skip(self), fields(shapes = self.entries.len()))]
    pub fn build(self) -> EaselResult<Canvas> {
        let mut canvas = Canvas::with_bounds(self.bounds);
        for entry in self.entries {
            let Some(mut shape) = entry.shape else {
                return Err(EaselError::validation(format!(
                    "shape '{}' was declared but never given a starting state",
                    entry.id
                )));
            };
            if let Some(w) = entry.lifetime {
                shape.set_lifetime(w);
            }
            canvas.add_shape(shape);
        }
        for t in self.transformations {
            let id = t.shape_id().to_owned();
            canvas.add_transformation(&id, t)?;
        }
        canvas.set_all_frames();
        Ok(canvas)
    }

    fn upsert(&mut self, entry: Entry) {
        match self.index.get(&entry.id) {
            Some(&i) => self.entries[i] = entry,
            None => {
                self.index.insert(entry.id.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/builder.rs"]
mod tests;
