use std::fmt;

use crate::{
    animation::transformation::{TransformKind, Transformation},
    foundation::core::{Dimension, Rgb8},
    model::{canvas::Canvas, shape::Shape},
};

struct Channels(Rgb8);

impl fmt::Display for Channels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0.r, self.0.g, self.0.b)
    }
}

impl Shape {
    /// Multi-line description of the shape's current attributes.
    pub fn to_text(&self) -> String {
        let p = self.position();
        format!(
            "Name: {}\nType: {}\nPosition: ({:?}, {:?}), Base: {:?}, Height: {:?}\nColor: {}",
            self.id(),
            self.kind().name(),
            p.x,
            p.y,
            self.base(),
            self.height(),
            Channels(self.color()),
        )
    }
}

impl Transformation {
    /// One-line description; `owner` supplies the extent a resize leaves untouched.
    pub fn to_text(&self, owner: &Shape) -> String {
        let id = self.shape_id();
        let (start, end) = (self.start(), self.end());
        match self.kind() {
            TransformKind::Move { from, to } => format!(
                "Shape {id} moves from ({:?}, {:?}) to ({:?}, {:?}) from t={start} to t={end}",
                from.x, from.y, to.x, to.y
            ),
            TransformKind::Resize {
                dimension,
                from,
                to,
            } => {
                let ((b0, h0), (b1, h1)) = match dimension {
                    Dimension::Base => ((*from, owner.height()), (*to, owner.height())),
                    Dimension::Height => ((owner.base(), *from), (owner.base(), *to)),
                };
                format!(
                    "Shape {id} Scales from Base: {b0:?}, Height: {h0:?} \
                     to Base: {b1:?}, Height: {h1:?} from t={start} to t={end}"
                )
            }
            TransformKind::ChangeColor { from, to } => format!(
                "Shape {id} changes color from {} to {} from t={start} to t={end}",
                Channels(*from),
                Channels(*to)
            ),
            TransformKind::ChangeVisibility => {
                format!("Shape {id} appears at t={start} and disappears at t={end}")
            }
        }
    }
}

/// Text report: every shape, then every transformation by ascending start frame.
impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            writeln!(f, "No shapes in the animation.")?;
        } else {
            writeln!(f, "Shapes:")?;
            for shape in self.shapes() {
                write!(f, "{}\n\n", shape.to_text())?;
            }
        }

        // Stable sort: ties keep shape order, then per-shape insertion order.
        let mut all: Vec<(&Shape, &Transformation)> = self
            .shapes()
            .iter()
            .flat_map(|s| s.transformations().iter().map(move |t| (s, t)))
            .collect();
        all.sort_by(|a, b| a.1.start().total_cmp(&b.1.start()));

        if all.is_empty() {
            writeln!(f, "No transformations in the animation.")?;
        } else {
            writeln!(f, "Transformations:")?;
            for (owner, t) in all {
                writeln!(f, "{}", t.to_text(owner))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
