use std::fmt::{self, Write as _};

use crate::{
    animation::transformation::{TransformKind, Transformation},
    foundation::{
        core::{Dimension, Rgb8},
        error::{EaselError, EaselResult},
    },
    model::{
        canvas::Canvas,
        shape::{Shape, ShapeKind},
    },
};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

fn check_ms_per_frame(ms_per_frame: f64) -> EaselResult<f64> {
    if !ms_per_frame.is_finite() || ms_per_frame <= 0.0 {
        return Err(EaselError::validation(format!(
            "ms per frame must be > 0, got {ms_per_frame}"
        )));
    }
    Ok(ms_per_frame)
}

fn fmt_err(e: fmt::Error) -> EaselError {
    EaselError::Other(anyhow::Error::new(e))
}

fn rgb(c: Rgb8) -> String {
    format!("rgb({}, {}, {})", c.r, c.g, c.b)
}

/// Escape text for use inside a double-quoted attribute value.
fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Attribute names a shape family exposes for position and extent.
struct Attrs {
    x: &'static str,
    y: &'static str,
    base: &'static str,
    height: &'static str,
    /// Extents are stored as full widths but ellipses animate radii.
    scale: f64,
}

fn attrs(kind: ShapeKind) -> Attrs {
    match kind {
        ShapeKind::Rectangle => Attrs {
            x: "x",
            y: "y",
            base: "width",
            height: "height",
            scale: 1.0,
        },
        ShapeKind::Oval => Attrs {
            x: "cx",
            y: "cy",
            base: "rx",
            height: "ry",
            scale: 0.5,
        },
    }
}

fn tag(kind: ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Rectangle => "rect",
        ShapeKind::Oval => "ellipse",
    }
}

#[allow(clippy::too_many_arguments)]
fn write_animate(
    out: &mut String,
    attribute_type: &str,
    name: &str,
    from: &str,
    to: &str,
    begin_ms: f64,
    dur_ms: f64,
    fill: &str,
) -> fmt::Result {
    writeln!(
        out,
        "\t\t<animate attributeType=\"{attribute_type}\" attributeName=\"{name}\" \
         from=\"{from}\" to=\"{to}\" begin=\"{begin_ms}ms\" dur=\"{dur_ms}ms\" fill=\"{fill}\"/>"
    )
}

impl Transformation {
    /// Timed `<animate>` elements for this transformation on a shape of family `kind`.
    pub fn to_svg_string(&self, kind: ShapeKind, ms_per_frame: f64) -> EaselResult<String> {
        let ms = check_ms_per_frame(ms_per_frame)?;
        let mut out = String::new();
        self.write_svg(&mut out, kind, ms).map_err(fmt_err)?;
        Ok(out)
    }

    fn write_svg(&self, out: &mut String, kind: ShapeKind, ms: f64) -> fmt::Result {
        let a = attrs(kind);
        let begin = self.start() * ms;
        let dur = self.window().len_frames() * ms;
        match self.kind() {
            TransformKind::Move { from, to } => {
                let (fx, tx) = (from.x.to_string(), to.x.to_string());
                let (fy, ty) = (from.y.to_string(), to.y.to_string());
                write_animate(out, "XML", a.x, &fx, &tx, begin, dur, "freeze")?;
                write_animate(out, "XML", a.y, &fy, &ty, begin, dur, "freeze")
            }
            TransformKind::Resize {
                dimension,
                from,
                to,
            } => {
                let name = match dimension {
                    Dimension::Base => a.base,
                    Dimension::Height => a.height,
                };
                let from = (from * a.scale).to_string();
                let to = (to * a.scale).to_string();
                write_animate(out, "XML", name, &from, &to, begin, dur, "freeze")
            }
            TransformKind::ChangeColor { from, to } => {
                write_animate(out, "CSS", "fill", &rgb(*from), &rgb(*to), begin, dur, "freeze")
            }
            // Held visible for the window, then removed back to the hidden base value.
            TransformKind::ChangeVisibility => {
                write_animate(out, "CSS", "visibility", "visible", "visible", begin, dur, "remove")
            }
        }
    }
}

impl Shape {
    /// SVG element for this shape with its transformations as children, by start frame.
    pub fn to_svg_string(&self, ms_per_frame: f64) -> EaselResult<String> {
        let ms = check_ms_per_frame(ms_per_frame)?;
        let mut out = String::new();
        self.write_svg(&mut out, ms).map_err(fmt_err)?;
        Ok(out)
    }

    fn write_svg(&self, out: &mut String, ms: f64) -> fmt::Result {
        let kind = self.kind();
        let a = attrs(kind);
        let p = self.position();
        // A windowed shape is hidden outside its windows whatever its own flag says.
        let visible = self.is_visible() && !self.has_visibility_window();
        writeln!(
            out,
            "\t<{} id=\"{}\" {}=\"{}\" {}=\"{}\" {}=\"{}\" {}=\"{}\" fill=\"{}\" visibility=\"{}\">",
            tag(kind),
            xml_escape(self.id()),
            a.x,
            p.x,
            a.y,
            p.y,
            a.base,
            self.base() * a.scale,
            a.height,
            self.height() * a.scale,
            rgb(self.color()),
            if visible { "visible" } else { "hidden" },
        )?;

        let mut ordered: Vec<&Transformation> = self.transformations().iter().collect();
        ordered.sort_by(|l, r| l.start().total_cmp(&r.start()));
        for t in ordered {
            t.write_svg(out, kind, ms)?;
        }

        writeln!(out, "\t</{}>", tag(kind))
    }
}

impl Canvas {
    /// Standalone SVG document; frame `f` starts at `f * ms_per_frame` milliseconds.
    pub fn to_svg_string(&self, ms_per_frame: f64) -> EaselResult<String> {
        let ms = check_ms_per_frame(ms_per_frame)?;
        let mut out = String::new();
        self.write_svg(&mut out, ms).map_err(fmt_err)?;
        Ok(out)
    }

    fn write_svg(&self, out: &mut String, ms: f64) -> fmt::Result {
        let b = self.bounds();
        writeln!(
            out,
            "<svg width=\"{w}\" height=\"{h}\" viewBox=\"{x} {y} {w} {h}\" version=\"1.1\" \
             xmlns=\"{SVG_NS}\">",
            x = b.x,
            y = b.y,
            w = b.width,
            h = b.height,
        )?;
        for shape in self.shapes() {
            shape.write_svg(out, ms)?;
        }
        writeln!(out, "</svg>")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
