//! Easel evaluates keyframed 2D shape animations.
//!
//! A scene is a [`Canvas`] of [`Shape`]s, each carrying time-bounded [`Transformation`]s
//! (move, resize, change color, change visibility). Given any frame, the canvas folds
//! those transformations into independent shape snapshots, and it can export the whole
//! timeline as a text report or as an SVG document with SMIL timing.
//!
//! # Pipeline overview
//!
//! 1. **Build**: [`CanvasBuilder`] (or a JSON [`SceneDocument`]) adds shapes and
//!    transformations, then finalizes with [`Canvas::set_all_frames`].
//! 2. **Query**: [`Canvas::shapes_at_frame`] returns one snapshot per shape, in insertion order.
//! 3. **Export**: `Canvas`'s `Display` impl for text, [`Canvas::to_svg_string`] for SVG.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure queries**: frame evaluation works on copies and never mutates canonical shapes.
//! - **Strict build phase**: overlapping transformations of one kind on one shape are
//!   rejected when added, never merged.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod foundation;
mod model;
mod render;
mod scene;

pub use animation::transformation::{
    FrameValue, TransformKind, TransformTag, Transformation, value_at_frame,
};
pub use foundation::core::{Bounds, Dimension, FrameWindow, Point, Rgb8};
pub use foundation::error::{EaselError, EaselResult};
pub use model::canvas::Canvas;
pub use model::shape::{Shape, ShapeKind, ShapeSnapshot};
pub use scene::builder::{CanvasBuilder, Keyframe};
pub use scene::document::{
    KeyframeDecl, MotionDecl, SceneDocument, ShapeDecl, TransformDecl, TransformKindDecl,
};
