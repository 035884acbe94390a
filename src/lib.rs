//! Speech-bubble callout shapes with integrated pointers.
//!
//! A callout is a labeled body (rounded rectangle or ellipse) whose pointer
//! emerges from the body's boundary as a single closed outline, directed at a
//! target point, in the spirit of TikZ's `shapes.callouts` library. The
//! crate computes the geometry and serializes it to SVG; it does not own a
//! rendering surface. Text measurement and scene queries are supplied by the
//! caller through an [`Environment`].
//!
//! ```
//! use callouts::{Environment, StylePatch, rectangle_callout};
//!
//! let env = Environment::new();
//! let callout = rectangle_callout(
//!     (100.0, 50.0),
//!     (200.0, 150.0),
//!     "Hello",
//!     &StylePatch::default(),
//!     &env,
//! )?;
//! assert_eq!(callout.anchors().pointer.x, 200.0);
//! println!("{}", callout.to_svg_fragment());
//! # Ok::<(), callouts::CalloutError>(())
//! ```
//!
//! Positions accept plane coordinates, domain `(Q, P)` coordinates mapped
//! through a caller-supplied [`CoordSystem`], or element references resolved
//! by an [`ElementLookup`]. Polar placement (`angle`/`distance` off the
//! target) goes through the separately named `*_polar` constructors.

pub mod callout;
pub mod errors;
pub mod geometry;
pub mod log;
pub mod measure;
pub mod outline;
pub mod resolve;
pub mod style;
pub mod svg;
pub mod types;

pub use callout::{Anchors, Callout, CalloutKind, TextContent, TextLine};
pub use errors::CalloutError;
pub use geometry::Edge;
pub use measure::{CharTableMeasurer, FontSpec, TextMeasurer};
pub use outline::{Outline, Segment};
pub use resolve::{AxisTransforms, CoordSystem, ElementLookup, Environment, PointSpec, resolve};
pub use style::{Padding, PaddingPatch, Style, StylePatch};
pub use svg::svg_document;
pub use types::{BBox, Point, Size};

/// Construct a rectangle callout from explicit center and target positions.
///
/// See [`Callout::rectangle`].
pub fn rectangle_callout(
    center: impl Into<PointSpec>,
    target: impl Into<PointSpec>,
    text: impl Into<TextContent>,
    patch: &StylePatch,
    env: &Environment,
) -> Result<Callout, CalloutError> {
    Callout::rectangle(center, target, text, patch, env)
}

/// Construct a rectangle callout placed at `angle`/`distance` from the target.
///
/// See [`Callout::rectangle_polar`].
pub fn rectangle_callout_polar(
    target: impl Into<PointSpec>,
    text: impl Into<TextContent>,
    patch: &StylePatch,
    env: &Environment,
) -> Result<Callout, CalloutError> {
    Callout::rectangle_polar(target, text, patch, env)
}

/// Construct an ellipse callout from explicit center and target positions.
///
/// See [`Callout::ellipse`].
pub fn ellipse_callout(
    center: impl Into<PointSpec>,
    target: impl Into<PointSpec>,
    text: impl Into<TextContent>,
    patch: &StylePatch,
    env: &Environment,
) -> Result<Callout, CalloutError> {
    Callout::ellipse(center, target, text, patch, env)
}

/// Construct an ellipse callout placed at `angle`/`distance` from the target.
///
/// See [`Callout::ellipse_polar`].
pub fn ellipse_callout_polar(
    target: impl Into<PointSpec>,
    text: impl Into<TextContent>,
    patch: &StylePatch,
    env: &Environment,
) -> Result<Callout, CalloutError> {
    Callout::ellipse_polar(target, text, patch, env)
}
