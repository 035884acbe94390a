//! Callout assembly: placement, dimensions, outline, text layout, anchors.
//!
//! Two body shapes, each constructible from explicit positions or from a
//! polar offset off the target. Placement is a tagged choice made by the
//! caller through separately named constructors; nothing inspects argument
//! shapes at runtime.

use crate::errors::CalloutError;
use crate::geometry::shorten_toward;
use crate::measure::callout_dimensions;
use crate::outline::{Outline, ellipse_outline, rectangle_outline};
use crate::resolve::{Environment, PointSpec, resolve};
use crate::style::{POLAR_DISTANCE, Style, StylePatch};
use crate::types::Point;

/// An ellipse must outgrow the measured text box to visually contain the
/// same text as a rectangle.
const ELLIPSE_WIDTH_FACTOR: f64 = 1.2;
const ELLIPSE_HEIGHT_FACTOR: f64 = 1.3;

/// Body shape of a callout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalloutKind {
    Rectangle,
    Ellipse,
}

impl CalloutKind {
    /// CSS class suffix used in SVG output.
    pub fn class_name(self) -> &'static str {
        match self {
            CalloutKind::Rectangle => "callout-rectangle",
            CalloutKind::Ellipse => "callout-ellipse",
        }
    }
}

/// Named reference points on a constructed callout, for composing further
/// geometry without recomputing it. Read-only after construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchors {
    pub center: Point,
    pub pointer: Point,
    pub north: Point,
    pub south: Point,
    pub east: Point,
    pub west: Point,
}

impl Anchors {
    fn from_extents(center: Point, pointer: Point, half_w: f64, half_h: f64) -> Self {
        Anchors {
            center,
            pointer,
            north: Point::new(center.x, center.y - half_h),
            south: Point::new(center.x, center.y + half_h),
            east: Point::new(center.x + half_w, center.y),
            west: Point::new(center.x - half_w, center.y),
        }
    }
}

/// Label text: one line, or an ordered stack of lines.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextContent {
    lines: Vec<String>,
}

impl TextContent {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl From<&str> for TextContent {
    /// A single string is one line, verbatim.
    fn from(s: &str) -> Self {
        TextContent {
            lines: vec![s.to_string()],
        }
    }
}

impl From<String> for TextContent {
    fn from(s: String) -> Self {
        TextContent { lines: vec![s] }
    }
}

impl From<Vec<String>> for TextContent {
    fn from(lines: Vec<String>) -> Self {
        TextContent { lines }
    }
}

impl From<&[&str]> for TextContent {
    fn from(lines: &[&str]) -> Self {
        TextContent {
            lines: lines.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl<const N: usize> From<[&str; N]> for TextContent {
    fn from(lines: [&str; N]) -> Self {
        lines.as_slice().into()
    }
}

/// One laid-out text line: content plus its anchor position (line center).
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub content: String,
    pub x: f64,
    pub y: f64,
}

/// How the body center and pointer tip are chosen.
#[derive(Debug, Clone)]
enum Placement {
    /// Center and target both given; tip shortened toward the center
    Explicit { center: PointSpec, target: PointSpec },
    /// Center at `distance` along `angle` from the target; tip at
    /// `pointer_gap` along the same ray
    Polar { target: PointSpec },
}

/// A constructed callout: one closed outline, laid-out text, and anchors.
#[derive(Debug, Clone)]
pub struct Callout {
    kind: CalloutKind,
    outline: Outline,
    style: Style,
    text: Vec<TextLine>,
    anchors: Anchors,
}

impl Callout {
    /// Rectangle callout from explicit center and target positions.
    pub fn rectangle(
        center: impl Into<PointSpec>,
        target: impl Into<PointSpec>,
        text: impl Into<TextContent>,
        patch: &StylePatch,
        env: &Environment,
    ) -> Result<Callout, CalloutError> {
        Self::build(
            CalloutKind::Rectangle,
            Placement::Explicit {
                center: center.into(),
                target: target.into(),
            },
            text.into(),
            patch,
            env,
        )
    }

    /// Rectangle callout placed at `angle`/`distance` from the target
    /// (taken from the style patch; distance defaults to 60).
    pub fn rectangle_polar(
        target: impl Into<PointSpec>,
        text: impl Into<TextContent>,
        patch: &StylePatch,
        env: &Environment,
    ) -> Result<Callout, CalloutError> {
        Self::build(
            CalloutKind::Rectangle,
            Placement::Polar {
                target: target.into(),
            },
            text.into(),
            patch,
            env,
        )
    }

    /// Ellipse callout from explicit center and target positions.
    pub fn ellipse(
        center: impl Into<PointSpec>,
        target: impl Into<PointSpec>,
        text: impl Into<TextContent>,
        patch: &StylePatch,
        env: &Environment,
    ) -> Result<Callout, CalloutError> {
        Self::build(
            CalloutKind::Ellipse,
            Placement::Explicit {
                center: center.into(),
                target: target.into(),
            },
            text.into(),
            patch,
            env,
        )
    }

    /// Ellipse callout placed at `angle`/`distance` from the target.
    pub fn ellipse_polar(
        target: impl Into<PointSpec>,
        text: impl Into<TextContent>,
        patch: &StylePatch,
        env: &Environment,
    ) -> Result<Callout, CalloutError> {
        Self::build(
            CalloutKind::Ellipse,
            Placement::Polar {
                target: target.into(),
            },
            text.into(),
            patch,
            env,
        )
    }

    fn build(
        kind: CalloutKind,
        placement: Placement,
        text: TextContent,
        patch: &StylePatch,
        env: &Environment,
    ) -> Result<Callout, CalloutError> {
        let style = patch.resolve();
        let (center, tip) = place(&placement, &style, env)?;
        let dims = callout_dimensions(text.lines(), &style, env.measurer());

        let (outline, anchors) = match kind {
            CalloutKind::Rectangle => {
                let half_w = dims.width / 2.0;
                let half_h = dims.height / 2.0;
                let outline = rectangle_outline(
                    center,
                    tip,
                    half_w,
                    half_h,
                    style.pointer_width,
                    style.corner_radius,
                );
                (outline, Anchors::from_extents(center, tip, half_w, half_h))
            }
            CalloutKind::Ellipse => {
                let rx = dims.width / 2.0 * ELLIPSE_WIDTH_FACTOR;
                let ry = dims.height / 2.0 * ELLIPSE_HEIGHT_FACTOR;
                let outline = ellipse_outline(center, tip, rx, ry, style.pointer_arc);
                (outline, Anchors::from_extents(center, tip, rx, ry))
            }
        };

        let text = layout_text(&text, center, &style);

        Ok(Callout {
            kind,
            outline,
            style,
            text,
            anchors,
        })
    }

    pub fn kind(&self) -> CalloutKind {
        self.kind
    }

    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn text(&self) -> &[TextLine] {
        &self.text
    }

    pub fn anchors(&self) -> &Anchors {
        &self.anchors
    }
}

/// Resolve the body center and pointer tip for a placement.
fn place(
    placement: &Placement,
    style: &Style,
    env: &Environment,
) -> Result<(Point, Point), CalloutError> {
    match placement {
        Placement::Explicit { center, target } => {
            let center = resolve(center, env)?;
            let raw_target = resolve(target, env)?;
            let tip = shorten_toward(raw_target, center, style.pointer_shorten);
            Ok((center, tip))
        }
        Placement::Polar { target } => {
            let target = resolve(target, env)?;
            let angle_rad = style.angle.unwrap_or(0.0).to_radians();
            let distance = style.distance.unwrap_or(POLAR_DISTANCE);
            let (dx, dy) = (angle_rad.cos(), angle_rad.sin());

            let tip = Point::new(
                target.x + style.pointer_gap * dx,
                target.y + style.pointer_gap * dy,
            );
            let center = Point::new(target.x + distance * dx, target.y + distance * dy);
            crate::log::debug!(
                angle = style.angle.unwrap_or(0.0),
                distance,
                pointer_gap = style.pointer_gap,
                "polar placement"
            );
            Ok((center, tip))
        }
    }
}

/// Stack lines vertically, centered on the body center.
///
/// Lines step by `font_size * line_height`, starting at
/// `center.y - total / 2 + step / 2` so the block is vertically centered.
fn layout_text(text: &TextContent, center: Point, style: &Style) -> Vec<TextLine> {
    let step = style.font_size * style.line_height;
    let total = step * text.lines().len() as f64;
    let start_y = center.y - total / 2.0 + step / 2.0;

    text.lines()
        .iter()
        .enumerate()
        .map(|(i, line)| TextLine {
            content: line.clone(),
            x: center.x,
            y: start_y + i as f64 * step,
        })
        .collect()
}
