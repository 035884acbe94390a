//! Closed outline construction for callout bodies.
//!
//! An [`Outline`] is an ordered run of path segments forming one closed,
//! non-self-intersecting contour with exactly one pointer notch. The
//! builders trace the body boundary and splice the notch into the edge (or
//! arc sector) facing the target, so the pointer grows out of the boundary
//! instead of sitting on top of it.

use crate::geometry::{Edge, ellipse_point, select_arc_sector, select_edge};
use crate::types::Point;

/// One path segment of an outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    MoveTo(Point),
    LineTo(Point),
    /// Quadratic curve; rounded corners use the literal corner as control
    QuadTo {
        control: Point,
        end: Point,
    },
    /// Elliptical arc in SVG terms
    ArcTo {
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        end: Point,
    },
    Close,
}

impl Segment {
    /// End point of this segment, if it draws one.
    pub fn end_point(&self) -> Option<Point> {
        match self {
            Segment::MoveTo(p) | Segment::LineTo(p) => Some(*p),
            Segment::QuadTo { end, .. } | Segment::ArcTo { end, .. } => Some(*end),
            Segment::Close => None,
        }
    }
}

/// An ordered sequence of path segments forming one closed contour.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Outline {
    segments: Vec<Segment>,
}

impl Outline {
    pub fn new() -> Self {
        Outline::default()
    }

    pub fn m(mut self, p: Point) -> Self {
        self.segments.push(Segment::MoveTo(p));
        self
    }

    pub fn l(mut self, p: Point) -> Self {
        self.segments.push(Segment::LineTo(p));
        self
    }

    pub fn q(mut self, control: Point, end: Point) -> Self {
        self.segments.push(Segment::QuadTo { control, end });
        self
    }

    #[allow(clippy::too_many_arguments)]
    pub fn a(mut self, rx: f64, ry: f64, rotation: f64, large_arc: bool, sweep: bool, end: Point) -> Self {
        self.segments.push(Segment::ArcTo {
            rx,
            ry,
            rotation,
            large_arc,
            sweep,
            end,
        });
        self
    }

    pub fn z(mut self) -> Self {
        self.segments.push(Segment::Close);
        self
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// First point the contour moves to.
    pub fn start_point(&self) -> Option<Point> {
        self.segments.first().and_then(Segment::end_point)
    }

    /// End point of the last drawing segment.
    pub fn end_point(&self) -> Option<Point> {
        self.segments.iter().rev().find_map(Segment::end_point)
    }

    /// A contour is closed when it starts with a move and ends with `Close`;
    /// `Close` draws the line back to the start if the contour did not
    /// already return there.
    pub fn is_closed(&self) -> bool {
        matches!(self.segments.first(), Some(Segment::MoveTo(_)))
            && matches!(self.segments.last(), Some(Segment::Close))
    }

    /// True when the last drawn point returns exactly to the start, making
    /// the closing segment a no-op.
    pub fn returns_to_start(&self) -> bool {
        match (self.start_point(), self.end_point()) {
            (Some(start), Some(end)) => {
                (start.x - end.x).abs() < 1e-9 && (start.y - end.y).abs() < 1e-9
            }
            _ => false,
        }
    }

    /// Serialize to SVG path data.
    pub fn to_path_data(&self) -> String {
        use crate::svg::fmt_num;

        let mut d = String::new();
        for seg in &self.segments {
            if !d.is_empty() {
                d.push(' ');
            }
            match seg {
                Segment::MoveTo(p) => {
                    d.push_str(&format!("M {} {}", fmt_num(p.x), fmt_num(p.y)));
                }
                Segment::LineTo(p) => {
                    d.push_str(&format!("L {} {}", fmt_num(p.x), fmt_num(p.y)));
                }
                Segment::QuadTo { control, end } => {
                    d.push_str(&format!(
                        "Q {} {} {} {}",
                        fmt_num(control.x),
                        fmt_num(control.y),
                        fmt_num(end.x),
                        fmt_num(end.y)
                    ));
                }
                Segment::ArcTo {
                    rx,
                    ry,
                    rotation,
                    large_arc,
                    sweep,
                    end,
                } => {
                    d.push_str(&format!(
                        "A {} {} {} {} {} {} {}",
                        fmt_num(*rx),
                        fmt_num(*ry),
                        fmt_num(*rotation),
                        u8::from(*large_arc),
                        u8::from(*sweep),
                        fmt_num(end.x),
                        fmt_num(end.y)
                    ));
                }
                Segment::Close => d.push('Z'),
            }
        }
        d
    }
}

/// Clearance between a notch base and the nearest rounded corner, beyond
/// the corner radius and half the pointer width.
const NOTCH_CORNER_CLEARANCE: f64 = 2.0;

/// Clamp keeping the lower bound when the window is inverted (body too
/// small for the margins); the notch then hugs the first-traversed corner.
fn clamp_low_wins(value: f64, lo: f64, hi: f64) -> f64 {
    value.min(hi).max(lo)
}

/// Build the closed outline of a rounded rectangle with a pointer notch cut
/// into the edge facing `tip`.
///
/// Traced clockwise from just after the top-left corner; each rounded corner
/// is a single quadratic curve with the literal corner as control point. The
/// notch interrupts the selected edge's straight run with base → tip → base
/// lines, base order following the traversal direction of that edge.
pub fn rectangle_outline(
    center: Point,
    tip: Point,
    half_w: f64,
    half_h: f64,
    pointer_width: f64,
    corner_radius: f64,
) -> Outline {
    let r = corner_radius.min(half_w / 2.0).min(half_h / 2.0).max(0.0);
    let hw = pointer_width / 2.0;

    let tl = Point::new(center.x - half_w, center.y - half_h);
    let tr = Point::new(center.x + half_w, center.y - half_h);
    let br = Point::new(center.x + half_w, center.y + half_h);
    let bl = Point::new(center.x - half_w, center.y + half_h);

    let edge = select_edge(center, tip, half_w, half_h);

    // Keep the notch base clear of the rounded corners
    let margin = r + hw + NOTCH_CORNER_CLEARANCE;
    let window_inverted = match edge {
        Edge::Top | Edge::Bottom => margin > half_w,
        Edge::Left | Edge::Right => margin > half_h,
    };
    if window_inverted {
        crate::log::warn!(
            margin,
            half_w,
            half_h,
            "body too small for notch margins; notch will hug a corner"
        );
    }

    let base_mid = match edge {
        Edge::Top => Point::new(clamp_low_wins(tip.x, tl.x + margin, tr.x - margin), tl.y),
        Edge::Bottom => Point::new(clamp_low_wins(tip.x, bl.x + margin, br.x - margin), bl.y),
        Edge::Left => Point::new(tl.x, clamp_low_wins(tip.y, tl.y + margin, bl.y - margin)),
        Edge::Right => Point::new(tr.x, clamp_low_wins(tip.y, tr.y + margin, br.y - margin)),
    };

    // Base points flank the notch along the edge direction
    let (base1, base2) = match edge {
        Edge::Top | Edge::Bottom => (
            Point::new(base_mid.x - hw, base_mid.y),
            Point::new(base_mid.x + hw, base_mid.y),
        ),
        Edge::Left | Edge::Right => (
            Point::new(base_mid.x, base_mid.y - hw),
            Point::new(base_mid.x, base_mid.y + hw),
        ),
    };

    let mut path = Outline::new().m(Point::new(tl.x + r, tl.y));

    // Top edge, left to right
    if edge == Edge::Top {
        path = path.l(base1).l(tip).l(base2);
    }
    path = path
        .l(Point::new(tr.x - r, tr.y))
        .q(tr, Point::new(tr.x, tr.y + r));

    // Right edge, top to bottom
    if edge == Edge::Right {
        path = path.l(base1).l(tip).l(base2);
    }
    path = path
        .l(Point::new(br.x, br.y - r))
        .q(br, Point::new(br.x - r, br.y));

    // Bottom edge, right to left: bases in reverse order
    if edge == Edge::Bottom {
        path = path.l(base2).l(tip).l(base1);
    }
    path = path
        .l(Point::new(bl.x + r, bl.y))
        .q(bl, Point::new(bl.x, bl.y - r));

    // Left edge, bottom to top: bases in reverse order
    if edge == Edge::Left {
        path = path.l(base2).l(tip).l(base1);
    }
    path.l(Point::new(tl.x, tl.y + r))
        .q(tl, Point::new(tl.x + r, tl.y))
        .z()
}

/// Build the closed outline of an ellipse with an arc-based pointer notch.
///
/// The contour runs tip → `after` boundary point → elliptical arc the long
/// way around (never crossing the notch sector) → `before` boundary point →
/// close.
pub fn ellipse_outline(
    center: Point,
    tip: Point,
    rx: f64,
    ry: f64,
    pointer_arc_deg: f64,
) -> Outline {
    let (before, after) = select_arc_sector(center, tip, pointer_arc_deg);
    let before_pt = ellipse_point(center, rx, ry, before);
    let after_pt = ellipse_point(center, rx, ry, after);

    // The arc spans everything except the notch sector
    let arc_span = 360.0 - pointer_arc_deg;
    let large_arc = arc_span > 180.0;

    Outline::new()
        .m(tip)
        .l(after_pt)
        .a(rx, ry, 0.0, large_arc, true, before_pt)
        .z()
}
