//! Edge and angle selection for pointer attachment.
//!
//! Pure functions shared by the two outline builders: the rectangle picks a
//! boundary edge, the ellipse picks an angular sector. The plane is Y-down,
//! so positive `dy` faces the bottom edge.

use std::f64::consts::PI;

use crate::types::Point;

/// The rectangle edge a pointer notch is cut into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

/// Determine which edge of a rectangle faces the target.
///
/// Sector boundaries run through the corners: `corner_angle = atan2(half_h,
/// half_w)`. A target coincident with the center defaults to [`Edge::Bottom`].
pub fn select_edge(center: Point, target: Point, half_w: f64, half_h: f64) -> Edge {
    let d = target.to_vec() - center.to_vec();

    if d.x == 0.0 && d.y == 0.0 {
        return Edge::Bottom;
    }

    let angle = d.y.atan2(d.x);
    let corner_angle = half_h.atan2(half_w);

    let edge = if angle >= -corner_angle && angle < corner_angle {
        Edge::Right
    } else if angle >= corner_angle && angle < PI - corner_angle {
        Edge::Bottom
    } else if angle >= PI - corner_angle || angle < -PI + corner_angle {
        Edge::Left
    } else {
        Edge::Top
    };
    crate::log::debug!(?edge, "selected pointer edge");
    edge
}

/// Angular sector of an ellipse boundary facing the target, in degrees:
/// `target_angle ± pointer_arc_deg / 2`, returned as `(before, after)`.
pub fn select_arc_sector(center: Point, target: Point, pointer_arc_deg: f64) -> (f64, f64) {
    let d = target.to_vec() - center.to_vec();
    let target_angle = d.y.atan2(d.x).to_degrees();
    let half_arc = pointer_arc_deg / 2.0;
    (target_angle - half_arc, target_angle + half_arc)
}

/// Pull a pointer tip back toward the body center by `amount` units.
///
/// No-op when `amount` is zero or the tip coincides with the center.
pub fn shorten_toward(tip: Point, center: Point, amount: f64) -> Point {
    if amount == 0.0 {
        return tip;
    }

    let delta = center.to_vec() - tip.to_vec();
    let dist = delta.length();
    if dist == 0.0 {
        return tip;
    }

    Point::from_vec(tip.to_vec() + delta / dist * amount)
}

/// Point on an ellipse boundary at the given angle (degrees).
pub fn ellipse_point(center: Point, rx: f64, ry: f64, angle_deg: f64) -> Point {
    let rad = angle_deg.to_radians();
    Point::new(center.x + rx * rad.cos(), center.y + ry * rad.sin())
}
